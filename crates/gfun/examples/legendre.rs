//! Legendre Polynomials from their Generating Function
//!
//! The generating function 1/sqrt(1 - 2xt + x²) is built from ordinary
//! operators with `t` a free symbol and `x` the formal variable. The n-th
//! coefficient is the Legendre polynomial Pₙ(t), which is then evaluated by
//! substituting numbers for `t`.
//!
//! Run with: cargo run --example legendre

use gfun::prelude::*;

fn main() -> Result<(), SeriesError> {
    let t = Value::symbol("t");
    let x = PowerSeries::x();

    let base = 1 - 2 * &x * &t + x.pow(2);
    let legendre = (1 / base.powf(0.5)?)?;

    println!("Generating function: {legendre}");
    println!();

    let ts: Vec<f64> = (0..=8).map(|i| -1.0 + 0.25 * f64::from(i)).collect();

    print!("{:>4}", "n");
    for tv in &ts {
        print!("{tv:>9.2}");
    }
    println!();

    for n in 1..=6 {
        let p = legendre.coeff(n);
        print!("{n:>4}");
        for &tv in &ts {
            let value = p.subs(&substitution([(t.clone(), tv)]), true);
            match value.as_number().and_then(Number::to_f64) {
                Some(y) => print!("{y:>9.4}"),
                None => print!("{:>9}", value.to_string()),
            }
        }
        println!();
    }

    Ok(())
}
