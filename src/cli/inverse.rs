use crate::core::format::{compute_inverse, format_amount};
use anyhow::{Context, Result};

pub fn run(rate: f64) -> Result<()> {
    println!("{}", render(rate)?);
    Ok(())
}

pub fn render(rate: f64) -> Result<String> {
    let inverse = compute_inverse(rate).context("Failed to compute inverse rate")?;
    Ok(format!(
        "The inverse of {} is {}.",
        format_amount(rate, 4),
        format_amount(inverse, 4)
    ))
}
