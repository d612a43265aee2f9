//! Human readable conversion summaries.

use super::error::RateError;

/// Formats `value` with `decimals` fraction digits and `,` thousands separators.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac_part) => format!("{sign}{grouped}.{frac_part}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Renders the three sentence summary for a conversion.
///
/// A zero rate yields an inverse of `0` instead of an error, unlike
/// [`compute_inverse`].
pub fn format_conversion(
    date: &str,
    from_currency: &str,
    to_currency: &str,
    rate: f64,
    from_amount: Option<f64>,
) -> String {
    let from_amount = from_amount.unwrap_or(0.0);
    let to_amount = from_amount * rate;
    let inverse_rate = if rate == 0.0 { 0.0 } else { 1.0 / rate };

    format!(
        "The conversion rate on {date} from {from_currency} to {to_currency} was {}. \
         So {} in {from_currency} correspond to {} in {to_currency}. \
         The inverse rate was {}.",
        format_amount(rate, 4),
        format_amount(from_amount, 2),
        format_amount(to_amount, 2),
        format_amount(inverse_rate, 4),
    )
}

pub fn compute_inverse(rate: f64) -> Result<f64, RateError> {
    if rate == 0.0 {
        return Err(RateError::ZeroRate);
    }
    Ok(1.0 / rate)
}
