//! Currency code selection against the provider's catalog.

use super::error::RateError;

/// Normalizes user input into the provider's code format.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Checks `code` is one of the available `codes`.
pub fn ensure_supported(codes: &[String], code: &str) -> Result<String, RateError> {
    let code = normalize_code(code);
    if codes.contains(&code) {
        Ok(code)
    } else {
        Err(RateError::UnknownCurrency(code))
    }
}

/// Picks the `(from, to)` pair shown by default.
///
/// Preferred codes win when available; otherwise the first code is the source
/// and the second (or the first, for a single-currency catalog) the target.
pub fn default_pair(
    codes: &[String],
    preferred_from: &str,
    preferred_to: &str,
) -> Result<(String, String), RateError> {
    let first = codes.first().ok_or(RateError::EmptyCatalog)?;
    let preferred_from = normalize_code(preferred_from);
    let preferred_to = normalize_code(preferred_to);

    let from = if codes.contains(&preferred_from) {
        preferred_from
    } else {
        first.clone()
    };
    let to = if codes.contains(&preferred_to) {
        preferred_to
    } else {
        codes.get(1).unwrap_or(first).clone()
    };
    Ok((from, to))
}

/// Resolves the pair for a command: explicit codes must be supported, missing
/// ones fall back to [`default_pair`].
pub fn resolve_pair(
    codes: &[String],
    from: Option<&str>,
    to: Option<&str>,
    preferred_from: &str,
    preferred_to: &str,
) -> Result<(String, String), RateError> {
    let (default_from, default_to) = default_pair(codes, preferred_from, preferred_to)?;
    let from = match from {
        Some(code) => ensure_supported(codes, code)?,
        None => default_from,
    };
    let to = match to {
        Some(code) => ensure_supported(codes, code)?,
        None => default_to,
    };
    Ok((from, to))
}
