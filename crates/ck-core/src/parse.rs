//! Helpers for the canonical text forms.
//!
//! These only recognise shapes and read numbers; ranges are checked by the
//! validating constructors of each color type.

use crate::error::ColorError;

/// Split `name(a, b, c)` into trimmed arguments.
///
/// The function name is matched case-insensitively and must be followed
/// directly by `(`. Spaces are allowed around arguments.
pub(crate) fn function_args<'a>(input: &'a str, name: &str) -> Result<Vec<&'a str>, ColorError> {
    let s = input.trim();
    let invalid = || ColorError::InvalidColorString(input.to_string());

    let open = s.find('(').ok_or_else(invalid)?;
    if !s[..open].eq_ignore_ascii_case(name) {
        return Err(invalid());
    }
    let inner = s[open + 1..].strip_suffix(')').ok_or_else(invalid)?;
    Ok(inner.split(',').map(str::trim).collect())
}

/// Check the argument count of a parsed function.
pub(crate) fn expect_args<'a, const N: usize>(
    input: &str,
    args: Vec<&'a str>,
) -> Result<[&'a str; N], ColorError> {
    args.try_into()
        .map_err(|_| ColorError::InvalidColorString(input.to_string()))
}

/// Parse an integer argument.
pub(crate) fn int_arg(input: &str, arg: &str) -> Result<i64, ColorError> {
    arg.parse::<i64>()
        .map_err(|_| ColorError::InvalidColorString(input.to_string()))
}

/// Parse a finite decimal argument.
pub(crate) fn number_arg(input: &str, arg: &str) -> Result<f64, ColorError> {
    arg.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::InvalidColorString(input.to_string()))
}

/// Parse a percentage argument; the trailing `%` is optional.
pub(crate) fn percent_arg(input: &str, arg: &str) -> Result<f64, ColorError> {
    let arg = arg.strip_suffix('%').map_or(arg, str::trim_end);
    number_arg(input, arg)
}

/// Round to two decimals, for alpha rendering.
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
