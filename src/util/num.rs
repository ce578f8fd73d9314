use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_INTEGER` in absolute
/// value.
///
/// ## Example
/// ```
/// use kava::util::num::{MAX_SAFE_INTEGER, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(-42, "too big!").unwrap(), -42.0);
///
/// let big = MAX_SAFE_INTEGER as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER {
        return Err(error);
    }
    Ok(value as f64)
}

/// Parses decimal integer text, such as the argument of `parseInt`.
///
/// Surrounding whitespace is ignored. Anything that is not an optionally
/// signed run of digits, or that does not fit an `f64` exactly, is an
/// `InvalidArgument` error.
///
/// ## Example
/// ```
/// use kava::{error::RuntimeError, util::num::parse_integer};
///
/// assert_eq!(parse_integer(" -17 ", 1).unwrap(), -17.0);
/// assert!(matches!(parse_integer("1.5", 4), Err(RuntimeError::InvalidArgument { line: 4, .. })));
/// ```
pub fn parse_integer(text: &str, line: usize) -> EvalResult<f64> {
    let invalid = || RuntimeError::InvalidArgument { details: format!("\"{text}\" is not an integer"),
                                                     line };

    let value = text.trim().parse::<i64>().map_err(|_| invalid())?;
    i64_to_f64_checked(value, invalid())
}

/// Parses decimal floating-point text, such as the argument of
/// `parseDouble`.
///
/// Surrounding whitespace is ignored. Besides signed decimal and exponent
/// forms, only the exact spellings `Infinity` and `NaN` are accepted, so
/// Rust-only forms like `inf` are rejected.
///
/// ## Example
/// ```
/// use kava::util::num::parse_decimal;
///
/// assert_eq!(parse_decimal(" 2.5e1 "), Some(25.0));
/// assert_eq!(parse_decimal("-Infinity"), Some(f64::NEG_INFINITY));
/// assert!(parse_decimal("NaN").is_some_and(f64::is_nan));
/// assert_eq!(parse_decimal("inf"), None);
/// assert_eq!(parse_decimal("nan"), None);
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    match unsigned {
        "Infinity" if text.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        "NaN" => Some(f64::NAN),
        _ if unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
             && unsigned.chars()
                        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) =>
        {
            text.parse().ok()
        },
        _ => None,
    }
}
