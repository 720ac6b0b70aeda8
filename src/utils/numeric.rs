use crate::utils::error::{MaliceError, Result};
use std::ops::BitAnd;

pub const FLOAT_EPSILON: f64 = 1e-7;
pub const DEFAULT_FLOAT_PRECISION: usize = 4;

pub fn float_equals(a: f64, b: f64) -> bool {
    (a - b).abs() < FLOAT_EPSILON
}

/// Rounds `value` to the nearest multiple of `round_to`, halves rounding up.
///
/// `round_int(67.0, 5) == 65`, `round_int(67.5, 5) == 70`.
/// Fails when `value` is not finite or the result does not fit in an `i64`.
pub fn round_int(value: f64, round_to: i64) -> Result<i64> {
    let invalid = |name: &str, reason: String| MaliceError::InvalidArgumentError {
        name: name.to_string(),
        reason,
    };
    if round_to == 0 {
        return Err(invalid("round_to", "cannot round to a multiple of zero".to_string()));
    }
    if !value.is_finite() {
        return Err(invalid("value", format!("{} is not a finite number", value)));
    }

    let step = round_to as f64;
    let multiples = ((value + step / 2.0) / step).floor();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if multiples < i64::MIN as f64 || multiples >= i64::MAX as f64 {
        return Err(invalid("value", format!("{} is out of range", value)));
    }
    (multiples as i64)
        .checked_mul(round_to)
        .ok_or_else(|| invalid("value", format!("{} is out of range", value)))
}

/// Fixed-precision rendering without trailing zeros or a dangling point.
pub fn format_float(value: f64, precision: usize) -> String {
    let mut result = format!("{:.*}", precision, value);
    if result.contains('.') {
        let trimmed = result.trim_end_matches('0').trim_end_matches('.').len();
        result.truncate(trimmed);
    }
    match result.as_str() {
        "" | "-" | "-0" => "0".to_string(),
        _ => result,
    }
}

/// True when every bit of `flag` is set in `value`.
pub fn has_flag<T>(value: T, flag: T) -> bool
where
    T: BitAnd<Output = T> + PartialEq + Copy,
{
    (value & flag) == flag
}

/// Sample variance through the sum-of-squares formula. Undefined below two samples.
pub fn compute_variance(data: &[f64]) -> Option<f64> {
    if data.len() <= 1 {
        return None;
    }
    let n = data.len() as f64;
    let sum_of_squares: f64 = data.iter().map(|x| x * x).sum();
    let sum: f64 = data.iter().sum();
    Some((sum_of_squares - sum * sum / n) / (n - 1.0))
}
