//! Percentage text coercion.

/// Coerce raw text from a percentage field into a whole percent.
///
/// Integers within `i64` parse as-is. A finite decimal is truncated toward
/// zero. Blank or non-numeric input becomes 0, and so does any number that
/// does not fit in an `i64`. In-range values are not clamped.
pub fn parse_percentage_input(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            let truncated = value.trunc();
            // i64::MIN is exactly representable; i64::MAX rounds up to 2^63.
            if (I64_MIN_F64..I64_MAX_EXCLUSIVE_F64).contains(&truncated) {
                truncated as i64
            } else {
                0
            }
        }
        _ => 0,
    }
}

const I64_MIN_F64: f64 = i64::MIN as f64;
const I64_MAX_EXCLUSIVE_F64: f64 = -(i64::MIN as f64);
