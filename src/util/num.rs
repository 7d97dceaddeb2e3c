/// The largest magnitude an `i64` may have and still be represented exactly
/// as an `f64` (2^53).
const MAX_EXACT_INT: i64 = 1 << 53;

/// Converts an `i64` to `f64`, failing when the value cannot be represented
/// exactly.
///
/// # Parameters
/// - `value`: The integer to convert.
/// - `error`: The error returned when precision would be lost.
///
/// # Errors
/// Returns `error` when `value` lies outside the exactly-representable range.
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if (-MAX_EXACT_INT..=MAX_EXACT_INT).contains(&value) {
        #[allow(clippy::cast_precision_loss)]
        Ok(value as f64)
    } else {
        Err(error)
    }
}
