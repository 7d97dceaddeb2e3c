/// Safe numeric conversions.
///
/// Helpers for converting between `i64` and `f64` without silent data loss,
/// used wherever integer values participate in mixed-type arithmetic or
/// comparisons.
pub mod num;
