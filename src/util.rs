/// Numeric conversion helpers.
///
/// Every number in the language is an `f64`, so integer text read by the
/// host library has to be converted without silently losing precision.
pub mod num;
