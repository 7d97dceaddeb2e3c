/// Evaluation of binary operations.
///
/// # Responsibilities
/// - Apply arithmetic, concatenation and comparison operators to values.
/// - Detect overflow, division by zero and operand type mismatches.
pub mod binary;

/// The tree-walking interpreter core.
///
/// # Responsibilities
/// - Walk AST nodes and produce runtime values.
/// - Maintain the variable environment across statements.
/// - Write print output to the configured sink.
pub mod core;
