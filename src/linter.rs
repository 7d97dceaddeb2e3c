/// The linter core.
///
/// # Responsibilities
/// - Hold the registered lint rules and run them over a token stream.
/// - Collect violations without ever stopping at the first one.
pub mod core;

/// The individual lint rules.
///
/// # Responsibilities
/// - Check identifier casing and print-call argument shape.
pub mod rules;

pub use self::core::{LintRule, Linter, Violation};
