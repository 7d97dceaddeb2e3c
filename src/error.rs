/// Parsing errors.
///
/// Defines all error types that can occur during lexing and AST construction.
/// Parse errors include unrecognized characters, unrecognized statements,
/// missing required tokens, empty expressions and unbalanced delimiters.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like division by zero, type mismatches, undefined
/// variables and unsupported operators.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
