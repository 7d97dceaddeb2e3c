/// The evaluator.
///
/// # Responsibilities
/// - Execute parsed programs and report runtime errors.
pub mod evaluator;

/// The lexer.
///
/// # Responsibilities
/// - Convert source text into position-annotated tokens.
/// - Skip whitespace and comments while tracking line numbers.
pub mod lexer;

/// The parser.
///
/// # Responsibilities
/// - Convert token sequences into AST nodes.
pub mod parser;

/// Runtime values.
///
/// # Responsibilities
/// - Model the value types programs compute with and their conversions.
pub mod value;
