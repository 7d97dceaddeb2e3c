//! # quill
//!
//! quill is a small scripting language written in Rust. It lexes, parses and
//! interprets programs with variables, arithmetic, string concatenation,
//! comparisons, conditionals and printing, and ships a formatter and a linter
//! that work on the same token stream and AST.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Node,
    error::ParseError,
    formatter::Formatter,
    interpreter::{evaluator::core::Interpreter, lexer, parser::core::Parser},
    linter::{Linter, Violation},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser, executed by the interpreter and rendered by the formatter.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Renders programs back to canonical source text.
///
/// The formatter consumes the AST the parser builds and prints it in one
/// canonical style, so formatting already formatted text changes nothing.
///
/// # Responsibilities
/// - Renders each node variant via per-construct rules.
/// - Exposes the configuration knobs for spacing and indentation.
pub mod formatter;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and error handling to provide a complete runtime for
/// source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and value
///   types.
/// - Provides entry points for tokenizing, parsing and evaluating user code.
pub mod interpreter;
/// Reports style findings without executing anything.
///
/// The linter consumes the lexer's token stream directly and collects every
/// violation instead of stopping at the first.
///
/// # Responsibilities
/// - Runs the registered lint rules over the token stream.
/// - Reports violations with rule names and source positions.
pub mod linter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Lexes and parses source text into its top-level AST nodes.
///
/// # Errors
/// Returns a `ParseError` when the source contains an unrecognized character
/// or a malformed statement.
pub fn parse_source(source: &str) -> Result<Vec<Node>, ParseError> {
    let tokens = lexer::tokenize(source)?;
    Parser::new().execute(&tokens)
}

/// Runs a program, printing to standard output.
///
/// This function parses and executes all statements in the provided source
/// string with a fresh interpreter. If execution succeeds it returns
/// `Ok(())`; otherwise it returns an error with details about the failure.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use quill::run_program;
///
/// let source = "let x: number = 42; println(x + 10);";
/// assert!(run_program(source).is_ok());
///
/// // 'y' is not defined.
/// assert!(run_program("println(y);").is_err());
/// ```
pub fn run_program(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut interpreter = Interpreter::new();
    for node in parse_source(source)? {
        interpreter.evaluate(&node)?;
    }
    Ok(())
}

/// Runs a program with print output captured in the given sink.
///
/// Returns the sink so callers can inspect what the program printed.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
pub fn run_program_with_output<W: Write>(
    source: &str,
    out: W,
) -> Result<W, Box<dyn std::error::Error>> {
    let mut interpreter = Interpreter::with_output(out);
    for node in parse_source(source)? {
        interpreter.evaluate(&node)?;
    }
    Ok(interpreter.into_output())
}

/// Formats source text into the canonical style.
///
/// # Errors
/// Returns a `ParseError` when the source does not parse; the formatter never
/// touches text it cannot parse.
pub fn format_source(source: &str) -> Result<String, ParseError> {
    let nodes = parse_source(source)?;
    Ok(Formatter::new().format(&nodes))
}

/// Lints source text and returns every violation found.
///
/// # Errors
/// Returns a `ParseError` when the source cannot be tokenized. Linting
/// itself never fails.
pub fn lint_source(source: &str) -> Result<Vec<Violation>, ParseError> {
    let tokens = lexer::tokenize(source)?;
    Ok(Linter::new().run(&tokens))
}
