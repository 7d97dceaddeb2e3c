#[derive(Debug)]
/// Represents all errors that can occur during lexing or AST construction.
pub enum ParseError {
    /// The scanner hit text that matches no lexeme.
    UnrecognizedCharacter {
        /// The offending text.
        found: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// No registered builder recognized the statement.
    UnrecognizedStatement {
        /// The first token of the statement.
        construct: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A required token kind is missing from a construct.
    MissingToken {
        /// The token kind that was expected (e.g. `IDENTIFIER`).
        expected: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token that does not belong where it appeared.
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The expression builder was given an empty token list.
    EmptyExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression with more than one token contains no operator to split
    /// it at.
    MissingOperator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Parentheses or braces do not balance.
    UnbalancedDelimiters {
        /// The delimiter that does not balance.
        delimiter: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of the statement unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { found, line } => {
                write!(f, "Error on line {line}: Unrecognized character: {found}.")
            }
            Self::UnrecognizedStatement { construct, line } => write!(
                f,
                "Error on line {line}: Unrecognized statement starting with '{construct}'."
            ),
            Self::MissingToken { expected, line } => write!(
                f,
                "Error on line {line}: Expected exactly one {expected} token but found none."
            ),
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            }
            Self::EmptyExpression { line } => {
                write!(f, "Error on line {line}: Expected an expression but found none.")
            }
            Self::MissingOperator { line } => write!(
                f,
                "Error on line {line}: No operator to split the expression at."
            ),
            Self::UnbalancedDelimiters { delimiter, line } => write!(
                f,
                "Error on line {line}: Unbalanced '{delimiter}' in statement."
            ),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            }
        }
    }
}

impl std::error::Error for ParseError {}
