#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never declared or assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal's text does not parse to a number.
    InvalidNumberLiteral {
        /// The literal text.
        value: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands of incompatible types.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary node carries an operator outside `+ - * / > <`.
    UnsupportedOperator {
        /// The operator text.
        operator: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was too large to be represented exactly as a real.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression that must produce a value produced none.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output sink failed.
    OutputError {
        /// Details from the underlying writer.
        details: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            }
            Self::InvalidNumberLiteral { value, line } => {
                write!(f, "Error on line {line}: '{value}' is not a valid number.")
            }
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            }
            Self::ExpectedBoolean { line } => write!(f, "Error on line {line}: Expected boolean."),
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::UnsupportedOperator { operator, line } => {
                write!(f, "Error on line {line}: Unsupported operator '{operator}'.")
            }
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(
                f,
                "Error on line {line}: Integer overflow while trying to compute result."
            ),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            }
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::OutputError { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
