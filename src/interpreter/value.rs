use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types an expression can evaluate to.
/// Numbers keep an integer/real distinction so that integer arithmetic stays
/// exact and prints without a fractional part; mixed numeric operations
/// promote to `Real`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit).
    Integer(i64),
    /// A real value (double precision floating-point).
    Real(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`). Produced by the comparison
    /// operators and required as the condition of a conditional.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Parses numeric literal text into a value.
    ///
    /// Text without a fractional part becomes `Integer`, anything else that
    /// parses as a float becomes `Real`.
    ///
    /// # Parameters
    /// - `text`: The literal text.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidNumberLiteral` when the text is not
    /// numeric.
    pub fn parse_number(text: &str, line: usize) -> EvalResult<Self> {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Self::Integer(n));
        }
        match text.parse::<f64>() {
            Ok(r) => Ok(Self::Real(r)),
            Err(_) => Err(RuntimeError::InvalidNumberLiteral {
                value: text.to_string(),
                line,
            }),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers are converted with a precision check.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` for non-numeric values and
    /// `RuntimeError::LiteralTooLarge` for integers that cannot be
    /// represented exactly.
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line }),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the condition of a conditional node.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` if the value is not boolean.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// Returns `true` if the value is a number (integer or real).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }

    /// The name of the value's runtime type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(..) | Self::Real(..) => "number",
            Self::Str(..) => "string",
            Self::Bool(..) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
