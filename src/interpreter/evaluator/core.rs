use std::{
    collections::HashMap,
    io::{self, Write},
};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, lexer::TokenKind, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking interpreter.
///
/// One interpreter instance owns exactly one variable environment for its
/// entire lifetime, so a sequence of top-level nodes evaluated through the
/// same instance shares visible state. It also owns the output sink the
/// print family writes to, which is injectable so tests and embedders can
/// capture output instead of swapping process-wide streams.
///
/// Interpreters must not share environments: to run independent programs
/// concurrently, give each its own instance. AST nodes themselves are
/// immutable and safe to share read-only.
pub struct Interpreter<W = io::Stdout> {
    /// The variable environment: name to current value, case-sensitive.
    pub variables: HashMap<String, Value>,
    out: W,
}

impl Interpreter {
    /// Creates an interpreter with an empty environment that prints to
    /// standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty environment writing to the given
    /// sink.
    pub fn with_output(out: W) -> Self {
        Self {
            variables: HashMap::new(),
            out,
        }
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates an AST node.
    ///
    /// This is the main entry point for execution. The interpreter
    /// dispatches on the node variant and either produces a runtime value or
    /// performs the node's side effect (printing, environment mutation).
    ///
    /// # Parameters
    /// - `node`: The node to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for value-producing nodes, `None` for nodes evaluated
    /// purely for their side effect.
    ///
    /// # Errors
    /// Returns a `RuntimeError` on the first failure; evaluation of the
    /// current node stops immediately and nothing is retried.
    pub fn evaluate(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Literal {
                value,
                kind,
                position,
            } => Ok(Some(self.eval_literal(value, *kind, position.line)?)),
            Node::Binary {
                left,
                right,
                operator,
                ..
            } => {
                let lhs = self.require_value(left)?;
                let rhs = self.require_value(right)?;
                Ok(Some(eval_binary(operator, &lhs, &rhs)?))
            }
            Node::Assignation {
                identifier,
                expression,
                ..
            }
            | Node::Declaration {
                identifier,
                expression,
                ..
            } => {
                let value = self.require_value(expression)?;
                self.variables.insert(identifier.clone(), value.clone());
                Ok(Some(value))
            }
            Node::Conditional {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let line = condition.position().line;
                if self.require_value(condition)?.as_bool(line)? {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            }
            Node::Block { statements, .. } => {
                let mut last = None;
                for statement in statements {
                    last = self.evaluate(statement)?;
                }
                Ok(last)
            }
            Node::Print {
                expression,
                position,
            } => {
                self.print_value(expression, position.line)?;
                Ok(None)
            }
            Node::Function {
                argument, position, ..
            } => {
                self.print_value(argument, position.line)?;
                Ok(None)
            }
        }
    }

    /// Evaluates a literal leaf to its runtime value.
    ///
    /// Number text is parsed, string text is taken verbatim, boolean text is
    /// compared against `"true"`, and identifiers are looked up in the
    /// environment.
    fn eval_literal(&self, value: &str, kind: TokenKind, line: usize) -> EvalResult<Value> {
        match kind {
            TokenKind::NumberLiteral => Value::parse_number(value, line),
            TokenKind::StringLiteral => Ok(Value::Str(value.to_string())),
            TokenKind::Boolean => Ok(Value::Bool(value == "true")),
            TokenKind::Identifier => {
                self.variables
                    .get(value)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable {
                        name: value.to_string(),
                        line,
                    })
            }
            other => Err(RuntimeError::TypeError {
                details: format!("a {other:?} token is not a literal"),
                line,
            }),
        }
    }

    /// Evaluates a node that must produce a value.
    fn require_value(&mut self, node: &Node) -> EvalResult<Value> {
        let line = node.position().line;
        self.evaluate(node)?
            .ok_or(RuntimeError::MissingValue { line })
    }

    /// Evaluates the expression and writes its text followed by a line
    /// terminator to the output sink.
    fn print_value(&mut self, expression: &Node, line: usize) -> EvalResult<()> {
        let value = self.require_value(expression)?;
        writeln!(self.out, "{value}").map_err(|e| RuntimeError::OutputError {
            details: e.to_string(),
            line,
        })
    }
}
