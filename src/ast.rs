use crate::interpreter::lexer::{Position, Token, TokenKind};

/// The kind of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// A `let` declaration; the variable may be reassigned.
    Mutable,
    /// A `const` declaration.
    Immutable,
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutable => "let",
            Self::Immutable => "const",
        })
    }
}

/// The type named in a declaration's type annotation.
///
/// The annotation is carried for diagnostics and formatting; evaluation
/// derives types from values at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// `number`
    Number,
    /// `string`
    Text,
    /// `boolean`
    Boolean,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Number => "number",
            Self::Text => "string",
            Self::Boolean => "boolean",
        })
    }
}

/// The built-in function a [`Node::Function`] node calls.
///
/// Currently the print family only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `println`
    Println,
    /// `print`
    Print,
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Println => "println",
            Self::Print => "print",
        })
    }
}

/// An abstract syntax tree (AST) node of a quill program.
///
/// `Node` is a closed set of variants, one per construct the language has.
/// Every variant carries the source position it was built from. Nodes are
/// immutable trees: each node exclusively owns its children, and nothing is
/// shared or mutated after construction, so a built tree can be handed to any
/// number of read-only consumers (interpreter, formatter) safely.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A terminal value, not yet coerced to a runtime type.
    Literal {
        /// The raw token text.
        value: String,
        /// The token kind the literal was built from; determines how the
        /// interpreter coerces the text.
        kind: TokenKind,
        /// Position in the source code.
        position: Position,
    },
    /// A binary operation combining two sub-expressions.
    Binary {
        /// Left operand.
        left: Box<Node>,
        /// Right operand.
        right: Box<Node>,
        /// The operator token; its value must be one of `+ - * / > <` for
        /// evaluation to succeed.
        operator: Token,
        /// Position in the source code.
        position: Position,
    },
    /// An assignment to an already visible variable.
    Assignation {
        /// The variable name.
        identifier: String,
        /// The assigned expression.
        expression: Box<Node>,
        /// The kind of the assignment token.
        kind: TokenKind,
        /// Position in the source code.
        position: Position,
    },
    /// A variable declaration with a type annotation and an initializer.
    Declaration {
        /// Whether the declaration used `let` or `const`.
        kind: DeclarationKind,
        /// The variable name.
        identifier: String,
        /// The annotated type.
        data_type: DataType,
        /// The initializer expression.
        expression: Box<Node>,
        /// Position in the source code.
        position: Position,
    },
    /// An `if`/`else` statement.
    Conditional {
        /// The condition; must evaluate to a boolean at runtime.
        condition: Box<Node>,
        /// Evaluated when the condition is true.
        then_branch: Box<Node>,
        /// Evaluated when the condition is false. A source-level missing
        /// `else` is represented by an empty block.
        else_branch: Box<Node>,
        /// Position in the source code.
        position: Position,
    },
    /// An ordered sequence of statements.
    Block {
        /// The statements, evaluated strictly in order.
        statements: Vec<Node>,
        /// Position in the source code.
        position: Position,
    },
    /// A call to a built-in function (print family).
    Function {
        /// Which built-in is called.
        kind: FunctionKind,
        /// The argument expression.
        argument: Box<Node>,
        /// Position in the source code.
        position: Position,
    },
    /// A `println` statement.
    Print {
        /// The printed expression.
        expression: Box<Node>,
        /// Position in the source code.
        position: Position,
    },
}

impl Node {
    /// Gets the source position from `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::Binary { position, .. }
            | Self::Assignation { position, .. }
            | Self::Declaration { position, .. }
            | Self::Conditional { position, .. }
            | Self::Block { position, .. }
            | Self::Function { position, .. }
            | Self::Print { position, .. } => *position,
        }
    }

    /// Returns `true` for a block with no statements.
    ///
    /// Used to recognize an absent `else` branch.
    #[must_use]
    pub fn is_empty_block(&self) -> bool {
        matches!(self, Self::Block { statements, .. } if statements.is_empty())
    }
}
