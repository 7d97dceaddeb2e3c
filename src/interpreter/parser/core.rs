use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::statement::{
            AssignationBuilder, ConditionalBuilder, DeclarationBuilder, ExpressionStatementBuilder,
            PrintBuilder,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A per-construct AST builder.
///
/// Each builder recognizes one statement shape and assembles its node. The
/// parser holds a registered list of builders and asks each in turn; the
/// first whose `can_handle` returns true builds the statement.
pub trait StatementBuilder {
    /// Whether this builder recognizes the statement's tokens.
    fn can_handle(&self, tokens: &[Token]) -> bool;

    /// Builds the AST node for the statement.
    ///
    /// # Errors
    /// Returns a `ParseError` when the statement is malformed.
    fn build(&self, tokens: &[Token]) -> ParseResult<Node>;
}

/// Converts a flat token sequence into a sequence of top-level AST nodes.
///
/// The parser first segments the token stream into statements, then
/// dispatches each statement to the registered builders in registration
/// order.
pub struct Parser {
    builders: Vec<Box<dyn StatementBuilder>>,
}

impl Parser {
    /// Creates a parser with the default builders registered.
    ///
    /// Registration order is part of the dispatch contract: the conditional
    /// builder must come before the declaration builder, since both trigger
    /// on statements containing a KEYWORD token and the first match wins.
    /// The expression-statement builder is the fallback and comes last.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builders: vec![
                Box::new(ConditionalBuilder),
                Box::new(DeclarationBuilder),
                Box::new(AssignationBuilder),
                Box::new(PrintBuilder),
                Box::new(ExpressionStatementBuilder),
            ],
        }
    }

    /// Builds the AST nodes for a whole program.
    ///
    /// Statements are delimited by `;` at brace depth 0; a `}` closing back
    /// to depth 0 ends a conditional statement unless it is followed by
    /// `else`.
    ///
    /// # Parameters
    /// - `tokens`: The program's tokens, as produced by the lexer.
    ///
    /// # Returns
    /// One AST node per top-level statement, in source order.
    ///
    /// # Errors
    /// Returns a `ParseError` when a statement is malformed or matches no
    /// registered builder.
    pub fn execute(&self, tokens: &[Token]) -> ParseResult<Vec<Node>> {
        split_statements(tokens)?
            .into_iter()
            .map(|statement| self.build_statement(statement))
            .collect()
    }

    /// Builds the AST node for a single, already delimited statement.
    ///
    /// # Errors
    /// Returns `ParseError::UnrecognizedStatement` when no registered
    /// builder recognizes the tokens, or the matching builder's error when
    /// the statement is malformed.
    pub fn build_statement(&self, tokens: &[Token]) -> ParseResult<Node> {
        for builder in &self.builders {
            if builder.can_handle(tokens) {
                return builder.build(tokens);
            }
        }

        let first = tokens.first();
        Err(ParseError::UnrecognizedStatement {
            construct: first.map_or_else(String::new, |t| t.value.clone()),
            line: first.map_or(0, |t| t.start.line),
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Segments a token stream into statements.
///
/// A `;` at brace depth 0 terminates the current statement (and is dropped).
/// A `}` that closes back to depth 0 terminates the statement too, unless the
/// next token is `else`, which keeps an if/else chain together. Whatever
/// remains after the last terminator is treated as a final statement.
fn split_statements(tokens: &[Token]) -> ParseResult<Vec<&[Token]>> {
    let mut statements = Vec::new();
    let mut start = 0;
    let mut depth = 0_usize;

    for (index, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Punctuation {
            continue;
        }
        match token.value.as_str() {
            "{" => depth += 1,
            "}" => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::UnbalancedDelimiters {
                        delimiter: "}".to_string(),
                        line: token.start.line,
                    })?;
                if depth == 0 {
                    let else_follows = tokens.get(index + 1).is_some_and(|next| {
                        next.kind == TokenKind::Keyword && next.value == "else"
                    });
                    if !else_follows {
                        statements.push(&tokens[start..=index]);
                        start = index + 1;
                    }
                }
            }
            ";" if depth == 0 => {
                if index > start {
                    statements.push(&tokens[start..index]);
                }
                start = index + 1;
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ParseError::UnbalancedDelimiters {
            delimiter: "{".to_string(),
            line: tokens.last().map_or(0, |t| t.start.line),
        });
    }
    if start < tokens.len() {
        statements.push(&tokens[start..]);
    }

    Ok(statements)
}
