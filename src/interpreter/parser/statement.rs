//! The per-construct statement builders.
//!
//! One builder per statement shape, each implementing [`StatementBuilder`].
//! Builders receive one already-delimited statement's tokens and assemble
//! its node, delegating every nested expression to the expression builder.

use crate::{
    ast::{DataType, DeclarationKind, FunctionKind, Node},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token, TokenKind},
        parser::{
            core::{ParseResult, Parser, StatementBuilder},
            expression,
        },
    },
};

/// Builds `if (condition) { ... } else { ... }` statements.
///
/// The condition goes through the expression builder; each branch's tokens
/// are parsed as a nested statement sequence and wrapped in a block node. A
/// missing `else` becomes an empty block.
pub struct ConditionalBuilder;

impl StatementBuilder for ConditionalBuilder {
    fn can_handle(&self, tokens: &[Token]) -> bool {
        tokens
            .first()
            .is_some_and(|t| t.kind == TokenKind::Keyword && t.value == "if")
    }

    fn build(&self, tokens: &[Token]) -> ParseResult<Node> {
        let position = tokens[0].start;

        expect_punctuation(tokens, 1, "(")?;
        let condition_close = find_matching(tokens, 1, "(", ")")?;
        let condition = expression::build(&tokens[2..condition_close])?;

        let then_open = condition_close + 1;
        expect_punctuation(tokens, then_open, "{")?;
        let then_close = find_matching(tokens, then_open, "{", "}")?;
        let then_branch = build_block(&tokens[then_open + 1..then_close], tokens[then_open].start)?;

        let mut next = then_close + 1;
        let mut else_branch = Node::Block {
            statements: Vec::new(),
            position,
        };
        if tokens
            .get(next)
            .is_some_and(|t| t.kind == TokenKind::Keyword && t.value == "else")
        {
            let else_open = next + 1;
            expect_punctuation(tokens, else_open, "{")?;
            let else_close = find_matching(tokens, else_open, "{", "}")?;
            else_branch = build_block(&tokens[else_open + 1..else_close], tokens[else_open].start)?;
            next = else_close + 1;
        }

        if let Some(extra) = tokens.get(next) {
            return Err(ParseError::UnexpectedToken {
                token: extra.value.clone(),
                line: extra.start.line,
            });
        }

        Ok(Node::Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            position,
        })
    }
}

/// Builds `let`/`const` declarations.
///
/// Handles any statement containing a KEYWORD token (the conditional builder
/// is registered earlier and intercepts `if`). The statement must carry
/// exactly one KEYWORD, one IDENTIFIER and one DATA_TYPE token; the trailing
/// token is taken verbatim as a literal initializer, so declarations do not
/// accept nested-expression initializers.
pub struct DeclarationBuilder;

impl StatementBuilder for DeclarationBuilder {
    fn can_handle(&self, tokens: &[Token]) -> bool {
        tokens.iter().any(|t| t.kind == TokenKind::Keyword)
    }

    fn build(&self, tokens: &[Token]) -> ParseResult<Node> {
        let keyword = exactly_one(tokens, TokenKind::Keyword, "KEYWORD")?;
        let identifier = exactly_one(tokens, TokenKind::Identifier, "IDENTIFIER")?;
        let data_type = exactly_one(tokens, TokenKind::DataType, "DATA_TYPE")?;

        let kind = match keyword.value.as_str() {
            "let" => DeclarationKind::Mutable,
            "const" => DeclarationKind::Immutable,
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.to_string(),
                    line: keyword.start.line,
                })
            }
        };
        let data_type = match data_type.value.as_str() {
            "number" => DataType::Number,
            "string" => DataType::Text,
            "boolean" => DataType::Boolean,
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.to_string(),
                    line: data_type.start.line,
                })
            }
        };

        // The last token is the initializer. It must be a value-bearing
        // token, not a leftover of the annotation.
        let initializer = tokens.last().filter(|t| {
            matches!(
                t.kind,
                TokenKind::NumberLiteral
                    | TokenKind::StringLiteral
                    | TokenKind::Boolean
                    | TokenKind::Identifier
            )
        });
        let Some(initializer) = initializer else {
            return Err(ParseError::EmptyExpression {
                line: keyword.start.line,
            });
        };

        Ok(Node::Declaration {
            kind,
            identifier: identifier.value.clone(),
            data_type,
            expression: Box::new(Node::Literal {
                value: initializer.value.clone(),
                kind: initializer.kind,
                position: initializer.start,
            }),
            position: keyword.start,
        })
    }
}

/// Builds `identifier = expression` assignments.
pub struct AssignationBuilder;

impl StatementBuilder for AssignationBuilder {
    fn can_handle(&self, tokens: &[Token]) -> bool {
        tokens.len() >= 2
            && tokens[0].kind == TokenKind::Identifier
            && tokens[1].kind == TokenKind::Assignation
    }

    fn build(&self, tokens: &[Token]) -> ParseResult<Node> {
        if tokens.len() <= 2 {
            return Err(ParseError::EmptyExpression {
                line: tokens[1].start.line,
            });
        }
        let expression = expression::build(&tokens[2..])?;

        Ok(Node::Assignation {
            identifier: tokens[0].value.clone(),
            expression: Box::new(expression),
            kind: tokens[1].kind,
            position: tokens[0].start,
        })
    }
}

/// Builds print-family statements: `println(expression)` and
/// `print(expression)`.
///
/// `println` produces a print node; every other print-family built-in goes
/// through a function node. Both are evaluated identically.
pub struct PrintBuilder;

impl StatementBuilder for PrintBuilder {
    fn can_handle(&self, tokens: &[Token]) -> bool {
        tokens.first().is_some_and(|t| t.kind == TokenKind::Function)
    }

    fn build(&self, tokens: &[Token]) -> ParseResult<Node> {
        let name = &tokens[0];

        expect_punctuation(tokens, 1, "(")?;
        let close = find_matching(tokens, 1, "(", ")")?;
        if close != tokens.len() - 1 {
            return Err(ParseError::UnexpectedToken {
                token: tokens[close + 1].value.clone(),
                line: tokens[close + 1].start.line,
            });
        }
        let argument = expression::build(&tokens[2..close])?;

        match name.value.as_str() {
            "println" => Ok(Node::Print {
                expression: Box::new(argument),
                position: name.start,
            }),
            _ => Ok(Node::Function {
                kind: FunctionKind::Print,
                argument: Box::new(argument),
                position: name.start,
            }),
        }
    }
}

/// Fallback builder for bare expression statements such as `x + 1;`.
///
/// Registered last; accepts statements made only of literal, identifier,
/// operator and parenthesis tokens.
pub struct ExpressionStatementBuilder;

impl StatementBuilder for ExpressionStatementBuilder {
    fn can_handle(&self, tokens: &[Token]) -> bool {
        !tokens.is_empty()
            && tokens.iter().all(|t| match t.kind {
                TokenKind::NumberLiteral
                | TokenKind::StringLiteral
                | TokenKind::Boolean
                | TokenKind::Identifier
                | TokenKind::Operator => true,
                TokenKind::Punctuation => t.value == "(" || t.value == ")",
                _ => false,
            })
    }

    fn build(&self, tokens: &[Token]) -> ParseResult<Node> {
        expression::build(tokens)
    }
}

/// Parses a branch's tokens as a nested statement sequence and wraps them in
/// a block node.
fn build_block(tokens: &[Token], position: Position) -> ParseResult<Node> {
    let statements = Parser::new().execute(tokens)?;
    Ok(Node::Block {
        statements,
        position,
    })
}

/// Requires the token at `index` to be the given punctuation.
fn expect_punctuation(tokens: &[Token], index: usize, value: &str) -> ParseResult<()> {
    match tokens.get(index) {
        Some(t) if t.kind == TokenKind::Punctuation && t.value == value => Ok(()),
        Some(t) => Err(ParseError::UnexpectedToken {
            token: t.value.clone(),
            line: t.start.line,
        }),
        None => Err(ParseError::UnexpectedEndOfInput {
            line: tokens.last().map_or(0, |t| t.start.line),
        }),
    }
}

/// Finds the index of the delimiter matching the one at `open_index`.
fn find_matching(tokens: &[Token], open_index: usize, open: &str, close: &str) -> ParseResult<usize> {
    let mut depth = 0_usize;

    for (index, token) in tokens.iter().enumerate().skip(open_index) {
        if token.kind != TokenKind::Punctuation {
            continue;
        }
        if token.value == open {
            depth += 1;
        } else if token.value == close {
            depth = depth
                .checked_sub(1)
                .ok_or_else(|| ParseError::UnbalancedDelimiters {
                    delimiter: close.to_string(),
                    line: token.start.line,
                })?;
            if depth == 0 {
                return Ok(index);
            }
        }
    }

    Err(ParseError::UnbalancedDelimiters {
        delimiter: open.to_string(),
        line: tokens[open_index].start.line,
    })
}

/// Finds the single token of the given kind in the statement.
///
/// # Errors
/// `MissingToken` when the kind is absent, `UnexpectedToken` on a duplicate.
fn exactly_one<'a>(tokens: &'a [Token], kind: TokenKind, name: &str) -> ParseResult<&'a Token> {
    let mut matching = tokens.iter().filter(|t| t.kind == kind);

    let first = matching.next().ok_or_else(|| ParseError::MissingToken {
        expected: name.to_string(),
        line: tokens.first().map_or(0, |t| t.start.line),
    })?;
    if let Some(duplicate) = matching.next() {
        return Err(ParseError::UnexpectedToken {
            token: duplicate.value.clone(),
            line: duplicate.start.line,
        });
    }

    Ok(first)
}
