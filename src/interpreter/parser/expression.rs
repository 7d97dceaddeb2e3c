//! Builds expression trees from flat token slices.
//!
//! The builder does not use a grammar table. It recursively partitions the
//! token slice at a splitting operator: the operator groups below are tried
//! loosest-binding first, and within a group the leftmost occurrence at
//! parenthesis depth 0 wins. Splitting earlier means binding looser, so
//! comparisons bind loosest, then `+`/`-`, and `*`//` binds tightest
//! (`2 + 3 * 4` is `2 + (3 * 4)`). The leftmost-match tie-break makes
//! operator chains right-heavy: `a - b - c` parses as `a - (b - c)`, because
//! the recursion on the right side re-splits at the next `-`.
//!
//! Operator tokens outside the groups (such as `^`) split after all groups
//! were tried, so they still produce a binary node; the evaluator rejects
//! them as unsupported.

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Splitting operator groups, tried in order from loosest to tightest
/// binding.
const SPLIT_GROUPS: [&[&str]; 3] = [&[">", "<"], &["+", "-"], &["*", "/"]];

/// Builds an expression node from a non-empty token slice.
///
/// A single token becomes a literal leaf. A slice wrapped in one matching
/// pair of parentheses is unwrapped and rebuilt, which makes parenthesization
/// the tightest binding of all. Otherwise the slice is split at an operator
/// as described in the module documentation.
///
/// # Parameters
/// - `tokens`: The expression's tokens, in source order.
///
/// # Returns
/// The root node of the expression tree.
///
/// # Errors
/// Returns a `ParseError` when the slice is empty, when a multi-token slice
/// contains no splitting operator, or when a token cannot be a literal.
pub fn build(tokens: &[Token]) -> ParseResult<Node> {
    let Some(first) = tokens.first() else {
        return Err(ParseError::EmptyExpression { line: 0 });
    };

    if tokens.len() == 1 {
        return literal(first);
    }
    if is_wrapped(tokens) {
        return build(&tokens[1..tokens.len() - 1]);
    }

    for group in SPLIT_GROUPS {
        if let Some(index) = find_split(tokens, group)? {
            return split_at(tokens, index);
        }
    }
    // Operators outside the groups still split; the evaluator reports them
    // as unsupported.
    if let Some(index) = find_split_by(tokens, |_| true)? {
        return split_at(tokens, index);
    }

    Err(ParseError::MissingOperator {
        line: first.start.line,
    })
}

/// Builds the binary node splitting the slice at the operator at `index`.
fn split_at(tokens: &[Token], index: usize) -> ParseResult<Node> {
    let operator = tokens[index].clone();
    Ok(Node::Binary {
        left: Box::new(build(&tokens[..index])?),
        right: Box::new(build(&tokens[index + 1..])?),
        position: operator.start,
        operator,
    })
}

/// Builds the literal leaf for a single token.
fn literal(token: &Token) -> ParseResult<Node> {
    match token.kind {
        TokenKind::NumberLiteral
        | TokenKind::StringLiteral
        | TokenKind::Boolean
        | TokenKind::Identifier => Ok(Node::Literal {
            value: token.value.clone(),
            kind: token.kind,
            position: token.start,
        }),
        _ => Err(ParseError::UnexpectedToken {
            token: token.value.clone(),
            line: token.start.line,
        }),
    }
}

/// Whether the slice is wrapped in one matching pair of parentheses.
///
/// `(a) + (b)` is not wrapped: its opening parenthesis closes before the end
/// of the slice.
fn is_wrapped(tokens: &[Token]) -> bool {
    let opens = |t: &Token| t.kind == TokenKind::Punctuation && t.value == "(";
    let closes = |t: &Token| t.kind == TokenKind::Punctuation && t.value == ")";

    let Some((first, last)) = tokens.first().zip(tokens.last()) else {
        return false;
    };
    if !opens(first) || !closes(last) {
        return false;
    }

    let mut depth = 0_usize;
    for (index, token) in tokens.iter().enumerate() {
        if opens(token) {
            depth += 1;
        } else if closes(token) {
            let Some(remaining) = depth.checked_sub(1) else {
                return false;
            };
            depth = remaining;
            if depth == 0 && index < tokens.len() - 1 {
                return false;
            }
        }
    }
    depth == 0
}

/// Finds the leftmost operator from `operators` at parenthesis depth 0.
fn find_split(tokens: &[Token], operators: &[&str]) -> ParseResult<Option<usize>> {
    find_split_by(tokens, |op| operators.contains(&op))
}

/// Finds the leftmost operator at parenthesis depth 0 for which `accepts`
/// returns true.
fn find_split_by(
    tokens: &[Token],
    accepts: impl Fn(&str) -> bool,
) -> ParseResult<Option<usize>> {
    let mut depth = 0_usize;

    for (index, token) in tokens.iter().enumerate() {
        match (token.kind, token.value.as_str()) {
            (TokenKind::Punctuation, "(") => depth += 1,
            (TokenKind::Punctuation, ")") => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::UnbalancedDelimiters {
                        delimiter: ")".to_string(),
                        line: token.start.line,
                    })?;
            }
            (TokenKind::Operator, op) if depth == 0 && accepts(op) => {
                return Ok(Some(index));
            }
            _ => {}
        }
    }

    Ok(None)
}
