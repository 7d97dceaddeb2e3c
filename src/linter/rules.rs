//! The individual lint rules.

use crate::{
    interpreter::lexer::{Token, TokenKind},
    linter::core::{LintRule, Violation},
};

/// Requires identifiers to be written in camel case.
///
/// The check is the original one: an identifier containing an underscore is
/// flagged. Leading capitals are left alone.
pub struct CamelCaseRule;

impl LintRule for CamelCaseRule {
    fn name(&self) -> &'static str {
        "camel-case"
    }

    fn description(&self) -> &'static str {
        "identifiers must be camel case, without underscores"
    }

    fn apply(&self, lines: &[Vec<Token>]) -> Vec<Violation> {
        lines
            .iter()
            .flatten()
            .filter(|t| t.kind == TokenKind::Identifier && t.value.contains('_'))
            .map(|t| Violation {
                rule: self.name(),
                message: format!("identifier '{}' is not camel case", t.value),
                position: t.position(),
            })
            .collect()
    }
}

/// Requires print-family calls to take a plain identifier or literal.
///
/// A call whose argument is a compound expression, such as
/// `println(a + b)`, is flagged; the fix is to bind the expression to a
/// variable first.
pub struct PrintArgumentRule;

impl LintRule for PrintArgumentRule {
    fn name(&self) -> &'static str {
        "print-argument"
    }

    fn description(&self) -> &'static str {
        "print calls must take a single identifier or literal"
    }

    fn apply(&self, lines: &[Vec<Token>]) -> Vec<Violation> {
        let mut violations = Vec::new();

        for line in lines {
            for (index, token) in line.iter().enumerate() {
                if token.kind != TokenKind::Function {
                    continue;
                }
                let argument = call_argument(&line[index + 1..]);
                if !argument.is_some_and(|a| is_simple(a)) {
                    violations.push(Violation {
                        rule: self.name(),
                        message: format!(
                            "'{}' must take a single identifier or literal",
                            token.value
                        ),
                        position: token.position(),
                    });
                }
            }
        }

        violations
    }
}

/// The tokens between a call's parentheses, when the call is well formed.
fn call_argument(tokens: &[Token]) -> Option<&[Token]> {
    let is_punct = |t: &Token, v: &str| t.kind == TokenKind::Punctuation && t.value == v;

    if !tokens.first().is_some_and(|t| is_punct(t, "(")) {
        return None;
    }
    let close = tokens.iter().position(|t| is_punct(t, ")"))?;
    Some(&tokens[1..close])
}

/// Whether the argument is a single identifier or literal token.
fn is_simple(argument: &[Token]) -> bool {
    match argument {
        [only] => matches!(
            only.kind,
            TokenKind::Identifier
                | TokenKind::NumberLiteral
                | TokenKind::StringLiteral
                | TokenKind::Boolean
        ),
        _ => false,
    }
}
