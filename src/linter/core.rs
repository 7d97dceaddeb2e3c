use crate::{
    interpreter::lexer::{self, Position, Token},
    linter::rules::{CamelCaseRule, PrintArgumentRule},
};

/// A single finding reported by a lint rule.
///
/// Violations are diagnostics, not errors: linting a program never fails, it
/// only reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The name of the rule that produced the finding.
    pub rule: &'static str,
    /// A human-readable description of the finding.
    pub message: String,
    /// Where in the source the finding points.
    pub position: Position,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Warning on line {}: {} ({})",
            self.position.line, self.message, self.rule
        )
    }
}

/// A stateless check over the token stream.
///
/// Rules receive the tokens grouped by source line and report every
/// violation they find; they never mutate anything and never stop early.
pub trait LintRule {
    /// The rule's name, as shown in reports.
    fn name(&self) -> &'static str;

    /// One line describing what the rule checks.
    fn description(&self) -> &'static str;

    /// Runs the rule and returns every violation it finds.
    fn apply(&self, lines: &[Vec<Token>]) -> Vec<Violation>;
}

/// Runs a set of lint rules over a token stream.
///
/// The linter is a read-only client of the lexer output: it never parses and
/// never evaluates.
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    /// Creates a linter with the default rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(vec![
            Box::new(CamelCaseRule),
            Box::new(PrintArgumentRule),
        ])
    }

    /// Creates a linter with the given rules.
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn LintRule>>) -> Self {
        Self { rules }
    }

    /// Runs every registered rule over the tokens.
    ///
    /// # Parameters
    /// - `tokens`: The program's tokens, as produced by the lexer.
    ///
    /// # Returns
    /// All violations from all rules, ordered by source position.
    #[must_use]
    pub fn run(&self, tokens: &[Token]) -> Vec<Violation> {
        let lines = lexer::group_by_line(tokens);
        let mut violations: Vec<Violation> = self
            .rules
            .iter()
            .flat_map(|rule| rule.apply(&lines))
            .collect();
        violations.sort_by_key(|v| (v.position.line, v.position.column));
        violations
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
