use crate::{
    ast::Node,
    formatter::rules::{
        FormatAssignation, FormatBinary, FormatBlock, FormatConditional, FormatDeclaration,
        FormatFunction, FormatLiteral, FormatPrint,
    },
};

/// Configuration for the formatter's rendering choices.
///
/// The defaults produce the canonical style: spaces around binary operators
/// and `=`, no space before a type annotation's colon, one space after it,
/// and four spaces per indentation level inside blocks.
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Surround binary operators and `=` with single spaces.
    pub space_around_operators: bool,
    /// Insert a space before the `:` of a type annotation.
    pub space_before_colon: bool,
    /// Insert a space after the `:` of a type annotation.
    pub space_after_colon: bool,
    /// Spaces per indentation level inside blocks.
    pub indent: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            space_around_operators: true,
            space_before_colon: false,
            space_after_colon: true,
            indent: 4,
        }
    }
}

/// A per-construct formatting rule.
///
/// Mirrors the parser's builder dispatch: the formatter asks each registered
/// rule in turn and the first whose `matches` returns true renders the node.
pub trait FormatRule {
    /// Whether this rule renders the node.
    fn matches(&self, node: &Node) -> bool;

    /// Renders the node to source text.
    ///
    /// Rules receive the formatter so nested nodes can be rendered
    /// recursively with the same configuration.
    fn apply(&self, node: &Node, formatter: &Formatter) -> String;
}

/// Renders AST node sequences back to source text.
///
/// The formatter is a read-only client of the AST: it never evaluates
/// anything and never mutates the nodes. Its output is canonical, so
/// formatting already formatted text changes nothing.
pub struct Formatter {
    config: FormatConfig,
    rules: Vec<Box<dyn FormatRule>>,
}

impl Formatter {
    /// Creates a formatter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    /// Creates a formatter with the given configuration.
    #[must_use]
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            config,
            rules: vec![
                Box::new(FormatDeclaration),
                Box::new(FormatAssignation),
                Box::new(FormatConditional),
                Box::new(FormatBlock),
                Box::new(FormatPrint),
                Box::new(FormatFunction),
                Box::new(FormatBinary),
                Box::new(FormatLiteral),
            ],
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Renders a sequence of top-level nodes.
    ///
    /// Statements are joined by newlines and the output ends with a single
    /// trailing newline.
    #[must_use]
    pub fn format(&self, nodes: &[Node]) -> String {
        let mut out = nodes
            .iter()
            .map(|node| self.format_statement(node))
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }

    /// Renders a node in statement position.
    ///
    /// Bare expressions get the terminating `;` the expression rules leave
    /// out; the statement rules render theirs themselves.
    pub(crate) fn format_statement(&self, node: &Node) -> String {
        let mut text = self.format_node(node);
        if matches!(node, Node::Literal { .. } | Node::Binary { .. }) {
            text.push(';');
        }
        text
    }

    /// Renders a single node via the first matching rule.
    #[must_use]
    pub fn format_node(&self, node: &Node) -> String {
        for rule in &self.rules {
            if rule.matches(node) {
                return rule.apply(node, self);
            }
        }
        // Every node variant is matched by a registered rule.
        String::new()
    }

    /// The text placed around binary operators and `=`.
    pub(crate) fn operator_padding(&self) -> &'static str {
        if self.config.space_around_operators {
            " "
        } else {
            ""
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
