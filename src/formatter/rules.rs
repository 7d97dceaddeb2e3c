//! The per-construct formatting rules.
//!
//! One rule per node variant. Statement rules render complete statements
//! including the terminating `;`; expression rules render bare expression
//! text and are reused recursively by the statement rules.

use crate::{
    ast::Node,
    formatter::core::{FormatRule, Formatter},
    interpreter::lexer::TokenKind,
};

/// Renders literal leaves. String literals get their double quotes back.
pub struct FormatLiteral;

impl FormatRule for FormatLiteral {
    fn matches(&self, node: &Node) -> bool {
        matches!(node, Node::Literal { .. })
    }

    fn apply(&self, node: &Node, _formatter: &Formatter) -> String {
        let Node::Literal { value, kind, .. } = node else {
            return String::new();
        };
        if *kind == TokenKind::StringLiteral {
            format!("\"{value}\"")
        } else {
            value.clone()
        }
    }
}

/// Renders binary expressions.
///
/// Operands that are themselves binary expressions are parenthesized, so the
/// rendered text re-parses to the same tree regardless of the split order.
pub struct FormatBinary;

impl FormatRule for FormatBinary {
    fn matches(&self, node: &Node) -> bool {
        matches!(node, Node::Binary { .. })
    }

    fn apply(&self, node: &Node, formatter: &Formatter) -> String {
        let Node::Binary {
            left,
            right,
            operator,
            ..
        } = node
        else {
            return String::new();
        };
        let pad = formatter.operator_padding();
        format!(
            "{}{pad}{}{pad}{}",
            operand(left, formatter),
            operator.value,
            operand(right, formatter)
        )
    }
}

fn operand(node: &Node, formatter: &Formatter) -> String {
    let text = formatter.format_node(node);
    if matches!(node, Node::Binary { .. }) {
        format!("({text})")
    } else {
        text
    }
}

/// Renders `identifier = expression;` assignments.
pub struct FormatAssignation;

impl FormatRule for FormatAssignation {
    fn matches(&self, node: &Node) -> bool {
        matches!(node, Node::Assignation { .. })
    }

    fn apply(&self, node: &Node, formatter: &Formatter) -> String {
        let Node::Assignation {
            identifier,
            expression,
            ..
        } = node
        else {
            return String::new();
        };
        let pad = formatter.operator_padding();
        format!("{identifier}{pad}={pad}{};", formatter.format_node(expression))
    }
}

/// Renders `let identifier: type = expression;` declarations.
pub struct FormatDeclaration;

impl FormatRule for FormatDeclaration {
    fn matches(&self, node: &Node) -> bool {
        matches!(node, Node::Declaration { .. })
    }

    fn apply(&self, node: &Node, formatter: &Formatter) -> String {
        let Node::Declaration {
            kind,
            identifier,
            data_type,
            expression,
            ..
        } = node
        else {
            return String::new();
        };
        let config = formatter.config();
        let before = if config.space_before_colon { " " } else { "" };
        let after = if config.space_after_colon { " " } else { "" };
        let pad = formatter.operator_padding();
        format!(
            "{kind} {identifier}{before}:{after}{data_type}{pad}={pad}{};",
            formatter.format_node(expression)
        )
    }
}

/// Renders `if (condition) { ... } else { ... }` statements.
///
/// An empty else branch is omitted entirely.
pub struct FormatConditional;

impl FormatRule for FormatConditional {
    fn matches(&self, node: &Node) -> bool {
        matches!(node, Node::Conditional { .. })
    }

    fn apply(&self, node: &Node, formatter: &Formatter) -> String {
        let Node::Conditional {
            condition,
            then_branch,
            else_branch,
            ..
        } = node
        else {
            return String::new();
        };
        let mut out = format!(
            "if ({}) {}",
            formatter.format_node(condition),
            formatter.format_node(then_branch)
        );
        if !else_branch.is_empty_block() {
            out.push_str(" else ");
            out.push_str(&formatter.format_node(else_branch));
        }
        out
    }
}

/// Renders blocks: braces around a statement per line, each line indented.
pub struct FormatBlock;

impl FormatRule for FormatBlock {
    fn matches(&self, node: &Node) -> bool {
        matches!(node, Node::Block { .. })
    }

    fn apply(&self, node: &Node, formatter: &Formatter) -> String {
        let Node::Block { statements, .. } = node else {
            return String::new();
        };
        if statements.is_empty() {
            return "{}".to_string();
        }
        let indent = " ".repeat(formatter.config().indent);
        let mut out = String::from("{\n");
        for statement in statements {
            for line in formatter.format_statement(statement).lines() {
                out.push_str(&indent);
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('}');
        out
    }
}

/// Renders print-family function calls such as `print(expression);`.
pub struct FormatFunction;

impl FormatRule for FormatFunction {
    fn matches(&self, node: &Node) -> bool {
        matches!(node, Node::Function { .. })
    }

    fn apply(&self, node: &Node, formatter: &Formatter) -> String {
        let Node::Function { kind, argument, .. } = node else {
            return String::new();
        };
        format!("{kind}({});", formatter.format_node(argument))
    }
}

/// Renders `println(expression);` statements.
pub struct FormatPrint;

impl FormatRule for FormatPrint {
    fn matches(&self, node: &Node) -> bool {
        matches!(node, Node::Print { .. })
    }

    fn apply(&self, node: &Node, formatter: &Formatter) -> String {
        let Node::Print { expression, .. } = node else {
            return String::new();
        };
        format!("println({});", formatter.format_node(expression))
    }
}
