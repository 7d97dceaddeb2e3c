//! Tests for statement segmentation and tree construction.

use quill::{
    ast::{DataType, DeclarationKind, Node},
    interpreter::{lexer, parser::core::Parser},
    parse_source,
};

fn parse(src: &str) -> Vec<Node> {
    parse_source(src).unwrap_or_else(|e| panic!("Parse failed: {e}"))
}

fn parse_one(src: &str) -> Node {
    let mut nodes = parse(src);
    assert_eq!(nodes.len(), 1, "expected exactly one statement");
    nodes.remove(0)
}

fn assert_parse_fails(src: &str) {
    if parse_source(src).is_ok() {
        panic!("Parse succeeded but was expected to fail: {src}")
    }
}

#[test]
fn declaration_fields() {
    let Node::Declaration {
        kind,
        identifier,
        data_type,
        expression,
        ..
    } = parse_one("let x: number = 42;")
    else {
        panic!("expected a declaration")
    };

    assert_eq!(kind, DeclarationKind::Mutable);
    assert_eq!(identifier, "x");
    assert_eq!(data_type, DataType::Number);
    assert!(matches!(*expression, Node::Literal { ref value, .. } if value == "42"));
}

#[test]
fn const_declaration() {
    let Node::Declaration { kind, .. } = parse_one("const n: string = 'hi';") else {
        panic!("expected a declaration")
    };
    assert_eq!(kind, DeclarationKind::Immutable);
}

#[test]
fn assignation_builds_an_expression_tree() {
    let Node::Assignation {
        identifier,
        expression,
        ..
    } = parse_one("x = 1 + 2;")
    else {
        panic!("expected an assignation")
    };

    assert_eq!(identifier, "x");
    assert!(matches!(*expression, Node::Binary { .. }));
}

#[test]
fn multiplication_ends_up_deeper_than_addition() {
    // 2 + 3 * 4 must group as 2 + (3 * 4): the root splits at '+'.
    let Node::Binary {
        operator, right, ..
    } = parse_one("2 + 3 * 4;")
    else {
        panic!("expected a binary expression")
    };

    assert_eq!(operator.value, "+");
    assert!(
        matches!(*right, Node::Binary { ref operator, .. } if operator.value == "*"),
        "the multiplication must be the right subtree"
    );
}

#[test]
fn operator_chains_group_to_the_right() {
    // 10 - 3 - 2 groups as 10 - (3 - 2).
    let Node::Binary { left, right, .. } = parse_one("10 - 3 - 2;") else {
        panic!("expected a binary expression")
    };

    assert!(matches!(*left, Node::Literal { ref value, .. } if value == "10"));
    assert!(matches!(*right, Node::Binary { .. }));
}

#[test]
fn parentheses_force_grouping() {
    // (10 - 3) - 2 puts the subtraction on the left instead.
    let Node::Binary { left, right, .. } = parse_one("(10 - 3) - 2;") else {
        panic!("expected a binary expression")
    };

    assert!(matches!(*left, Node::Binary { .. }));
    assert!(matches!(*right, Node::Literal { ref value, .. } if value == "2"));
}

#[test]
fn unknown_operators_split_like_any_other() {
    // `^` is outside every split group but still yields a binary node; the
    // interpreter rejects it when evaluated.
    let Node::Binary { operator, .. } = parse_one("2 ^ 3;") else {
        panic!("expected a binary expression")
    };
    assert_eq!(operator.value, "^");
}

#[test]
fn comparison_splits_before_arithmetic() {
    // 1 + 2 < 4 groups as (1 + 2) < 4.
    let Node::Binary { operator, .. } = parse_one("1 + 2 < 4;") else {
        panic!("expected a binary expression")
    };
    assert_eq!(operator.value, "<");
}

#[test]
fn statements_split_on_semicolons() {
    let nodes = parse("let x: number = 1;\nx = 2;\nprintln(x);");
    assert_eq!(nodes.len(), 3);
}

#[test]
fn if_else_stays_one_statement() {
    let nodes = parse("if (true) { println(1); } else { println(2); }\nprintln(3);");
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[0], Node::Conditional { .. }));
}

#[test]
fn missing_else_becomes_an_empty_block() {
    let Node::Conditional { else_branch, .. } = parse_one("if (true) { println(1); }") else {
        panic!("expected a conditional")
    };
    assert!(else_branch.is_empty_block());
}

#[test]
fn conditional_branches_contain_nested_statements() {
    let Node::Conditional { then_branch, .. } =
        parse_one("if (true) { let y: number = 1; println(y); }")
    else {
        panic!("expected a conditional")
    };
    let Node::Block { statements, .. } = *then_branch else {
        panic!("expected a block")
    };
    assert_eq!(statements.len(), 2);
}

#[test]
fn println_builds_a_print_node() {
    assert!(matches!(parse_one("println(1);"), Node::Print { .. }));
    assert!(matches!(parse_one("print(1);"), Node::Function { .. }));
}

#[test]
fn trailing_statement_needs_no_semicolon() {
    let nodes = parse("let x: number = 1;\nprintln(x)");
    assert_eq!(nodes.len(), 2);
}

#[test]
fn empty_source_parses_to_nothing() {
    assert!(parse("").is_empty());
    assert!(parse("// just a comment\n").is_empty());
}

#[test]
fn malformed_declarations_fail() {
    assert_parse_fails("let x: number =;");
    assert_parse_fails("let x x: number = 1;");
    assert_parse_fails("let x: number number = 1;");
    assert_parse_fails("let x: = 1;");
}

#[test]
fn malformed_expressions_fail() {
    assert_parse_fails("x =;");
    assert_parse_fails("println(1 2);");
    assert_parse_fails("println();");
    assert_parse_fails("println((1 + 2);");
    assert_parse_fails("println(1 + 2));");
}

#[test]
fn malformed_conditionals_fail() {
    assert_parse_fails("if true { println(1); }");
    assert_parse_fails("if (true) println(1);");
    assert_parse_fails("if (true) { println(1); } else println(2);");
    assert_parse_fails("if (true) { println(1);");
}

#[test]
fn unrecognized_statements_fail() {
    assert_parse_fails("= 1;");
    assert_parse_fails("; = ;;");
}

#[test]
fn unrecognized_characters_fail() {
    assert_parse_fails("let x: number = @;");
}

#[test]
fn parser_reports_the_failing_line() {
    let err = parse_source("let x: number = 1;\nprintln(missing operator here);")
        .expect_err("expected a parse error");
    assert!(err.to_string().contains("line 2"), "got: {err}");
}

#[test]
fn tokenizer_strips_string_quotes() {
    let tokens = lexer::tokenize("\"hi\" 'there'").unwrap();
    assert_eq!(tokens[0].value, "hi");
    assert_eq!(tokens[1].value, "there");
}

#[test]
fn tokenizer_tracks_lines_and_columns() {
    let tokens = lexer::tokenize("let x\n  = 1").unwrap();
    assert_eq!(tokens[0].start.line, 1);
    assert_eq!(tokens[0].start.column, 1);
    assert_eq!(tokens[2].start.line, 2);
    assert_eq!(tokens[2].start.column, 3);
}

#[test]
fn parser_default_matches_new() {
    let tokens = lexer::tokenize("println(1);").unwrap();
    assert_eq!(
        Parser::default().execute(&tokens).unwrap(),
        Parser::new().execute(&tokens).unwrap()
    );
}
