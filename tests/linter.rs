//! Tests for the lint rules and the violation report shape.

use quill::{lint_source, linter::Violation};

fn lint(src: &str) -> Vec<Violation> {
    lint_source(src).unwrap_or_else(|e| panic!("Lint failed: {e}"))
}

#[test]
fn camel_case_identifiers_pass() {
    assert!(lint("let someValue: number = 1;").is_empty());
    assert!(lint("let x: number = 1;\nprintln(x);").is_empty());
}

#[test]
fn snake_case_identifiers_are_flagged() {
    let violations = lint("let some_value: number = 1;");

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "camel-case");
    assert!(violations[0].message.contains("some_value"));
    assert_eq!(violations[0].position.line, 1);
}

#[test]
fn every_underscored_use_is_flagged() {
    // Declaration and use, two findings.
    let violations = lint("let my_var: number = 1;\nprintln(my_var);");
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[1].position.line, 2);
}

#[test]
fn simple_print_arguments_pass() {
    assert!(lint("println(x);").is_empty());
    assert!(lint("println(42);").is_empty());
    assert!(lint("println(\"hi\");").is_empty());
    assert!(lint("print(true);").is_empty());
}

#[test]
fn compound_print_arguments_are_flagged() {
    let violations = lint("println(a + b);");

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "print-argument");
    assert!(violations[0].message.contains("println"));
}

#[test]
fn print_is_checked_like_println() {
    assert_eq!(lint("print(1 + 2);").len(), 1);
}

#[test]
fn linting_never_stops_at_the_first_finding() {
    let src = "let bad_one: number = 1;\nprintln(bad_one + 1);\nlet bad_two: number = 2;";
    let violations = lint(src);

    // Line 2 carries two findings: the compound print argument and the
    // underscored identifier inside it.
    assert_eq!(violations.len(), 4);
    let lines: Vec<usize> = violations.iter().map(|v| v.position.line).collect();
    assert_eq!(lines, [1, 2, 2, 3]);
}

#[test]
fn violations_render_with_line_and_rule() {
    let violations = lint("println(a + b);");
    let text = violations[0].to_string();

    assert!(text.contains("line 1"), "got: {text}");
    assert!(text.contains("print-argument"), "got: {text}");
}

#[test]
fn linting_does_not_execute_anything() {
    // Undefined variables and division by zero are runtime concerns.
    assert!(lint("println(missing);").is_empty());
    assert!(lint("let x: number = 1;").is_empty());
}

#[test]
fn unlexable_source_is_a_parse_error() {
    assert!(lint_source("let x = @;").is_err());
}
