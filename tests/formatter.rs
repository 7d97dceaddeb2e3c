//! Tests for canonical formatting and its idempotence.

use quill::{
    format_source,
    formatter::{FormatConfig, Formatter},
    parse_source, run_program_with_output,
};

fn format(src: &str) -> String {
    format_source(src).unwrap_or_else(|e| panic!("Format failed: {e}"))
}

#[test]
fn declarations_are_canonicalized() {
    assert_eq!(format("let   x:number=42;"), "let x: number = 42;\n");
    assert_eq!(
        format("const s :string = 'hi' ;"),
        "const s: string = \"hi\";\n"
    );
}

#[test]
fn assignations_are_canonicalized() {
    assert_eq!(format("x=1;"), "x = 1;\n");
    assert_eq!(format("x = a+b;"), "x = a + b;\n");
}

#[test]
fn print_calls_are_canonicalized() {
    assert_eq!(format("println( x );"), "println(x);\n");
    assert_eq!(format("print(1+2);"), "print(1 + 2);\n");
}

#[test]
fn string_literals_keep_their_quotes() {
    assert_eq!(format("println('hi');"), "println(\"hi\");\n");
    assert_eq!(format("println(\"hi\");"), "println(\"hi\");\n");
}

#[test]
fn nested_expressions_are_parenthesized() {
    // The rendered text re-parses to the same tree.
    assert_eq!(format("println(2+3*4);"), "println(2 + (3 * 4));\n");
    assert_eq!(format("println((10-3)-2);"), "println((10 - 3) - 2);\n");
}

#[test]
fn conditionals_are_indented() {
    let expected = "\
if (x > 3) {
    println(\"yes\");
} else {
    println(\"no\");
}
";
    assert_eq!(
        format("if(x>3){println('yes');}else{println('no');}"),
        expected
    );
}

#[test]
fn empty_else_branches_are_omitted() {
    assert_eq!(
        format("if (true) { println(1); }"),
        "if (true) {\n    println(1);\n}\n"
    );
}

#[test]
fn nested_blocks_indent_once_per_level() {
    let expected = "\
if (a > 1) {
    if (b > 2) {
        println(c);
    }
}
";
    assert_eq!(format("if(a>1){if(b>2){println(c);}}"), expected);
}

#[test]
fn statements_are_joined_by_newlines() {
    assert_eq!(
        format("let x: number = 1; x = 2; println(x);"),
        "let x: number = 1;\nx = 2;\nprintln(x);\n"
    );
}

#[test]
fn formatting_is_idempotent() {
    let sources = [
        "let   x:number=42;println(x+1);",
        "if(x>3){println('yes');}else{x=x+1;println(x);}",
        "const s:string='a';println(s+'b');",
        "println(2+3*4);",
    ];

    for src in sources {
        let once = format(src);
        assert_eq!(format(&once), once, "not idempotent for: {src}");
    }
}

#[test]
fn formatting_preserves_meaning() {
    let src = "let x: number = 10; if (x > 3) { println(x - 1 - 2); }";
    let formatted = format(src);

    let run = |s: &str| run_program_with_output(s, Vec::new()).unwrap();
    assert_eq!(run(&formatted), run(src));
}

#[test]
fn configuration_controls_spacing() {
    let config = FormatConfig {
        space_around_operators: false,
        space_before_colon: true,
        space_after_colon: true,
        indent: 2,
    };
    let nodes = parse_source("let x: number = 1; x = 1 + 2;").unwrap();

    assert_eq!(
        Formatter::with_config(config).format(&nodes),
        "let x : number=1;\nx=1+2;\n"
    );
}

#[test]
fn unparsable_source_is_not_formatted() {
    assert!(format_source("let x: = 1;").is_err());
}
