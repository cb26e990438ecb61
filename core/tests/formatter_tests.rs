use dartstrip::process;

fn strip(source: &str) -> String {
    process(source).output
}

#[test]
fn blank_between_statements_kept() {
    let source = "a;\n\nb;\n";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn blank_after_open_brace_dropped() {
    assert_eq!(strip("void f() {\n\n  a;\n}\n"), "void f() {\n  a;\n}\n");
}

#[test]
fn blank_before_close_brace_dropped() {
    assert_eq!(strip("void f() {\n  a;\n\n}\n"), "void f() {\n  a;\n}\n");
}

#[test]
fn method_chain_blank_dropped() {
    assert_eq!(
        strip("final x = foo()\n\n    .bar();\n"),
        "final x = foo()\n    .bar();\n"
    );
}

#[test]
fn method_chain_stays_adjacent_after_comment_removal() {
    assert_eq!(
        strip("final x = foo()\n    // step\n    .bar();\n"),
        "final x = foo()\n    .bar();\n"
    );
}

#[test]
fn blank_runs_collapse_to_one() {
    assert_eq!(strip("a;\n\n\n\nb;\n"), "a;\n\nb;\n");
}

#[test]
fn leading_and_trailing_blanks_dropped() {
    assert_eq!(strip("\n\na;\n\n\n"), "a;\n");
}

#[test]
fn blank_survives_where_comment_line_vanished() {
    assert_eq!(strip("a;\n// c\n\nb;\n"), "a;\n\nb;\n");
}

#[test]
fn comment_line_inside_body_leaves_no_gap() {
    assert_eq!(strip("void f() {\n  // c\n  a;\n}\n"), "void f() {\n  a;\n}\n");
}

#[test]
fn multiline_string_blank_lines_untouched() {
    let source = "var s = '''\nline1\n\nline2\n''';\n";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn multiline_string_brace_lines_untouched() {
    // Lines that look brace-adjacent but live inside a string body are
    // string content, not structure.
    let source = "var s = '''\n{\n\n}\n''';\n";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn indentation_never_rewritten() {
    let source = "class A {\n  void f() {\n      deep();\n  }\n}\n";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn no_trailing_newline_preserved() {
    assert_eq!(strip("a; // c"), "a;");
}
