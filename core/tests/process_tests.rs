use dartstrip::process;

fn strip(source: &str) -> String {
    process(source).output
}

fn assert_idempotent(source: &str) {
    let once = process(source).output;
    let twice = process(&once).output;
    assert_eq!(twice, once, "second pass must be a no-op for {source:?}");
}

#[test]
fn removes_full_line_comment() {
    assert_eq!(strip("code1\n// c\ncode2"), "code1\ncode2");
}

#[test]
fn removes_doc_comment_lines() {
    assert_eq!(strip("/// a\n/// b\nclass A {}\n"), "class A {}\n");
}

#[test]
fn removes_trailing_comment_and_its_padding() {
    assert_eq!(strip("final x = 1; // note\n"), "final x = 1;\n");
}

#[test]
fn removes_nested_block_comment() {
    assert_eq!(strip("/* a /* b */ c */x"), "x");
}

#[test]
fn block_comment_inside_expression() {
    assert_eq!(strip("a(/*\n x\n*/ 1);\n"), "a( 1);\n");
}

#[test]
fn string_with_comment_markers_untouched() {
    let source = "var u = 'a // b /* c */';\n";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn raw_string_untouched() {
    let source = "r'a // b /* c */'";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn triple_quoted_string_untouched() {
    let source = "var s = '''\n// not a comment\n/* nor this */\n''';\n";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn comment_inside_interpolation_removed() {
    assert_eq!(strip("'${ // c\n f() }'"), "'${\n f() }'");
}

#[test]
fn empty_block_comment_hole_collapses() {
    assert_eq!(strip("'${/**/}'"), "'${}'");
}

#[test]
fn comment_in_string_in_hole_in_string() {
    assert_eq!(strip("'${'${/* c */x}'}'"), "'${'${x}'}'");
}

#[test]
fn comment_stripped_in_unclosed_hole() {
    assert_eq!(strip("'${ // c"), "'${");
}

#[test]
fn unterminated_block_comment_keeps_later_code() {
    assert_eq!(strip("/* never closed\ncode"), "code");
}

#[test]
fn unterminated_string_suppresses_comment_handling() {
    let source = "var s = 'abc\n// inside the string";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn url_in_code_survives() {
    let source = "x = a://b\ny";
    assert_eq!(strip(source), source);
}

#[test]
fn comment_free_input_is_preserved() {
    let source = "void main() {\n  print(1);\n}\n";
    let result = process(source);
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn comment_only_file_strips_to_nothing() {
    assert_eq!(strip("// a\n// b\n"), "");
}

#[test]
fn unicode_comments_removed_cleanly() {
    assert_eq!(
        strip("// コメント\nfinal s = '日本語'; // 注釈\n"),
        "final s = '日本語';\n"
    );
}

#[test]
fn empty_input() {
    let result = process("");
    assert_eq!(result.output, "");
    assert!(!result.changed);
}

#[test]
fn changed_flag_set_on_removal() {
    assert!(process("x; // y\n").changed);
}

#[test]
fn idempotent_on_varied_inputs() {
    assert_idempotent("code1\n// c\ncode2");
    assert_idempotent("/* a /* b */ c */x");
    assert_idempotent("'${ // c\n f() }'");
    assert_idempotent("var s = '''\na\n\nb\n''';\n");
    assert_idempotent("a;\n\n\n\nb;\n");
    assert_idempotent("/* never closed\ncode");
    assert_idempotent("void f() {\n\n  // gone\n  a;\n}\n");
}
