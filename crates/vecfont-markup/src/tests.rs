// this_file: crates/vecfont-markup/src/tests.rs

use super::*;

fn children(text: &str) -> Vec<MarkupNode> {
    parse(text).unwrap().children
}

#[test]
fn test_superscript_then_subscript() {
    let nodes = children("V^{2}_{out}");
    assert_eq!(
        nodes,
        vec![
            MarkupNode::text("V"),
            MarkupNode::superscript(vec![MarkupNode::text("2")]),
            MarkupNode::subscript(vec![MarkupNode::text("out")]),
        ]
    );
}

#[test]
fn test_escaped_dollar() {
    assert_eq!(children("$$5"), vec![MarkupNode::text("$5")]);
    assert_eq!(children("~~x"), vec![MarkupNode::text("~x")]);
}

#[test]
fn test_bare_specials_are_literal() {
    assert_eq!(children("a_b"), vec![MarkupNode::text("a_b")]);
    assert_eq!(children("2^8"), vec![MarkupNode::text("2^8")]);
    assert_eq!(children("cost $"), vec![MarkupNode::text("cost $")]);
    assert_eq!(children("~ alone"), vec![MarkupNode::text("~ alone")]);
    assert_eq!(children("{x}"), vec![MarkupNode::text("{x}")]);
}

#[test]
fn test_empty_input() {
    let root = parse("").unwrap();
    assert!(root.is_root());
    assert!(root.children.is_empty());
}

#[test]
fn test_variables() {
    assert_eq!(children("${REVISION}"), vec![MarkupNode::variable(None, "REVISION")]);
    assert_eq!(
        children("R1 ${R1:VALUE}"),
        vec![
            MarkupNode::text("R1 "),
            MarkupNode::variable(Some("R1"), "VALUE"),
        ]
    );
    // A namespace must look like an identifier; otherwise the colon is part of the name
    assert_eq!(children("${a.b:c}"), vec![MarkupNode::variable(None, "a.b:c")]);
}

#[test]
fn test_variable_inside_span() {
    let nodes = children("x^{${EXP}}");
    assert_eq!(nodes.len(), 2);
    assert!(nodes[1].is_superscript());
    assert!(nodes[1].children[0].is_variable());
}

#[test]
fn test_overbar_forms() {
    assert_eq!(
        children("~{RESET}"),
        vec![MarkupNode::overbar(vec![MarkupNode::text("RESET")])]
    );
    assert_eq!(
        children("~CS_{n} low"),
        vec![
            MarkupNode::overbar(vec![MarkupNode::text("CS")]),
            MarkupNode::subscript(vec![MarkupNode::text("n")]),
            MarkupNode::text(" low"),
        ]
    );
    assert_eq!(
        children("~RST_N"),
        vec![MarkupNode::overbar(vec![MarkupNode::text("RST_N")])]
    );
}

#[test]
fn test_nested_spans() {
    let nodes = children("e^{x_{i}^{2}}");
    let sup = &nodes[1];
    assert!(sup.is_superscript());
    assert_eq!(sup.children[0], MarkupNode::text("x"));
    assert!(sup.children[1].is_subscript());
    assert!(sup.children[2].is_superscript());
}

#[test]
fn test_brace_group_inside_span() {
    let nodes = children("^{f(x{1})}");
    assert_eq!(
        nodes,
        vec![MarkupNode::superscript(vec![MarkupNode::text("f(x{1})")])]
    );
}

#[test]
fn test_unterminated_span_reports_start() {
    let err = parse("ab^{cd").unwrap_err();
    assert_eq!(err.offset, 2);
    assert_eq!((err.line, err.column), (1, 3));
    assert_eq!(err.to_string(), "1:3: unterminated span");
}

#[test]
fn test_error_position_on_second_line() {
    let err = parse("first\nx_{y").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 2);
}

#[test]
fn test_variable_errors() {
    assert_eq!(parse("${}").unwrap_err().message, "empty variable name");
    assert_eq!(parse("${ns:}").unwrap_err().message, "empty variable name");
    assert_eq!(
        parse("${abc").unwrap_err().message,
        "unterminated variable reference"
    );
    let err = parse("${a{b}").unwrap_err();
    assert_eq!(err.offset, 3);
}

#[test]
fn test_error_converts_into_vecfont_error() {
    let err: vecfont_core::VecfontError = parse("_{").unwrap_err().into();
    assert!(err.to_string().contains("unterminated span"));
}

#[test]
fn test_plain_text() {
    let root = parse("V^{2}_{${ns:OUT}} ~{EN}").unwrap();
    assert_eq!(root.plain_text(), "V2${ns:OUT} EN");
}

#[test]
fn test_display_tree() {
    let root = parse("V^{2}").unwrap();
    assert_eq!(
        root.to_string(),
        "root\n  text \"V\"\n  superscript\n    text \"2\"\n"
    );
}

#[test]
fn test_has_markup() {
    assert!(!has_markup(""));
    assert!(!has_markup("plain text"));
    assert!(!has_markup("a_b"));
    assert!(has_markup("V^{2}"));
    assert!(has_markup("$$5"));
    assert!(has_markup("${X}"));
    assert!(has_markup("broken_{"));
}

#[test]
fn test_escape() {
    assert_eq!(escape("50$ ~ok"), "50$$ ~~ok");
    assert_eq!(parse(&escape("${X}")).unwrap().plain_text(), "${X}");
    assert!(!parse(&escape("~{A}")).unwrap().has_spans());
}

#[test]
fn test_expand_variables() {
    let expanded = expand_variables("${A} ${ns:B} ${C} $$5 ${open", |ns, name| {
        match (ns, name) {
            (None, "A") => Some("1".to_string()),
            (Some("ns"), "B") => Some("2".to_string()),
            _ => None,
        }
    });
    assert_eq!(expanded, "1 2 ${C} $$5 ${open");
}

#[test]
fn test_expand_keeps_other_markup() {
    let expanded = expand_variables("V_{${SUFFIX}}", |_, _| Some("out".to_string()));
    assert_eq!(expanded, "V_{out}");
    assert!(parse(&expanded).unwrap().children[1].is_subscript());
}
