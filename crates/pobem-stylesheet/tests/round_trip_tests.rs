//! Parse/print round-trip tests.

use pobem_stylesheet::{Node, Stylesheet};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

const SAMPLE: &str = r#"@charset "utf-8";

/* Header block */
@block(header) {
    color: #333;

    elem(logo):hover {
        opacity: .8 !important
    }
}

@media screen and (max-width: 600px) {
    block(menu).mod(mode -> compact) > li + li { display:none; }
}

a[href^='http'] , block('link'):not(.x){}
"#;

#[test]
fn test_sample_round_trip() {
    init_tracing();
    let sheet = Stylesheet::parse(SAMPLE).expect("sample should parse");
    assert_eq!(sheet.to_string(), SAMPLE);
}

#[test]
fn test_sample_structure() {
    init_tracing();
    let sheet = Stylesheet::parse(SAMPLE).expect("sample should parse");

    let kinds: Vec<&str> = sheet
        .iter()
        .map(|node| match node {
            Node::Rule(_) => "rule",
            Node::AtRule(_) => "at-rule",
            Node::Declaration(_) => "decl",
            Node::Comment(_) => "comment",
        })
        .collect();
    assert_eq!(kinds, ["at-rule", "comment", "at-rule", "at-rule", "rule"]);

    let Node::AtRule(header) = &sheet.nodes[2] else {
        panic!("expected @block");
    };
    assert_eq!(header.name, "block");
    assert_eq!(header.params, "(header)");
    assert_eq!(header.nodes.as_ref().map(Vec::len), Some(2));
}

#[test]
fn test_edited_selectors_keep_formatting() {
    init_tracing();
    let mut sheet = Stylesheet::parse("a , b {\n  top: 0;\n}\n").expect("should parse");

    sheet.walk_rules_mut(|rule| rule.selector = rule.selector.to_uppercase());

    assert_eq!(sheet.to_string(), "A , B {\n  top: 0;\n}\n");
}

#[test]
fn test_parse_error_reports_location() {
    init_tracing();
    let err = Stylesheet::parse("a {\n  color\n}").expect_err("bare word should fail");

    let message = err.to_string();
    assert!(message.contains("line 2"), "unexpected message: {message}");
    assert!(message.contains("Unknown word 'color'"), "unexpected message: {message}");
}
