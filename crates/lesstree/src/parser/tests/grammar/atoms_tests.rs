use crate::parser::StartSymbol;
use crate::parser::tests::{dump, error_line, tree};

#[test]
fn number_shapes() {
    for source in ["10", "10.", ".5", "10.25"] {
        let node = tree(source, StartSymbol::Number);
        assert_eq!(node.text(), Some(source));
    }
}

#[test]
fn dimension() {
    insta::assert_snapshot!(dump("1.5em", StartSymbol::Dimension), @r#"
    Dimension 1:1..1:6
      Number "1.5" 1:1..1:4
      Ident "em" 1:4..1:6
    "#);
}

#[test]
fn dimension_rejects_spacing_before_unit() {
    assert_eq!(error_line("10 px", StartSymbol::Dimension), 1);
}

#[test]
fn percentage() {
    insta::assert_snapshot!(dump("50%", StartSymbol::Percentage), @r#"
    Percentage 1:1..1:4
      Number "50" 1:1..1:3
    "#);
}

#[test]
fn strings_keep_quotes() {
    insta::assert_snapshot!(dump(r#""a b""#, StartSymbol::String), @r#"String "\"a b\"" 1:1..1:6"#);
    insta::assert_snapshot!(dump("'a'", StartSymbol::String), @r#"String "'a'" 1:1..1:4"#);
}

#[test]
fn escaped_string_drops_tilde() {
    insta::assert_snapshot!(
        dump(r#"~"calc(1)""#, StartSymbol::EscapedString),
        @r#"EscapedString "\"calc(1)\"" 1:1..1:11"#
    );
}

#[test]
fn important_keeps_inner_spacing() {
    insta::assert_snapshot!(dump("!important", StartSymbol::Important), @r#"Important "!important" 1:1..1:11"#);
    insta::assert_snapshot!(dump("! important", StartSymbol::Important), @r#"Important "! important" 1:1..1:12"#);
}

#[test]
fn color_with_leading_digit() {
    insta::assert_snapshot!(dump("#fff", StartSymbol::Color), @r#"Color "fff" 1:1..1:5"#);
    insta::assert_snapshot!(dump("#1a2b3c", StartSymbol::Color), @r#"Color "1a2b3c" 1:1..1:8"#);
}

#[test]
fn progid_is_verbatim() {
    let source = "progid:DXImageTransform.Microsoft.gradient(startColorstr='#fff')";
    let node = tree(source, StartSymbol::Progid);
    assert_eq!(node.text(), Some(source));
    assert_eq!(node.end().column, 65);
}

#[test]
fn quoted_uri() {
    insta::assert_snapshot!(dump(r#"url( "a.png" )"#, StartSymbol::Uri), @r#"
    Uri 1:1..1:15
      Space " " 1:5..1:6
      String "\"a.png\"" 1:6..1:13
      Space " " 1:13..1:14
    "#);
}

#[test]
fn raw_uri() {
    insta::assert_snapshot!(dump("url(img/a.png)", StartSymbol::Uri), @r#"
    Uri 1:1..1:15
      Raw "img/a.png" 1:5..1:14
    "#);
}

#[test]
fn raw_uri_with_scheme() {
    insta::assert_snapshot!(dump("url(http://x.com/a.png)", StartSymbol::Uri), @r#"
    Uri 1:1..1:24
      Raw "http://x.com/a.png" 1:5..1:23
    "#);
}

#[test]
fn raw_uri_must_reach_the_parenthesis() {
    assert_eq!(error_line("url(a b)", StartSymbol::Uri), 1);
}

#[test]
fn expression_body_is_raw() {
    insta::assert_snapshot!(
        dump("expression(a + b)", StartSymbol::Expression),
        @r#"Expression "a + b" 1:1..1:18"#
    );
}

#[test]
fn nested_variable() {
    insta::assert_snapshot!(dump("@@name", StartSymbol::Variable), @r#"
    Variable 1:1..1:7
      Variable 1:2..1:7
        Ident "name" 1:3..1:7
    "#);
    assert_eq!(error_line("@@@name", StartSymbol::Variable), 1);
}

#[test]
fn variables_list_needs_three_dots() {
    insta::assert_snapshot!(dump("@rest...", StartSymbol::VariablesList), @r#"
    VariablesList 1:1..1:9
      Variable 1:1..1:6
        Ident "rest" 1:2..1:6
    "#);
    assert_eq!(error_line("@rest..", StartSymbol::VariablesList), 1);
    assert_eq!(error_line("@rest....", StartSymbol::VariablesList), 1);
}

#[test]
fn interpolated_variable() {
    insta::assert_snapshot!(dump("@{name}", StartSymbol::InterpolatedVariable), @r#"
    InterpolatedVariable 1:1..1:8
      Ident "name" 1:3..1:7
    "#);
}

#[test]
fn hyphenated_ident() {
    insta::assert_snapshot!(dump("-moz-box", StartSymbol::Ident), @r#"Ident "-moz-box" 1:1..1:9"#);
    assert_eq!(error_line("--", StartSymbol::Ident), 1);
}

#[test]
fn comments_strip_markers() {
    insta::assert_snapshot!(
        dump("/* a\n b */", StartSymbol::MultilineComment),
        @r#"MultilineComment " a\n b " 1:1..2:6"#
    );
    insta::assert_snapshot!(
        dump("// note", StartSymbol::SinglelineComment),
        @r#"SinglelineComment " note" 1:1..1:8"#
    );
}

#[test]
fn whitespace_run_is_one_space_node() {
    insta::assert_snapshot!(dump("  \t\n ", StartSymbol::Space), @r#"Space "  \t\n " 1:1..2:2"#);
}
