use indoc::indoc;
use lesstree_core::NodeKind;

use crate::parser::StartSymbol;
use crate::parser::tests::{dump, stylesheet, tree};

fn kinds(node: &lesstree_core::Node) -> Vec<NodeKind> {
    node.children().iter().map(|n| n.kind()).collect()
}

#[test]
fn ruleset_with_declaration() {
    insta::assert_snapshot!(stylesheet(".a { color: red; }"), @r#"
    Stylesheet 1:1..1:19
      Ruleset 1:1..1:19
        Selector 1:1..1:3
          CompoundSelector 1:1..1:3
            Class 1:1..1:3
              Ident "a" 1:2..1:3
        Space " " 1:3..1:4
        Block 1:4..1:19
          Space " " 1:5..1:6
          Declaration 1:6..1:16
            Property 1:6..1:11
              Ident "color" 1:6..1:11
            PropertyDelimiter ":" 1:11..1:12
            Space " " 1:12..1:13
            Value 1:13..1:16
              Ident "red" 1:13..1:16
          DeclarationDelimiter ";" 1:16..1:17
          Space " " 1:17..1:18
    "#);
}

#[test]
fn compact_ruleset() {
    insta::assert_snapshot!(stylesheet(".a{color:red;}"), @r#"
    Stylesheet 1:1..1:15
      Ruleset 1:1..1:15
        Selector 1:1..1:3
          CompoundSelector 1:1..1:3
            Class 1:1..1:3
              Ident "a" 1:2..1:3
        Block 1:3..1:15
          Declaration 1:4..1:13
            Property 1:4..1:9
              Ident "color" 1:4..1:9
            PropertyDelimiter ":" 1:9..1:10
            Value 1:10..1:13
              Ident "red" 1:10..1:13
          DeclarationDelimiter ";" 1:13..1:14
    "#);
}

#[test]
fn nested_ruleset_and_comments() {
    let source = indoc! {"
        .a {
          // c
          color: red;
          .b { top: 0 }
        }
    "};

    insta::assert_snapshot!(stylesheet(source), @r#"
    Stylesheet 1:1..6:1
      Ruleset 1:1..5:2
        Selector 1:1..1:3
          CompoundSelector 1:1..1:3
            Class 1:1..1:3
              Ident "a" 1:2..1:3
        Space " " 1:3..1:4
        Block 1:4..5:2
          Space "\n  " 1:5..2:3
          SinglelineComment " c" 2:3..2:7
          Space "\n  " 2:7..3:3
          Declaration 3:3..3:13
            Property 3:3..3:8
              Ident "color" 3:3..3:8
            PropertyDelimiter ":" 3:8..3:9
            Space " " 3:9..3:10
            Value 3:10..3:13
              Ident "red" 3:10..3:13
          DeclarationDelimiter ";" 3:13..3:14
          Space "\n  " 3:14..4:3
          Ruleset 4:3..4:16
            Selector 4:3..4:5
              CompoundSelector 4:3..4:5
                Class 4:3..4:5
                  Ident "b" 4:4..4:5
            Space " " 4:5..4:6
            Block 4:6..4:16
              Space " " 4:7..4:8
              Declaration 4:8..4:14
                Property 4:8..4:11
                  Ident "top" 4:8..4:11
                PropertyDelimiter ":" 4:11..4:12
                Space " " 4:12..4:13
                Value 4:13..4:14
                  Number "0" 4:13..4:14
              Space " " 4:14..4:15
          Space "\n" 4:16..5:1
      Space "\n" 5:2..6:1
    "#);
}

#[test]
fn bare_delimiters_in_block() {
    let block = tree("{;;}", StartSymbol::Block);
    assert_eq!(
        kinds(&block),
        [NodeKind::DeclarationDelimiter, NodeKind::DeclarationDelimiter]
    );
}

#[test]
fn last_declaration_without_delimiter() {
    let block = tree("{ a: b; c: d }", StartSymbol::Block);
    assert_eq!(
        kinds(&block),
        [
            NodeKind::Space,
            NodeKind::Declaration,
            NodeKind::DeclarationDelimiter,
            NodeKind::Space,
            NodeKind::Declaration,
            NodeKind::Space,
        ]
    );
}

#[test]
fn empty_stylesheet() {
    insta::assert_snapshot!(stylesheet(""), @"Stylesheet 1:1..1:1");
}

#[test]
fn comment_only_stylesheet() {
    insta::assert_snapshot!(stylesheet("/* x */"), @r#"
    Stylesheet 1:1..1:8
      MultilineComment " x " 1:1..1:8
    "#);
}

#[test]
fn top_level_declaration() {
    let sheet = tree("color: red;", StartSymbol::Stylesheet);
    assert_eq!(
        kinds(&sheet),
        [NodeKind::Declaration, NodeKind::DeclarationDelimiter]
    );
}

#[test]
fn declaration_with_important() {
    insta::assert_snapshot!(dump("top: 0 !important", StartSymbol::Declaration), @r#"
    Declaration 1:1..1:18
      Property 1:1..1:4
        Ident "top" 1:1..1:4
      PropertyDelimiter ":" 1:4..1:5
      Space " " 1:5..1:6
      Value 1:6..1:18
        Number "0" 1:6..1:7
        Space " " 1:7..1:8
        Important "!important" 1:8..1:18
    "#);
}
