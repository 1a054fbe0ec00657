use lesstree_core::NodeKind;

use crate::parser::StartSymbol;
use crate::parser::tests::{stylesheet, tree};

#[test]
fn media_with_rulesets() {
    insta::assert_snapshot!(stylesheet("@media (min-width: 1px) { .a { color: red; } }"), @r#"
    Stylesheet 1:1..1:47
      AtRule 1:1..1:47
        AtKeyword 1:1..1:7
          Ident "media" 1:2..1:7
        Space " " 1:7..1:8
        Parentheses 1:8..1:24
          Ident "min-width" 1:9..1:18
          Operator ":" 1:18..1:19
          Space " " 1:19..1:20
          Dimension 1:20..1:23
            Number "1" 1:20..1:21
            Ident "px" 1:21..1:23
        Space " " 1:24..1:25
        Block 1:25..1:47
          Space " " 1:26..1:27
          Ruleset 1:27..1:45
            Selector 1:27..1:29
              CompoundSelector 1:27..1:29
                Class 1:27..1:29
                  Ident "a" 1:28..1:29
            Space " " 1:29..1:30
            Block 1:30..1:45
              Space " " 1:31..1:32
              Declaration 1:32..1:42
                Property 1:32..1:37
                  Ident "color" 1:32..1:37
                PropertyDelimiter ":" 1:37..1:38
                Space " " 1:38..1:39
                Value 1:39..1:42
                  Ident "red" 1:39..1:42
              DeclarationDelimiter ";" 1:42..1:43
              Space " " 1:43..1:44
          Space " " 1:45..1:46
    "#);
}

#[test]
fn font_face_with_declarations() {
    insta::assert_snapshot!(stylesheet("@font-face { font-family: x; }"), @r#"
    Stylesheet 1:1..1:31
      AtRule 1:1..1:31
        AtKeyword 1:1..1:11
          Ident "font-face" 1:2..1:11
        Space " " 1:11..1:12
        Block 1:12..1:31
          Space " " 1:13..1:14
          Declaration 1:14..1:28
            Property 1:14..1:25
              Ident "font-family" 1:14..1:25
            PropertyDelimiter ":" 1:25..1:26
            Space " " 1:26..1:27
            Value 1:27..1:28
              Ident "x" 1:27..1:28
          DeclarationDelimiter ";" 1:28..1:29
          Space " " 1:29..1:30
    "#);
}

#[test]
fn bare_import() {
    insta::assert_snapshot!(stylesheet(r#"@import "a.less";"#), @r#"
    Stylesheet 1:1..1:18
      AtRule 1:1..1:17
        AtKeyword 1:1..1:8
          Ident "import" 1:2..1:8
        Space " " 1:8..1:9
        String "\"a.less\"" 1:9..1:17
      DeclarationDelimiter ";" 1:17..1:18
    "#);
}

#[test]
fn keyframes() {
    insta::assert_snapshot!(stylesheet("@keyframes fade { from {} 50%, to {} }"), @r#"
    Stylesheet 1:1..1:39
      AtRule 1:1..1:39
        AtKeyword 1:1..1:11
          Ident "keyframes" 1:2..1:11
        Space " " 1:11..1:12
        Ident "fade" 1:12..1:16
        Space " " 1:16..1:17
        Block 1:17..1:39
          Space " " 1:18..1:19
          Ruleset 1:19..1:26
            Selector 1:19..1:23
              KeyframesSelector 1:19..1:23
                Ident "from" 1:19..1:23
            Space " " 1:23..1:24
            Block 1:24..1:26
          Space " " 1:26..1:27
          Ruleset 1:27..1:37
            Selector 1:27..1:30
              KeyframesSelector 1:27..1:30
                Percentage 1:27..1:30
                  Number "50" 1:27..1:29
            Delimiter "," 1:30..1:31
            Space " " 1:31..1:32
            Selector 1:32..1:34
              KeyframesSelector 1:32..1:34
                Ident "to" 1:32..1:34
            Space " " 1:34..1:35
            Block 1:35..1:37
          Space " " 1:37..1:38
    "#);
}

#[test]
fn vendor_keyframes() {
    let rule = tree("@-webkit-keyframes x { to {} }", StartSymbol::AtRule);
    let kinds: Vec<_> = rule.children().iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        [
            NodeKind::AtKeyword,
            NodeKind::Space,
            NodeKind::Ident,
            NodeKind::Space,
            NodeKind::Block,
        ]
    );
    assert_eq!(rule.children()[0].children()[0].text(), Some("-webkit-keyframes"));
}

#[test]
fn media_with_declarations() {
    let rule = tree("@media print { color: red; }", StartSymbol::AtRule);
    let block = rule.children().last().map(|n| n.kind());
    assert_eq!(block, Some(NodeKind::Block));
    let inner: Vec<_> = rule.children()[4].children().iter().map(|n| n.kind()).collect();
    assert_eq!(
        inner,
        [
            NodeKind::Space,
            NodeKind::Declaration,
            NodeKind::DeclarationDelimiter,
            NodeKind::Space,
        ]
    );
}

#[test]
fn nested_media_in_ruleset() {
    let rule = tree(".a { @media print { .b {} } }", StartSymbol::Ruleset);
    let block = &rule.children()[2];
    assert_eq!(block.kind(), NodeKind::Block);
    assert_eq!(block.children()[1].kind(), NodeKind::AtRule);
}
