use lesstree_core::NodeKind;

use crate::parser::StartSymbol;
use crate::parser::tests::{dump, stylesheet, tree};

#[test]
fn extend_with_block() {
    insta::assert_snapshot!(stylesheet(".a:extend(.b) {}"), @r#"
    Stylesheet 1:1..1:17
      Extend 1:1..1:17
        Class 1:1..1:3
          Ident "a" 1:2..1:3
        PseudoClass 1:3..1:14
          Ident "extend" 1:4..1:10
          Arguments 1:10..1:14
            Selector 1:11..1:13
              CompoundSelector 1:11..1:13
                Class 1:11..1:13
                  Ident "b" 1:12..1:13
        Space " " 1:14..1:15
        Block 1:15..1:17
    "#);
}

#[test]
fn bare_extend_in_block() {
    let rule = tree(".a { &:extend(.c all); }", StartSymbol::Ruleset);
    let kinds: Vec<_> = rule.children()[2].children().iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        [
            NodeKind::Space,
            NodeKind::Extend,
            NodeKind::DeclarationDelimiter,
            NodeKind::Space,
        ]
    );
}

#[test]
fn variable_declaration() {
    insta::assert_snapshot!(stylesheet("@my-var: 10px;"), @r#"
    Stylesheet 1:1..1:15
      Declaration 1:1..1:14
        Property 1:1..1:8
          Variable 1:1..1:8
            Ident "my-var" 1:2..1:8
        PropertyDelimiter ":" 1:8..1:9
        Space " " 1:9..1:10
        Value 1:10..1:14
          Dimension 1:10..1:14
            Number "10" 1:10..1:12
            Ident "px" 1:12..1:14
      DeclarationDelimiter ";" 1:14..1:15
    "#);
}

#[test]
fn detached_ruleset() {
    let sheet = tree("@detached: { color: red; }", StartSymbol::Stylesheet);
    let declaration = &sheet.children()[0];
    assert_eq!(declaration.kind(), NodeKind::Declaration);
    let value = &declaration.children()[3];
    assert_eq!(value.kind(), NodeKind::Value);
    assert_eq!(value.children()[0].kind(), NodeKind::Block);
}

#[test]
fn guarded_mixin() {
    insta::assert_snapshot!(stylesheet(".m(@a) when (@a > 0) { width: @a }"), @r#"
    Stylesheet 1:1..1:35
      Mixin 1:1..1:35
        Class 1:1..1:3
          Ident "m" 1:2..1:3
        Arguments 1:3..1:7
          Variable 1:4..1:6
            Ident "a" 1:5..1:6
        Space " " 1:7..1:8
        Condition 1:8..1:22
          Ident "when" 1:8..1:12
          Space " " 1:12..1:13
          Parentheses 1:13..1:21
            Variable 1:14..1:16
              Ident "a" 1:15..1:16
            Space " " 1:16..1:17
            Operator ">" 1:17..1:18
            Space " " 1:18..1:19
            Number "0" 1:19..1:20
          Space " " 1:21..1:22
        Block 1:22..1:35
          Space " " 1:23..1:24
          Declaration 1:24..1:33
            Property 1:24..1:29
              Ident "width" 1:24..1:29
            PropertyDelimiter ":" 1:29..1:30
            Space " " 1:30..1:31
            Value 1:31..1:33
              Variable 1:31..1:33
                Ident "a" 1:32..1:33
          Space " " 1:33..1:34
    "#);
}

#[test]
fn includes_in_block() {
    insta::assert_snapshot!(stylesheet(".a { .m(1px) !important; .b; }"), @r#"
    Stylesheet 1:1..1:31
      Ruleset 1:1..1:31
        Selector 1:1..1:3
          CompoundSelector 1:1..1:3
            Class 1:1..1:3
              Ident "a" 1:2..1:3
        Space " " 1:3..1:4
        Block 1:4..1:31
          Space " " 1:5..1:6
          Include 1:6..1:24
            Class 1:6..1:8
              Ident "m" 1:7..1:8
            Arguments 1:8..1:13
              Dimension 1:9..1:12
                Number "1" 1:9..1:10
                Ident "px" 1:10..1:12
            Space " " 1:13..1:14
            Important "!important" 1:14..1:24
          DeclarationDelimiter ";" 1:24..1:25
          Space " " 1:25..1:26
          Include 1:26..1:28
            Class 1:26..1:28
              Ident "b" 1:27..1:28
          DeclarationDelimiter ";" 1:28..1:29
          Space " " 1:29..1:30
    "#);
}

#[test]
fn namespaced_include() {
    insta::assert_snapshot!(dump("#ns > .m()", StartSymbol::Include), @r#"
    Include 1:1..1:11
      Id 1:1..1:4
        Ident "ns" 1:2..1:4
      Space " " 1:4..1:5
      Operator ">" 1:5..1:6
      Space " " 1:6..1:7
      Class 1:7..1:9
        Ident "m" 1:8..1:9
      Arguments 1:9..1:11
    "#);
}

#[test]
fn guard_with_function_call() {
    let condition = tree("when (iscolor(@c))", StartSymbol::Condition);
    let group = &condition.children()[2];
    assert_eq!(group.kind(), NodeKind::Parentheses);
    assert_eq!(group.children()[0].kind(), NodeKind::Function);
}

#[test]
fn escaped_value() {
    let declaration = tree(r#"width: ~"calc(100% - 10px)""#, StartSymbol::Declaration);
    let value = &declaration.children()[3];
    assert_eq!(value.children()[0].kind(), NodeKind::EscapedString);
    assert_eq!(value.children()[0].text(), Some(r#""calc(100% - 10px)""#));
}
