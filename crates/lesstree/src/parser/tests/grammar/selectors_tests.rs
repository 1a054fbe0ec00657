use lesstree_core::NodeKind;

use crate::parser::StartSymbol;
use crate::parser::tests::{dump, error_line, stylesheet, tree};

#[test]
fn compound_of_every_simple_selector() {
    insta::assert_snapshot!(dump(".a.b#c[x]:hover::before", StartSymbol::CompoundSelector), @r#"
    CompoundSelector 1:1..1:24
      Class 1:1..1:3
        Ident "a" 1:2..1:3
      Class 1:3..1:5
        Ident "b" 1:4..1:5
      Id 1:5..1:7
        Ident "c" 1:6..1:7
      AttributeSelector 1:7..1:10
        AttributeName 1:8..1:9
          Ident "x" 1:8..1:9
      PseudoClass 1:10..1:16
        Ident "hover" 1:11..1:16
      PseudoElement 1:16..1:24
        Ident "before" 1:18..1:24
    "#);
}

#[test]
fn combinators_between_compounds() {
    insta::assert_snapshot!(dump("a > .b ~ c + d", StartSymbol::Selector), @r#"
    Selector 1:1..1:15
      CompoundSelector 1:1..1:2
        TypeSelector 1:1..1:2
          Ident "a" 1:1..1:2
      Space " " 1:2..1:3
      Combinator ">" 1:3..1:4
      Space " " 1:4..1:5
      CompoundSelector 1:5..1:7
        Class 1:5..1:7
          Ident "b" 1:6..1:7
      Space " " 1:7..1:8
      Combinator "~" 1:8..1:9
      Space " " 1:9..1:10
      CompoundSelector 1:10..1:11
        TypeSelector 1:10..1:11
          Ident "c" 1:10..1:11
      Space " " 1:11..1:12
      Combinator "+" 1:12..1:13
      Space " " 1:13..1:14
      CompoundSelector 1:14..1:15
        TypeSelector 1:14..1:15
          Ident "d" 1:14..1:15
    "#);
}

#[test]
fn selector_may_start_with_combinator() {
    insta::assert_snapshot!(dump("> .a", StartSymbol::Selector), @r#"
    Selector 1:1..1:5
      Combinator ">" 1:1..1:2
      Space " " 1:2..1:3
      CompoundSelector 1:3..1:5
        Class 1:3..1:5
          Ident "a" 1:4..1:5
    "#);
}

#[test]
fn named_and_column_combinators() {
    insta::assert_snapshot!(dump("/deep/", StartSymbol::Combinator), @r#"Combinator "/deep/" 1:1..1:7"#);
    insta::assert_snapshot!(dump("||", StartSymbol::Combinator), @r#"Combinator "||" 1:1..1:3"#);
}

#[test]
fn selector_list_in_ruleset() {
    insta::assert_snapshot!(stylesheet("h1, h2 {}"), @r#"
    Stylesheet 1:1..1:10
      Ruleset 1:1..1:10
        Selector 1:1..1:3
          CompoundSelector 1:1..1:3
            TypeSelector 1:1..1:3
              Ident "h1" 1:1..1:3
        Delimiter "," 1:3..1:4
        Space " " 1:4..1:5
        Selector 1:5..1:7
          CompoundSelector 1:5..1:7
            TypeSelector 1:5..1:7
              Ident "h2" 1:5..1:7
        Space " " 1:7..1:8
        Block 1:8..1:10
    "#);
}

#[test]
fn namespaced_type_selectors() {
    insta::assert_snapshot!(dump("svg|rect", StartSymbol::TypeSelector), @r#"
    TypeSelector 1:1..1:9
      NamePrefix 1:1..1:5
        NamespacePrefix 1:1..1:4
          Ident "svg" 1:1..1:4
        NamespaceSeparator "|" 1:4..1:5
      Ident "rect" 1:5..1:9
    "#);
    insta::assert_snapshot!(dump("*|*", StartSymbol::TypeSelector), @r#"
    TypeSelector 1:1..1:4
      NamePrefix 1:1..1:3
        NamespacePrefix 1:1..1:2
          Ident "*" 1:1..1:2
        NamespaceSeparator "|" 1:2..1:3
      Ident "*" 1:3..1:4
    "#);
}

#[test]
fn attribute_dash_match_is_not_a_namespace() {
    insta::assert_snapshot!(dump("[lang|=en]", StartSymbol::AttributeSelector), @r#"
    AttributeSelector 1:1..1:11
      AttributeName 1:2..1:6
        Ident "lang" 1:2..1:6
      AttributeMatch "|=" 1:6..1:8
      AttributeValue 1:8..1:10
        Ident "en" 1:8..1:10
    "#);
}

#[test]
fn attribute_with_namespace_and_flags() {
    insta::assert_snapshot!(dump(r#"[ns|href^="http" i]"#, StartSymbol::AttributeSelector), @r#"
    AttributeSelector 1:1..1:20
      AttributeName 1:2..1:9
        NamePrefix 1:2..1:5
          NamespacePrefix 1:2..1:4
            Ident "ns" 1:2..1:4
          NamespaceSeparator "|" 1:4..1:5
        Ident "href" 1:5..1:9
      AttributeMatch "^=" 1:9..1:11
      AttributeValue 1:11..1:17
        String "\"http\"" 1:11..1:17
      Space " " 1:17..1:18
      AttributeFlags 1:18..1:19
        Ident "i" 1:18..1:19
    "#);
}

#[test]
fn attribute_needs_closing_bracket_right_after() {
    assert_eq!(error_line("[a=b c d]", StartSymbol::AttributeSelector), 1);
}

#[test]
fn nth_formula() {
    insta::assert_snapshot!(dump(":nth-child(2n + 1)", StartSymbol::PseudoClass), @r#"
    PseudoClass 1:1..1:19
      Ident "nth-child" 1:2..1:11
      Arguments 1:11..1:19
        Number "2" 1:12..1:13
        Ident "n" 1:13..1:14
        Space " " 1:14..1:15
        Unary "+" 1:15..1:16
        Space " " 1:16..1:17
        Number "1" 1:17..1:18
    "#);
}

#[test]
fn nth_shapes() {
    let kinds = |source: &str| -> Vec<NodeKind> {
        let node = tree(source, StartSymbol::PseudoClass);
        node.children()[1].children().iter().map(|n| n.kind()).collect()
    };
    assert_eq!(
        kinds(":nth-child(-n+3)"),
        [NodeKind::Unary, NodeKind::Ident, NodeKind::Unary, NodeKind::Number]
    );
    assert_eq!(kinds(":nth-of-type(2n)"), [NodeKind::Number, NodeKind::Ident]);
    assert_eq!(kinds(":nth-child( 3 )"), [NodeKind::Space, NodeKind::Number, NodeKind::Space]);
}

#[test]
fn pseudo_class_with_selector_list() {
    insta::assert_snapshot!(dump(":not(.a, .b)", StartSymbol::PseudoClass), @r#"
    PseudoClass 1:1..1:13
      Ident "not" 1:2..1:5
      Arguments 1:5..1:13
        Selector 1:6..1:8
          CompoundSelector 1:6..1:8
            Class 1:6..1:8
              Ident "a" 1:7..1:8
        Delimiter "," 1:8..1:9
        Space " " 1:9..1:10
        Selector 1:10..1:12
          CompoundSelector 1:10..1:12
            Class 1:10..1:12
              Ident "b" 1:11..1:12
    "#);
}

#[test]
fn unmatched_pseudo_arguments_fall_back_to_bare_name() {
    // `1px` fits no argument shape, so only `:foo` is a pseudo-class.
    assert_eq!(error_line(":foo(1px)", StartSymbol::PseudoClass), 1);
    let node = tree(":foo", StartSymbol::PseudoClass);
    assert_eq!(node.children().len(), 1);
}

#[test]
fn parent_selector_with_suffix() {
    insta::assert_snapshot!(dump("&-item .a", StartSymbol::Selector), @r#"
    Selector 1:1..1:10
      CompoundSelector 1:1..1:7
        ParentSelector "&" 1:1..1:2
        ParentSelectorExtension 1:2..1:7
          Ident "-item" 1:2..1:7
      Space " " 1:7..1:8
      CompoundSelector 1:8..1:10
        Class 1:8..1:10
          Ident "a" 1:9..1:10
    "#);
}

#[test]
fn interpolated_class_name() {
    insta::assert_snapshot!(dump(".@{name}", StartSymbol::Class), @r#"
    Class 1:1..1:9
      InterpolatedVariable 1:2..1:9
        Ident "name" 1:4..1:8
    "#);
}
