//! Start symbols: the productions a caller may parse a token stream as.

use std::fmt;
use std::str::FromStr;

use lesstree_core::Node;

use super::Parser;
use crate::{Error, Result};

macro_rules! define_start_symbols {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                names: [$($alias:literal),* $(,)?],
                scan: $scan:ident,
                build: $build:ident $($fallible:tt)?
            }
        ),* $(,)?
    ) => {
        /// Entry production of a parse. The returned node has the kind of
        /// the same name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StartSymbol {
            $($variant,)*
        }

        impl StartSymbol {
            pub const ALL: &'static [StartSymbol] = &[$(StartSymbol::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(StartSymbol::$variant => $name,)*
                }
            }
        }

        impl FromStr for StartSymbol {
            type Err = Error;

            /// Accepts the canonical name and the short tooling aliases,
            /// ignoring ASCII case.
            fn from_str(s: &str) -> Result<Self> {
                match s.to_ascii_lowercase().as_str() {
                    $($($alias)|* => Ok(StartSymbol::$variant),)*
                    _ => Err(Error::UnknownStartSymbol(s.to_owned())),
                }
            }
        }

        impl Parser<'_, '_> {
            /// Length the production for `start` covers from token `i`.
            pub(super) fn recognize(&mut self, start: StartSymbol, i: usize) -> usize {
                match start {
                    $(StartSymbol::$variant => self.$scan(i),)*
                }
            }

            pub(super) fn build(&mut self, start: StartSymbol) -> Result<Node> {
                match start {
                    $(StartSymbol::$variant => Ok(self.$build() $($fallible)?),)*
                }
            }
        }
    };
}

define_start_symbols! {
    Arguments => {
        name: "arguments",
        names: ["arguments"],
        scan: scan_arguments,
        build: parse_arguments?
    },
    AtKeyword => {
        name: "atkeyword",
        names: ["atkeyword"],
        scan: scan_at_keyword,
        build: parse_at_keyword
    },
    AtRule => {
        name: "atrule",
        names: ["atrule"],
        scan: scan_at_rule,
        build: parse_at_rule?
    },
    AttributeSelector => {
        name: "attributeSelector",
        names: ["attributeselector", "attrib"],
        scan: scan_attribute_selector,
        build: parse_attribute_selector
    },
    Block => {
        name: "block",
        names: ["block"],
        scan: scan_block,
        build: parse_block?
    },
    Brackets => {
        name: "brackets",
        names: ["brackets", "braces"],
        scan: scan_brackets,
        build: parse_brackets?
    },
    Class => {
        name: "class",
        names: ["class"],
        scan: scan_class,
        build: parse_class
    },
    Color => {
        name: "color",
        names: ["color", "vhash"],
        scan: scan_color,
        build: parse_color
    },
    Combinator => {
        name: "combinator",
        names: ["combinator"],
        scan: scan_combinator,
        build: parse_combinator
    },
    CompoundSelector => {
        name: "compoundSelector",
        names: ["compoundselector"],
        scan: scan_compound,
        build: parse_compound
    },
    Condition => {
        name: "condition",
        names: ["condition"],
        scan: scan_condition,
        build: parse_condition?
    },
    Declaration => {
        name: "declaration",
        names: ["declaration"],
        scan: scan_declaration,
        build: parse_declaration?
    },
    DeclarationDelimiter => {
        name: "declDelim",
        names: ["decldelim", "declarationdelimiter"],
        scan: scan_decl_delim,
        build: parse_decl_delim
    },
    Delimiter => {
        name: "delim",
        names: ["delim", "delimiter"],
        scan: scan_delim,
        build: parse_delim
    },
    Dimension => {
        name: "dimension",
        names: ["dimension"],
        scan: scan_dimension,
        build: parse_dimension
    },
    EscapedString => {
        name: "escapedString",
        names: ["escapedstring"],
        scan: scan_escaped_string,
        build: parse_escaped_string
    },
    Expression => {
        name: "expression",
        names: ["expression"],
        scan: scan_expression,
        build: parse_expression
    },
    Extend => {
        name: "extend",
        names: ["extend"],
        scan: scan_extend,
        build: parse_extend?
    },
    Function => {
        name: "function",
        names: ["function"],
        scan: scan_function,
        build: parse_function?
    },
    Id => {
        name: "id",
        names: ["id", "shash"],
        scan: scan_id,
        build: parse_id
    },
    Ident => {
        name: "ident",
        names: ["ident"],
        scan: scan_ident,
        build: parse_ident
    },
    Important => {
        name: "important",
        names: ["important"],
        scan: scan_important,
        build: parse_important
    },
    Include => {
        name: "include",
        names: ["include"],
        scan: scan_include,
        build: parse_include?
    },
    InterpolatedVariable => {
        name: "interpolatedVariable",
        names: ["interpolatedvariable"],
        scan: scan_interpolated_variable,
        build: parse_interpolated_variable
    },
    Mixin => {
        name: "mixin",
        names: ["mixin"],
        scan: scan_mixin,
        build: parse_mixin?
    },
    MultilineComment => {
        name: "multilineComment",
        names: ["multilinecomment", "commentml"],
        scan: scan_comment_ml,
        build: parse_comment_ml
    },
    Namespace => {
        name: "namespace",
        names: ["namespace"],
        scan: scan_namespace,
        build: parse_namespace
    },
    Number => {
        name: "number",
        names: ["number"],
        scan: scan_number,
        build: parse_number
    },
    Operator => {
        name: "operator",
        names: ["operator"],
        scan: scan_operator,
        build: parse_operator
    },
    Parentheses => {
        name: "parentheses",
        names: ["parentheses"],
        scan: scan_parentheses,
        build: parse_parentheses?
    },
    ParentSelector => {
        name: "parentSelector",
        names: ["parentselector"],
        scan: scan_parent_selector,
        build: parse_parent_selector
    },
    Percentage => {
        name: "percentage",
        names: ["percentage"],
        scan: scan_percentage,
        build: parse_percentage
    },
    Progid => {
        name: "progid",
        names: ["progid"],
        scan: scan_progid,
        build: parse_progid
    },
    Property => {
        name: "property",
        names: ["property"],
        scan: scan_property,
        build: parse_property
    },
    PropertyDelimiter => {
        name: "propertyDelim",
        names: ["propertydelim", "propertydelimiter"],
        scan: scan_property_delim,
        build: parse_property_delim
    },
    PseudoClass => {
        name: "pseudoClass",
        names: ["pseudoclass", "pseudoc"],
        scan: scan_pseudo_class,
        build: parse_pseudo_class
    },
    PseudoElement => {
        name: "pseudoElement",
        names: ["pseudoelement", "pseudoe"],
        scan: scan_pseudo_element,
        build: parse_pseudo_element
    },
    Ruleset => {
        name: "ruleset",
        names: ["ruleset"],
        scan: scan_ruleset,
        build: parse_ruleset?
    },
    Selector => {
        name: "selector",
        names: ["selector"],
        scan: scan_selector,
        build: parse_selector
    },
    SinglelineComment => {
        name: "singlelineComment",
        names: ["singlelinecomment", "commentsl"],
        scan: scan_comment_sl,
        build: parse_comment_sl
    },
    Space => {
        name: "space",
        names: ["space", "s"],
        scan: scan_s,
        build: parse_s
    },
    String => {
        name: "string",
        names: ["string"],
        scan: scan_string,
        build: parse_string
    },
    Stylesheet => {
        name: "stylesheet",
        names: ["stylesheet"],
        scan: scan_stylesheet,
        build: parse_stylesheet?
    },
    TypeSelector => {
        name: "typeSelector",
        names: ["typeselector"],
        scan: scan_type_selector,
        build: parse_type_selector
    },
    Unary => {
        name: "unary",
        names: ["unary"],
        scan: scan_unary,
        build: parse_unary
    },
    Uri => {
        name: "uri",
        names: ["uri", "url"],
        scan: scan_uri,
        build: parse_uri?
    },
    Value => {
        name: "value",
        names: ["value"],
        scan: scan_value,
        build: parse_value?
    },
    Variable => {
        name: "variable",
        names: ["variable"],
        scan: scan_variable,
        build: parse_variable
    },
    VariablesList => {
        name: "variablesList",
        names: ["variableslist"],
        scan: scan_variables_list,
        build: parse_variables_list
    },
}

impl fmt::Display for StartSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
