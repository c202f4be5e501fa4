//! Node classification
//!
//! Maps tree-sitter node kinds to short CSS class codes. The codes follow the
//! Pygments/Chroma convention so existing stylesheets apply unchanged.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Short class code attached to a `<span>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleClass(&'static str);

impl StyleClass {
    pub const COMMENT: StyleClass = StyleClass("c");
    pub const COMMENT_SINGLE: StyleClass = StyleClass("c1");
    pub const COMMENT_MULTILINE: StyleClass = StyleClass("cm");
    pub const COMMENT_PREPROC: StyleClass = StyleClass("cp");
    pub const STRING: StyleClass = StyleClass("s");
    pub const STRING_CHAR: StyleClass = StyleClass("s1");
    pub const NUMBER: StyleClass = StyleClass("m");
    pub const NUMBER_INTEGER: StyleClass = StyleClass("mi");
    pub const NUMBER_FLOAT: StyleClass = StyleClass("mf");
    pub const KEYWORD: StyleClass = StyleClass("k");
    pub const KEYWORD_NAMESPACE: StyleClass = StyleClass("kn");
    pub const KEYWORD_CONSTANT: StyleClass = StyleClass("kc");
    pub const KEYWORD_TYPE: StyleClass = StyleClass("kt");
    pub const NAME: StyleClass = StyleClass("n");
    pub const NAME_FUNCTION: StyleClass = StyleClass("nf");
    pub const NAME_DECORATOR: StyleClass = StyleClass("nd");
    pub const OPERATOR: StyleClass = StyleClass("o");
    pub const PUNCTUATION: StyleClass = StyleClass("p");
    pub const ERROR: StyleClass = StyleClass("err");

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Exact node kind → class table
pub const CLASS_TABLE: &[(&str, StyleClass)] = &[
    // Comments
    ("comment", StyleClass::COMMENT),
    ("line_comment", StyleClass::COMMENT_SINGLE),
    ("block_comment", StyleClass::COMMENT_MULTILINE),
    // Strings
    ("string", StyleClass::STRING),
    ("string_literal", StyleClass::STRING),
    ("raw_string", StyleClass::STRING),
    ("template_string", StyleClass::STRING),
    ("char_literal", StyleClass::STRING_CHAR),
    // Numbers
    ("number", StyleClass::NUMBER),
    ("integer", StyleClass::NUMBER_INTEGER),
    ("float", StyleClass::NUMBER_FLOAT),
    ("decimal", StyleClass::NUMBER),
    // Keywords
    ("keyword", StyleClass::KEYWORD),
    ("if", StyleClass::KEYWORD),
    ("else", StyleClass::KEYWORD),
    ("for", StyleClass::KEYWORD),
    ("while", StyleClass::KEYWORD),
    ("function", StyleClass::NAME_FUNCTION),
    ("return", StyleClass::KEYWORD),
    ("import", StyleClass::KEYWORD_NAMESPACE),
    ("from", StyleClass::KEYWORD_NAMESPACE),
    ("class", StyleClass::KEYWORD),
    ("def", StyleClass::KEYWORD),
    ("var", StyleClass::KEYWORD),
    ("let", StyleClass::KEYWORD),
    ("const", StyleClass::KEYWORD),
    ("true", StyleClass::KEYWORD_CONSTANT),
    ("false", StyleClass::KEYWORD_CONSTANT),
    ("null", StyleClass::KEYWORD_CONSTANT),
    ("undefined", StyleClass::KEYWORD_CONSTANT),
    // Identifiers
    ("identifier", StyleClass::NAME),
    ("variable", StyleClass::NAME),
    ("property", StyleClass::NAME),
    ("field", StyleClass::NAME),
    ("method", StyleClass::NAME_FUNCTION),
    ("function_name", StyleClass::NAME_FUNCTION),
    ("function_declaration", StyleClass::NAME_FUNCTION),
    ("function_definition", StyleClass::NAME_FUNCTION),
    // Types
    ("type", StyleClass::KEYWORD_TYPE),
    ("type_identifier", StyleClass::KEYWORD_TYPE),
    ("primitive_type", StyleClass::KEYWORD_TYPE),
    // Operators
    ("operator", StyleClass::OPERATOR),
    ("assignment", StyleClass::OPERATOR),
    ("binary_operator", StyleClass::OPERATOR),
    ("unary_operator", StyleClass::OPERATOR),
    // Punctuation
    ("punctuation", StyleClass::PUNCTUATION),
    (";", StyleClass::PUNCTUATION),
    (",", StyleClass::PUNCTUATION),
    (".", StyleClass::PUNCTUATION),
    (":", StyleClass::PUNCTUATION),
    ("(", StyleClass::PUNCTUATION),
    (")", StyleClass::PUNCTUATION),
    ("{", StyleClass::PUNCTUATION),
    ("}", StyleClass::PUNCTUATION),
    ("[", StyleClass::PUNCTUATION),
    ("]", StyleClass::PUNCTUATION),
    // Attributes/annotations
    ("attribute", StyleClass::NAME_DECORATOR),
    ("annotation", StyleClass::NAME_DECORATOR),
    ("decorator", StyleClass::NAME_DECORATOR),
    // Preprocessor
    ("preproc", StyleClass::COMMENT_PREPROC),
    ("preprocessor", StyleClass::COMMENT_PREPROC),
    // Error recovery nodes
    ("ERROR", StyleClass::ERROR),
];

/// Composite kinds rendered as a single styled unit instead of being recursed
/// into. Grammars spell strings and comments inconsistently, so the list is
/// explicit rather than heuristic.
pub const ATOMIC_KINDS: &[(&str, StyleClass)] = &[
    ("string_literal", StyleClass::STRING),
    ("string", StyleClass::STRING),
    ("interpreted_string_literal", StyleClass::STRING),
    ("raw_string_literal", StyleClass::STRING),
    ("comment", StyleClass::COMMENT),
    ("line_comment", StyleClass::COMMENT),
    ("block_comment", StyleClass::COMMENT),
];

static CLASS_MAP: LazyLock<HashMap<&'static str, StyleClass>> =
    LazyLock::new(|| CLASS_TABLE.iter().copied().collect());

/// Classify a node kind.
///
/// Exact table lookup first, then substring heuristics in a fixed priority
/// order. `None` means the content renders unstyled.
pub fn classify(kind: &str) -> Option<StyleClass> {
    if let Some(class) = CLASS_MAP.get(kind) {
        return Some(*class);
    }

    if kind.contains("comment") {
        return Some(StyleClass::COMMENT);
    }
    if kind.contains("string") {
        return Some(StyleClass::STRING);
    }
    if kind.contains("number") || kind.contains("literal") {
        return Some(StyleClass::NUMBER);
    }
    if kind.contains("keyword") {
        return Some(StyleClass::KEYWORD);
    }
    if kind.contains("type") {
        return Some(StyleClass::KEYWORD_TYPE);
    }
    if kind.contains("function") && !kind.contains("call") {
        return Some(StyleClass::NAME_FUNCTION);
    }

    None
}

/// Class for a composite kind that must not be recursed into, if any
pub fn atomic_class(kind: &str) -> Option<StyleClass> {
    ATOMIC_KINDS
        .iter()
        .find(|(atomic, _)| *atomic == kind)
        .map(|(_, class)| *class)
}
