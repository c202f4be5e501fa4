//! Code block context
//!
//! Everything the document pipeline knows about one code block: its text,
//! declared language, fence options, wrapper attributes, and where it sits.

use std::fmt;

use crate::config::{HighlightOptions, OptionsMap};

/// Location of a code block in its document (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A `name="value"` pair rendered on the wrapper element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeblockContext {
    /// Source text inside the fence
    pub inner: String,
    /// Declared language, as written (e.g. "go", "Golang")
    pub kind: String,
    /// Highlighting options from the fence
    pub options: OptionsMap,
    pub attributes: Vec<Attribute>,
    pub position: Position,
    /// 0-based index of this block in its document
    pub ordinal: usize,
    /// Inline code rather than a block
    pub inline: bool,
}

impl CodeblockContext {
    pub fn new(inner: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            inner: inner.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: OptionsMap) -> Self {
        self.options = options;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_ordinal(mut self, ordinal: usize) -> Self {
        self.ordinal = ordinal;
        self
    }

    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Overrides this block imposes on any merged configuration
    pub fn overrides(&self) -> HighlightOptions {
        HighlightOptions {
            hl_inline: self.inline.then_some(true),
            ..HighlightOptions::default()
        }
    }
}
