//! treelight - tree-sitter syntax highlighting to HTML
//!
//! Parses source code with a bundled tree-sitter grammar and renders the
//! concrete syntax tree as `<span class="..">` markup using Pygments-style
//! class codes. Languages without a grammar, and any parse that fails, are
//! handed to a syntect-based lexer highlighter instead.
//!
//! ```no_run
//! use treelight::{Highlighter, TreeSitterHighlighter};
//!
//! let highlighter = TreeSitterHighlighter::default();
//! let html = highlighter.highlight("fn main() {}", "rust", None)?;
//! # Ok::<(), treelight::HighlightError>(())
//! ```

pub mod cli;
pub mod codeblock;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod fallback;
pub mod highlighter;
pub mod markdown;
pub mod render;
pub mod syntax;
pub mod tracing;

// Re-export commonly used types
pub use codeblock::{Attribute, CodeblockContext, Position};
pub use config::{HighlightConfig, HighlightOptions, OptionsMap};
pub use error::{HighlightError, Result};
pub use fallback::LexerHighlighter;
pub use highlighter::{HighlightOutcome, HighlightResult, Highlighter, TreeSitterHighlighter};
pub use syntax::{Cancellation, GrammarProvider, GrammarRegistry, LanguageId, ParseError};
