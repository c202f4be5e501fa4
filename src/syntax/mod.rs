//! Grammar registry and node classification
//!
//! ## Architecture
//!
//! ```text
//! alias ("go", "Golang") → GrammarRegistry::resolve → GrammarProvider::parse
//!                        → tree_sitter::Tree → render::TreeRenderer (uses classify)
//! ```

mod highlights;
mod languages;
mod registry;

pub use highlights::{atomic_class, classify, StyleClass, ATOMIC_KINDS, CLASS_TABLE};
pub use languages::LanguageId;
pub use registry::{Cancellation, GrammarProvider, GrammarRegistry, ParseError};
