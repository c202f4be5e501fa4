//! Grammar registry
//!
//! Resolves a language alias to the provider that can parse it. The built-in
//! registry is built once per process and only read afterwards, so it can be
//! shared freely across threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

use tree_sitter::{ParseOptions, ParseState, Parser, Point, Tree};

use super::languages::LanguageId;

/// Why the grammar path could not produce a tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("parse cancelled")]
    Cancelled,
    #[error("parser produced no tree")]
    NoTree,
    #[error("incompatible grammar: {0}")]
    IncompatibleGrammar(String),
    #[error("grammar panicked: {0}")]
    Panicked(String),
}

/// Cancellation signal handed down from the caller.
///
/// Clones share the same flag, so cancelling any clone cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Cancellation {
    /// A token that is never cancelled unless `cancel` is called
    pub fn none() -> Self {
        Self::default()
    }

    /// A token that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            flag: Arc::default(),
            deadline: Some(deadline),
        }
    }

    /// A token that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// A per-language parsing capability
pub trait GrammarProvider: Send + Sync {
    /// Human-readable grammar name, used in logs
    fn name(&self) -> &str;

    /// Parse `source` into a concrete syntax tree.
    ///
    /// The returned tree owns its native resources and releases them on drop.
    fn parse(&self, source: &str, cancel: &Cancellation) -> Result<Tree, ParseError>;
}

impl GrammarProvider for LanguageId {
    fn name(&self) -> &str {
        self.display_name()
    }

    fn parse(&self, source: &str, cancel: &Cancellation) -> Result<Tree, ParseError> {
        if cancel.is_cancelled() {
            return Err(ParseError::Cancelled);
        }

        let mut parser = Parser::new();
        parser
            .set_language(&self.grammar())
            .map_err(|e| ParseError::IncompatibleGrammar(e.to_string()))?;

        // The progress callback runs throughout the parse, so a cancel or an
        // expired deadline stops it midway
        let mut read = |byte: usize, _: Point| source.as_bytes().get(byte..).unwrap_or_default();
        let mut halt = |_: &ParseState| cancel.is_cancelled();
        let options = ParseOptions::new().progress_callback(&mut halt);

        match parser.parse_with_options(&mut read, None, Some(options)) {
            Some(tree) => Ok(tree),
            None if cancel.is_cancelled() => Err(ParseError::Cancelled),
            None => Err(ParseError::NoTree),
        }
    }
}

static BUILTIN: LazyLock<Arc<GrammarRegistry>> = LazyLock::new(|| {
    let registry = LanguageId::ALL
        .iter()
        .fold(GrammarRegistry::new(), |registry, lang| {
            let provider: Arc<dyn GrammarProvider> = Arc::new(*lang);
            lang.aliases().iter().fold(registry, |registry, alias| {
                registry.with_alias(alias, Arc::clone(&provider))
            })
        });
    tracing::debug!(
        "Grammar registry initialized with {} aliases",
        registry.len()
    );
    Arc::new(registry)
});

/// Case-insensitive alias → provider table
#[derive(Clone, Default)]
pub struct GrammarRegistry {
    entries: HashMap<String, Arc<dyn GrammarProvider>>,
}

impl GrammarRegistry {
    /// An empty registry; populate it with [`GrammarRegistry::with_alias`]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry of bundled grammars
    pub fn builtin() -> Arc<GrammarRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Register `alias` for `provider`, replacing any earlier entry
    pub fn with_alias(mut self, alias: &str, provider: Arc<dyn GrammarProvider>) -> Self {
        self.entries.insert(alias.to_lowercase(), provider);
        self
    }

    /// Look up the provider for `alias`, ignoring case
    pub fn resolve(&self, alias: &str) -> Option<&dyn GrammarProvider> {
        self.entries
            .get(alias.to_lowercase().as_str())
            .map(|provider| provider.as_ref())
    }

    pub fn is_supported(&self, alias: &str) -> bool {
        self.resolve(alias).is_some()
    }

    /// Registered aliases, sorted
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarRegistry")
            .field("aliases", &self.aliases())
            .finish()
    }
}
