//! Highlighting entry points
//!
//! [`TreeSitterHighlighter`] tries the grammar path first and hands anything
//! it cannot serve to a fallback [`Highlighter`]:
//!
//! ```text
//! options → merged HighlightConfig
//! language → GrammarRegistry::resolve ─┬─ Unsupported ──────────┐
//!                                      └─ parse ─┬─ Failed ──────┤
//!                                                └─ Success      ▼
//!                                                   render    fallback
//! ```
//!
//! Grammar-path failures are never surfaced; only errors from the fallback,
//! invalid options and sink writes reach the caller.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tree_sitter::Tree;

use crate::codeblock::CodeblockContext;
use crate::config::{HighlightConfig, HighlightOptions};
use crate::error::Result;
use crate::fallback::LexerHighlighter;
use crate::render::{render_to_string, TreeRenderer, WriterSink, Wrapper};
use crate::syntax::{Cancellation, GrammarRegistry, ParseError};

/// Anything that can turn source code into highlighted HTML
pub trait Highlighter: Send + Sync {
    /// Highlight `code` as `language`.
    fn highlight(
        &self,
        code: &str,
        language: &str,
        options: Option<&HighlightOptions>,
    ) -> Result<String>;

    /// Highlight a code block, reporting where the highlighted content sits
    /// inside any wrapper markup.
    fn highlight_code_block(
        &self,
        ctx: &CodeblockContext,
        options: Option<&HighlightOptions>,
    ) -> Result<HighlightResult>;

    /// Stream a fully wrapped code block to `w`.
    fn render_code_block(
        &self,
        cancel: &Cancellation,
        w: &mut dyn io::Write,
        ctx: &CodeblockContext,
    ) -> Result<()>;

    /// Whether this highlighter should render every code block by default
    fn is_default_code_block_renderer(&self) -> bool {
        false
    }
}

/// Result of one grammar-path attempt
#[derive(Debug)]
pub enum HighlightOutcome<T> {
    Success(T),
    /// No grammar registered for this language
    Unsupported(String),
    Failed(ParseError),
}

impl<T> HighlightOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> HighlightOutcome<U> {
        match self {
            HighlightOutcome::Success(value) => HighlightOutcome::Success(f(value)),
            HighlightOutcome::Unsupported(language) => HighlightOutcome::Unsupported(language),
            HighlightOutcome::Failed(err) => HighlightOutcome::Failed(err),
        }
    }
}

/// Highlighted markup plus the byte range of the content inside any wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightResult {
    highlighted: String,
    inner_low: usize,
    inner_high: usize,
}

impl HighlightResult {
    /// `inner_low..inner_high` is clamped to `highlighted`
    pub fn new(highlighted: String, inner_low: usize, inner_high: usize) -> Self {
        let inner_high = inner_high.min(highlighted.len());
        let inner_low = inner_low.min(inner_high);
        Self {
            highlighted,
            inner_low,
            inner_high,
        }
    }

    /// Unwrapped markup, spanning the whole string
    pub fn unwrapped(highlighted: String) -> Self {
        let inner_high = highlighted.len();
        Self::new(highlighted, 0, inner_high)
    }

    pub fn wrapped(&self) -> &str {
        &self.highlighted
    }

    pub fn inner(&self) -> &str {
        self.highlighted
            .get(self.inner_low..self.inner_high)
            .unwrap_or_default()
    }

    pub fn inner_range(&self) -> std::ops::Range<usize> {
        self.inner_low..self.inner_high
    }

    pub fn into_wrapped(self) -> String {
        self.highlighted
    }
}

/// Grammar-backed highlighter with a lexer fallback
pub struct TreeSitterHighlighter {
    config: HighlightConfig,
    registry: Arc<GrammarRegistry>,
    fallback: Box<dyn Highlighter>,
}

impl TreeSitterHighlighter {
    /// Built-in grammars with a syntect fallback sharing `config`
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            fallback: Box::new(LexerHighlighter::new(config.clone())),
            registry: GrammarRegistry::builtin(),
            config,
        }
    }

    pub fn with_registry(mut self, registry: Arc<GrammarRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_fallback(mut self, fallback: Box<dyn Highlighter>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// Parse `code` with the grammar registered for `language`.
    ///
    /// A provider that panics is reported as a failure, not propagated.
    pub fn parse(
        &self,
        language: &str,
        code: &str,
        cancel: &Cancellation,
    ) -> HighlightOutcome<Tree> {
        let Some(provider) = self.registry.resolve(language) else {
            return HighlightOutcome::Unsupported(language.to_string());
        };

        match panic::catch_unwind(AssertUnwindSafe(|| provider.parse(code, cancel))) {
            Ok(Ok(tree)) => HighlightOutcome::Success(tree),
            Ok(Err(err)) => HighlightOutcome::Failed(err),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                HighlightOutcome::Failed(ParseError::Panicked(format!(
                    "{}: {}",
                    provider.name(),
                    message
                )))
            }
        }
    }

    /// Grammar path only: bare spans, no wrapper, no fallback
    pub fn try_highlight(
        &self,
        code: &str,
        language: &str,
        cancel: &Cancellation,
    ) -> HighlightOutcome<String> {
        self.parse(language, code, cancel).map(|tree| {
            let html = render_to_string(Some(tree.root_node()), code);
            tracing::trace!("Highlighted {} bytes of `{}`", code.len(), language);
            html
        })
    }

    fn note_fallback<T>(
        outcome: &HighlightOutcome<T>,
        language: &str,
        ctx: Option<&CodeblockContext>,
    ) {
        let reason = match outcome {
            HighlightOutcome::Success(_) => return,
            HighlightOutcome::Unsupported(_) => "no grammar".to_string(),
            HighlightOutcome::Failed(err) => err.to_string(),
        };
        match ctx {
            Some(ctx) => tracing::debug!(
                language,
                position = %ctx.position,
                ordinal = ctx.ordinal,
                "Falling back to lexer highlighter: {}",
                reason
            ),
            None => tracing::debug!(language, "Falling back to lexer highlighter: {}", reason),
        }
    }
}

impl Highlighter for TreeSitterHighlighter {
    fn highlight(
        &self,
        code: &str,
        language: &str,
        options: Option<&HighlightOptions>,
    ) -> Result<String> {
        match self.try_highlight(code, language, &Cancellation::none()) {
            HighlightOutcome::Success(html) => Ok(html),
            outcome => {
                Self::note_fallback(&outcome, language, None);
                self.fallback.highlight(code, language, options)
            }
        }
    }

    fn highlight_code_block(
        &self,
        ctx: &CodeblockContext,
        options: Option<&HighlightOptions>,
    ) -> Result<HighlightResult> {
        // Bad options are rejected before either backend runs
        self.config.for_code_block(ctx, options)?;

        match self.try_highlight(&ctx.inner, &ctx.kind, &Cancellation::none()) {
            HighlightOutcome::Success(html) => Ok(HighlightResult::unwrapped(html)),
            outcome => {
                Self::note_fallback(&outcome, &ctx.kind, Some(ctx));
                self.fallback.highlight_code_block(ctx, options)
            }
        }
    }

    fn render_code_block(
        &self,
        cancel: &Cancellation,
        w: &mut dyn io::Write,
        ctx: &CodeblockContext,
    ) -> Result<()> {
        let config = self.config.for_code_block(ctx, None)?;

        let tree = match self.parse(&ctx.kind, &ctx.inner, cancel) {
            HighlightOutcome::Success(tree) => tree,
            outcome => {
                Self::note_fallback(&outcome, &ctx.kind, Some(ctx));
                return self.fallback.render_code_block(cancel, w, ctx);
            }
        };

        let wrapper = Wrapper::for_mode(
            config.hl_inline,
            &ctx.kind,
            &ctx.attributes,
            &config.wrapper_class,
        );
        let mut sink = WriterSink::new(w);
        wrapper.write_open(&mut sink)?;
        TreeRenderer::new(&ctx.inner, &mut sink).render_document(Some(tree.root_node()))?;
        wrapper.write_close(&mut sink)?;
        Ok(())
    }

    fn is_default_code_block_renderer(&self) -> bool {
        true
    }
}

impl Default for TreeSitterHighlighter {
    fn default() -> Self {
        Self::new(HighlightConfig::default())
    }
}

impl std::fmt::Debug for TreeSitterHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeSitterHighlighter")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
