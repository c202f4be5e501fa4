//! Lexer-based fallback highlighter
//!
//! Wraps syntect behind the [`Highlighter`] trait. It knows far more languages
//! than the bundled tree-sitter grammars and always produces output (plain
//! text at worst), so it backs every call the grammar path cannot serve.
//!
//! `SyntaxSet` and `ThemeSet` are expensive to build, so they are loaded once
//! per process and shared.

use std::io;
use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{
    styled_line_to_highlighted_html, ClassStyle, ClassedHTMLGenerator, IncludeBackground,
};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::codeblock::CodeblockContext;
use crate::config::{HighlightConfig, HighlightOptions};
use crate::error::{HighlightError, Result};
use crate::highlighter::{HighlightResult, Highlighter};
use crate::render::Wrapper;
use crate::syntax::Cancellation;

/// Theme used when the configured style is unknown
const DEFAULT_THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Debug, Clone, Default)]
pub struct LexerHighlighter {
    config: HighlightConfig,
}

impl LexerHighlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    fn find_syntax(
        language: &str,
        code: &str,
        config: &HighlightConfig,
    ) -> &'static SyntaxReference {
        if !language.is_empty() {
            if let Some(syntax) = SYNTAXES.find_syntax_by_token(language) {
                return syntax;
            }
        }

        if config.guess_syntax {
            if let Some(syntax) = code
                .lines()
                .next()
                .and_then(|first| SYNTAXES.find_syntax_by_first_line(first))
            {
                tracing::debug!("Guessed syntax {} for `{}`", syntax.name, language);
                return syntax;
            }
        }

        SYNTAXES.find_syntax_plain_text()
    }

    fn theme(config: &HighlightConfig) -> Result<&'static Theme> {
        THEMES
            .themes
            .get(&config.style)
            .or_else(|| {
                tracing::debug!("Unknown style `{}`, using {}", config.style, DEFAULT_THEME);
                THEMES.themes.get(DEFAULT_THEME)
            })
            .ok_or_else(|| HighlightError::Fallback(format!("no theme named `{}`", config.style)))
    }

    /// Highlighted content without any wrapper
    fn highlight_inner(
        &self,
        code: &str,
        language: &str,
        config: &HighlightConfig,
    ) -> Result<String> {
        let syntax = Self::find_syntax(language, code, config);

        if config.no_classes {
            let theme = Self::theme(config)?;
            let mut highlighter = HighlightLines::new(syntax, theme);
            let mut out = String::with_capacity(code.len() * 4);
            for line in LinesWithEndings::from(code) {
                let regions = highlighter.highlight_line(line, &SYNTAXES)?;
                out.push_str(&styled_line_to_highlighted_html(
                    &regions,
                    IncludeBackground::No,
                )?);
            }
            return Ok(out);
        }

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }

    /// Fully wrapped output plus the byte range of the highlighted content
    fn highlight_wrapped(
        &self,
        code: &str,
        language: &str,
        ctx: Option<&CodeblockContext>,
        config: &HighlightConfig,
    ) -> Result<HighlightResult> {
        let inner = self.highlight_inner(code, language, config)?;
        let attributes = ctx.map(|ctx| ctx.attributes.as_slice()).unwrap_or(&[]);
        let wrapper =
            Wrapper::for_mode(config.hl_inline, language, attributes, &config.wrapper_class);

        let mut highlighted =
            String::with_capacity(wrapper.open.len() + inner.len() + wrapper.close.len());
        highlighted.push_str(&wrapper.open);
        let inner_low = highlighted.len();
        highlighted.push_str(&inner);
        let inner_high = highlighted.len();
        highlighted.push_str(&wrapper.close);

        Ok(HighlightResult::new(highlighted, inner_low, inner_high))
    }
}

impl Highlighter for LexerHighlighter {
    fn highlight(
        &self,
        code: &str,
        language: &str,
        options: Option<&HighlightOptions>,
    ) -> Result<String> {
        let config = self.config.for_call(options);
        Ok(self
            .highlight_wrapped(code, language, None, &config)?
            .into_wrapped())
    }

    fn highlight_code_block(
        &self,
        ctx: &CodeblockContext,
        options: Option<&HighlightOptions>,
    ) -> Result<HighlightResult> {
        let config = self.config.for_code_block(ctx, options)?;
        self.highlight_wrapped(&ctx.inner, &ctx.kind, Some(ctx), &config)
    }

    fn render_code_block(
        &self,
        _cancel: &Cancellation,
        w: &mut dyn io::Write,
        ctx: &CodeblockContext,
    ) -> Result<()> {
        let config = self.config.for_code_block(ctx, None)?;
        let result = self.highlight_wrapped(&ctx.inner, &ctx.kind, Some(ctx), &config)?;
        w.write_all(result.wrapped().as_bytes())?;
        Ok(())
    }
}
