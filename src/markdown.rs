//! Markdown documents with highlighted code fences
//!
//! Renders CommonMark with pulldown-cmark and swaps each fenced code block for
//! the output of a [`Highlighter`]. The fence info string supplies the
//! language and an optional `{key=value ...}` block:
//!
//! ````text
//! ```go {hl_inline=false, class="wide" id=main}
//! ````
//!
//! Keys naming a highlight option become block options, everything else is
//! rendered as an attribute on the wrapper.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde_json::Value;

use crate::codeblock::{Attribute, CodeblockContext, Position};
use crate::config::{HighlightConfig, HighlightOptions, OptionsMap};
use crate::error::Result;
use crate::highlighter::Highlighter;
use crate::syntax::Cancellation;

/// A fenced block whose content is still being collected
struct PendingFence {
    info: String,
    position: Position,
    code: String,
}

/// Render `markdown` to an HTML fragment, highlighting fenced code blocks
pub fn markdown_to_html(
    markdown: &str,
    highlighter: &dyn Highlighter,
    config: &HighlightConfig,
) -> Result<String> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);
    let mut events = Vec::new();
    let mut pending: Option<PendingFence> = None;
    let mut ordinal = 0;

    for (event, range) in parser.into_offset_iter() {
        if pending.is_some() {
            match event {
                Event::Text(text) => {
                    if let Some(fence) = pending.as_mut() {
                        fence.code.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(fence) = pending.take() {
                        let ctx = fence_context(fence, ordinal);
                        ordinal += 1;

                        let mut out = Vec::new();
                        highlighter.render_code_block(&Cancellation::none(), &mut out, &ctx)?;
                        events.push(Event::Html(
                            String::from_utf8_lossy(&out).into_owned().into(),
                        ));
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) if config.code_fences => {
                pending = Some(PendingFence {
                    info: info.into_string(),
                    position: position_at(markdown, range.start),
                    code: String::new(),
                });
            }
            other => events.push(other),
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());
    Ok(html_output)
}

fn fence_context(fence: PendingFence, ordinal: usize) -> CodeblockContext {
    let (language, pairs) = parse_info(&fence.info);

    let mut options = OptionsMap::new();
    let mut attributes = Vec::new();
    for (key, value) in pairs {
        if HighlightOptions::is_known_key(&key) {
            // A bare option key is a flag
            let value = value.unwrap_or_else(|| "true".to_string());
            options.insert(key, Value::String(value));
        } else {
            attributes.push(Attribute::new(key, value.unwrap_or_default()));
        }
    }

    CodeblockContext::new(fence.code, language)
        .with_options(options)
        .with_attributes(attributes)
        .with_position(fence.position)
        .with_ordinal(ordinal)
}

/// 1-based line and column of byte `offset`
fn position_at(source: &str, offset: usize) -> Position {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    Position::new(line, column)
}

/// Split a fence info string into its language and `{...}` key/value pairs
fn parse_info(info: &str) -> (String, Vec<(String, Option<String>)>) {
    let info = info.trim();
    let split = info
        .find(|c: char| c.is_whitespace() || c == '{')
        .unwrap_or(info.len());
    let (language, rest) = info.split_at(split);

    let rest = rest.trim();
    let pairs = match rest.strip_prefix('{') {
        Some(body) => split_pairs(body.strip_suffix('}').unwrap_or(body)),
        None => Vec::new(),
    };

    (language.to_string(), pairs)
}

/// `a=1, b="x y" c` → `[(a, 1), (b, x y), (c, None)]`
fn split_pairs(body: &str) -> Vec<(String, Option<String>)> {
    let is_separator = |c: &char| c.is_whitespace() || *c == ',';

    let mut pairs = Vec::new();
    let mut chars = body.chars().peekable();
    while chars.peek().is_some() {
        let mut key = String::new();
        while let Some(c) = chars.next_if(|c| !is_separator(c) && *c != '=') {
            key.push(c);
        }

        let mut value = None;
        if chars.next_if_eq(&'=').is_some() {
            let mut text = String::new();
            match chars.next_if(|c| *c == '"' || *c == '\'') {
                Some(quote) => {
                    for c in chars.by_ref() {
                        if c == quote {
                            break;
                        }
                        text.push(c);
                    }
                }
                None => {
                    while let Some(c) = chars.next_if(|c| !is_separator(c)) {
                        text.push(c);
                    }
                }
            }
            value = Some(text);
        }

        if !key.is_empty() {
            pairs.push((key, value));
        }
        while chars.next_if(is_separator).is_some() {}
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlighter::TreeSitterHighlighter;

    fn render(md: &str) -> String {
        let highlighter = TreeSitterHighlighter::default();
        markdown_to_html(md, &highlighter, highlighter.config()).unwrap()
    }

    #[test]
    fn test_plain_markdown() {
        let html = render("# Hello\n\nWorld");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn test_fenced_block_is_highlighted() {
        let html = render("Intro\n\n```go\nimport \"fmt\"\n```\n");
        assert!(html.contains(r#"<div class="highlight"><pre tabindex="0"><code class="language-go" data-lang="go">"#));
        assert!(html.contains(r#"<span class="kn">import</span>"#));
        assert!(html.contains("</code></pre></div>"));
    }

    #[test]
    fn test_unknown_language_still_wrapped() {
        let html = render("```fortran\nend program\n```\n");
        assert!(html.contains(r#"data-lang="fortran""#));
        assert!(html.contains("end program"));
    }

    #[test]
    fn test_code_fences_disabled_passes_through() {
        let highlighter = TreeSitterHighlighter::default();
        let config = HighlightConfig {
            code_fences: false,
            ..HighlightConfig::default()
        };
        let html = markdown_to_html("```go\nimport \"fmt\"\n```\n", &highlighter, &config).unwrap();
        assert!(html.contains(r#"<pre><code class="language-go">"#));
        assert!(!html.contains("highlight"));
    }

    #[test]
    fn test_fence_attributes_and_options() {
        let html = render("```python {hl_inline=true}\nx = 1\n```\n");
        assert!(html.contains(r#"<code class="code-inline language-python">"#));

        let html = render("```python {class=\"wide\" id=main}\nx = 1\n```\n");
        assert!(html.contains(r#"<div class="highlight wide" id="main">"#));
    }

    #[test]
    fn test_invalid_fence_option_is_an_error() {
        let highlighter = TreeSitterHighlighter::default();
        let md = "```go {hl_inline=perhaps}\nx\n```\n";
        assert!(markdown_to_html(md, &highlighter, highlighter.config()).is_err());
    }

    #[test]
    fn test_parse_info() {
        assert_eq!(parse_info("go"), ("go".to_string(), vec![]));
        assert_eq!(parse_info(""), (String::new(), vec![]));
        assert_eq!(
            parse_info("go{a=1}"),
            ("go".to_string(), vec![("a".to_string(), Some("1".to_string()))])
        );
        assert_eq!(
            parse_info(" rust  {linenos=table, title='a b', hl_inline} "),
            (
                "rust".to_string(),
                vec![
                    ("linenos".to_string(), Some("table".to_string())),
                    ("title".to_string(), Some("a b".to_string())),
                    ("hl_inline".to_string(), None),
                ]
            )
        );
    }

    #[test]
    fn test_split_pairs_tolerates_stray_equals() {
        assert_eq!(
            split_pairs("=x ,, y"),
            vec![("y".to_string(), None)]
        );
    }

    #[test]
    fn test_position_at() {
        let src = "ab\ncd\n```go";
        assert_eq!(position_at(src, 0), Position::new(1, 1));
        assert_eq!(position_at(src, 4), Position::new(2, 2));
        assert_eq!(position_at(src, 6), Position::new(3, 1));
    }

    #[test]
    fn test_fence_context_ordinal_and_split() {
        let fence = PendingFence {
            info: "go {noClasses=true, data-x=1}".to_string(),
            position: Position::new(3, 1),
            code: "x".to_string(),
        };
        let ctx = fence_context(fence, 2);
        assert_eq!(ctx.kind, "go");
        assert_eq!(ctx.ordinal, 2);
        assert_eq!(ctx.position, Position::new(3, 1));
        assert!(ctx.options.contains_key("noClasses"));
        assert_eq!(ctx.attributes, vec![Attribute::new("data-x", "1")]);
    }
}
