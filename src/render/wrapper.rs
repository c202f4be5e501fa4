//! Block and inline wrapper markup around highlighted code

use std::io;

use html_escape::encode_double_quoted_attribute;

use super::sink::MarkupSink;
use crate::codeblock::Attribute;

pub const PRE_END: &str = "</code></pre>";
pub const DIV_END: &str = "</div>";
pub const INLINE_END: &str = "</code>";

/// `<div class="{wrapper_class} {class attr}" {other attrs}>`
pub fn div_start(attributes: &[Attribute], wrapper_class: &str) -> String {
    let mut out = String::from(r#"<div class=""#);
    out.push_str(&encode_double_quoted_attribute(wrapper_class));
    if let Some(class) = attributes.iter().find(|attr| attr.name == "class") {
        out.push(' ');
        out.push_str(&encode_double_quoted_attribute(&class.value));
    }
    out.push('"');
    for attr in attributes.iter().filter(|attr| attr.name != "class") {
        out.push(' ');
        out.push_str(&encode_double_quoted_attribute(&attr.name));
        out.push_str(r#"=""#);
        out.push_str(&encode_double_quoted_attribute(&attr.value));
        out.push('"');
    }
    out.push('>');
    out
}

/// `<pre tabindex="0"><code class="language-{lang}" data-lang="{lang}">`
pub fn pre_start(language: &str) -> String {
    let mut out = String::from(r#"<pre tabindex="0"><code"#);
    if !language.is_empty() {
        let language = encode_double_quoted_attribute(language);
        out.push_str(&format!(
            r#" class="language-{}" data-lang="{}""#,
            language, language
        ));
    }
    out.push('>');
    out
}

/// `<code class="code-inline language-{lang}">`
pub fn inline_start(language: &str) -> String {
    if language.is_empty() {
        return r#"<code class="code-inline">"#.to_string();
    }
    format!(
        r#"<code class="code-inline language-{}">"#,
        encode_double_quoted_attribute(language)
    )
}

/// Opening and closing markup for one rendered code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    pub open: String,
    pub close: String,
}

impl Wrapper {
    pub fn inline(language: &str) -> Self {
        Self {
            open: inline_start(language),
            close: INLINE_END.to_string(),
        }
    }

    pub fn block(language: &str, attributes: &[Attribute], wrapper_class: &str) -> Self {
        Self {
            open: format!("{}{}", div_start(attributes, wrapper_class), pre_start(language)),
            close: format!("{}{}", PRE_END, DIV_END),
        }
    }

    pub fn for_mode(
        inline: bool,
        language: &str,
        attributes: &[Attribute],
        wrapper_class: &str,
    ) -> Self {
        if inline {
            Self::inline(language)
        } else {
            Self::block(language, attributes, wrapper_class)
        }
    }

    pub fn write_open<S: MarkupSink>(&self, sink: &mut S) -> io::Result<()> {
        sink.write_markup(&self.open)
    }

    pub fn write_close<S: MarkupSink>(&self, sink: &mut S) -> io::Result<()> {
        sink.write_markup(&self.close)
    }
}
