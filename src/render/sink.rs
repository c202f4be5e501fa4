//! Markup destinations
//!
//! Content text is always escaped on its way in; generated markup (tags) is
//! written as-is. The same renderer drives an in-memory buffer or a stream.

use std::io;

/// Destination for rendered HTML
pub trait MarkupSink {
    /// Write generated markup verbatim
    fn write_markup(&mut self, markup: &str) -> io::Result<()>;

    /// Write source text, HTML-escaped
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

impl MarkupSink for String {
    fn write_markup(&mut self, markup: &str) -> io::Result<()> {
        self.push_str(markup);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        html_escape::encode_quoted_attribute_to_string(text, self);
        Ok(())
    }
}

/// Streams markup into any [`io::Write`]
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: W,
}

impl<W: io::Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> MarkupSink for WriterSink<W> {
    fn write_markup(&mut self, markup: &str) -> io::Result<()> {
        self.inner.write_all(markup.as_bytes())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        html_escape::encode_quoted_attribute_to_writer(text, &mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_escapes_text() {
        let mut out = String::new();
        out.write_text(r#"<a href="x">&'</a>"#).unwrap();
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
        assert!(out.starts_with("&lt;a href=&quot;x&quot;&gt;&amp;"));
        assert_eq!(html_escape::decode_html_entities(&out), r#"<a href="x">&'</a>"#);
    }

    #[test]
    fn test_buffer_keeps_markup() {
        let mut out = String::new();
        out.write_markup(r#"<span class="k">"#).unwrap();
        out.write_text("if").unwrap();
        out.write_markup("</span>").unwrap();
        assert_eq!(out, r#"<span class="k">if</span>"#);
    }

    #[test]
    fn test_writer_matches_buffer() {
        let text = "x < y && \"quoted\" > 'z'";

        let mut buffer = String::new();
        buffer.write_text(text).unwrap();

        let mut sink = WriterSink::new(Vec::new());
        sink.write_text(text).unwrap();
        let streamed = String::from_utf8(sink.into_inner()).unwrap();

        assert_eq!(buffer, streamed);
    }

    #[test]
    fn test_only_special_characters_are_escaped() {
        let mut out = String::new();
        out.write_text("// a/b = c").unwrap();
        assert_eq!(out, "// a/b = c");

        let mut sink = WriterSink::new(Vec::new());
        sink.write_text("</x>").unwrap();
        assert_eq!(sink.into_inner(), b"&lt;/x&gt;");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let mut out = String::new();
        out.write_text("fmt Println 42 héllo").unwrap();
        assert_eq!(out, "fmt Println 42 héllo");
    }
}
