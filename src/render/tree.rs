//! Syntax tree → HTML
//!
//! Walks a concrete syntax tree depth-first and wraps classified nodes in
//! `<span class="..">`. Source text that no node covers (whitespace between
//! siblings, bytes before or after the root) is emitted unstyled, so the
//! rendered content always equals the source.

use std::io;
use std::ops::Range;

use super::sink::MarkupSink;
use crate::syntax::{atomic_class, classify, StyleClass};

/// The node capabilities the renderer needs
pub trait SyntaxNode: Sized {
    /// Node type label; empty for anonymous nodes
    fn kind(&self) -> &str;
    /// Byte span into the source
    fn byte_range(&self) -> Range<usize>;
    fn child_count(&self) -> usize;
    /// Child at `index`, in source order. Grammars may leave slots empty.
    fn child(&self, index: usize) -> Option<Self>;
}

impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn byte_range(&self) -> Range<usize> {
        tree_sitter::Node::byte_range(self)
    }

    fn child_count(&self) -> usize {
        tree_sitter::Node::child_count(self) as usize
    }

    fn child(&self, index: usize) -> Option<Self> {
        tree_sitter::Node::child(self, index.try_into().ok()?)
    }
}

/// Renders one tree into one sink
pub struct TreeRenderer<'a, S: MarkupSink> {
    source: &'a str,
    sink: &'a mut S,
    open_spans: usize,
}

impl<'a, S: MarkupSink> TreeRenderer<'a, S> {
    pub fn new(source: &'a str, sink: &'a mut S) -> Self {
        Self {
            source,
            sink,
            open_spans: 0,
        }
    }

    /// Render the whole source, using `root` for structure.
    ///
    /// Text before and after the root's span is emitted unstyled; an absent
    /// root renders the source as plain escaped text.
    pub fn render_document<N: SyntaxNode>(mut self, root: Option<N>) -> io::Result<()> {
        let Some(root) = root else {
            return self.sink.write_text(self.source);
        };

        let range = self.clamp(root.byte_range());
        self.text(0..range.start)?;
        self.render_node(Some(root))?;
        self.text(range.end..self.source.len())?;

        debug_assert_eq!(self.open_spans, 0, "unbalanced spans after render");
        Ok(())
    }

    /// Render a single node and its subtree. `None` renders nothing.
    pub fn render_node<N: SyntaxNode>(&mut self, node: Option<N>) -> io::Result<()> {
        let Some(node) = node else {
            return Ok(());
        };

        let kind = node.kind();
        let range = self.clamp(node.byte_range());

        // Anonymous node: raw content only
        if kind.is_empty() {
            return self.text(range);
        }

        if node.child_count() == 0 {
            return match classify(kind) {
                Some(class) => self.styled(class, range),
                None => self.text(range),
            };
        }

        // Strings and comments with delimiter children are one styled unit
        if let Some(class) = atomic_class(kind) {
            return self.styled(class, range);
        }

        let class = classify(kind);
        if let Some(class) = class {
            self.open_span(class)?;
        }

        let mut pos = range.start;
        for index in 0..node.child_count() {
            let Some(child) = node.child(index) else {
                continue;
            };
            let child_range = self.clamp(child.byte_range());
            if child_range.start > pos {
                self.text(pos..child_range.start)?;
            }
            self.render_node(Some(child))?;
            pos = pos.max(child_range.end);
        }
        if range.end > pos {
            self.text(pos..range.end)?;
        }

        if class.is_some() {
            self.close_span()?;
        }
        Ok(())
    }

    fn styled(&mut self, class: StyleClass, range: Range<usize>) -> io::Result<()> {
        self.open_span(class)?;
        self.text(range)?;
        self.close_span()
    }

    fn open_span(&mut self, class: StyleClass) -> io::Result<()> {
        self.open_spans += 1;
        self.sink
            .write_markup(&format!(r#"<span class="{}">"#, class))
    }

    fn close_span(&mut self) -> io::Result<()> {
        debug_assert!(self.open_spans > 0, "closing a span that was never opened");
        self.open_spans -= 1;
        self.sink.write_markup("</span>")
    }

    fn text(&mut self, range: Range<usize>) -> io::Result<()> {
        match self.source.get(range) {
            Some(text) if !text.is_empty() => self.sink.write_text(text),
            _ => Ok(()),
        }
    }

    /// Keep node spans inside the source
    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.source.len());
        range.start.min(end)..end
    }
}

/// Render `root` over `source` into a new string
pub fn render_to_string<N: SyntaxNode>(root: Option<N>, source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    // Writing into a String cannot fail
    let _ = TreeRenderer::new(source, &mut out).render_document(root);
    out
}
