//! HTML rendering of syntax trees
//!
//! - `tree`: depth-first walk emitting classed `<span>`s
//! - `sink`: escaping destinations (buffer or stream)
//! - `wrapper`: `<div>`/`<pre>`/`<code>` chrome for code blocks

mod sink;
mod tree;
mod wrapper;

pub use sink::{MarkupSink, WriterSink};
pub use tree::{render_to_string, SyntaxNode, TreeRenderer};
pub use wrapper::{div_start, inline_start, pre_start, Wrapper, DIV_END, INLINE_END, PRE_END};
