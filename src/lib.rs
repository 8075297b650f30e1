//! A LaTeX renderer for Markdown document trees.
//!
//! Parsing is left to another crate: build or convert a tree of
//! [`nodes::NodeValue`]s in an [`Arena`], keep the source buffer its
//! segments point into, and hand both to [`format_latex`].
//!
//! ```
//! use mdlatex::nodes::{AstNode, NodeText, NodeValue, Segment};
//! use mdlatex::{latex_to_vec, Arena, Options};
//!
//! let source = b"50% off";
//! let arena = Arena::new();
//! let root = arena.alloc(AstNode::from(NodeValue::Document));
//! let paragraph = arena.alloc(AstNode::from(NodeValue::Paragraph));
//! root.append(paragraph);
//! paragraph.append(arena.alloc(AstNode::from(NodeValue::Text(NodeText {
//!     segment: Segment::new(0, source.len()),
//!     ..NodeText::default()
//! }))));
//!
//! let mut options = Options::default();
//! options.preamble = Some(b"\\documentclass{article}\n".to_vec());
//!
//! let latex = String::from_utf8(latex_to_vec(root, source, &options)).unwrap();
//! assert!(latex.contains("\n50\\% off\n"));
//! assert!(latex.ends_with("\\end{document}\n"));
//! ```

#![deny(missing_docs, missing_debug_implementations)]

pub mod arena_tree;
pub mod latex;
pub mod nodes;
pub mod options;
mod strings;
pub mod walk;

use std::io::{self, Write};

pub use latex::format_document;
pub use nodes::AstNode;
pub use options::Options;
pub use typed_arena::Arena;

/// Renders the document tree under `root` as LaTeX into `output`.
///
/// `source` must be the buffer the tree was parsed from.
pub fn format_latex<'a>(
    root: &'a AstNode<'a>,
    source: &[u8],
    options: &Options,
    output: &mut dyn Write,
) -> io::Result<()> {
    format_document(root, source, options, output)
}

/// Renders the document tree under `root` as LaTeX into a new buffer.
pub fn latex_to_vec<'a>(root: &'a AstNode<'a>, source: &[u8], options: &Options) -> Vec<u8> {
    let mut output = vec![];
    // Writing to a Vec<u8> cannot fail.
    let _ = format_latex(root, source, options, &mut output);
    output
}
