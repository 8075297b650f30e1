//! The document tree handed to the renderer.
//!
//! Nodes are produced by an external Markdown parser.  Textual attributes are
//! [`Segment`]s pointing into the raw source rather than owned copies, so the
//! source buffer must outlive any render of the tree.

use crate::arena_tree::Node;

/// The core AST node enum.
#[derive(Debug, Clone)]
pub enum NodeValue {
    /// The root of every document.  Contains **blocks**.
    Document,

    /// **Block**. A heading.  Contains **inlines**.
    Heading(NodeHeading),

    /// **Block**. A block quote.  Contains other **blocks**.
    BlockQuote,

    /// **Block**. An indented code block.  Its lines are never escaped.
    CodeBlock(NodeCodeBlock),

    /// **Block**. A fenced code block, with an optional info string.
    FencedCodeBlock(NodeFencedCodeBlock),

    /// **Block**. A raw HTML block.
    HtmlBlock(NodeCodeBlock),

    /// **Block**. A list.  Contains list items.
    List(NodeList),

    /// **Block**. A list item.  Contains other **blocks**.
    Item,

    /// **Block**. A paragraph.  Contains **inlines**.
    Paragraph,

    /// **Block**. A run of inlines without paragraph semantics, as found in
    /// tight list items.
    TextBlock,

    /// **Block**. A thematic break.  Has no children.
    ThematicBreak,

    /// **Inline**. An autolink such as `<https://example.com>` or
    /// `<user@example.com>`.
    AutoLink(NodeAutoLink),

    /// **Inline**. A code span.  Contains `Text` nodes.
    CodeSpan,

    /// **Inline**. Emphasised text; the level distinguishes `*`, `**` and
    /// `***`.
    Emphasis(NodeEmphasis),

    /// **Inline**. An image.  Its children form the alt text.
    Image(NodeLink),

    /// **Inline**. A link.  Its children form the label.
    Link(NodeLink),

    /// **Inline**. Raw HTML contained inline.
    RawHtml(NodeRawHtml),

    /// **Inline**. Textual content taken from the source.
    Text(NodeText),

    /// **Inline**. Textual content not present in the source, such as the
    /// output of smart punctuation.
    String(NodeString),
}

impl NodeValue {
    /// The snake-case name of the node kind.
    pub fn kind_name(&self) -> &'static str {
        match *self {
            NodeValue::Document => "document",
            NodeValue::Heading(..) => "heading",
            NodeValue::BlockQuote => "block_quote",
            NodeValue::CodeBlock(..) => "code_block",
            NodeValue::FencedCodeBlock(..) => "fenced_code_block",
            NodeValue::HtmlBlock(..) => "html_block",
            NodeValue::List(..) => "list",
            NodeValue::Item => "item",
            NodeValue::Paragraph => "paragraph",
            NodeValue::TextBlock => "text_block",
            NodeValue::ThematicBreak => "thematic_break",
            NodeValue::AutoLink(..) => "auto_link",
            NodeValue::CodeSpan => "code_span",
            NodeValue::Emphasis(..) => "emphasis",
            NodeValue::Image(..) => "image",
            NodeValue::Link(..) => "link",
            NodeValue::RawHtml(..) => "raw_html",
            NodeValue::Text(..) => "text",
            NodeValue::String(..) => "string",
        }
    }
}

/// A half-open byte range `[start, stop)` of the raw source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Offset of the first byte.
    pub start: usize,

    /// Offset one past the last byte.
    pub stop: usize,
}

impl Segment {
    /// Creates a segment covering `start..stop`.
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop);
        Segment { start, stop }
    }

    /// The bytes this segment covers.
    ///
    /// Panics if the segment lies outside `source`; segments are expected to
    /// come from the same parse as the tree.
    pub fn value<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        &source[self.start..self.stop]
    }

    /// Length of the segment in bytes.
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    /// Whether the segment is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }
}

/// The metadata of a heading.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeHeading {
    /// The level of the heading; from 1 to 6 for ATX headings, 1 or 2 for
    /// setext headings.
    pub level: u8,
}

/// The lines of a code or HTML block.
#[derive(Debug, Default, Clone)]
pub struct NodeCodeBlock {
    /// One segment per source line, each including its line ending.
    pub lines: Vec<Segment>,
}

/// The details of a fenced code block.
#[derive(Debug, Default, Clone)]
pub struct NodeFencedCodeBlock {
    /// The info string following the opening fence, if any.
    pub info: Option<Segment>,

    /// One segment per source line, each including its line ending.
    pub lines: Vec<Segment>,
}

impl NodeFencedCodeBlock {
    /// The language tag: the info string up to its first space.
    pub fn language<'s>(&self, source: &'s [u8]) -> Option<&'s [u8]> {
        let info = self.info?.value(source);
        let end = info.iter().position(|&b| b == b' ').unwrap_or(info.len());
        if end == 0 {
            None
        } else {
            Some(&info[..end])
        }
    }
}

/// The details of a list.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeList {
    /// Whether the list is ordered (`1.`) or bulleted (`-`).
    pub ordered: bool,

    /// For ordered lists, the number of the first item.
    pub start: usize,
}

/// The kinds of autolink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoLinkType {
    /// A URL autolink.
    Url,

    /// An e-mail address autolink.
    Email,
}

/// The details of an autolink.
#[derive(Debug, Clone, Copy)]
pub struct NodeAutoLink {
    /// Whether this autolinks a URL or an e-mail address.
    pub kind: AutoLinkType,

    /// The autolinked text; both target and label.
    pub value: Segment,
}

impl NodeAutoLink {
    /// The link target.
    pub fn url<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        self.value.value(source)
    }

    /// The text shown for the link.
    pub fn label<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        self.value.value(source)
    }
}

/// The emphasis level.
#[derive(Debug, Clone, Copy)]
pub struct NodeEmphasis {
    /// 1 for `*emphasis*`, 2 for `**strong**`, 3 for `***both***`.
    pub level: u8,
}

/// The details of a link's destination or image's source.
#[derive(Debug, Default, Clone)]
pub struct NodeLink {
    /// The URL for the link destination or image source.
    pub destination: Vec<u8>,

    /// The title for the link or image.
    pub title: Vec<u8>,
}

/// Inline raw HTML.
#[derive(Debug, Default, Clone)]
pub struct NodeRawHtml {
    /// The source segments making up the HTML.
    pub segments: Vec<Segment>,
}

/// Text copied from the source.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeText {
    /// Where the text lives in the source.
    pub segment: Segment,

    /// Raw text is not meant to be escaped.
    pub raw: bool,

    /// The text is followed by a soft line break.
    pub soft_line_break: bool,

    /// The text is followed by a hard line break.
    pub hard_line_break: bool,
}

/// Text owned by the node.
#[derive(Debug, Default, Clone)]
pub struct NodeString {
    /// The text itself.
    pub value: Vec<u8>,

    /// Raw text is not meant to be escaped.
    pub raw: bool,

    /// The text is a code fragment, such as an entity reference.
    pub code: bool,
}

/// A node in the document tree.
pub type AstNode<'a> = Node<'a, NodeValue>;

impl<'a> From<NodeValue> for AstNode<'a> {
    /// Create a new AST node with the given value.
    fn from(value: NodeValue) -> Self {
        Node::new(value)
    }
}
