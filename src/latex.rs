//! The LaTeX renderer.
//!
//! [`format_document`] walks a document tree and dispatches every node, on
//! entry and on exit, to the handler for its kind.  Handlers write straight
//! to the output; nothing is buffered or revisited.

mod context;
pub mod escape;
pub mod heading;
pub mod image;
pub mod languages;
pub mod preamble;
pub mod safety;
pub mod unicode;

pub use context::{Context, COMMENT_PREFIX};

use crate::nodes::{
    AstNode, AutoLinkType, NodeAutoLink, NodeCodeBlock, NodeEmphasis, NodeFencedCodeBlock,
    NodeHeading, NodeLink, NodeList, NodeString, NodeText, NodeValue, Segment,
};
use crate::walk::{walk, WalkStatus};
use crate::Options;

use bstr::ByteSlice;
use image::{AttributeProblem, ImageAttributes};
use std::borrow::Cow;
use std::io::{self, Write};

/// Formats a document tree as LaTeX, modified by the given options.
///
/// `source` is the buffer the tree's segments point into.  Only errors from
/// `output` are returned; content that cannot be rendered faithfully is
/// replaced by a diagnostic comment instead.
pub fn format_document<'a>(
    root: &'a AstNode<'a>,
    source: &[u8],
    options: &Options,
    output: &mut dyn Write,
) -> io::Result<()> {
    let mut f = LatexFormatter::new(output, source, options);
    walk(root, |node, entering| f.render_node(node, entering))?;
    Ok(())
}

const HARD_BREAK: &[u8] = b"\\\\\n\n";
const BLOCK_QUOTE_START: &[u8] = b"\n\\begin{framed}\n\\begin{quote}\n";
const BLOCK_QUOTE_END: &[u8] = b"\\end{quote}\n\\end{framed}\n";
const CODE_START: &[u8] = b"\\begin{minted}";
const CODE_END: &[u8] = b"\\end{minted}\n";
const HRULE: &[u8] = b"\n\\hrulefill\n\n";
const ITEM: &[u8] = b"\\item~ ";
const HREF_START: &[u8] = b"\\href{";
const CODE_SPAN_START: &[u8] = b"\\texttt{";

struct LatexFormatter<'o, 'c> {
    context: Context<'o, 'c>,
}

impl<'o, 'c> LatexFormatter<'o, 'c> {
    fn new(output: &'o mut dyn Write, source: &'o [u8], options: &'o Options<'c>) -> Self {
        LatexFormatter {
            context: Context::new(output, source, options),
        }
    }

    fn render_node<'a>(&mut self, node: &'a AstNode<'a>, entering: bool) -> io::Result<WalkStatus> {
        tracing::trace!(kind = node.data.kind_name(), entering, "render");

        match node.data {
            NodeValue::Document => self.render_document(entering),
            NodeValue::Heading(ref nh) => self.render_heading(nh, entering),
            NodeValue::BlockQuote => self.render_block_quote(entering),
            NodeValue::CodeBlock(ref ncb) => self.render_code_block(ncb, entering),
            NodeValue::FencedCodeBlock(ref nfcb) => self.render_fenced_code_block(nfcb, entering),
            NodeValue::HtmlBlock(..) => self.render_html_block(entering),
            NodeValue::List(ref nl) => self.render_list(nl, entering),
            NodeValue::Item => self.render_item(entering),
            NodeValue::Paragraph => self.render_paragraph(node, entering),
            NodeValue::TextBlock => self.render_text_block(node, entering),
            NodeValue::ThematicBreak => self.render_thematic_break(entering),
            NodeValue::AutoLink(ref nal) => self.render_auto_link(nal, entering),
            NodeValue::CodeSpan => self.render_code_span(node, entering),
            NodeValue::Emphasis(ref ne) => self.render_emphasis(ne, entering),
            NodeValue::Image(ref nl) => self.render_image(nl, entering),
            NodeValue::Link(ref nl) => self.render_link(nl, entering),
            NodeValue::RawHtml(..) => self.render_raw_html(entering),
            NodeValue::Text(ref nt) => self.render_text(nt, entering),
            NodeValue::String(ref ns) => self.render_string(ns, entering),
        }
    }

    fn render_document(&mut self, entering: bool) -> io::Result<WalkStatus> {
        let options = self.context.options;
        let ctx = &mut self.context;

        if !entering {
            ctx.comment(format_args!("end of document"))?;
            ctx.write_all(b"\n\\end{document}\n")?;
            return Ok(WalkStatus::Stop);
        }

        ctx.comment(format_args!("start of document"))?;

        let (kind, preamble) = match options.preamble {
            Some(ref custom) => ("custom", &custom[..]),
            None => ("default", preamble::DEFAULT_PREAMBLE),
        };
        ctx.comment(format_args!("{} preamble start", kind))?;
        ctx.write_all(preamble)?;
        if !preamble.is_empty() && !preamble.ends_with(b"\n") {
            ctx.write_all(b"\n")?;
        }
        ctx.comment(format_args!("{} preamble end", kind))?;

        if let Some(ref mapper) = options.unicode_mapper {
            ctx.write_all(b"\n")?;
            let source = ctx.source;
            let declared = unicode::write_declarations(ctx, source, &**mapper)?;
            tracing::debug!(declared, "declared unicode characters");
        }

        ctx.write_all(b"\n\\begin{document}\n")?;
        if options.make_title {
            ctx.write_all(b"\\maketitle\n")?;
        }

        Ok(WalkStatus::Continue)
    }

    fn render_heading(&mut self, nh: &NodeHeading, entering: bool) -> io::Result<WalkStatus> {
        let options = self.context.options;

        if entering {
            let level = heading::effective_level(nh.level, options.heading_level_offset);
            self.context
                .comment(format_args!("heading start - level {}", level))?;
            self.context
                .write_all(heading::heading_command(nh.level, options).as_bytes())?;
            if level == heading::MAX_LEVEL {
                self.context.write_all(b"\n")?;
            }
        } else {
            self.context.write_all(b"}\n")?;
            self.context.comment(format_args!("heading end"))?;
        }

        Ok(WalkStatus::Continue)
    }

    fn render_block_quote(&mut self, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            self.context.write_all(BLOCK_QUOTE_START)?;
        } else {
            self.context.write_all(BLOCK_QUOTE_END)?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_code_block(&mut self, ncb: &NodeCodeBlock, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            self.context.comment(format_args!("code block start"))?;
            self.context.write_all(CODE_START)?;
            self.context.write_all(b"{text}\n")?;
            self.write_lines(&ncb.lines)?;
        } else {
            self.context.write_all(CODE_END)?;
            self.context.comment(format_args!("code block end"))?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_fenced_code_block(
        &mut self,
        nfcb: &NodeFencedCodeBlock,
        entering: bool,
    ) -> io::Result<WalkStatus> {
        if entering {
            let source = self.context.source;
            self.context
                .comment(format_args!("code fenced block start"))?;
            self.context.write_all(CODE_START)?;
            if let Some(language) = nfcb
                .language(source)
                .and_then(languages::supported_language)
            {
                write!(self.context, "{{{}}}", language)?;
            }
            self.context.write_all(b"\n")?;
            self.write_lines(&nfcb.lines)?;
        } else {
            self.context.write_all(CODE_END)?;
            self.context.comment(format_args!("code fenced block end"))?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_html_block(&mut self, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            self.context.write_all(b"\n")?;
            self.context
                .comment(format_args!("HTML block rendering unsupported, skipped"))?;
        }
        Ok(WalkStatus::SkipChildren)
    }

    fn render_list(&mut self, nl: &NodeList, entering: bool) -> io::Result<WalkStatus> {
        let tag = if nl.ordered { "enumerate" } else { "itemize" };
        if entering {
            write!(self.context, "\n\\begin{{{}}}\n", tag)?;
        } else {
            write!(self.context, "\\end{{{}}}\n", tag)?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_item(&mut self, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            self.context.write_all(ITEM)?;
        } else {
            self.context.write_all(b"\n")?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_paragraph<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        entering: bool,
    ) -> io::Result<WalkStatus> {
        if entering {
            self.context.comment(format_args!("paragraph start"))?;
            // Paragraphs directly inside lists get no extra vertical space.
            match node.parent().map(|parent| &parent.data) {
                Some(NodeValue::List(..)) | Some(NodeValue::Item) => {}
                _ => self.context.write_all(b"\n")?,
            }
        } else {
            self.context.write_all(b"\n")?;
            self.context.comment(format_args!("paragraph end"))?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_text_block<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        entering: bool,
    ) -> io::Result<WalkStatus> {
        if !entering && node.next_sibling().is_some() && node.first_child().is_some() {
            self.context.write_all(b"\n")?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_thematic_break(&mut self, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            self.context.write_all(HRULE)?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_auto_link(&mut self, nal: &NodeAutoLink, entering: bool) -> io::Result<WalkStatus> {
        if !entering {
            return Ok(WalkStatus::Continue);
        }

        let source = self.context.source;
        let url = nal.url(source);

        self.context.write_all(HREF_START)?;
        if self.context.options.url_allowed(url) {
            if nal.kind == AutoLinkType::Email && !safety::has_mailto(url) {
                self.context.write_all(safety::MAILTO)?;
            }
            self.context.escape(url)?;
        } else {
            tracing::debug!(url = %url.as_bstr(), "omitting dangerous autolink destination");
        }
        self.context.write_all(b"}{")?;
        self.context.escape(nal.label(source))?;
        self.context.write_all(b"}")?;

        Ok(WalkStatus::SkipChildren)
    }

    fn render_code_span<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        entering: bool,
    ) -> io::Result<WalkStatus> {
        if !entering {
            self.context.write_all(b"}")?;
            return Ok(WalkStatus::Continue);
        }

        let source = self.context.source;
        self.context.write_all(CODE_SPAN_START)?;
        for child in node.children() {
            let value = match child.data {
                NodeValue::Text(ref nt) => nt.segment.value(source),
                NodeValue::String(ref ns) => &ns.value[..],
                _ => continue,
            };
            // Code spans stay on one line.
            match value.strip_suffix(b"\n") {
                Some(line) => {
                    self.context.escape(line)?;
                    self.context.write_all(b" ")?;
                }
                None => self.context.escape(value)?,
            }
        }

        Ok(WalkStatus::SkipChildren)
    }

    fn render_emphasis(&mut self, ne: &NodeEmphasis, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            let command: &[u8] = match ne.level {
                2 => b"\\textbf{",
                3 => b"\\emph{",
                _ => b"\\textit{",
            };
            self.context.write_all(command)?;
        } else {
            self.context.write_all(b"}")?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_image(&mut self, nl: &NodeLink, entering: bool) -> io::Result<WalkStatus> {
        if !entering {
            return Ok(WalkStatus::Continue);
        }

        let attributes = ImageAttributes::parse(&nl.destination);

        self.context.write_all(b"\n")?;
        self.context.comment(format_args!(
            "image destination: {}, title: {}",
            nl.destination.as_bstr(),
            nl.title.as_bstr()
        ))?;
        for problem in &attributes.problems {
            match *problem {
                AttributeProblem::Invalid(piece) => {
                    tracing::debug!(attribute = %piece.as_bstr(), "invalid image attribute");
                    self.context.comment(format_args!(
                        "image {} has invalid attribute {}",
                        attributes.path.as_bstr(),
                        piece.as_bstr()
                    ))?;
                }
                AttributeProblem::Unsupported(key) => {
                    tracing::debug!(attribute = %key.as_bstr(), "unsupported image attribute");
                    self.context.comment(format_args!(
                        "image {} has unsupported attribute {}",
                        attributes.path.as_bstr(),
                        key.as_bstr()
                    ))?;
                }
            }
        }

        let path = image::argument(attributes.path);
        if let Cow::Owned(_) = path {
            tracing::debug!(
                path = %attributes.path.as_bstr(),
                "dropping unsafe characters from image path"
            );
        }

        self.context
            .write_all(b"\\begin{figure}[h]\n\t\\centering\n\t\\includegraphics[width=")?;
        self.context
            .write_all(&image::argument(attributes.width.unwrap_or_default()))?;
        self.context.write_all(b"\\textwidth]{")?;
        self.context.write_all(&path)?;
        self.context.write_all(b"}\n\t\\caption{")?;
        self.context
            .escape(attributes.caption.as_deref().unwrap_or_default())?;
        self.context.write_all(b"}\n\t\\label{")?;
        self.context
            .write_all(&image::argument(attributes.label.unwrap_or_default()))?;
        self.context.write_all(b"}\n\\end{figure}\n")?;

        Ok(WalkStatus::SkipChildren)
    }

    fn render_link(&mut self, nl: &NodeLink, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            self.context.write_all(HREF_START)?;
            if self.context.options.url_allowed(&nl.destination) {
                self.context.escape(&nl.destination)?;
            } else {
                tracing::debug!(
                    url = %nl.destination.as_bstr(),
                    "omitting dangerous link destination"
                );
            }
            self.context.write_all(b"}{")?;
        } else {
            self.context.write_all(b"}")?;
        }
        Ok(WalkStatus::Continue)
    }

    fn render_raw_html(&mut self, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            self.context.write_all(b"\n")?;
            self.context
                .comment(format_args!("raw HTML rendering unsupported"))?;
        }
        Ok(WalkStatus::SkipChildren)
    }

    fn render_text(&mut self, nt: &NodeText, entering: bool) -> io::Result<WalkStatus> {
        if !entering {
            return Ok(WalkStatus::Continue);
        }

        let value = nt.segment.value(self.context.source);
        if nt.raw && self.context.options.r#unsafe {
            self.context.write_all(value)?;
        } else {
            self.context.escape(value)?;
        }

        if nt.hard_line_break {
            self.context.write_all(HARD_BREAK)?;
        } else if nt.soft_line_break {
            self.context.write_all(b"\n")?;
        }

        Ok(WalkStatus::Continue)
    }

    fn render_string(&mut self, ns: &NodeString, entering: bool) -> io::Result<WalkStatus> {
        if entering {
            if (ns.raw || ns.code) && self.context.options.r#unsafe {
                self.context.write_all(&ns.value)?;
            } else {
                self.context.escape(&ns.value)?;
            }
        }
        Ok(WalkStatus::Continue)
    }

    /// Writes the lines of a code block verbatim, commenting out any line that
    /// could end the environment unless unsafe rendering is on.
    fn write_lines(&mut self, lines: &[Segment]) -> io::Result<()> {
        let source = self.context.source;
        let unsafe_ = self.context.options.r#unsafe;

        for line in lines {
            let text = line.value(source);
            if !unsafe_ && safety::is_unsafe_line(text) {
                tracing::debug!(line = %text.as_bstr(), "commenting out unsafe verbatim line");
                self.context.comment(format_args!(
                    "Skipped following line due to possibly unsafe content:"
                ))?;
                self.context.comment_out(text)?;
            } else {
                self.context.write_all(text)?;
            }
            if !text.ends_with(b"\n") {
                self.context.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}
