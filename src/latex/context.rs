use crate::latex::escape;
use crate::Options;

use bstr::ByteSlice;
use std::fmt;
use std::io::{self, Write};

/// Prefix of every diagnostic comment the renderer writes.
pub const COMMENT_PREFIX: &str = "% mdlatex: ";

/// The state of a single render pass: where output goes, the source the tree
/// points into, and the options in effect.
pub struct Context<'o, 'c> {
    output: &'o mut dyn Write,

    /// The raw source the tree's segments index into.
    pub source: &'o [u8],
    /// Options in effect for this pass.
    pub options: &'o Options<'c>,
}

impl<'o, 'c> Context<'o, 'c> {
    pub(super) fn new(
        output: &'o mut dyn Write,
        source: &'o [u8],
        options: &'o Options<'c>,
    ) -> Self {
        Context {
            output,
            source,
            options,
        }
    }

    /// Writes `buffer` through the escaping engine.
    pub fn escape(&mut self, buffer: &[u8]) -> io::Result<()> {
        escape::escape(self, buffer)
    }

    /// Writes a one-line diagnostic comment.  Line breaks in the message are
    /// continued as further comment lines so nothing leaks into the document.
    /// TeX ends a line at a bare `\r` too, so that counts as a break.
    pub fn comment(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let message = args.to_string();
        self.write_all(COMMENT_PREFIX.as_bytes())?;
        let mut lines = message
            .split("\r\n")
            .flat_map(|line| line.split(|c: char| c == '\r' || c == '\n'));
        if let Some(first) = lines.next() {
            self.write_all(first.as_bytes())?;
        }
        for line in lines {
            self.write_all(b"\n% ")?;
            self.write_all(line.as_bytes())?;
        }
        self.write_all(b"\n")
    }

    /// Writes `text` with a `%` in front of every line, where a line ends at
    /// `\n`, `\r\n` or a bare `\r`.  Line endings are kept as they are.
    pub fn comment_out(&mut self, text: &[u8]) -> io::Result<()> {
        let mut rest = text;
        while !rest.is_empty() {
            let end = match rest.find_byteset(b"\r\n") {
                Some(i) if rest[i..].starts_with(b"\r\n") => i + 2,
                Some(i) => i + 1,
                None => rest.len(),
            };
            self.write_all(b"%")?;
            self.write_all(&rest[..end])?;
            rest = &rest[end..];
        }
        Ok(())
    }
}

impl<'o, 'c> Write for Context<'o, 'c> {
    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }
}

impl<'o, 'c> fmt::Debug for Context<'o, 'c> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<mdlatex::latex::Context>")
    }
}
