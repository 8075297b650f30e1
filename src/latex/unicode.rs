//! Declarations for the non-ASCII characters a document uses.

use crate::options::UnicodeMapper;

use bstr::ByteSlice;
use rustc_hash::FxHashSet;
use std::io::{self, Write};

const DECLARE: &[u8] = b"\\DeclareUnicodeCharacter{";
const REPLACEMENT: &[u8] = "\u{fffd}".as_bytes();

/// Scans the whole of `source` once and writes a `\DeclareUnicodeCharacter`
/// line for each distinct non-ASCII character the mapper has a replacement
/// for, in order of first appearance.
///
/// The mapper is asked about each code point once.  Bytes that are not valid
/// UTF-8 are skipped.  Returns the number of declarations written.
pub fn write_declarations(
    output: &mut dyn Write,
    source: &[u8],
    mapper: &dyn UnicodeMapper,
) -> io::Result<usize> {
    let mut declared = FxHashSet::default();
    let mut written = 0;

    for (start, end, c) in source.char_indices() {
        if end - start == 1 {
            // ASCII, or a lone invalid byte.
            continue;
        }
        if c == '\u{fffd}' && &source[start..end] != REPLACEMENT {
            continue;
        }
        if !declared.insert(c) {
            continue;
        }
        if let Some(replacement) = mapper.declare(c) {
            output.write_all(DECLARE)?;
            write!(output, "{:04x}}}{{", u32::from(c))?;
            output.write_all(replacement.as_bytes())?;
            output.write_all(b"}\n")?;
            written += 1;
        }
    }

    Ok(written)
}
