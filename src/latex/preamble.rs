//! The document preamble.

use std::fs;
use std::io;
use std::path::Path;

/// The built-in preamble.  Like a custom one, it stops short of
/// `\begin{document}`, which the renderer adds.
pub const DEFAULT_PREAMBLE: &[u8] = include_bytes!("default_preamble.tex");

/// Returns a copy of the built-in preamble, e.g. as a starting point for a
/// custom one.
pub fn default_preamble() -> Vec<u8> {
    DEFAULT_PREAMBLE.to_vec()
}

/// Reads a custom preamble from `path`.
///
/// Failing to read is left to the caller to handle; the renderer itself
/// never touches the file system.
pub fn read_preamble<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    fs::read(path)
}
