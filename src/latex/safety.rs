//! Filters for content that could break out of its place in the document.

use crate::strings::has_lower_prefix;

/// Scheme that marks an e-mail link.
pub const MAILTO: &[u8] = b"mailto:";

/// Token that closes any LaTeX environment, including the verbatim ones code
/// is placed in.
pub const END_COMMAND: &[u8] = b"\\end";

const DANGEROUS_SCHEMES: [&[u8]; 4] = [b"javascript:", b"vbscript:", b"file:", b"data:"];

const SAFE_DATA_IMAGES: [&[u8]; 4] = [
    b"data:image/png",
    b"data:image/gif",
    b"data:image/jpeg",
    b"data:image/webp",
];

/// Whether `url` uses a scheme that can execute code or read local files.
/// Inline `data:` images of common raster formats are allowed.
///
/// ```
/// # use mdlatex::latex::safety::is_dangerous_url;
/// assert!(is_dangerous_url(b"JavaScript:alert(1)"));
/// assert!(!is_dangerous_url(b"https://example.com"));
/// assert!(!is_dangerous_url(b"data:image/png;base64,AAAA"));
/// ```
pub fn is_dangerous_url(url: &[u8]) -> bool {
    if SAFE_DATA_IMAGES
        .iter()
        .any(|prefix| has_lower_prefix(url, prefix))
    {
        return false;
    }
    DANGEROUS_SCHEMES
        .iter()
        .any(|scheme| has_lower_prefix(url, scheme))
}

/// Whether an e-mail autolink target already carries the `mailto:` scheme.
pub fn has_mailto(url: &[u8]) -> bool {
    has_lower_prefix(url, MAILTO)
}

/// Whether a verbatim line could terminate its environment early.
///
/// A plain substring search: no attempt is made to understand the embedded
/// language.
pub fn is_unsafe_line(line: &[u8]) -> bool {
    jetscii::ByteSubstring::new(END_COMMAND)
        .find(line)
        .is_some()
}
