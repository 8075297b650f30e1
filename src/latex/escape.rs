//! The escaping engine.
//!
//! Every piece of user-controlled text that is not verbatim content passes
//! through [`escape`] exactly once, on its way from the source to the output.

use std::io::{self, Write};

/// Substitutions for the characters LaTeX reserves.  `None` passes through.
const ESCAPES: [Option<&[u8]>; 256] = {
    let mut table: [Option<&[u8]>; 256] = [None; 256];
    table[b'\\' as usize] = Some(b"\\textbackslash~" as &[u8]);
    table[b'~' as usize] = Some(b"\\textasciitilde~" as &[u8]);
    table[b'^' as usize] = Some(b"\\textasciicircum~" as &[u8]);
    table[b'&' as usize] = Some(b"\\&" as &[u8]);
    table[b'%' as usize] = Some(b"\\%" as &[u8]);
    table[b'$' as usize] = Some(b"\\$" as &[u8]);
    table[b'#' as usize] = Some(b"\\#" as &[u8]);
    table[b'_' as usize] = Some(b"\\_" as &[u8]);
    table[b'{' as usize] = Some(b"\\{" as &[u8]);
    table[b'}' as usize] = Some(b"\\}" as &[u8]);
    table
};

/// The substitution for `byte`, if LaTeX reserves it.
pub fn substitution(byte: u8) -> Option<&'static [u8]> {
    ESCAPES[byte as usize]
}

/// Writes `buffer` to `output`, replacing each reserved byte by its
/// substitution.
///
/// ```
/// # use mdlatex::latex::escape::escape;
/// let mut out = vec![];
/// escape(&mut out, b"50% of $10 & #1_{x}").unwrap();
/// assert_eq!(out, b"50\\% of \\$10 \\& \\#1\\_\\{x\\}".to_vec());
/// ```
pub fn escape(output: &mut dyn Write, buffer: &[u8]) -> io::Result<()> {
    let matcher = jetscii::bytes!(b'\\', b'~', b'^', b'&', b'%', b'$', b'#', b'_', b'{', b'}');

    let mut offset = 0;
    while let Some(found) = matcher.find(&buffer[offset..]) {
        let i = offset + found;
        output.write_all(&buffer[offset..i])?;
        if let Some(esc) = ESCAPES[buffer[i] as usize] {
            output.write_all(esc)?;
        }
        offset = i + 1;
    }
    output.write_all(&buffer[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(input: &[u8]) -> Vec<u8> {
        let mut out = vec![];
        escape(&mut out, input).unwrap();
        out
    }

    #[test]
    fn identity_without_reserved() {
        for input in [
            &b""[..],
            b"plain text",
            b"unicode \xc3\xa9 and invalid \xff bytes",
            b"brackets [] () <> and symbols !?@*|",
        ] {
            assert_eq!(escaped(input), input);
        }
    }

    #[test]
    fn single_reserved_byte() {
        for byte in b"\\~^&%$#_{}".iter().copied() {
            let input = [b'a', b'b', byte, b'c'];
            let mut expected = b"ab".to_vec();
            expected.extend_from_slice(substitution(byte).unwrap());
            expected.push(b'c');
            assert_eq!(escaped(&input), expected);
        }
    }

    #[test]
    fn reserved_at_boundaries() {
        assert_eq!(escaped(b"_"), b"\\_");
        assert_eq!(escaped(b"{}"), b"\\{\\}");
        assert_eq!(escaped(b"\\x\\"), b"\\textbackslash~x\\textbackslash~");
    }

    #[test]
    fn output_never_shrinks() {
        let input = b"~^\\ mixed & matched %";
        let out = escaped(input);
        assert!(out.len() >= input.len());
        assert_eq!(out.iter().filter(|&&b| b == b'\\').count(), 5);
    }
}
