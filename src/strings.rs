use bstr::ByteSlice;
use caseless::Caseless;

/// Whether `haystack` starts with `prefix`, ignoring case.
///
/// Equivalent to comparing case-folded copies of both, but folds one decoded
/// code point at a time instead of allocating.  Folding is Unicode default
/// case folding, which does not depend on the locale.
pub fn has_lower_prefix(haystack: &[u8], prefix: &[u8]) -> bool {
    let mut haystack = haystack.chars().default_case_fold();
    prefix
        .chars()
        .default_case_fold()
        .all(|p| haystack.next() == Some(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_prefix() {
        assert!(has_lower_prefix(b"MAILTO:x@y", b"mailto:"));
        assert!(has_lower_prefix(b"mailto:x@y", b"mailto:"));
        assert!(has_lower_prefix(b"MaIlTo:", b"mailto:"));
        assert!(!has_lower_prefix(b"mailto2:x", b"mailto:"));
        assert!(!has_lower_prefix(b"mail", b"mailto:"));
        assert!(has_lower_prefix(b"anything", b""));
    }

    #[test]
    fn lower_prefix_non_ascii() {
        assert!(has_lower_prefix("ÉCOLE".as_bytes(), "école".as_bytes()));
        assert!(!has_lower_prefix("ECOLE".as_bytes(), "école".as_bytes()));
    }
}
