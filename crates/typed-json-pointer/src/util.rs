//! Escaping, percent-decoding, and pointer-sequence helpers.

use crate::types::Pointer;
use crate::PointerError;

/// Unescapes a pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Decode `%XX` escapes in a URI-fragment pointer body.
///
/// Fails on a truncated or non-hex escape, or when the decoded bytes are
/// not valid UTF-8.
pub fn percent_decode(input: &str) -> Result<String, PointerError> {
    if !input.contains('%') {
        return Ok(input.to_string());
    }
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return Err(PointerError::PointerInvalid);
            }
            let hi = hex_digit(bytes[i + 1]).ok_or(PointerError::PointerInvalid)?;
            let lo = hex_digit(bytes[i + 2]).ok_or(PointerError::PointerInvalid)?;
            out.push(hi << 4 | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| PointerError::PointerInvalid)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Remove later duplicates from a pointer sequence.
///
/// The first occurrence keeps its position; survivors keep their relative
/// order. Two pointers are duplicates iff their token sequences are equal
/// (constraints are ignored, as in [`Pointer`] equality).
pub fn dedup_pointers(pointers: &[Pointer]) -> Vec<Pointer> {
    let mut out: Vec<Pointer> = Vec::with_capacity(pointers.len());
    for pointer in pointers {
        if !out.contains(pointer) {
            out.push(pointer.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_unescape_component() {
        assert_eq!(unescape_component("foo"), "foo");
        assert_eq!(unescape_component("a~0b"), "a~b");
        assert_eq!(unescape_component("c~1d"), "c/d");
        assert_eq!(unescape_component("a~0b~1c"), "a~b/c");
        assert_eq!(unescape_component("~0~0"), "~~");
        assert_eq!(unescape_component("~1~1"), "//");
    }

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("foo"), "foo");
        assert_eq!(escape_component("a~b"), "a~0b");
        assert_eq!(escape_component("c/d"), "c~1d");
        assert_eq!(escape_component("a~b/c"), "a~0b~1c");
    }

    #[test]
    fn test_escape_roundtrip() {
        let cases = ["", "foo", "a~b", "c/d", "~~//", "~1", "~0", "a~1b~0c"];
        for s in cases {
            assert_eq!(unescape_component(&escape_component(s)), s, "case {s:?}");
        }
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("123"));
        assert!(is_integer("007"));
        assert!(!is_integer("-1"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer(""));
        assert!(!is_integer("abc"));
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("plain").unwrap(), "plain");
        assert_eq!(percent_decode("/a%20b").unwrap(), "/a b");
        assert_eq!(percent_decode("/%7Eb").unwrap(), "/~b");
        assert_eq!(percent_decode("%e2%82%ac").unwrap(), "\u{20ac}");
    }

    #[test]
    fn test_percent_decode_malformed() {
        assert!(percent_decode("/a%2").is_err());
        assert!(percent_decode("/a%zz").is_err());
        assert!(percent_decode("%ff").is_err()); // lone continuation byte
    }

    #[test]
    fn test_dedup_pointers() {
        let p = parse("/a/b").unwrap();
        let q = parse("/c").unwrap();
        assert_eq!(
            dedup_pointers(&[p.clone(), p.clone(), q.clone()]),
            vec![p.clone(), q.clone()]
        );
        assert_eq!(dedup_pointers(&[]), Vec::new());
        assert_eq!(
            dedup_pointers(&[q.clone(), p.clone(), q.clone(), p.clone()]),
            vec![q, p]
        );
    }

    #[test]
    fn test_dedup_ignores_constraint() {
        let p = parse("/a::number").unwrap();
        let q = parse("/a::string").unwrap();
        assert_eq!(dedup_pointers(&[p.clone(), q]), vec![p]);
    }
}
