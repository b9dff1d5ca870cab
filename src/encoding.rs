//! Character encoding detection and strict decoding.
//!
//! Byte input is decoded with the charset the document declares. Unlike a
//! lossy conversion, malformed sequences are reported as errors: a cleaned
//! document built from replacement characters would no longer reflect its
//! source.

use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Only this many leading bytes are searched for a charset declaration.
const PRESCAN_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding of HTML bytes.
///
/// Checked in order:
/// 1. A byte order mark
/// 2. `<meta charset="...">`
/// 3. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 4. UTF-8
///
/// A declared UTF-16 charset is read as UTF-8: a document whose markup is
/// ASCII-readable cannot actually be UTF-16.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(PRESCAN_LEN)]);
    let declared = extract_charset(&head)
        .or_else(|| extract_content_type_charset(&head))
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    match declared {
        Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => UTF_8,
        Some(encoding) => encoding,
        None => UTF_8,
    }
}

/// Decode HTML bytes to a `String` without replacement characters.
///
/// A leading byte order mark is stripped. Fails with
/// [`Error::EncodingError`] when the bytes are malformed for the detected
/// encoding.
///
/// # Examples
///
/// ```
/// use html_cleaner::encoding::decode_strict;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_strict(html)?.contains("Café"));
///
/// assert!(decode_strict(b"<p>\xC3\x28</p>").is_err());
/// # Ok::<(), html_cleaner::Error>(())
/// ```
pub fn decode_strict(html: &[u8]) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(html) {
        Some((encoding, bom_len)) => (encoding, &html[bom_len..]),
        None => (detect_encoding(html), html),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| {
            Error::EncodingError(format!("input is not valid {}", encoding.name()))
        })
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_utf8_from_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn detect_iso88591_from_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG spec
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_charset_from_content_type() {
        let html = br#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_bom_wins_over_meta() {
        let html = b"\xEF\xBB\xBF<meta charset=\"windows-1252\"><p>x</p>";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn declared_utf16_is_read_as_utf8() {
        let html = br#"<meta charset="utf-16"><p>x</p>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn default_to_utf8_when_no_charset() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        assert_eq!(detect_encoding(br#"<meta charset="klingon">"#), UTF_8);
    }

    #[test]
    fn decode_utf8_passthrough() {
        let html = "<p>Hello, 中文</p>".as_bytes();
        assert_eq!(decode_strict(html).expect("valid utf-8"), "<p>Hello, 中文</p>");
    }

    #[test]
    fn decode_strips_bom() {
        let html = b"\xEF\xBB\xBF<p>x</p>";
        assert_eq!(decode_strict(html).expect("valid utf-8"), "<p>x</p>");
    }

    #[test]
    fn decode_utf16le_with_bom() {
        let html = b"\xFF\xFE<\x00p\x00>\x00";
        assert_eq!(decode_strict(html).expect("valid utf-16"), "<p>");
    }

    #[test]
    fn decode_windows1252() {
        let html = b"<html><head><meta charset=\"windows-1252\"></head><body>\x93Hello\x94</body></html>";
        let result = decode_strict(html).expect("windows-1252 decodes");
        assert!(result.contains("\u{201C}Hello\u{201D}"));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let html = b"<html><body>Test \xC3\x28 Invalid</body></html>";
        match decode_strict(html) {
            Err(Error::EncodingError(msg)) => assert!(msg.contains("UTF-8")),
            other => panic!("expected EncodingError, got {other:?}"),
        }
    }

    #[test]
    fn extract_charset_case_insensitive() {
        let html = "<HTML><HEAD><META CHARSET=\"UTF-8\"></HEAD></HTML>";
        assert_eq!(extract_charset(html), Some("UTF-8".to_string()));
    }

    #[test]
    fn extract_charset_without_quotes() {
        assert_eq!(extract_charset("<meta charset=utf-8>"), Some("utf-8".to_string()));
    }

    #[test]
    fn extract_content_type_charset_standard() {
        let html = r#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        assert_eq!(
            extract_content_type_charset(html),
            Some("ISO-8859-1".to_string())
        );
    }
}
