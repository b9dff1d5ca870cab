//! # html-cleaner
//!
//! Reduce every text node of an HTML document to its first word while
//! keeping tags, attributes and nesting intact.
//!
//! Useful for turning scraped pages into structural fixtures, or for
//! redacting content while keeping the markup around for inspection.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_cleaner::clean;
//!
//! let cleaned = clean("<div>Foo <b>Bar Baz</b> Qux Quux</div>");
//! assert_eq!(cleaned.as_deref(), Some("<div>Foo<b>Bar</b>Qux</div>\n"));
//! ```
//!
//! ## Text and tail
//!
//! Each element carries two text values: its own text (before the first
//! child) and its tail (after its closing tag). Both are cut down to their
//! first whitespace-delimited token; empty and whitespace-only values end
//! up empty. See [`etree`] for the tree model.
//!
//! ## Failures
//!
//! The `clean*` functions never return an error. Anything that goes wrong
//! is logged through `tracing` and reported as `None`. Use [`try_clean`]
//! to get the cause instead.

mod error;
mod options;
mod pipeline;

/// Element tree with text/tail model.
pub mod etree;

/// First-token truncation of text values.
pub mod text;

/// Tree walk applying the truncation to every node.
pub mod walker;

/// HTML serialization with optional pretty printing.
pub mod serialize;

/// Character encoding detection and strict decoding.
pub mod encoding;

/// One-time `tracing` subscriber setup.
pub mod logging;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;

/// Cleans an HTML document using default options.
///
/// Returns `None` if the document could not be parsed or serialized; the
/// cause is logged at `error` level.
///
/// # Example
///
/// ```rust
/// use html_cleaner::clean;
///
/// let cleaned = clean("<p>Hello world, this is a test.</p>");
/// assert_eq!(cleaned.as_deref(), Some("<p>Hello</p>\n"));
///
/// assert_eq!(clean(""), None);
/// ```
#[must_use]
pub fn clean(html: &str) -> Option<String> {
    clean_with_options(html, &Options::default())
}

/// Cleans an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use html_cleaner::{clean_with_options, Options};
///
/// let html = "<ul><li>first item</li><li>second item</li></ul>";
/// let options = Options {
///     pretty_print: false,
///     ..Options::default()
/// };
/// let cleaned = clean_with_options(html, &options);
/// assert_eq!(cleaned.as_deref(), Some("<ul><li>first</li><li>second</li></ul>"));
/// ```
#[must_use]
pub fn clean_with_options(html: &str, options: &Options) -> Option<String> {
    pipeline::into_sentinel(try_clean_with_options(html, options))
}

/// Cleans an HTML document, returning the failure cause on error.
///
/// Nothing is logged at `error` level; the caller owns the error.
pub fn try_clean(html: &str) -> Result<String> {
    try_clean_with_options(html, &Options::default())
}

/// Cleans an HTML document with custom options, returning the failure
/// cause on error.
pub fn try_clean_with_options(html: &str, options: &Options) -> Result<String> {
    pipeline::clean_document(html, options)
}

/// Cleans HTML bytes, decoding them with the charset they declare.
///
/// Bytes that are not valid in the detected encoding yield `None`; no
/// replacement characters are substituted.
///
/// # Example
///
/// ```rust
/// use html_cleaner::clean_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 au lait</p></body></html>";
/// let cleaned = clean_bytes(html).unwrap_or_default();
/// assert!(cleaned.contains("<p>Café</p>"));
///
/// assert_eq!(clean_bytes(b"<p>\xC3\x28</p>"), None);
/// ```
#[must_use]
pub fn clean_bytes(html: &[u8]) -> Option<String> {
    clean_bytes_with_options(html, &Options::default())
}

/// Cleans HTML bytes with custom options.
#[must_use]
pub fn clean_bytes_with_options(html: &[u8], options: &Options) -> Option<String> {
    let result = encoding::decode_strict(html).and_then(|decoded| try_clean_with_options(&decoded, options));
    pipeline::into_sentinel(result)
}
