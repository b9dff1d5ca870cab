//! Configuration options for cleaning.
//!
//! The number of words kept per text node is fixed at one; the options
//! only shape how the cleaned tree is written back out.

/// Configuration options for cleaning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use html_cleaner::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     pretty_print: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Lay out element-only content one child per line, indented.
    ///
    /// Mixed content (elements interleaved with text) is always written
    /// inline so no text is introduced.
    ///
    /// Default: `true`
    pub pretty_print: bool,

    /// Spaces per nesting level when pretty printing.
    ///
    /// Default: `2`
    pub indent: usize,

    /// Maximum element nesting depth accepted from the parser.
    ///
    /// Deeper documents are rejected rather than risking stack exhaustion
    /// while building and serializing the tree.
    ///
    /// Default: `512`
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pretty_print: true,
            indent: 2,
            max_depth: 512,
        }
    }
}
