//! Configuration options for parsing.
//!
//! [`ParseOptions`] controls how far the scan goes after a syntax error and
//! which label the resulting document carries.
//!
//! ## Examples
//!
//! ```rust
//! use omfl::{parse_with_options, ParseOptions};
//!
//! let input = "a = 1\nb = ?\nc = 3\nd = !";
//!
//! // Default: stop at the first error.
//! let doc = parse_with_options(input, ParseOptions::new());
//! assert_eq!(doc.diagnostics().len(), 1);
//! assert!(doc.get("c").is_nothing());
//!
//! // Keep going and report every malformed line.
//! let doc = parse_with_options(input, ParseOptions::collect_all());
//! assert_eq!(doc.diagnostics().len(), 2);
//! assert_eq!(doc.get("c").as_int(), Ok(3));
//! ```

/// Configuration options for a parse.
///
/// # Examples
///
/// ```rust
/// use omfl::ParseOptions;
///
/// let options = ParseOptions::new()
///     .with_max_errors(10)
///     .with_source_name("server.omfl");
/// assert_eq!(options.max_errors, 10);
/// assert_eq!(options.source_name.as_deref(), Some("server.omfl"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// The scan stops once this many diagnostics were recorded. Values below 1 count as 1.
    pub max_errors: usize,
    /// Label for the input (usually a file path), kept on the document and in log events.
    pub source_name: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_errors: 1,
            source_name: None,
        }
    }
}

impl ParseOptions {
    /// Creates default options: stop at the first syntax error, no source name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert_eq!(options.max_errors, 1);
    /// assert!(options.source_name.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that scan the whole input and record every syntax error.
    ///
    /// A malformed line is skipped, a malformed section header moves the
    /// active section back to the root, and a duplicate key keeps its first
    /// definition. The document is still invalid.
    #[must_use]
    pub fn collect_all() -> Self {
        ParseOptions {
            max_errors: usize::MAX,
            ..Default::default()
        }
    }

    /// Sets how many diagnostics are recorded before the scan stops.
    ///
    /// Values below 1 are treated as 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::ParseOptions;
    ///
    /// assert_eq!(ParseOptions::new().with_max_errors(0).max_errors, 1);
    /// ```
    #[must_use]
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors.max(1);
        self
    }

    /// Sets the label attached to the document and its log events.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}
