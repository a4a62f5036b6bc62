//! Error types for OMFL parsing and querying.
//!
//! Two channels are kept apart:
//!
//! - **Syntax errors** ([`SyntaxErrorKind`]) are data. The parser records each
//!   one as a [`Diagnostic`] on the document and marks it invalid; they never
//!   reach the caller as an `Err`.
//! - **API misuse** ([`Error`]) happens when a query asks a node for a kind it
//!   does not hold, e.g. [`Node::as_int`](crate::Node::as_int) on a string. It
//!   is returned to the caller and never recorded on the document.
//!
//! ## Examples
//!
//! ```rust
//! use omfl::{parse, Error, Kind};
//!
//! let doc = parse("name = \"omfl\"\nname = 2");
//! assert!(!doc.is_valid());
//! assert!(doc.errors().starts_with("At 2:1. "));
//!
//! let doc = parse("name = \"omfl\"");
//! let err = doc.get("name").as_int().unwrap_err();
//! assert_eq!(err, Error::KindMismatch { expected: Kind::Int, found: Kind::String });
//! ```

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// Failure of a typed query against a document node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The node holds a different kind than the one requested.
    #[error("Kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: Kind, found: Kind },
}

pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong on a malformed line.
///
/// The `Display` output is the message part of a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("Expected {expected}, but found end of line")]
    UnexpectedEnd { expected: &'static str },

    #[error("Expected {expected}, but found '{found}'")]
    UnexpectedChar { expected: &'static str, found: char },

    #[error("Unterminated string")]
    UnterminatedString,

    #[error("Unknown escape sequence '\\{0}'")]
    UnknownEscape(char),

    #[error("Integer literal out of range")]
    IntegerOverflow,

    #[error("Expected '=' in line, but not found")]
    MissingEquals,

    #[error("Expected key name, but found nothing")]
    EmptyKey,

    #[error("Expected section name, but found empty segment")]
    EmptySegment,

    #[error("Duplicate definition of '{0}'")]
    DuplicateKey(String),

    #[error("Section path runs into key '{0}'")]
    SectionOverKey(String),
}

/// A syntax error positioned within the slice that was being parsed.
///
/// `offset` is a byte offset relative to that slice; callers shift it into a
/// line column before it becomes a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: usize,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        SyntaxError { kind, offset }
    }

    pub(crate) fn unexpected(expected: &'static str, found: Option<char>, offset: usize) -> Self {
        let kind = match found {
            Some(found) => SyntaxErrorKind::UnexpectedChar { expected, found },
            None => SyntaxErrorKind::UnexpectedEnd { expected },
        };
        SyntaxError { kind, offset }
    }

    /// Moves the offset by `by` bytes, for errors raised inside a sub-slice.
    pub(crate) fn shifted(self, by: usize) -> Self {
        SyntaxError {
            offset: self.offset + by,
            ..self
        }
    }
}

/// One recorded syntax error, with a 1-based line and byte column.
///
/// # Examples
///
/// ```rust
/// use omfl::parse;
///
/// let doc = parse("\n\nkey = @");
/// let diagnostic = &doc.diagnostics()[0];
/// assert_eq!(diagnostic.line, 3);
/// assert_eq!(diagnostic.column, 7);
/// assert_eq!(
///     diagnostic.to_string(),
///     r#"At 3:7. Expected a value ("[+-0-9tf), but found '@'"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub kind: SyntaxErrorKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "At {}:{}. {}", self.line, self.column, self.kind)
    }
}
