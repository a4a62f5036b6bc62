//! # omfl
//!
//! A parser and typed query API for OMFL, a small TOML-like configuration language.
//!
//! ## What is OMFL?
//!
//! OMFL files are made of dotted section headers and `key = value` lines. Values
//! are booleans, integers, floats, quoted strings with C-style escapes, and
//! arrays of any mix of those. Everything fits on one physical line.
//!
//! ```text
//! # service configuration
//! name = "gateway"
//!
//! [server.http]
//! port = 8080
//! hosts = ["a.local", "b.local",]   # trailing comma is fine
//! ratio = 0.75
//! ```
//!
//! ## Key Features
//!
//! - **Never fails on bad input**: syntax errors are recorded as positioned
//!   diagnostics on the returned [`Document`]
//! - **Typed queries**: strict extraction with [`Error::KindMismatch`] on misuse,
//!   plus `*_or` variants that fall back to a default
//! - **Ordered**: sections keep their keys in definition order
//! - **Serde export**: [`Document`], [`Node`] and [`Value`] implement
//!   `Serialize`, so a parsed file can be dumped as JSON
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! omfl = "0.1"
//! ```
//!
//! ### Reading Values
//!
//! ```rust
//! use omfl::parse;
//!
//! let doc = parse("[server]\nport = 8080\nhosts = [\"a\", \"b\"]");
//! assert!(doc.is_valid());
//!
//! assert_eq!(doc.get("server.port").as_int(), Ok(8080));
//! assert_eq!(doc.get("server.hosts").at(0).unwrap().as_str(), Ok("a"));
//!
//! // Missing paths yield `Nothing` instead of failing.
//! assert!(doc.get("server.timeout").is_nothing());
//! assert_eq!(doc.get("server.timeout").as_int_or(30), 30);
//! ```
//!
//! ### Handling Syntax Errors
//!
//! ```rust
//! use omfl::parse;
//!
//! let doc = parse("a = 1\na = 2");
//! assert!(!doc.is_valid());
//! assert_eq!(doc.errors(), "At 2:1. Duplicate definition of 'a'\n");
//! ```
//!
//! By default the scan stops at the first error. Use
//! [`ParseOptions::collect_all`] to report every malformed line.
//!
//! ### Building Values with omfl! Macro
//!
//! ```rust
//! use omfl::{omfl, Value};
//!
//! let hosts = omfl!(["a.local", "b.local", 8080]);
//! assert_eq!(hosts[2], Value::Int(8080));
//! ```
//!
//! ## Logging
//!
//! The parser emits [`tracing`](https://docs.rs/tracing) events (`debug` for
//! parse summaries and syntax errors, `trace` for sections and keys, `warn`
//! for unreadable input) and never installs a subscriber.
//!
//! ## Format Syntax
//!
//! See the [`syntax`] module for the accepted grammar.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`basic.rs`** - Parsing a string and reading typed values
//! - **`sections.rs`** - Walking sections and collecting every diagnostic
//!
//! Run any example with: `cargo run --example <name>`

pub mod document;
pub mod error;
mod line;
pub mod macros;
mod map;
pub mod node;
pub mod options;
mod path;
mod scalar;
pub mod syntax;
pub mod value;

pub use document::Document;
pub use error::{Diagnostic, Error, Result, SyntaxErrorKind};
pub use node::{Node, Section};
pub use options::ParseOptions;
pub use value::{Kind, Value};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Parses OMFL text into a [`Document`], stopping at the first syntax error.
///
/// # Examples
///
/// ```rust
/// use omfl::parse;
///
/// let doc = parse("key = 1");
/// assert!(doc.is_valid());
/// assert_eq!(doc.get("key").as_int(), Ok(1));
/// assert!(!doc.get("key").is_string());
/// ```
#[must_use]
pub fn parse(input: &str) -> Document {
    parse_with_options(input, ParseOptions::default())
}

/// Parses OMFL text into a [`Document`] with custom options.
///
/// # Examples
///
/// ```rust
/// use omfl::{parse_with_options, ParseOptions};
///
/// let doc = parse_with_options("a = ?\nb = ?", ParseOptions::collect_all());
/// assert_eq!(doc.diagnostics().len(), 2);
/// ```
#[must_use]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Document {
    document::build(input.split('\n'), options)
}

/// Parses OMFL text from a buffered reader.
///
/// Invalid UTF-8 is replaced with `U+FFFD`. A read error ends the input: the
/// document holds whatever was parsed before it, and a `warn` event is emitted.
///
/// # Examples
///
/// ```rust
/// use omfl::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[a]\nb = true\n"));
/// assert_eq!(doc.get("a.b").as_bool(), Ok(true));
/// ```
#[must_use]
pub fn from_reader<R>(reader: R) -> Document
where
    R: BufRead,
{
    from_reader_with_options(reader, ParseOptions::default())
}

/// Parses OMFL text from a buffered reader with custom options.
#[must_use]
pub fn from_reader_with_options<R>(reader: R, options: ParseOptions) -> Document
where
    R: BufRead,
{
    let source = options.source_name.clone();
    let lines = reader.split(b'\n').map_while(move |chunk| match chunk {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            read_failed(source.as_deref(), &err);
            None
        }
    });
    document::build(lines, options)
}

/// Reads and parses the OMFL file at `path`.
///
/// The document's [`source_name`](Document::source_name) is the path. A file
/// that cannot be opened yields a valid, empty document and a `warn` event.
///
/// # Examples
///
/// ```rust
/// use omfl::parse_file;
///
/// let doc = parse_file("does/not/exist.omfl");
/// assert!(doc.is_valid());
/// assert!(doc.root().as_section().unwrap().is_empty());
/// ```
#[must_use]
pub fn parse_file<P>(path: P) -> Document
where
    P: AsRef<Path>,
{
    parse_file_with_options(path, ParseOptions::default())
}

/// Reads and parses the OMFL file at `path` with custom options.
///
/// A `source_name` already set in `options` is kept; otherwise the path is used.
#[must_use]
pub fn parse_file_with_options<P>(path: P, mut options: ParseOptions) -> Document
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if options.source_name.is_none() {
        options.source_name = Some(path.display().to_string());
    }

    match File::open(path) {
        Ok(file) => from_reader_with_options(BufReader::new(file), options),
        Err(err) => {
            read_failed(options.source_name.as_deref(), &err);
            let mut document = Document::default();
            document.set_source_name(options.source_name);
            document
        }
    }
}

fn read_failed(source: Option<&str>, err: &io::Error) {
    warn!(
        source = source.unwrap_or("<input>"),
        error = %err,
        "cannot read OMFL input"
    );
}
