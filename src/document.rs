//! The document tree and the line-by-line scan that builds it.
//!
//! Sections live in an arena (`Vec<Children>`) and refer to each other by
//! [`SectionId`]. Key values are stored inline in their section's child map.
//! The active cursor of the scan is a `SectionId`, so the tree can be moved
//! or cloned freely while and after it is built.
//!
//! ## Scan
//!
//! Lines are numbered from 1. Each line is classified; a section header moves
//! the active cursor (creating missing sections along the way, reopening
//! existing ones), a key/value line adds a value to the active section. Any
//! syntax error is recorded as a [`Diagnostic`]; once
//! [`ParseOptions::max_errors`] diagnostics exist the scan stops.

use crate::error::{Diagnostic, SyntaxError, SyntaxErrorKind};
use crate::line::{self, Line};
use crate::map::{Child, Children};
use crate::node::Node;
use crate::path::{self, Segment};
use crate::{ParseOptions, Value};
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::{debug, trace};

/// Index of a section node in a document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SectionId(usize);

impl SectionId {
    pub(crate) const ROOT: SectionId = SectionId(0);
}

/// A parsed OMFL document.
///
/// Produced by [`parse`](crate::parse) and friends. A document is immutable
/// once returned and can be shared between threads for reading.
///
/// # Examples
///
/// ```rust
/// use omfl::Document;
///
/// let doc = Document::parse("[server]\nport = 8080");
/// assert!(doc.is_valid());
/// assert_eq!(doc.get("server.port").as_int(), Ok(8080));
/// assert!(doc.get("server.host").is_nothing());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    sections: Vec<Children>,
    diagnostics: Vec<Diagnostic>,
    source_name: Option<String>,
}

impl Document {
    /// Parses `input` with default options.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        crate::parse(input)
    }

    /// Returns the root section.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node::section(self, SectionId::ROOT)
    }

    /// Looks up a dotted path from the root.
    ///
    /// A path that does not exist yields a node holding [`Value::NOTHING`];
    /// check [`Node::is_nothing`] or use [`Document::lookup`] instead.
    #[must_use]
    pub fn get(&self, path: &str) -> Node<'_> {
        self.root().get(path)
    }

    /// Looks up a dotted path from the root, returning `None` if it does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::parse;
    ///
    /// let doc = parse("[a]\nb = 1");
    /// assert!(doc.lookup("a.b").is_some());
    /// assert!(doc.lookup("a.c").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<Node<'_>> {
        self.root().lookup(path)
    }

    /// Returns `true` if no syntax error was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the recorded syntax errors, in input order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the diagnostics as text, one `At <line>:<column>. <message>` per line.
    ///
    /// Empty for a valid document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::parse;
    ///
    /// let doc = parse("a = 1\na = 2");
    /// assert_eq!(doc.errors(), "At 2:1. Duplicate definition of 'a'\n");
    /// ```
    #[must_use]
    pub fn errors(&self) -> String {
        let mut text = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(text, "{}", diagnostic);
        }
        text
    }

    /// Returns the label given through [`ParseOptions::with_source_name`], if any.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub(crate) fn set_source_name(&mut self, name: Option<String>) {
        self.source_name = name;
    }

    pub(crate) fn children(&self, id: SectionId) -> &Children {
        &self.sections[id.0]
    }
}

impl Default for Document {
    /// An empty, valid document.
    fn default() -> Self {
        Document {
            sections: vec![Children::new()],
            diagnostics: Vec::new(),
            source_name: None,
        }
    }
}

impl FromStr for Document {
    type Err = Infallible;

    /// Never fails: syntax errors are recorded on the document.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::parse(s))
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root().serialize(serializer)
    }
}

/// Scans `lines` into a document.
pub(crate) fn build<I, S>(lines: I, options: ParseOptions) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = Builder::new(options);
    let mut count = 0;

    for (index, text) in lines.into_iter().enumerate() {
        count = index + 1;
        builder.feed(count, text.as_ref());
        if builder.is_done() {
            break;
        }
    }

    let document = builder.finish();
    debug!(
        source = document.source_name().unwrap_or("<input>"),
        lines = count,
        valid = document.is_valid(),
        errors = document.diagnostics().len(),
        "parsed document"
    );
    document
}

struct Builder {
    sections: Vec<Children>,
    diagnostics: Vec<Diagnostic>,
    active: SectionId,
    options: ParseOptions,
}

impl Builder {
    fn new(options: ParseOptions) -> Self {
        Builder {
            sections: vec![Children::new()],
            diagnostics: Vec::new(),
            active: SectionId::ROOT,
            options,
        }
    }

    /// The scan only stops early once the document is already invalid.
    fn is_done(&self) -> bool {
        !self.diagnostics.is_empty() && self.diagnostics.len() >= self.options.max_errors.max(1)
    }

    fn feed(&mut self, number: usize, text: &str) {
        match line::classify(text) {
            Ok(Line::Blank) => {}
            Ok(Line::Section { header, offset }) => {
                match path::parse_header(header).and_then(|segments| self.open(&segments)) {
                    Ok(id) => {
                        trace!(line = number, section = header, "entered section");
                        self.active = id;
                    }
                    Err(err) => {
                        self.active = SectionId::ROOT;
                        self.report(number, err.shifted(offset));
                    }
                }
            }
            Ok(Line::Entry { key, offset, value }) => {
                if let Err(kind) = self.insert(key, value) {
                    self.report(number, SyntaxError::new(kind, offset));
                } else {
                    trace!(line = number, key, "added key");
                }
            }
            Err(err) => self.report(number, err),
        }
    }

    /// Walks `segments` from the root, creating missing sections.
    fn open(&mut self, segments: &[Segment<'_>]) -> Result<SectionId, SyntaxError> {
        let mut current = SectionId::ROOT;

        for segment in segments {
            if segment.name.is_empty() {
                return Err(path::empty_segment(segment));
            }

            let existing = match self.sections[current.0].get(segment.name) {
                Some(Child::Section(id)) => Some(*id),
                Some(Child::Value(_)) => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::SectionOverKey(segment.name.to_string()),
                        segment.offset,
                    ))
                }
                None => None,
            };

            current = match existing {
                Some(id) => id,
                None => self.add_section(current, segment.name),
            };
        }

        Ok(current)
    }

    fn add_section(&mut self, parent: SectionId, name: &str) -> SectionId {
        let id = SectionId(self.sections.len());
        self.sections.push(Children::new());
        self.sections[parent.0].insert(name.to_string(), Child::Section(id));
        id
    }

    fn insert(&mut self, key: &str, value: Value) -> Result<(), SyntaxErrorKind> {
        let children = &mut self.sections[self.active.0];
        if children.contains_key(key) {
            return Err(SyntaxErrorKind::DuplicateKey(key.to_string()));
        }
        children.insert(key.to_string(), Child::Value(value));
        Ok(())
    }

    fn report(&mut self, number: usize, err: SyntaxError) {
        let diagnostic = Diagnostic {
            line: number,
            column: err.offset + 1,
            kind: err.kind,
        };
        debug!(
            line = diagnostic.line,
            column = diagnostic.column,
            error = %diagnostic.kind,
            "syntax error"
        );
        self.diagnostics.push(diagnostic);
    }

    fn finish(self) -> Document {
        Document {
            sections: self.sections,
            diagnostics: self.diagnostics,
            source_name: self.options.source_name,
        }
    }
}
