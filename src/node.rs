//! Typed, read-only queries over a parsed document.
//!
//! A [`Node`] is a cheap `Copy` handle into a [`Document`]: either a section
//! or a value. Lookups that miss yield a node holding [`Value::NOTHING`], so
//! chained queries never fail midway:
//!
//! ```rust
//! use omfl::parse;
//!
//! let doc = parse("[db]\nhosts = [\"a\", \"b\"]\nport = 5432");
//!
//! assert_eq!(doc.get("db.port").as_int(), Ok(5432));
//! assert_eq!(doc.get("db.hosts").at(1).unwrap().as_str(), Ok("b"));
//! assert!(doc.get("db.hosts").at(7).unwrap().is_nothing());
//! assert!(doc.get("db.user").is_nothing());
//! assert_eq!(doc.get("db.timeout").as_int_or(30), 30);
//! ```
//!
//! Typed extraction is strict: [`Node::as_int`] on a float, or any `as_*` on
//! a section, returns [`Error::KindMismatch`](crate::Error::KindMismatch).

use crate::document::SectionId;
use crate::map::Child;
use crate::{path, Document, Error, Kind, Result, Value};
use serde::{Serialize, Serializer};
use std::fmt;

/// A handle to one node of a [`Document`].
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    /// A section holding named children.
    Section(Section<'a>),
    /// A key's value, an array element, or the `Nothing` sentinel for a miss.
    Value(&'a Value),
}

/// A section node: an ordered set of named keys and subsections.
#[derive(Clone, Copy)]
pub struct Section<'a> {
    doc: &'a Document,
    id: SectionId,
}

impl<'a> Node<'a> {
    /// The node returned for paths and indexes that do not exist.
    pub const MISSING: Node<'static> = Node::Value(Value::NOTHING);

    pub(crate) fn section(doc: &'a Document, id: SectionId) -> Self {
        Node::Section(Section { doc, id })
    }

    /// Looks up a dotted path relative to this node.
    ///
    /// Returns [`Node::MISSING`] if any segment is absent, or if the path tries
    /// to descend below a value.
    #[must_use]
    pub fn get(&self, path: &str) -> Node<'a> {
        self.lookup(path).unwrap_or(Node::MISSING)
    }

    /// Looks up a dotted path relative to this node, returning `None` on a miss.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<Node<'a>> {
        let mut node = *self;
        for segment in path::split(path) {
            node = match node {
                Node::Section(section) => section.get(segment.name)?,
                Node::Value(_) => return None,
            };
        }
        Some(node)
    }

    /// Returns the kind of this node; [`Kind::Section`] for sections.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match *self {
            Node::Section(_) => Kind::Section,
            Node::Value(value) => value.kind(),
        }
    }

    /// Returns the value, or `None` for a section.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Node::Value(value) => Some(value),
            Node::Section(_) => None,
        }
    }

    /// Returns `true` if the node is a section.
    #[must_use]
    pub fn is_section(&self) -> bool {
        matches!(self, Node::Section(_))
    }

    /// Returns `true` for a `Nothing` value, which is what a missed lookup yields.
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        self.value().is_some_and(Value::is_nothing)
    }

    /// Returns `true` if the node holds a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.value().is_some_and(Value::is_bool)
    }

    /// Returns `true` if the node holds an integer.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.value().is_some_and(Value::is_int)
    }

    /// Returns `true` if the node holds a float.
    #[must_use]
    pub fn is_float(&self) -> bool {
        self.value().is_some_and(Value::is_float)
    }

    /// Returns `true` if the node holds a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.value().is_some_and(Value::is_string)
    }

    /// Returns `true` if the node holds an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.value().is_some_and(Value::is_array)
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::KindMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Returns the boolean held by this node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the node is not a boolean value.
    pub fn as_bool(&self) -> Result<bool> {
        self.value()
            .and_then(Value::as_bool)
            .ok_or_else(|| self.mismatch(Kind::Bool))
    }

    /// Returns the integer held by this node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the node is not an integer value.
    pub fn as_int(&self) -> Result<i64> {
        self.value()
            .and_then(Value::as_int)
            .ok_or_else(|| self.mismatch(Kind::Int))
    }

    /// Returns the float held by this node. Integers are not converted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the node is not a float value.
    pub fn as_float(&self) -> Result<f32> {
        self.value()
            .and_then(Value::as_float)
            .ok_or_else(|| self.mismatch(Kind::Float))
    }

    /// Returns the string held by this node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the node is not a string value.
    pub fn as_str(&self) -> Result<&'a str> {
        self.value()
            .and_then(Value::as_str)
            .ok_or_else(|| self.mismatch(Kind::String))
    }

    /// Returns the elements of the array held by this node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the node is not an array value.
    pub fn as_array(&self) -> Result<&'a [Value]> {
        self.value()
            .and_then(Value::as_array)
            .ok_or_else(|| self.mismatch(Kind::Array))
    }

    /// Returns this node as a section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the node is a value.
    pub fn as_section(&self) -> Result<Section<'a>> {
        match *self {
            Node::Section(section) => Ok(section),
            Node::Value(_) => Err(self.mismatch(Kind::Section)),
        }
    }

    /// Returns the boolean held by this node, or `default` for any other kind.
    #[must_use]
    pub fn as_bool_or(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    /// Returns the integer held by this node, or `default` for any other kind.
    #[must_use]
    pub fn as_int_or(&self, default: i64) -> i64 {
        self.as_int().unwrap_or(default)
    }

    /// Returns the float held by this node, or `default` for any other kind.
    #[must_use]
    pub fn as_float_or(&self, default: f32) -> f32 {
        self.as_float().unwrap_or(default)
    }

    /// Returns the string held by this node, or `default` for any other kind.
    #[must_use]
    pub fn as_str_or(&self, default: &'a str) -> &'a str {
        self.as_str().unwrap_or(default)
    }

    /// Returns the array element at `index`.
    ///
    /// Out of range indexes, and values that are not arrays, yield
    /// [`Node::MISSING`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the node is a section, which holds
    /// no value to index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::parse;
    ///
    /// let doc = parse("[s]\nlist = [1, [2, 3]]\nflag = true");
    /// assert_eq!(doc.get("s.list").at(1).unwrap().at(0).unwrap().as_int(), Ok(2));
    /// assert!(doc.get("s.flag").at(0).unwrap().is_nothing());
    /// assert!(doc.get("s").at(0).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<Node<'a>> {
        match *self {
            Node::Value(value) => Ok(Node::Value(&value[index])),
            Node::Section(_) => Err(self.mismatch(Kind::Array)),
        }
    }
}

impl<'a> Section<'a> {
    /// Returns the number of keys and subsections directly in this section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.doc.children(self.id).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc.children(self.id).is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.doc.children(self.id).contains_key(name)
    }

    /// Returns the direct child called `name`. No dotted paths.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Node<'a>> {
        let doc = self.doc;
        doc.children(self.id)
            .get(name)
            .map(|child| Self::node(doc, child))
    }

    /// Iterates over child names in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        let doc = self.doc;
        doc.children(self.id).keys().map(String::as_str)
    }

    /// Iterates over children in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Node<'a>)> + 'a {
        let doc = self.doc;
        doc.children(self.id)
            .iter()
            .map(move |(name, child)| (name.as_str(), Self::node(doc, child)))
    }

    fn node(doc: &'a Document, child: &'a Child) -> Node<'a> {
        match child {
            Child::Section(id) => Node::section(doc, *id),
            Child::Value(value) => Node::Value(value),
        }
    }
}

impl fmt::Debug for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for Node<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Node::Value(value) => value.serialize(serializer),
            Node::Section(section) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(section.len()))?;
                for (name, child) in section.iter() {
                    map.serialize_entry(name, &child)?;
                }
                map.end()
            }
        }
    }
}
