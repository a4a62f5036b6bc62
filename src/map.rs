//! Ordered child map of a section node.
//!
//! [`Children`] wraps [`IndexMap`] so that a section keeps its keys and
//! subsections in definition order. Iteration order is what
//! [`Section::iter`](crate::Section::iter) and the serde export expose.
//!
//! Keys are unique within one section; the scan checks for an existing entry
//! before inserting, so [`Children::insert`] never overwrites.

use crate::document::SectionId;
use crate::Value;
use indexmap::IndexMap;

/// One entry of a section: either a nested section or a key's value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Child {
    Section(SectionId),
    Value(Value),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Children(IndexMap<String, Child>);

impl Children {
    pub(crate) fn new() -> Self {
        Children(IndexMap::new())
    }

    /// Adds an entry. The caller has already checked that `key` is absent.
    pub(crate) fn insert(&mut self, key: String, child: Child) {
        self.0.insert(key, child);
    }

    pub(crate) fn get(&self, key: &str) -> Option<&Child> {
        self.0.get(key)
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn keys(&self) -> indexmap::map::Keys<'_, String, Child> {
        self.0.keys()
    }

    pub(crate) fn iter(&self) -> indexmap::map::Iter<'_, String, Child> {
        self.0.iter()
    }
}
