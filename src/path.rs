//! Section headers and dotted paths.
//!
//! A header line is `[` segment { `.` segment } `]`, where every segment is a
//! run of `[A-Za-z0-9_-]`. Query paths passed to
//! [`Document::get`](crate::Document::get) are split on `.` the same way.
//!
//! Empty segments (`[a..b]`, `[]`) pass header validation and are rejected
//! while the path is walked, because the walk is where a segment turns into a
//! node.

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::scalar::is_name_char;

/// One segment of a dotted path, with its byte offset in the source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub name: &'a str,
    pub offset: usize,
}

/// Splits `path` on every `.`, keeping empty segments.
pub(crate) fn split(path: &str) -> impl Iterator<Item = Segment<'_>> {
    let mut offset = 0;
    path.split('.').map(move |name| {
        let segment = Segment { name, offset };
        offset += name.len() + 1;
        segment
    })
}

/// Validates a section header and returns its path segments.
///
/// `header` starts with `[` and has no trailing whitespace. Offsets in the
/// result and in errors are relative to `header`.
pub(crate) fn parse_header(header: &str) -> Result<Vec<Segment<'_>>, SyntaxError> {
    let last = header.len().saturating_sub(1);
    if header.len() < 2 || !header.ends_with(']') {
        return Err(SyntaxError::unexpected(
            "']' at end of section header",
            header.chars().last(),
            last,
        ));
    }

    let inner = &header[1..last];
    if let Some((index, ch)) = inner
        .char_indices()
        .find(|&(_, ch)| !is_name_char(ch) && ch != '.')
    {
        return Err(SyntaxError::unexpected(
            "section name character [A-Za-z0-9_-.]",
            Some(ch),
            index + 1,
        ));
    }

    if inner.ends_with('.') {
        return Err(SyntaxError::unexpected("section name", Some(']'), last));
    }

    Ok(split(inner)
        .map(|segment| Segment {
            offset: segment.offset + 1,
            ..segment
        })
        .collect())
}

/// Error for an empty segment found while walking a path.
pub(crate) fn empty_segment(segment: &Segment<'_>) -> SyntaxError {
    SyntaxError::new(SyntaxErrorKind::EmptySegment, segment.offset)
}
