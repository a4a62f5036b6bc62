//! Line classification and the key/value grammar.
//!
//! Every physical line is one of:
//!
//! - blank, or a comment whose first non-space character is `#`
//! - a section header, whose first non-space character is `[`
//! - a key/value line: `key = value [# comment]`
//!
//! Keys are runs of `[A-Za-z0-9_-]`. Only whitespace and an optional trailing
//! comment may follow the value.

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::scalar::{is_name_char, is_space, parse_value, Cursor};
use crate::Value;

/// A classified line. Offsets are byte offsets into the line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Line<'a> {
    Blank,
    Section { header: &'a str, offset: usize },
    Entry { key: &'a str, offset: usize, value: Value },
}

/// Classifies one physical line; errors carry offsets relative to `line`.
pub(crate) fn classify(line: &str) -> Result<Line<'_>, SyntaxError> {
    let Some(start) = line.find(|ch: char| !is_space(ch)) else {
        return Ok(Line::Blank);
    };

    let content = &line[start..];
    if content.starts_with('#') {
        return Ok(Line::Blank);
    }
    if content.starts_with('[') {
        return Ok(Line::Section {
            header: content.trim_end_matches(is_space),
            offset: start,
        });
    }

    parse_entry(line, start)
}

fn parse_entry(line: &str, start: usize) -> Result<Line<'_>, SyntaxError> {
    let Some(eq) = line.find('=') else {
        return Err(SyntaxError::new(SyntaxErrorKind::MissingEquals, start));
    };

    let head = &line[start..eq];
    let key_len = head.find(|ch: char| !is_name_char(ch)).unwrap_or(head.len());
    let key = &head[..key_len];

    if let Some((index, ch)) = head[key_len..]
        .char_indices()
        .find(|&(_, ch)| !is_space(ch))
    {
        let expected = if key.is_empty() { "key name" } else { "'='" };
        return Err(SyntaxError::unexpected(
            expected,
            Some(ch),
            start + key_len + index,
        ));
    }
    if key.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::EmptyKey, start));
    }

    let value_start = eq + 1;
    let mut cursor = Cursor::new(&line[value_start..]);
    let value = parse_value(&mut cursor).map_err(|err| err.shifted(value_start))?;

    cursor.skip_spaces();
    match cursor.peek_char() {
        None | Some('#') => Ok(Line::Entry {
            key,
            offset: start,
            value,
        }),
        found => Err(SyntaxError::unexpected(
            "end of line",
            found,
            value_start + cursor.pos(),
        )),
    }
}
