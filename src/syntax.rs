//! OMFL Syntax
//!
//! This module documents the OMFL configuration syntax as accepted by this
//! library.
//!
//! # Overview
//!
//! An OMFL file is read one physical line at a time. There are no multi-line
//! values and no line continuations. Each line is exactly one of:
//!
//! - blank, or a full-line comment
//! - a section header
//! - a key/value pair
//!
//! Leading and trailing whitespace never matters outside quoted strings.
//! Whitespace is space, tab, `\r`, vertical tab and form feed, so files with
//! CRLF line endings parse the same as LF files.
//!
//! # Comments
//!
//! A line whose first non-space character is `#` is ignored. A key/value line
//! may end with a comment after its value:
//!
//! ```text
//! # full-line comment
//! port = 8080   # trailing comment
//! ```
//!
//! Section header lines may not carry a trailing comment.
//!
//! # Sections
//!
//! ```text
//! [server]
//! [server.http]
//! [build-2.linux_x64]
//! ```
//!
//! **Rules**:
//! - A header starts with `[` and the line ends with `]`
//! - Segments are separated by `.` and made of `[A-Za-z0-9_-]`
//! - Empty segments (`[]`, `[a..b]`, `[.a]`, `[a.]`) are errors
//! - Missing sections along the path are created
//! - Revisiting a section is allowed; new keys are added to it
//! - A path may not run through or end on an existing key
//!
//! Key/value lines before the first header belong to the root section.
//!
//! # Keys
//!
//! ```text
//! name = "gateway"
//! max-retries = 3
//! ```
//!
//! **Rules**:
//! - The key is everything before the first `=`, trimmed, and must be a
//!   non-empty run of `[A-Za-z0-9_-]`
//! - A line that is not blank, a comment or a header must contain `=`
//! - A key may be defined only once per section; a key and a subsection may
//!   not share a name
//!
//! # Values
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | Boolean | `true` or `false` | `debug = false` |
//! | Integer | optional signs, decimal digits | `port = 8080` |
//! | Float | integer part, `.`, fraction digits | `ratio = 0.75` |
//! | String | `"` ... `"` with escapes | `name = "gw"` |
//! | Array | `[` values separated by `,` `]` | `ports = [80, 443]` |
//!
//! Only whitespace and an optional `# comment` may follow a value.
//!
//! ## Numbers
//!
//! Any number of `+` and `-` signs may precede the digits; each `-` flips the
//! sign, so `--3` is `3` and `+-3` is `-3`. Leading zeros are allowed (`007`
//! is `7`). A `.` must be followed by at least one digit; there is no exponent
//! notation and no bare `.5` or `5.`.
//!
//! Integers are 64-bit signed; a literal outside that range is an error.
//! Floats are single precision. The fraction is accumulated digit by digit in
//! `f32`, so long fractions round the same way on every platform.
//!
//! ## Strings
//!
//! Strings are enclosed in double quotes and may contain any character except
//! an unescaped `"`. They must close on the same line.
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\a` `\b` `\t` `\n` `\v` `\f` `\r` | control characters |
//! | `\'` `\"` `\\` `\?` | the character itself |
//! | `\o`, `\oo`, `\ooo` | octal byte, 1 to 3 digits |
//! | `\xh`, `\xhh` | hex byte, 1 or 2 digits, either case |
//!
//! A byte escape produces the character with the same code point, so `\x41`
//! and `\101` are both `A` and `\xe9` is `é`. Octal values above `\377` keep
//! their low byte. Any other character after `\` is an error.
//!
//! ## Arrays
//!
//! ```text
//! empty = []
//! mixed = [1, "two", [3.0, false],]
//! ```
//!
//! Elements may be of any kind, including nested arrays. A trailing comma
//! before `]` is accepted.
//!
//! # Diagnostics
//!
//! Every syntax error is reported as `At <line>:<column>. <message>`. Lines
//! and columns start at 1; the column is the byte position in the line where
//! the problem was found.
//!
//! ```text
//! At 3:7. Expected a value ("[+-0-9tf), but found '@'
//! At 5:1. Duplicate definition of 'port'
//! ```
//!
//! # Example
//!
//! ```text
//! # gateway configuration
//! name = "gateway"
//! debug = false
//!
//! [server.http]
//! port = 8080
//! hosts = ["a.local", "b.local"]
//! timeout = 2.5   # seconds
//!
//! [server.tls]
//! enabled = true
//! ciphers = []
//! ```
//!
//! # Limitations
//!
//! - **No multi-line values**: strings and arrays end on their line
//! - **No exponents**: `1e3` is an error
//! - **No inline tables** and no arrays of sections
//! - **No writer**: documents are read-only; [`serde::Serialize`] exports the
//!   parsed tree to other formats

// This module contains only documentation; no implementation code
