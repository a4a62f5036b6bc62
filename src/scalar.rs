//! Scalar value grammar.
//!
//! Parses exactly one value expression from a [`Cursor`]:
//!
//! ```text
//! value   = array | string | boolean | number
//! array   = "[" [ value { "," value } [ "," ] ] "]"
//! string  = '"' { char | escape } '"'
//! boolean = "true" | "false"
//! number  = { "+" | "-" } digit { digit } [ "." digit { digit } ]
//! ```
//!
//! Every sign character toggles the sign, so `+-3` is `-3`. Fractions are
//! accumulated digit by digit in `f32` as `whole + sum(digit_i * 0.1^i)`, not
//! through a correctly rounded decimal conversion.

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::Value;

const EXPECTED_VALUE: &str = "a value (\"[+-0-9tf)";

/// Whitespace as understood by the line grammar (the C `isspace` set).
#[inline]
pub(crate) fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Characters allowed in key names and section path segments.
#[inline]
pub(crate) fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// A read position over one slice of a line.
///
/// Offsets reported by [`Cursor::pos`] and carried by errors are byte offsets
/// relative to the start of the slice.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor { input, position: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.position
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    pub(crate) fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn skip_spaces(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !is_space(ch) {
                break;
            }
            self.next_char();
        }
    }

    fn advance(&mut self, bytes: usize) {
        self.position += bytes;
    }

    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        SyntaxError::unexpected(expected, self.peek_char(), self.position)
    }
}

/// Parses one value, skipping leading spaces first.
///
/// On success the cursor sits just past the value.
pub(crate) fn parse_value(cursor: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    cursor.skip_spaces();
    match cursor.peek_char() {
        Some('[') => parse_array(cursor),
        Some('"') => parse_string(cursor),
        Some('t') | Some('f') => parse_bool(cursor),
        Some('+' | '-' | '0'..='9') => parse_number(cursor),
        _ => Err(cursor.unexpected(EXPECTED_VALUE)),
    }
}

fn parse_array(cursor: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    cursor.next_char(); // consume '['
    let mut items = Vec::new();

    loop {
        cursor.skip_spaces();
        match cursor.peek_char() {
            None => return Err(cursor.unexpected("a value or ']'")),
            Some(']') => {
                cursor.next_char();
                break;
            }
            Some(_) => {}
        }

        items.push(parse_value(cursor)?);

        cursor.skip_spaces();
        match cursor.peek_char() {
            Some(',') => {
                cursor.next_char();
            }
            Some(']') => {
                cursor.next_char();
                break;
            }
            _ => return Err(cursor.unexpected("',' or ']'")),
        }
    }

    Ok(Value::from(items))
}

fn parse_string(cursor: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    cursor.next_char(); // consume opening quote
    let mut text = String::new();

    loop {
        match cursor.next_char() {
            Some('"') => return Ok(Value::from(text)),
            Some('\\') => text.push(decode_escape(cursor)?),
            Some(ch) => text.push(ch),
            None => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnterminatedString,
                    cursor.pos(),
                ))
            }
        }
    }
}

/// Decodes one escape sequence; the cursor sits just past the backslash.
///
/// Octal and hex escapes produce a single byte, which is stored as the
/// character with the same code (U+0000 to U+00FF).
fn decode_escape(cursor: &mut Cursor<'_>) -> Result<char, SyntaxError> {
    let at = cursor.pos();
    let Some(ch) = cursor.next_char() else {
        return Err(cursor.unexpected("escape character"));
    };

    let decoded = match ch {
        '0'..='7' => {
            let mut code = ch as u32 - '0' as u32;
            for _ in 1..3 {
                match cursor.peek_char() {
                    Some(digit @ '0'..='7') => {
                        cursor.next_char();
                        code = code * 8 + (digit as u32 - '0' as u32);
                    }
                    _ => break,
                }
            }
            char::from(code as u8)
        }
        'x' => {
            let Some(mut code) = cursor.peek_char().and_then(|c| c.to_digit(16)) else {
                return Err(cursor.unexpected("hex digit"));
            };
            cursor.next_char();
            if let Some(digit) = cursor.peek_char().and_then(|c| c.to_digit(16)) {
                cursor.next_char();
                code = code * 16 + digit;
            }
            char::from(code as u8)
        }
        '\'' | '"' | '\\' | '?' => ch,
        'a' => '\x07',
        'b' => '\x08',
        't' => '\t',
        'n' => '\n',
        'v' => '\x0B',
        'f' => '\x0C',
        'r' => '\r',
        other => {
            return Err(SyntaxError::new(
                SyntaxErrorKind::UnknownEscape(other),
                at,
            ))
        }
    };

    Ok(decoded)
}

fn parse_bool(cursor: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    let start = cursor.pos();
    let rest = cursor.rest();
    let (literal, value) = if rest.starts_with("true") {
        ("true", true)
    } else if rest.starts_with("false") {
        ("false", false)
    } else {
        return Err(bad_literal(rest, start));
    };

    cursor.advance(literal.len());
    if cursor.peek_char().is_some_and(is_name_char) {
        return Err(bad_literal(rest, start));
    }
    Ok(Value::Bool(value))
}

fn bad_literal(rest: &str, start: usize) -> SyntaxError {
    SyntaxError::unexpected("'true' or 'false'", rest.chars().next(), start)
}

fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    let mut negative = false;
    while let Some(sign @ ('+' | '-')) = cursor.peek_char() {
        cursor.next_char();
        if sign == '-' {
            negative = !negative;
        }
    }

    let digits_start = cursor.pos();
    let mut whole: u64 = 0;
    while let Some(digit) = cursor.peek_char().and_then(|c| c.to_digit(10)) {
        whole = whole
            .checked_mul(10)
            .and_then(|w| w.checked_add(u64::from(digit)))
            .ok_or_else(|| SyntaxError::new(SyntaxErrorKind::IntegerOverflow, digits_start))?;
        cursor.next_char();
    }
    if cursor.pos() == digits_start {
        return Err(cursor.unexpected("digit"));
    }

    if cursor.peek_char() == Some('.') {
        cursor.next_char();
        let fraction_start = cursor.pos();
        let mut fraction = 0.0f32;
        let mut scale = 0.1f32;
        while let Some(digit) = cursor.peek_char().and_then(|c| c.to_digit(10)) {
            fraction += scale * digit as f32;
            scale *= 0.1;
            cursor.next_char();
        }
        if cursor.pos() == fraction_start {
            return Err(cursor.unexpected("digit"));
        }

        let magnitude = fraction + whole as f32;
        return Ok(Value::Float(if negative { -magnitude } else { magnitude }));
    }

    let value = if negative {
        0i64.checked_sub_unsigned(whole)
    } else {
        i64::try_from(whole).ok()
    };
    value
        .map(Value::Int)
        .ok_or_else(|| SyntaxError::new(SyntaxErrorKind::IntegerOverflow, digits_start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Value, SyntaxError> {
        let mut cursor = Cursor::new(input);
        parse_value(&mut cursor)
    }

    fn parse_all(input: &str) -> (Value, usize) {
        let mut cursor = Cursor::new(input);
        let value = parse_value(&mut cursor).unwrap();
        (value, cursor.pos())
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse("42").unwrap(), Value::Int(42));
        assert_eq!(parse("  007").unwrap(), Value::Int(7));
        assert_eq!(parse("-12").unwrap(), Value::Int(-12));
        assert_eq!(parse("+5").unwrap(), Value::Int(5));
    }

    #[test]
    fn test_signs_toggle() {
        assert_eq!(parse("+-3").unwrap(), Value::Int(-3));
        assert_eq!(parse("--3").unwrap(), Value::Int(3));
        assert_eq!(parse("-+-+-3").unwrap(), Value::Int(-3));
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(
            parse("9223372036854775807").unwrap(),
            Value::Int(i64::MAX)
        );
        assert_eq!(
            parse("-9223372036854775808").unwrap(),
            Value::Int(i64::MIN)
        );
        let err = parse("9223372036854775808").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::IntegerOverflow);
        let err = parse("123456789012345678901").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::IntegerOverflow);
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse("-3.5").unwrap(), Value::Float(-3.5));
        let quarter = parse("0.25").unwrap().as_float().unwrap();
        assert!((quarter - 0.25).abs() < f32::EPSILON);

        let mut expected = 0.0f32;
        let mut scale = 0.1f32;
        for digit in [1.0f32, 2.0, 3.0] {
            expected += scale * digit;
            scale *= 0.1;
        }
        assert_eq!(parse("+-1.123").unwrap(), Value::Float(-(expected + 1.0)));
    }

    #[test]
    fn test_number_errors() {
        let err = parse("-").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEnd { expected: "digit" });
        assert_eq!(err.offset, 1);

        let err = parse("1.").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEnd { expected: "digit" });
        assert_eq!(err.offset, 2);

        let err = parse("1.e5").unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::UnexpectedChar {
                expected: "digit",
                found: 'e'
            }
        );
    }

    #[test]
    fn test_number_stops_before_exponent() {
        let (value, end) = parse_all("1e5");
        assert_eq!(value, Value::Int(1));
        assert_eq!(end, 1);
    }

    #[test]
    fn test_booleans() {
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
        assert!(parse("tru").is_err());
        assert!(parse("falsey").is_err());
        assert!(parse("f").is_err());
    }

    #[test]
    fn test_strings() {
        assert_eq!(parse(r#""hello world""#).unwrap(), Value::from("hello world"));
        assert_eq!(parse(r#""""#).unwrap(), Value::from(""));
        assert_eq!(
            parse(r##""# not a comment""##).unwrap(),
            Value::from("# not a comment")
        );
        assert_eq!(parse(r#""héllo""#).unwrap(), Value::from("héllo"));
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse(r#""open"#).unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnterminatedString);
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(parse(r#""\x41""#).unwrap(), Value::from("A"));
        assert_eq!(parse(r#""\x4a\x4A""#).unwrap(), Value::from("JJ"));
        assert_eq!(parse(r#""\101""#).unwrap(), Value::from("A"));
        assert_eq!(parse(r#""\0""#).unwrap(), Value::from("\0"));
        assert_eq!(parse(r#""\1012""#).unwrap(), Value::from("A2"));
        assert_eq!(parse(r#""\x415""#).unwrap(), Value::from("A5"));
        assert_eq!(parse(r#""\777""#).unwrap(), Value::from("\u{ff}"));
        assert_eq!(
            parse(r#""\'\"\\\?""#).unwrap(),
            Value::from("'\"\\?")
        );
        assert_eq!(
            parse(r#""\a\b\t\n\v\f\r""#).unwrap(),
            Value::from("\x07\x08\t\n\x0B\x0C\r")
        );
    }

    #[test]
    fn test_escape_errors() {
        let err = parse(r#""\q""#).unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnknownEscape('q'));
        assert_eq!(err.offset, 2);

        let err = parse(r#""\xg""#).unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::UnexpectedChar {
                expected: "hex digit",
                found: 'g'
            }
        );

        let err = parse("\"\\").unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::UnexpectedEnd {
                expected: "escape character"
            }
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(parse("[]").unwrap(), Value::from(Vec::new()));
        assert_eq!(parse("[ ]").unwrap(), Value::from(Vec::new()));
        assert_eq!(
            parse("[1, 2,]").unwrap(),
            Value::from(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(
            parse(r#"[1, "two", [true, 3.5]]"#).unwrap(),
            Value::from(vec![
                Value::Int(1),
                Value::from("two"),
                Value::from(vec![Value::Bool(true), Value::Float(3.5)]),
            ])
        );
    }

    #[test]
    fn test_array_errors() {
        let err = parse("[1, 2").unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::UnexpectedEnd {
                expected: "',' or ']'"
            }
        );

        let err = parse("[1 2]").unwrap_err();
        assert_eq!(err.offset, 3);

        let err = parse("[1,").unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::UnexpectedEnd {
                expected: "a value or ']'"
            }
        );

        assert!(parse("[,]").is_err());
    }

    #[test]
    fn test_offsets_are_relative_to_slice() {
        let err = parse("  [1, @]").unwrap_err();
        assert_eq!(err.offset, 6);
    }

    #[test]
    fn test_cursor_stops_after_value() {
        let (value, end) = parse_all(" 12  # trailing");
        assert_eq!(value, Value::Int(12));
        assert_eq!(end, 3);
    }
}
