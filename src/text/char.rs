use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that consumes one character if it satisfies a predicate
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        match cursor.value() {
            Some(ch) if (self.predicate)(ch) => Ok((ch, cursor.next())),
            _ => Err(ParseError::Mismatch),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that consumes and returns any single character
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let ch = cursor.value().ok_or(ParseError::Mismatch)?;
        Ok((ch, cursor.next()))
    }
}

pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches one specific character
pub struct CharParser {
    expected: char,
}

impl CharParser {
    pub fn new(expected: char) -> Self {
        CharParser { expected }
    }
}

impl<'code> Parser<'code> for CharParser {
    type Output = char;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        match cursor.value() {
            Some(ch) if ch == self.expected => Ok((ch, cursor.next())),
            _ => Err(ParseError::Mismatch),
        }
    }
}

/// Convenience function to create a CharParser
pub fn char(expected: char) -> CharParser {
    CharParser::new(expected)
}

/// Parser that matches any character from a set
pub struct OneOf {
    chars: Cow<'static, str>,
}

impl OneOf {
    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        OneOf {
            chars: chars.into(),
        }
    }
}

impl<'code> Parser<'code> for OneOf {
    type Output = char;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        match cursor.value() {
            Some(ch) if self.chars.contains(ch) => Ok((ch, cursor.next())),
            _ => Err(ParseError::Mismatch),
        }
    }
}

pub fn one_of(chars: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf::new(chars)
}

/// Parser that matches any character outside a set
///
/// Still fails at end of input: there is no character to test.
pub struct NoneOf {
    chars: Cow<'static, str>,
}

impl NoneOf {
    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        NoneOf {
            chars: chars.into(),
        }
    }
}

impl<'code> Parser<'code> for NoneOf {
    type Output = char;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        match cursor.value() {
            Some(ch) if !self.chars.contains(ch) => Ok((ch, cursor.next())),
            _ => Err(ParseError::Mismatch),
        }
    }
}

pub fn none_of(chars: impl Into<Cow<'static, str>>) -> NoneOf {
    NoneOf::new(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_consumes_one() {
        let cursor = Cursor::new("abc");
        let (ch, cursor) = char('a').parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_char_exact_input() {
        let cursor = Cursor::new("a");
        let (ch, cursor) = char('a').parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert!(cursor.eos());
    }

    #[test]
    fn test_char_mismatch() {
        let cursor = Cursor::new("xyz");
        assert_eq!(char('a').parse(cursor), Err(ParseError::Mismatch));
    }

    #[test]
    fn test_satisfy() {
        let parser = satisfy(|ch| ch == 'a' || ch == 'b');

        let (ch, cursor) = parser.parse(Cursor::new("ac")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "c");

        let (ch, cursor) = parser.parse(Cursor::new("bc")).unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.rest(), "c");

        assert!(parser.parse(Cursor::new("cc")).is_err());
    }

    #[test]
    fn test_satisfy_at_end_of_input() {
        let parser = satisfy(|_| true);
        assert_eq!(parser.parse(Cursor::new("")), Err(ParseError::Mismatch));
    }

    #[test]
    fn test_satisfy_unicode() {
        let parser = satisfy(|ch| ch == '世');
        let (ch, cursor) = parser.parse(Cursor::new("世界")).unwrap();
        assert_eq!(ch, '世');
        assert_eq!(cursor.position(), '世'.len_utf8());
        assert_eq!(cursor.rest(), "界");
    }

    #[test]
    fn test_any_char() {
        let (ch, cursor) = any_char().parse(Cursor::new("🦀!")).unwrap();
        assert_eq!(ch, '🦀');
        assert_eq!(cursor.rest(), "!");
        assert!(any_char().parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_one_of() {
        let parser = one_of("+-");
        assert_eq!(parser.parse(Cursor::new("-1")).unwrap().0, '-');
        assert_eq!(parser.parse(Cursor::new("+1")).unwrap().0, '+');
        assert!(parser.parse(Cursor::new("*1")).is_err());
        assert!(parser.parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_none_of() {
        let parser = none_of("\"");
        let (ch, cursor) = parser.parse(Cursor::new("a\"")).unwrap();
        assert_eq!(ch, 'a');
        assert!(parser.parse(cursor).is_err());
        assert!(parser.parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_failure_does_not_move_cursor() {
        let cursor = Cursor::new("abc").next();
        let before = cursor;
        assert!(char('z').parse(cursor).is_err());
        assert_eq!(cursor, before);
        assert_eq!(cursor.position(), 1);
    }
}
