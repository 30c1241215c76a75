use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string
///
/// The match is atomic: either the whole literal is consumed or nothing is.
/// On success the output is the matched slice of the input.
pub struct StringParser {
    expected: Cow<'static, str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'code> Parser<'code> for StringParser {
    type Output = &'code str;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let rest = cursor.rest();
        if !rest.starts_with(self.expected.as_ref()) {
            return Err(ParseError::Mismatch);
        }
        let len = self.expected.len();
        let matched = rest.get(..len).ok_or(ParseError::Mismatch)?;
        Ok((matched, cursor.advance(len)))
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}
