use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use regex::Regex;

/// Parser that matches a regular expression anchored at the cursor
///
/// A match that starts anywhere other than the cursor is a mismatch. The
/// matched span, which may be empty, is consumed and returned.
#[derive(Debug, Clone)]
pub struct PatternParser {
    regex: Regex,
}

impl PatternParser {
    /// Compile `source` anchored to the start of the remaining input
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", source))?;
        Ok(PatternParser { regex })
    }

    /// Anchor an already compiled regex
    ///
    /// The regex is rebuilt from its source with a leading `^`, so a search
    /// never runs past the cursor.
    pub fn from_regex(regex: Regex) -> Result<Self, regex::Error> {
        PatternParser::new(regex.as_str())
    }

    /// Source of the anchored regex
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl TryFrom<Regex> for PatternParser {
    type Error = regex::Error;

    fn try_from(regex: Regex) -> Result<Self, Self::Error> {
        PatternParser::from_regex(regex)
    }
}

impl<'code> Parser<'code> for PatternParser {
    type Output = &'code str;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        match self.regex.find(cursor.rest()) {
            Some(found) if found.start() == 0 => {
                Ok((found.as_str(), cursor.advance(found.end())))
            }
            _ => Err(ParseError::Mismatch),
        }
    }
}

/// Convenience function to create a PatternParser from regex source
pub fn pattern(source: &str) -> Result<PatternParser, regex::Error> {
    PatternParser::new(source)
}
