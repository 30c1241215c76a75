use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value fails with [`ParseError::Mismatch`] and gives back the
/// starting cursor.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F> Parser<'code> for Filter<P, F>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (value, new_cursor) = self.parser.parse(cursor)?;
        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(ParseError::Mismatch.into())
        }
    }
}

/// Keep a parse only when its value satisfies `predicate`
pub fn guard<'code, P, F>(parser: P, predicate: F) -> Filter<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate)
}

/// Parser that rejects an empty string output
pub struct NotEmpty<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for NotEmpty<P>
where
    P: Parser<'code>,
    P::Output: AsRef<str>,
    P::Error: From<ParseError<'code>>,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        if value.as_ref().is_empty() {
            return Err(ParseError::Mismatch.into());
        }
        Ok((value, cursor))
    }
}

pub fn not_empty<'code, P>(parser: P) -> NotEmpty<P>
where
    P: Parser<'code>,
    P::Output: AsRef<str>,
{
    NotEmpty { parser }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}
