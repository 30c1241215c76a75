use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        self.parser
            .parse(cursor)
            .map(|(value, cursor)| ((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator whose mapping function may reject the value
///
/// `None` from the mapper fails the parse with [`ParseError::Mismatch`] at the
/// starting cursor.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<'code, P, F, U> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
    F: Fn(P::Output) -> Option<U>,
{
    type Output = U;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        match (self.mapper)(value) {
            Some(mapped) => Ok((mapped, cursor)),
            None => Err(ParseError::Mismatch.into()),
        }
    }
}

/// Parser combinator that discards the output of a parser
pub struct Ignore<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Ignore<P>
where
    P: Parser<'code>,
{
    type Output = ();
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }
}

/// Extension trait to add .map(), .try_map() and .ignore() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Option<U>,
    {
        TryMap {
            parser: self,
            mapper,
        }
    }

    fn ignore(self) -> Ignore<Self> {
        Ignore { parser: self }
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
