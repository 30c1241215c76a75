use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
pub struct AtLeastOne<P> {
    parser: P,
}

impl<P> AtLeastOne<P> {
    pub fn new(parser: P) -> Self {
        AtLeastOne { parser }
    }
}

impl<'code, P> Parser<'code> for AtLeastOne<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        // First parse must succeed
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create an AtLeastOne parser
pub fn some<'code, P>(parser: P) -> AtLeastOne<P>
where
    P: Parser<'code>,
{
    AtLeastOne::new(parser)
}
