use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. A parser that succeeds without consuming input makes this loop
/// forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let mut results = Vec::new();

        // Many matches zero or more, so the error is not propagated
        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
