use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that succeeds only when no input remains
///
/// Consumes nothing. Any leftover input is reported as
/// [`ParseError::ExpectEnd`] with the unconsumed remainder.
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(ParseError::expect_end(cursor.rest()))
        }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

/// Run a parser and require the end of input after it
pub struct Ended<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Ended<P>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let ((), cursor) = EndOfInput.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create an Ended parser
pub fn ended<'code, P>(parser: P) -> Ended<P>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    Ended { parser }
}
