use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::text::char::{CharParser, char};

/// Parser combinator that parses content between two delimiters
///
/// Returns only the content's value. The delimiters' errors are converted into
/// the content's error type.
pub struct DelimitedBy<L, P, R> {
    left: L,
    content: P,
    right: R,
}

impl<L, P, R> DelimitedBy<L, P, R> {
    pub fn new(left: L, content: P, right: R) -> Self {
        DelimitedBy {
            left,
            content,
            right,
        }
    }
}

impl<'code, L, P, R> Parser<'code> for DelimitedBy<L, P, R>
where
    L: Parser<'code>,
    P: Parser<'code>,
    R: Parser<'code>,
    P::Error: From<L::Error> + From<R::Error>,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (_, cursor) = self.left.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.right.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a DelimitedBy parser
pub fn delimited_by<'code, L, P, R>(left: L, content: P, right: R) -> DelimitedBy<L, P, R>
where
    L: Parser<'code>,
    P: Parser<'code>,
    R: Parser<'code>,
    P::Error: From<L::Error> + From<R::Error>,
{
    DelimitedBy::new(left, content, right)
}

fn surround<'code, P>(open: char, content: P, close: char) -> DelimitedBy<CharParser, P, CharParser>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    DelimitedBy::new(char(open), content, char(close))
}

/// Content between `(` and `)`
pub fn parens<'code, P>(content: P) -> DelimitedBy<CharParser, P, CharParser>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    surround('(', content, ')')
}

/// Content between `[` and `]`
pub fn brackets<'code, P>(content: P) -> DelimitedBy<CharParser, P, CharParser>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    surround('[', content, ']')
}

/// Content between `{` and `}`
pub fn braces<'code, P>(content: P) -> DelimitedBy<CharParser, P, CharParser>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    surround('{', content, '}')
}

/// Content between `<` and `>`
pub fn angles<'code, P>(content: P) -> DelimitedBy<CharParser, P, CharParser>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    surround('<', content, '>')
}
