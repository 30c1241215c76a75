use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries each parser in order and returns the first success
///
/// Every branch starts from the same cursor. Branches only need to agree on
/// their output; their errors are dropped and a total failure is reported as
/// [`ParseError::Mismatch`].
pub struct Alternative<T> {
    parsers: T,
}

impl<T> Alternative<T> {
    pub fn new(parsers: T) -> Self {
        Alternative { parsers }
    }
}

macro_rules! impl_alternative {
    ($($index:tt $parser:ident),+) => {
        impl<'code, O, $($parser),+> Parser<'code> for Alternative<($($parser,)+)>
        where
            $($parser: Parser<'code, Output = O>,)+
        {
            type Output = O;
            type Error = ParseError<'code>;

            fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
                $(
                    if let Ok(result) = self.parsers.$index.parse(cursor) {
                        return Ok(result);
                    }
                )+
                Err(ParseError::Mismatch)
            }
        }
    };
}

impl_alternative!(0 P1);
impl_alternative!(0 P1, 1 P2);
impl_alternative!(0 P1, 1 P2, 2 P3);
impl_alternative!(0 P1, 1 P2, 2 P3, 3 P4);
impl_alternative!(0 P1, 1 P2, 2 P3, 3 P4, 4 P5);
impl_alternative!(0 P1, 1 P2, 2 P3, 3 P4, 4 P5, 5 P6);
impl_alternative!(0 P1, 1 P2, 2 P3, 3 P4, 4 P5, 5 P6, 6 P7);
impl_alternative!(0 P1, 1 P2, 2 P3, 3 P4, 4 P5, 5 P6, 6 P7, 7 P8);

fn first_success<'code, 'p, P, I>(
    parsers: I,
    cursor: Cursor<'code>,
) -> ParseResult<'code, P::Output, ParseError<'code>>
where
    P: Parser<'code> + 'p,
    I: IntoIterator<Item = &'p P>,
{
    parsers
        .into_iter()
        .find_map(|parser| parser.parse(cursor).ok())
        .ok_or(ParseError::Mismatch)
}

impl<'code, P> Parser<'code> for Alternative<Vec<P>>
where
    P: Parser<'code>,
{
    type Output = P::Output;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        first_success(&self.parsers, cursor)
    }
}

impl<'code, P, const N: usize> Parser<'code> for Alternative<[P; N]>
where
    P: Parser<'code>,
{
    type Output = P::Output;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        first_success(&self.parsers, cursor)
    }
}

/// Convenience function to create an Alternative parser
pub fn alternative<T>(parsers: T) -> Alternative<T> {
    Alternative::new(parsers)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Alternative<(Self, P)>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Alternative::new((self, other))
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
