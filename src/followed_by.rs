use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that performs positive lookahead after a parser
///
/// Succeeds with the first parser's value only if `lookahead` also matches at
/// the position where it stopped. Unlike [`left`](crate::and::left), which
/// accepts the same inputs and yields the same value, the lookahead is never
/// consumed: the cursor returned is the one the first parser produced.
pub struct FollowedBy<P, L> {
    parser: P,
    lookahead: L,
}

impl<P, L> FollowedBy<P, L> {
    pub fn new(parser: P, lookahead: L) -> Self {
        FollowedBy { parser, lookahead }
    }
}

impl<'code, P, L> Parser<'code> for FollowedBy<P, L>
where
    P: Parser<'code>,
    L: Parser<'code>,
    P::Error: From<L::Error>,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        self.lookahead.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a FollowedBy parser
pub fn followed_by<'code, P, L>(parser: P, lookahead: L) -> FollowedBy<P, L>
where
    P: Parser<'code>,
    L: Parser<'code>,
    P::Error: From<L::Error>,
{
    FollowedBy::new(parser, lookahead)
}

/// Extension trait to add .followed_by() method support for parsers
pub trait FollowedByExt<'code>: Parser<'code> + Sized {
    fn followed_by<L>(self, lookahead: L) -> FollowedBy<Self, L>
    where
        L: Parser<'code>,
        Self::Error: From<L::Error>,
    {
        FollowedBy::new(self, lookahead)
    }
}

/// Implement FollowedByExt for all parsers
impl<'code, P> FollowedByExt<'code> for P where P: Parser<'code> {}
