use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that performs negative lookahead after a parser
///
/// Succeeds with the first parser's value only if `lookahead` fails at the
/// position where it stopped. Fails with [`ParseError::Mismatch`] if it
/// matches. The lookahead never consumes input.
pub struct NotFollowedBy<P, L> {
    parser: P,
    lookahead: L,
}

impl<P, L> NotFollowedBy<P, L> {
    pub fn new(parser: P, lookahead: L) -> Self {
        NotFollowedBy { parser, lookahead }
    }
}

impl<'code, P, L> Parser<'code> for NotFollowedBy<P, L>
where
    P: Parser<'code>,
    L: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        match self.lookahead.parse(cursor) {
            // Lookahead succeeded when we wanted it to fail
            Ok(_) => Err(ParseError::Mismatch.into()),
            Err(_) => Ok((value, cursor)),
        }
    }
}

/// Convenience function to create a NotFollowedBy parser
pub fn not_followed_by<'code, P, L>(parser: P, lookahead: L) -> NotFollowedBy<P, L>
where
    P: Parser<'code>,
    L: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    NotFollowedBy::new(parser, lookahead)
}

/// Extension trait to add .not_followed_by() method support for parsers
pub trait NotFollowedByExt<'code>: Parser<'code> + Sized {
    fn not_followed_by<L>(self, lookahead: L) -> NotFollowedBy<Self, L>
    where
        L: Parser<'code>,
        Self::Error: From<ParseError<'code>>,
    {
        NotFollowedBy::new(self, lookahead)
    }
}

/// Implement NotFollowedByExt for all parsers
impl<'code, P> NotFollowedByExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::char::{char, one_of};
    use crate::text::string::string;

    #[test]
    fn test_not_followed_by_success() {
        let parser = string("abc").not_followed_by(string("->"));
        let (value, cursor) = parser.parse(Cursor::new("abc def")).unwrap();
        assert_eq!(value, "abc");
        assert_eq!(cursor.rest(), " def");
    }

    #[test]
    fn test_not_followed_by_rejects() {
        let parser = not_followed_by(string("abc"), string("->"));
        assert_eq!(parser.parse(Cursor::new("abc->def")), Err(ParseError::Mismatch));
    }

    #[test]
    fn test_operator_guard() {
        // "*" must not be read as the first half of "**"
        let parser = char('*').not_followed_by(one_of("*="));
        assert!(parser.parse(Cursor::new("** 2")).is_err());
        assert!(parser.parse(Cursor::new("*= 2")).is_err());

        let (op, cursor) = parser.parse(Cursor::new("* 2")).unwrap();
        assert_eq!(op, '*');
        assert_eq!(cursor.rest(), " 2");
    }

    #[test]
    fn test_at_end_of_input() {
        let parser = char('a').not_followed_by(char('b'));
        let (_, cursor) = parser.parse(Cursor::new("a")).unwrap();
        assert!(cursor.eos());
    }
}
