use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Chaining `.and()` produces nested tuples like `((a, b), c)`. Use
/// [`sequence`](crate::sequence::sequence) for a flat tuple.
///
/// Example:
/// ```
/// use parsecond::and::AndExt;
/// use parsecond::cursor::Cursor;
/// use parsecond::parser::Parser;
/// use parsecond::text::char::char;
/// use parsecond::text::number::posint;
///
/// let ((whole, _), fraction) = posint()
///     .and(char('.'))
///     .and(posint())
///     .parse(Cursor::new("123.456"))
///     .unwrap()
///     .0;
/// assert_eq!(whole, 123);
/// assert_eq!(fraction, 456);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Error = P1::Error>,
{
    type Output = (P1::Output, P2::Output);
    type Error = P1::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Error = P1::Error>,
{
    And::new(parser1, parser2)
}

/// Sequence two parsers and keep the first result
pub struct Left<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for Left<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Error = P1::Error>,
{
    type Output = P1::Output;
    type Error = P1::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (result, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((result, cursor))
    }
}

pub fn left<'code, P1, P2>(parser1: P1, parser2: P2) -> Left<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Error = P1::Error>,
{
    Left { parser1, parser2 }
}

/// Sequence two parsers and keep the second result
pub struct Right<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for Right<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Error = P1::Error>,
{
    type Output = P2::Output;
    type Error = P1::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

pub fn right<'code, P1, P2>(parser1: P1, parser2: P2) -> Right<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Error = P1::Error>,
{
    Right { parser1, parser2 }
}

/// Extension trait to add .and(), .left() and .right() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Error = Self::Error>,
    {
        And::new(self, other)
    }

    fn left<P>(self, other: P) -> Left<Self, P>
    where
        P: Parser<'code, Error = Self::Error>,
    {
        left(self, other)
    }

    fn right<P>(self, other: P) -> Right<Self, P>
    where
        P: Parser<'code, Error = Self::Error>,
    {
        right(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::text::char::char;
    use crate::text::string::string;

    #[test]
    fn test_and_success() {
        let parser = char('a').and(char('b'));
        let ((first, second), cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(first, 'a');
        assert_eq!(second, 'b');
        assert_eq!(cursor.rest(), "c");
    }

    #[test]
    fn test_and_first_fails() {
        let parser = and(char('a'), char('b'));
        assert_eq!(parser.parse(Cursor::new("xbc")), Err(ParseError::Mismatch));
    }

    #[test]
    fn test_and_second_fails() {
        let parser = char('a').and(char('b'));
        assert!(parser.parse(Cursor::new("axc")).is_err());
    }

    #[test]
    fn test_and_chain_nests() {
        let parser = char('a').and(char('b')).and(char('c'));
        let (((a, b), c), cursor) = parser.parse(Cursor::new("abcd")).unwrap();
        assert_eq!((a, b, c), ('a', 'b', 'c'));
        assert_eq!(cursor.rest(), "d");
    }

    #[test]
    fn test_left_keeps_first() {
        let parser = string("key").left(char('='));
        let (key, cursor) = parser.parse(Cursor::new("key=value")).unwrap();
        assert_eq!(key, "key");
        assert_eq!(cursor.rest(), "value");
    }

    #[test]
    fn test_right_keeps_second() {
        let parser = char('$').right(string("HOME"));
        let (name, cursor) = parser.parse(Cursor::new("$HOME/bin")).unwrap();
        assert_eq!(name, "HOME");
        assert_eq!(cursor.rest(), "/bin");
    }

    #[test]
    fn test_left_fails_when_second_fails() {
        let parser = left(string("key"), char('='));
        assert!(parser.parse(Cursor::new("key:value")).is_err());
    }
}
