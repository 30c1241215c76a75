use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Returns `Some(value)` when the inner parser succeeds and `None` otherwise,
/// leaving the cursor where it was. Never fails.
///
/// Example:
/// ```
/// use parsecond::cursor::Cursor;
/// use parsecond::optional::optional;
/// use parsecond::parser::Parser;
/// use parsecond::text::char::char;
///
/// let (sign, cursor) = optional(char('-')).parse(Cursor::new("42")).unwrap();
/// assert_eq!(sign, None);
/// assert_eq!(cursor.rest(), "42");
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
