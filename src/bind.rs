use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that chooses the next parser from the value of the first
///
/// `f` is called with the first parser's output and the parser it returns runs
/// from where the first one stopped. The first failure short-circuits.
pub struct Bind<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Bind { parser, f }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Error = P::Error>,
{
    type Output = Q::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.f)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, f: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Error = P::Error>,
{
    Bind::new(parser, f)
}

/// Parser combinator that recovers from a failure with a parser built from the error
///
/// The recovery parser starts from the starting cursor.
pub struct OrElse<P, F> {
    parser: P,
    f: F,
}

impl<'code, P, F, Q> Parser<'code> for OrElse<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Error) -> Q,
    Q: Parser<'code, Output = P::Output>,
{
    type Output = P::Output;
    type Error = Q::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(error) => (self.f)(error).parse(cursor),
        }
    }
}

/// Convenience function to create an OrElse parser
pub fn or_else<'code, P, F, Q>(parser: P, f: F) -> OrElse<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Error) -> Q,
    Q: Parser<'code, Output = P::Output>,
{
    OrElse { parser, f }
}

/// Extension trait to add .bind() and .or_else() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, f: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Error = Self::Error>,
    {
        Bind::new(self, f)
    }

    fn or_else<F, Q>(self, f: F) -> OrElse<Self, F>
    where
        F: Fn(Self::Error) -> Q,
        Q: Parser<'code, Output = Self::Output>,
    {
        or_else(self, f)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
