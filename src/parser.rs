use crate::cursor::Cursor;
use std::rc::Rc;

/// Outcome of running a parser: the value and the cursor after it, or an error
///
/// The outcome algebra is `Result`'s own: `map` transforms a success,
/// `and_then` threads it into the next step, `map_err` rewrites a failure.
pub type ParseResult<'code, O, E> = Result<(O, Cursor<'code>), E>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;
    type Error;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. A failure never hands back an advanced cursor.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser
///
/// Needed wherever two branches must produce the same parser type, e.g. the
/// closure given to [`bind`](crate::bind::bind), and for recursive grammars.
pub type BoxedParser<'code, O, E> = Box<dyn Parser<'code, Output = O, Error = E> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output, Self::Error> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    f: F,
}

impl<'code, F, O, E> Parser<'code> for FromFn<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O, E>,
{
    type Output = O;
    type Error = E;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        (self.f)(cursor)
    }
}

/// Turn any `Fn(Cursor) -> ParseResult` into a parser
pub fn from_fn<'code, F, O, E>(f: F) -> FromFn<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O, E>,
{
    FromFn { f }
}

/// Run a parser over `input` from a fresh cursor at offset 0
pub fn run<'code, P>(parser: &P, input: &'code str) -> ParseResult<'code, P::Output, P::Error>
where
    P: Parser<'code> + ?Sized,
{
    log::trace!("running parser over {} bytes", input.len());
    let result = parser.parse(Cursor::new(input));
    match &result {
        Ok((_, cursor)) => log::trace!(
            "parse succeeded at offset {} with {} bytes left",
            cursor.position(),
            cursor.rest().len()
        ),
        Err(_) => log::trace!("parse failed"),
    }
    result
}
