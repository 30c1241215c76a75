use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::cell::OnceCell;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion between parsers.
///
/// The parser is built on the first parse and reused afterwards.
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceCell<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let parser = self.parser.get_or_init(|| {
            log::trace!("building lazy parser at offset {}", cursor.position());
            (self.factory)()
        });
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alternative::OrExt;
    use crate::and::AndExt;
    use crate::between::parens;
    use crate::error::ParseError;
    use crate::map::MapExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::text::char::char;
    use std::cell::Cell;

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| char('a'));
        let (ch, cursor) = parser.parse(Cursor::new("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_lazy_builds_once() {
        let builds = Cell::new(0);
        let parser = lazy(|| {
            builds.set(builds.get() + 1);
            char('a')
        });

        assert_eq!(builds.get(), 0);
        assert!(parser.parse(Cursor::new("a")).is_ok());
        assert!(parser.parse(Cursor::new("b")).is_err());
        assert!(parser.parse(Cursor::new("a")).is_ok());
        assert_eq!(builds.get(), 1);
    }

    // depth := '(' depth ')' | 'x'
    fn depth<'code>() -> BoxedParser<'code, usize, ParseError<'code>> {
        parens(lazy(depth))
            .map(|inner| inner + 1)
            .or(char('x').map(|_| 0))
            .boxed()
    }

    #[test]
    fn test_lazy_recursion() {
        let (levels, cursor) = depth().parse(Cursor::new("(((x)))")).unwrap();
        assert_eq!(levels, 3);
        assert!(cursor.eos());

        assert_eq!(depth().parse(Cursor::new("x")).unwrap().0, 0);
        assert!(depth().parse(Cursor::new("((x)")).is_err());
    }

    #[test]
    fn test_lazy_in_sequence() {
        let parser = char('a').and(lazy(|| char('b')));
        let ((a, b), _) = parser.parse(Cursor::new("ab")).unwrap();
        assert_eq!((a, b), ('a', 'b'));
    }
}
