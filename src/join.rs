use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that collects a parser's output into a `String`
pub struct Join<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Join<P>
where
    P: Parser<'code>,
    P::Output: IntoIterator,
    String: FromIterator<<P::Output as IntoIterator>::Item>,
{
    type Output = String;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (items, cursor) = self.parser.parse(cursor)?;
        Ok((items.into_iter().collect(), cursor))
    }
}

pub fn join<'code, P>(parser: P) -> Join<P>
where
    P: Parser<'code>,
    P::Output: IntoIterator,
    String: FromIterator<<P::Output as IntoIterator>::Item>,
{
    Join { parser }
}

/// Extension trait to add .join() method support for parsers
pub trait JoinExt<'code>: Parser<'code> + Sized {
    fn join(self) -> Join<Self>
    where
        Self::Output: IntoIterator,
        String: FromIterator<<Self::Output as IntoIterator>::Item>,
    {
        Join { parser: self }
    }
}

/// Implement JoinExt for all parsers
impl<'code, P> JoinExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many;
    use crate::separated_list::separated_by;
    use crate::some::some;
    use crate::text::char::{char, none_of};
    use crate::text::string::string;

    #[test]
    fn test_join_chars() {
        let (word, cursor) = some(none_of(" ")).join().parse(Cursor::new("hello world")).unwrap();
        assert_eq!(word, "hello");
        assert_eq!(cursor.rest(), " world");
    }

    #[test]
    fn test_join_slices() {
        let parser = join(separated_by(string("ab"), char('-')));
        let (joined, _) = parser.parse(Cursor::new("ab-ab-ab")).unwrap();
        assert_eq!(joined, "ababab");
    }

    #[test]
    fn test_join_empty() {
        let (joined, _) = many(char('x')).join().parse(Cursor::new("abc")).unwrap();
        assert_eq!(joined, "");
    }

    #[test]
    fn test_join_option() {
        use crate::optional::optional;

        let (joined, _) = optional(char('-')).join().parse(Cursor::new("-1")).unwrap();
        assert_eq!(joined, "-");
    }
}
