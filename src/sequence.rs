use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs a fixed list of parsers one after another
///
/// For a tuple of parsers the output is the flat tuple of their values. For a
/// `Vec` of parsers of the same type the output is a `Vec` of values. The first
/// failure is returned as is.
pub struct Sequence<T> {
    parsers: T,
}

impl<T> Sequence<T> {
    pub fn new(parsers: T) -> Self {
        Sequence { parsers }
    }
}

macro_rules! impl_sequence {
    ($($index:tt $parser:ident $value:ident),+) => {
        impl<'code, E, $($parser),+> Parser<'code> for Sequence<($($parser,)+)>
        where
            $($parser: Parser<'code, Error = E>,)+
        {
            type Output = ($($parser::Output,)+);
            type Error = E;

            fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
                $(let ($value, cursor) = self.parsers.$index.parse(cursor)?;)+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

impl_sequence!(0 P1 v1);
impl_sequence!(0 P1 v1, 1 P2 v2);
impl_sequence!(0 P1 v1, 1 P2 v2, 2 P3 v3);
impl_sequence!(0 P1 v1, 1 P2 v2, 2 P3 v3, 3 P4 v4);
impl_sequence!(0 P1 v1, 1 P2 v2, 2 P3 v3, 3 P4 v4, 4 P5 v5);
impl_sequence!(0 P1 v1, 1 P2 v2, 2 P3 v3, 3 P4 v4, 4 P5 v5, 5 P6 v6);
impl_sequence!(0 P1 v1, 1 P2 v2, 2 P3 v3, 3 P4 v4, 4 P5 v5, 5 P6 v6, 6 P7 v7);
impl_sequence!(0 P1 v1, 1 P2 v2, 2 P3 v3, 3 P4 v4, 4 P5 v5, 5 P6 v6, 6 P7 v7, 7 P8 v8);

impl<'code, P> Parser<'code> for Sequence<Vec<P>>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<T>(parsers: T) -> Sequence<T> {
    Sequence::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::text::char::char;
    use crate::text::number::posint;
    use crate::text::string::string;

    #[test]
    fn test_sequence_flat_tuple() {
        let parser = sequence((posint(), char('.'), posint()));
        let ((whole, dot, fraction), cursor) = parser.parse(Cursor::new("12.34")).unwrap();
        assert_eq!(whole, 12);
        assert_eq!(dot, '.');
        assert_eq!(fraction, 34);
        assert!(cursor.eos());
    }

    #[test]
    fn test_sequence_single() {
        let ((ch,), cursor) = sequence((char('a'),)).parse(Cursor::new("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_sequence_first_failure_verbatim() {
        let parser = sequence((char('a'), char('b'), char('c')));
        assert_eq!(parser.parse(Cursor::new("abx")), Err(ParseError::Mismatch));
    }

    #[test]
    fn test_sequence_eight() {
        let parser = sequence((
            char('1'),
            char('2'),
            char('3'),
            char('4'),
            char('5'),
            char('6'),
            char('7'),
            char('8'),
        ));
        let (values, cursor) = parser.parse(Cursor::new("123456789")).unwrap();
        assert_eq!(values, ('1', '2', '3', '4', '5', '6', '7', '8'));
        assert_eq!(cursor.rest(), "9");
    }

    #[test]
    fn test_sequence_vec() {
        let parser = sequence(vec![string("ab"), string("cd"), string("ef")]);
        let (values, cursor) = parser.parse(Cursor::new("abcdefg")).unwrap();
        assert_eq!(values, vec!["ab", "cd", "ef"]);
        assert_eq!(cursor.rest(), "g");
    }

    #[test]
    fn test_sequence_empty_vec() {
        let parser = sequence(Vec::<crate::text::char::CharParser>::new());
        let (values, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert!(values.is_empty());
        assert_eq!(cursor.position(), 0);
    }
}
