use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// Items are collected until either a separator or the item after it fails to
/// match. A trailing separator is left unconsumed.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1,2,"` with separator `,` → `vec![1, 2]`, rest `","`
pub struct SeparatedBy<P, S> {
    parser: P,
    separator: S,
    at_least_one: bool,
}

impl<P, S> SeparatedBy<P, S> {
    pub fn new(parser: P, separator: S, at_least_one: bool) -> Self {
        SeparatedBy {
            parser,
            separator,
            at_least_one,
        }
    }
}

impl<'code, P, S> Parser<'code> for SeparatedBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (first, mut cursor) = match self.parser.parse(cursor) {
            Ok(result) => result,
            Err(error) if self.at_least_one => return Err(error),
            Err(_) => return Ok((Vec::new(), cursor)),
        };

        let mut items = vec![first];
        loop {
            let Ok((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            // Backtrack to before the separator if no item follows it
            let Ok((item, next_cursor)) = self.parser.parse(after_separator) else {
                break;
            };
            items.push(item);
            cursor = next_cursor;
        }

        Ok((items, cursor))
    }
}

/// Zero or more `parser` occurrences separated by `separator`
pub fn separated_by<'code, P, S>(parser: P, separator: S) -> SeparatedBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    SeparatedBy::new(parser, separator, false)
}

/// One or more `parser` occurrences separated by `separator`
pub fn separated_by1<'code, P, S>(parser: P, separator: S) -> SeparatedBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    SeparatedBy::new(parser, separator, true)
}
