use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that scans forward until a terminator matches
///
/// The terminator is tried at every offset from the cursor up to and including
/// the end of input. On the first match the output is the scanned text together
/// with the terminator's value, and the cursor is left at the start of the
/// terminator so it can be parsed again. If nothing matches the parse fails
/// with [`ParseError::ExpectTerminator`] carrying everything scanned.
pub struct Until<T> {
    terminator: T,
}

impl<T> Until<T> {
    pub fn new(terminator: T) -> Self {
        Self { terminator }
    }
}

impl<'code, T> Parser<'code> for Until<T>
where
    T: Parser<'code>,
{
    type Output = (&'code str, T::Output);
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let rest = cursor.rest();
        let mut scan = cursor;

        loop {
            if let Ok((value, _)) = self.terminator.parse(scan) {
                let scanned = rest
                    .get(..scan.position() - cursor.position())
                    .unwrap_or(rest);
                return Ok(((scanned, value), scan));
            }
            if scan.eos() {
                return Err(ParseError::expect_terminator(rest));
            }
            scan = scan.next();
        }
    }
}

/// Convenience function to create an Until parser
pub fn until<'code, T>(terminator: T) -> Until<T>
where
    T: Parser<'code>,
{
    Until::new(terminator)
}
