use super::char::{OneOf, one_of};
use crate::between::{DelimitedBy, delimited_by};
use crate::error::ParseError;
use crate::many::{Many, many};
use crate::parser::Parser;

/// Characters treated as whitespace: space, tab, carriage return and newline
pub const WHITE_CHARS: &str = " \t\r\n";

/// Parser that matches a single whitespace character
pub fn white() -> OneOf {
    one_of(WHITE_CHARS)
}

/// Surround `parser` with optional whitespace on both sides
pub fn spaced<'code, P>(parser: P) -> DelimitedBy<Many<OneOf>, P, Many<OneOf>>
where
    P: Parser<'code>,
    P::Error: From<ParseError<'code>>,
{
    delimited_by(many(white()), parser, many(white()))
}
