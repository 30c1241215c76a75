//! Semicolon-delimited lists
//!
//! Items are free text separated by `;` or `;+`, folded left into a tree. Each
//! item runs up to the next separator or the end of input and is trimmed.

use crate::alternative::alternative;
use crate::eoi::end_of_input;
use crate::error::ParseError;
use crate::map::MapExt;
use crate::operator::{Assoc, BinaryOperator, Expr, binary_operator};
use crate::parser::Parser;
use crate::text::string::string;
use crate::until::until;

/// Parsed list
pub type List<'code> = Expr<'code, &'code str>;

/// Parser for one list item
pub fn item<'code>() -> impl Parser<'code, Output = &'code str, Error = ParseError<'code>> {
    let separator = alternative((string(";+").ignore(), string(";").ignore(), end_of_input()));
    until(separator).map(|(scanned, ())| scanned.trim())
}

/// Parser for a whole list
pub fn list<'code>()
-> BinaryOperator<impl Parser<'code, Output = &'code str, Error = ParseError<'code>>> {
    binary_operator([";+", ";"], Assoc::Left, item()).operator_chars(";+")
}
