//! Arithmetic expressions over decimal numbers
//!
//! ```text
//! sum     := product (("+" | "-") product)*
//! product := power (("*" | "/") power)*
//! power   := atom (("^" | "**") power)?
//! atom    := number | "(" sum ")"
//! ```

use crate::alternative::OrExt;
use crate::between::parens;
use crate::error::ParseError;
use crate::lazy::lazy;
use crate::map::MapExt;
use crate::operator::{Assoc, Expr, binary_operator};
use crate::parser::{BoxedExt, BoxedParser, Parser};
use crate::text::number::unsigned_decimal;
use crate::text::whitespace::spaced;

/// Guard class for the arithmetic operators
///
/// The default class without `.`, so a symbol may sit directly before a
/// number such as `.5`.
pub const ARITHMETIC_OPERATOR_CHARS: &str = "!#$%&*+-/:;<=>?@^|~";

/// Parsed arithmetic expression
pub type Tree<'code> = Expr<'code, f64>;

/// Parser for an arithmetic expression tree
///
/// Surrounding whitespace is accepted. The result is boxed because the
/// grammar refers to itself through parentheses.
pub fn expr<'code>() -> BoxedParser<'code, Tree<'code>, ParseError<'code>> {
    let atom = unsigned_decimal()
        .map(Expr::Operand)
        .or(parens(lazy(expr)));

    let power = binary_operator(["^", "**"], Assoc::Right, atom)
        .operator_chars(ARITHMETIC_OPERATOR_CHARS)
        .map(Expr::flatten);
    let product = binary_operator(["*", "/"], Assoc::Left, power)
        .operator_chars(ARITHMETIC_OPERATOR_CHARS)
        .map(Expr::flatten);
    let sum = binary_operator(["+", "-"], Assoc::Left, product)
        .operator_chars(ARITHMETIC_OPERATOR_CHARS)
        .map(Expr::flatten);

    spaced(sum).boxed()
}

/// Evaluate a parsed expression
///
/// Division by zero follows `f64` semantics.
pub fn evaluate(tree: &Tree<'_>) -> f64 {
    tree.fold(
        |&value| value,
        |op, lhs, rhs| match op {
            "+" => lhs + rhs,
            "-" => lhs - rhs,
            "*" => lhs * rhs,
            "/" => lhs / rhs,
            "^" | "**" => lhs.powf(rhs),
            _ => f64::NAN,
        },
    )
}

/// Parser that evaluates the expression it reads
pub fn calculator<'code>() -> impl Parser<'code, Output = f64, Error = ParseError<'code>> {
    expr().map(|tree| evaluate(&tree))
}
