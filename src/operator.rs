//! Precedence-climbing builder for binary operator expressions
//!
//! [`binary_operator`] builds one precedence level from an operand parser and
//! the symbols that bind at that level. Levels compose by nesting: the operand
//! of a looser level is the parser of the next tighter one, and
//! [`Expr::flatten`] collapses the nested trees this produces.
//!
//! ```
//! use parsecond::map::MapExt;
//! use parsecond::operator::{Assoc, Expr, binary_operator};
//! use parsecond::parser::run;
//! use parsecond::text::number::posint;
//!
//! let product = binary_operator(["*"], Assoc::Left, posint());
//! let sum = binary_operator(["+"], Assoc::Left, product).map(Expr::flatten);
//!
//! let (tree, _) = run(&sum, "1 + 2 * 3").unwrap();
//! assert_eq!(tree.to_string(), "(1 + (2 * 3))");
//! ```

use crate::alternative::{Alternative, alternative};
use crate::between::DelimitedBy;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::many::Many;
use crate::not_followed_by::{NotFollowedBy, not_followed_by};
use crate::parser::{ParseResult, Parser};
use crate::text::char::{OneOf, one_of};
use crate::text::string::{StringParser, string};
use crate::text::whitespace::spaced;
use std::borrow::Cow;
use std::fmt;

/// Characters that may continue an operator symbol
///
/// A symbol only matches when the next character is not one of these, so `+`
/// is not read out of `+=`.
pub const DEFAULT_OPERATOR_CHARS: &str = "!#$%&*+-./:;<=>?@^|~";

/// Associativity of the operators at one precedence level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`
    Right,
}

/// A binary expression tree over operands of type `T`
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'code, T> {
    Operand(T),
    Binary(Box<BinaryOp<'code, T>>),
}

/// One binary operation node
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp<'code, T> {
    /// The operator symbol as it appeared in the input
    pub op: &'code str,
    pub lhs: Expr<'code, T>,
    pub rhs: Expr<'code, T>,
}

impl<'code, T> Expr<'code, T> {
    pub fn binary(op: &'code str, lhs: Self, rhs: Self) -> Self {
        Expr::Binary(Box::new(BinaryOp { op, lhs, rhs }))
    }

    /// Evaluate the tree bottom-up
    ///
    /// `operand` maps each leaf and `binary` combines the values of both
    /// children of a node with its operator symbol.
    pub fn fold<U, O, B>(&self, operand: O, binary: B) -> U
    where
        O: Fn(&T) -> U,
        B: Fn(&'code str, U, U) -> U,
    {
        self.fold_with(&operand, &binary)
    }

    fn fold_with<U, O, B>(&self, operand: &O, binary: &B) -> U
    where
        O: Fn(&T) -> U,
        B: Fn(&'code str, U, U) -> U,
    {
        match self {
            Expr::Operand(value) => operand(value),
            Expr::Binary(node) => {
                let lhs = node.lhs.fold_with(operand, binary);
                let rhs = node.rhs.fold_with(operand, binary);
                binary(node.op, lhs, rhs)
            }
        }
    }

    /// Number of operator nodes in the tree
    pub fn operator_count(&self) -> usize {
        self.fold(|_| 0, |_, lhs, rhs| lhs + rhs + 1)
    }
}

impl<'code, T> Expr<'code, Expr<'code, T>> {
    /// Collapse a tree whose operands are themselves trees
    pub fn flatten(self) -> Expr<'code, T> {
        match self {
            Expr::Operand(inner) => inner,
            Expr::Binary(node) => {
                let BinaryOp { op, lhs, rhs } = *node;
                Expr::binary(op, lhs.flatten(), rhs.flatten())
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Expr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Operand(value) => write!(f, "{}", value),
            Expr::Binary(node) => write!(f, "({} {} {})", node.lhs, node.op, node.rhs),
        }
    }
}

type GuardedSymbol = NotFollowedBy<StringParser, OneOf>;

/// Parser for one of a set of operator symbols with surrounding whitespace
///
/// Symbols are tried longest first. Each one is rejected when it is directly
/// followed by another operator character.
pub struct OperatorSymbol {
    symbols: Vec<Cow<'static, str>>,
    matcher: DelimitedBy<Many<OneOf>, Alternative<Vec<GuardedSymbol>>, Many<OneOf>>,
}

impl OperatorSymbol {
    pub fn new<I, S>(symbols: I, operator_chars: impl Into<Cow<'static, str>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let mut symbols: Vec<Cow<'static, str>> = symbols.into_iter().map(Into::into).collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()));
        Self::from_sorted(symbols, operator_chars.into())
    }

    fn from_sorted(symbols: Vec<Cow<'static, str>>, operator_chars: Cow<'static, str>) -> Self {
        let guarded = symbols
            .iter()
            .map(|symbol| {
                not_followed_by(string(symbol.clone()), one_of(operator_chars.clone()))
            })
            .collect();
        OperatorSymbol {
            symbols,
            matcher: spaced(alternative(guarded)),
        }
    }

    /// The symbols in the order they are tried
    pub fn symbols(&self) -> &[Cow<'static, str>] {
        &self.symbols
    }
}

impl<'code> Parser<'code> for OperatorSymbol {
    type Output = &'code str;
    type Error = ParseError<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        self.matcher.parse(cursor)
    }
}

/// One precedence level of binary operators over `operand`
pub struct BinaryOperator<P> {
    symbol: OperatorSymbol,
    assoc: Assoc,
    operand: P,
}

impl<P> BinaryOperator<P> {
    /// Replace the characters that may not directly follow a symbol
    pub fn operator_chars(self, chars: impl Into<Cow<'static, str>>) -> Self {
        BinaryOperator {
            symbol: OperatorSymbol::from_sorted(self.symbol.symbols, chars.into()),
            assoc: self.assoc,
            operand: self.operand,
        }
    }

    pub fn assoc(&self) -> Assoc {
        self.assoc
    }
}

impl<'code, P> BinaryOperator<P>
where
    P: Parser<'code>,
{
    fn parse_left(
        &self,
        cursor: Cursor<'code>,
    ) -> ParseResult<'code, Expr<'code, P::Output>, P::Error> {
        let (first, mut cursor) = self.operand.parse(cursor)?;
        let mut tree = Expr::Operand(first);

        // An operator without an operand after it is left unconsumed
        while let Ok((op, after_op)) = self.symbol.parse(cursor) {
            let Ok((rhs, next_cursor)) = self.operand.parse(after_op) else {
                break;
            };
            tree = Expr::binary(op, tree, Expr::Operand(rhs));
            cursor = next_cursor;
        }

        Ok((tree, cursor))
    }

    fn parse_right(
        &self,
        cursor: Cursor<'code>,
    ) -> ParseResult<'code, Expr<'code, P::Output>, P::Error> {
        let (lhs, after_lhs) = self.operand.parse(cursor)?;
        let Ok((op, after_op)) = self.symbol.parse(after_lhs) else {
            return Ok((Expr::Operand(lhs), after_lhs));
        };
        match self.parse_right(after_op) {
            Ok((rhs, cursor)) => Ok((Expr::binary(op, Expr::Operand(lhs), rhs), cursor)),
            Err(_) => Ok((Expr::Operand(lhs), after_lhs)),
        }
    }
}

impl<'code, P> Parser<'code> for BinaryOperator<P>
where
    P: Parser<'code>,
{
    type Output = Expr<'code, P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        match self.assoc {
            Assoc::Left => self.parse_left(cursor),
            Assoc::Right => self.parse_right(cursor),
        }
    }
}

/// Build one precedence level of binary operators
///
/// Operands that match without any operator are returned as
/// [`Expr::Operand`]. Symbols use [`DEFAULT_OPERATOR_CHARS`] as their guard
/// class until [`BinaryOperator::operator_chars`] replaces it.
pub fn binary_operator<'code, I, S, P>(symbols: I, assoc: Assoc, operand: P) -> BinaryOperator<P>
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
    P: Parser<'code>,
{
    BinaryOperator {
        symbol: OperatorSymbol::new(symbols, DEFAULT_OPERATOR_CHARS),
        assoc,
        operand,
    }
}
