//! # Parsecond - Parser Combinators over String Slices
//!
//! Parsecond builds parsers out of small pieces. Every parser reads a
//! [`Cursor`] into borrowed source text and either yields a value with the
//! cursor after it, or fails with a typed error and leaves the cursor where it
//! was. Combinators take parsers and return parsers, so a grammar is written
//! as ordinary Rust expressions.
//!
//! - **No panics**: failure is always a `Result`
//! - **Cheap backtracking**: cursors are `Copy`, alternatives retry from the
//!   same position
//! - **Borrowed output**: matched text is returned as slices of the input
//!
//! ```
//! use parsecond::prelude::*;
//! use parsecond::text::char::char;
//! use parsecond::text::number::posint;
//!
//! let list = separated_by(posint(), char(','));
//! let (values, _) = run(&ended(list), "1,2,3").unwrap();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

pub mod alternative;
pub mod and;
pub mod between;
pub mod bind;
pub mod cursor;
pub mod eoi;
pub mod error;
pub mod filter;
pub mod followed_by;
pub mod grammars;
pub mod join;
pub mod lazy;
pub mod many;
pub mod map;
pub mod map_err;
pub mod not_followed_by;
pub mod operator;
pub mod optional;
pub mod parser;
pub mod position;
pub mod pure;
pub mod separated_list;
pub mod sequence;
pub mod some;
pub mod text;
pub mod until;

pub use cursor::Cursor;
pub use error::{ErrorKind, ParseError};
pub use parser::{ParseResult, Parser, run};
pub use position::{Range, Ranged};

/// Everything needed to write a grammar, minus the text primitives
///
/// The [`text`] modules are left out so that `text::char` does not shadow the
/// primitive `char` type in the importing scope.
pub mod prelude {
    pub use crate::alternative::{OrExt, alternative};
    pub use crate::and::{AndExt, and, left, right};
    pub use crate::between::{angles, braces, brackets, delimited_by, parens};
    pub use crate::bind::{BindExt, bind, or_else};
    pub use crate::cursor::Cursor;
    pub use crate::eoi::{end_of_input, ended};
    pub use crate::error::{ErrorKind, ParseError};
    pub use crate::filter::{FilterExt, guard, not_empty};
    pub use crate::followed_by::{FollowedByExt, followed_by};
    pub use crate::join::{JoinExt, join};
    pub use crate::lazy::lazy;
    pub use crate::many::many;
    pub use crate::map::{MapExt, map};
    pub use crate::map_err::{MapErrExt, map_err};
    pub use crate::not_followed_by::{NotFollowedByExt, not_followed_by};
    pub use crate::operator::{Assoc, Expr, binary_operator};
    pub use crate::optional::{OptionalExt, optional};
    pub use crate::parser::{BoxedExt, BoxedParser, ParseResult, Parser, from_fn, run};
    pub use crate::position::{Range, Ranged, RangedExt, ranged};
    pub use crate::pure::{fail, from_result, pure};
    pub use crate::separated_list::{separated_by, separated_by1};
    pub use crate::sequence::sequence;
    pub use crate::some::some;
    pub use crate::until::until;
}
