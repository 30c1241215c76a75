//! Example grammars built from the combinators
//!
//! Each module is a complete consumer of the library and backs one mode of the
//! `parsecond` console.

pub mod expr;
pub mod list;
pub mod shell;
