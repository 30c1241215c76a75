//! Primitive parsers over text
//!
//! `char` holds the single-character primitives, `string` and `pattern` match
//! longer spans, and `number` and `whitespace` build common tokens from them.

pub mod char;
pub mod number;
pub mod pattern;
pub mod string;
pub mod whitespace;
