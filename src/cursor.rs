/// An immutable position in a string being parsed
///
/// A cursor is a snapshot of `{source, position}`. Advancing it returns a new
/// cursor and never touches the old one, so a parser can hold on to an earlier
/// cursor and hand it back when a branch fails. This is all the backtracking
/// machinery there is.
///
/// Positions are byte offsets into `source` and always sit on a `char` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// The complete input this cursor walks over
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Absolute byte offset from the start of the input
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed suffix, always `source[position..]`
    pub fn rest(&self) -> &'code str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// The character at the cursor, or `None` at end of input
    pub fn value(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Advance past the current character
    ///
    /// At end of input the cursor is returned unchanged.
    pub fn next(self) -> Self {
        match self.value() {
            Some(ch) => self.advance(ch.len_utf8()),
            None => self,
        }
    }

    /// Advance by `len` bytes, clamped to the end of the input
    ///
    /// `len` must land on a `char` boundary; callers get it from the length of
    /// something they matched in `rest()`.
    pub fn advance(self, len: usize) -> Self {
        let position = (self.position + len).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(position));
        Cursor {
            source: self.source,
            position,
        }
    }

    /// Consume the cursor and return the source and current position
    pub fn inner(self) -> (&'code str, usize) {
        (self.source, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let cursor = Cursor::new("hello");

        assert_eq!(cursor.value(), Some('h'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.rest(), "hello");

        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some('e'));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.rest(), "ello");
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("");

        assert!(cursor.eos());
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.rest(), "");
        assert_eq!(cursor.next(), cursor);
    }

    #[test]
    fn test_multibyte_characters() {
        let cursor = Cursor::new("été");

        let cursor = cursor.next();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.value(), Some('t'));

        let cursor = cursor.next().next();
        assert!(cursor.eos());
        assert_eq!(cursor.position(), "été".len());
    }

    #[test]
    fn test_advance_clamps_to_end() {
        let cursor = Cursor::new("abc").advance(10);
        assert!(cursor.eos());
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_copy_independence() {
        let cursor = Cursor::new("abcd");

        let saved_at_a = cursor;
        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some('b'));
        assert_eq!(saved_at_a.value(), Some('a'));

        let saved_at_b = cursor;
        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some('c'));
        assert_eq!(saved_at_b.value(), Some('b'));

        let from_a = saved_at_a.next();
        assert_eq!(from_a, saved_at_b);
    }

    #[test]
    fn test_inner() {
        let cursor = Cursor::new("xyz").next().next();
        let (source, position) = cursor.inner();
        assert_eq!(source, "xyz");
        assert_eq!(position, 2);
    }
}
