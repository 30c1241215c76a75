use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source with start and end byte offsets
/// and a reference to the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<'code> {
    /// Reference to the source
    pub source: &'code str,
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl<'code> Range<'code> {
    /// Create a new range
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        Range { source, start, end }
    }

    /// The range covered between two cursors over the same source
    pub fn between(start: Cursor<'code>, end: Cursor<'code>) -> Self {
        Range::new(start.source(), start.position(), end.position())
    }

    /// A zero-width range at the cursor
    pub fn empty(at: Cursor<'code>) -> Self {
        Range::between(at, at)
    }

    /// Get the length of the range in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the range is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Get the slice of source that this range covers
    pub fn as_str(&self) -> &'code str {
        self.source.get(self.start..self.end).unwrap_or("")
    }

    /// Zero-width range at the start of this one
    pub fn start_of(&self) -> Self {
        Range::new(self.source, self.start, self.start)
    }

    /// Zero-width range at the end of this one
    pub fn end_of(&self) -> Self {
        Range::new(self.source, self.end, self.end)
    }

    /// From the start of `self` to the end of `other`
    pub fn outer(&self, other: &Range<'code>) -> Self {
        Range::new(self.source, self.start, other.end)
    }

    /// From the end of `self` to the start of `other`
    pub fn inner(&self, other: &Range<'code>) -> Self {
        Range::new(self.source, self.end, other.start)
    }
}

/// A parsed value together with the range it was parsed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranged<'code, T> {
    pub value: T,
    pub range: Range<'code>,
}

/// A parser combinator that captures the range of a successful parse
pub struct RangedParser<P> {
    parser: P,
}

impl<P> RangedParser<P> {
    pub fn new(parser: P) -> Self {
        RangedParser { parser }
    }
}

impl<'code, P> Parser<'code> for RangedParser<P>
where
    P: Parser<'code>,
{
    type Output = Ranged<'code, P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        let (value, new_cursor) = self.parser.parse(cursor)?;
        let range = Range::between(cursor, new_cursor);
        Ok((Ranged { value, range }, new_cursor))
    }
}

/// Extension trait to add range tracking to any parser
pub trait RangedExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its range
    fn ranged(self) -> RangedParser<Self> {
        RangedParser::new(self)
    }
}

impl<'code, P> RangedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a RangedParser combinator
pub fn ranged<P>(parser: P) -> RangedParser<P> {
    RangedParser::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::error::ParseError;
    use crate::many::many;
    use crate::text::char::char;
    use crate::text::string::string;
    use crate::text::whitespace::white;

    #[test]
    fn test_range_basic() {
        let range = Range::new("hello", 0, 5);
        assert_eq!(range.len(), 5);
        assert!(!range.is_empty());
        assert_eq!(range.as_str(), "hello");
    }

    #[test]
    fn test_range_empty() {
        let range = Range::new("hello", 3, 3);
        assert_eq!(range.len(), 0);
        assert!(range.is_empty());
        assert_eq!(range.as_str(), "");
        assert_eq!(Range::empty(Cursor::new("hello").next()), Range::new("hello", 1, 1));
    }

    #[test]
    fn test_range_helpers() {
        let open = Range::new("(abc)", 0, 1);
        let close = Range::new("(abc)", 4, 5);

        assert_eq!(open.outer(&close).as_str(), "(abc)");
        assert_eq!(open.inner(&close).as_str(), "abc");
        assert_eq!(close.start_of(), Range::new("(abc)", 4, 4));
        assert_eq!(open.end_of(), Range::new("(abc)", 1, 1));
    }

    #[test]
    fn test_ranged_single() {
        let cursor = Cursor::new("hello").next();
        let (ranged, cursor) = char('e').ranged().parse(cursor).unwrap();
        assert_eq!(ranged.value, 'e');
        assert_eq!(ranged.range.start, 1);
        assert_eq!(ranged.range.end, 2);
        assert_eq!(ranged.range.as_str(), "e");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_ranged_multibyte() {
        let (ranged, _) = ranged(string("日本")).parse(Cursor::new("日本語")).unwrap();
        assert_eq!(ranged.range.len(), "日本".len());
        assert_eq!(ranged.range.as_str(), "日本");
    }

    #[test]
    fn test_ranged_zero_width() {
        let (ranged, cursor) = many(white()).ranged().parse(Cursor::new("abc")).unwrap();
        assert!(ranged.value.is_empty());
        assert!(ranged.range.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_ranged_failure_unchanged() {
        let parser = char('a').and(char('b')).ranged();
        assert_eq!(parser.parse(Cursor::new("ac")), Err(ParseError::Mismatch));
    }
}
