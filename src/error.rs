use std::borrow::Cow;
use std::fmt;

/// Stable discriminant of a [`ParseError`]
///
/// Lets callers branch on the kind of failure without caring about its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Mismatch,
    ExpectEnd,
    ExpectTerminator,
    Custom,
}

impl ErrorKind {
    /// The tag printed for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Mismatch => "Mismatch",
            ErrorKind::ExpectEnd => "ExpectEnd",
            ErrorKind::ExpectTerminator => "ExpectTerminator",
            ErrorKind::Custom => "Custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure produced by the built-in parsers
///
/// Most parsers fail with the payload-free [`ParseError::Mismatch`]; the reason
/// is thrown away as soon as an alternative is tried, so there is nothing worth
/// carrying. The tagged variants are reserved for the places where no branch
/// can recover and the caller needs to know what was left over.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError<'code> {
    /// The input did not match
    #[error("input did not match")]
    Mismatch,
    /// Input remained where the end of input was required
    #[error("expected end of input, got '{rest}'")]
    ExpectEnd { rest: &'code str },
    /// The input ran out before a terminator matched
    #[error("no terminator found after '{scanned}'")]
    ExpectTerminator { scanned: &'code str },
    /// A failure raised by a grammar through [`fail`](crate::pure::fail)
    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl<'code> ParseError<'code> {
    pub fn expect_end(rest: &'code str) -> Self {
        ParseError::ExpectEnd { rest }
    }

    pub fn expect_terminator(scanned: &'code str) -> Self {
        ParseError::ExpectTerminator { scanned }
    }

    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Custom(message.into())
    }

    /// The discriminant of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Mismatch => ErrorKind::Mismatch,
            ParseError::ExpectEnd { .. } => ErrorKind::ExpectEnd,
            ParseError::ExpectTerminator { .. } => ErrorKind::ExpectTerminator,
            ParseError::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Check whether this error is of the given kind
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, ParseError::Mismatch)
    }
}
