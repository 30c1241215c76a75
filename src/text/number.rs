use super::char::{OneOf, char, one_of};
use crate::alternative::alternative;
use crate::and::AndExt;
use crate::error::ParseError;
use crate::join::JoinExt;
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::Parser;
use crate::sequence::sequence;
use crate::some::some;
use std::ops::Neg;

const DIGITS: &str = "0123456789";

/// Parser that matches a single ASCII digit
pub fn digit() -> OneOf {
    one_of(DIGITS)
}

/// Parser that matches one or more ASCII digits as a `String`
pub fn digits<'code>() -> impl Parser<'code, Output = String, Error = ParseError<'code>> {
    some(digit()).join()
}

/// Parser for an unsigned integer that fits in a `u64`
pub fn posint<'code>() -> impl Parser<'code, Output = u64, Error = ParseError<'code>> {
    digits().try_map(|text| text.parse::<u64>().ok())
}

/// Parser for an optionally signed integer that fits in an `i64`
///
/// Sign and digits are converted together, so `i64::MIN` is accepted.
pub fn integer<'code>() -> impl Parser<'code, Output = i64, Error = ParseError<'code>> {
    optional(one_of("+-"))
        .and(digits())
        .try_map(|(sign, digits)| match sign {
            Some('-') => format!("-{}", digits).parse::<i64>().ok(),
            _ => digits.parse::<i64>().ok(),
        })
}

/// Prefix `parser` with an optional `+` or `-`
///
/// A `-` negates the parsed value. A sign with nothing valid after it fails
/// the whole parse.
pub fn signed<'code, P>(
    parser: P,
) -> impl Parser<'code, Output = P::Output, Error = ParseError<'code>>
where
    P: Parser<'code, Error = ParseError<'code>>,
    P::Output: Neg<Output = P::Output>,
{
    optional(one_of("+-"))
        .and(parser)
        .map(|(sign, value)| match sign {
            Some('-') => -value,
            _ => value,
        })
}

/// Parser for `12`, `12.5` or `.5` as an `f64`
pub fn unsigned_decimal<'code>() -> impl Parser<'code, Output = f64, Error = ParseError<'code>> {
    let fractional = sequence((optional(digits()), char('.'), digits()))
        .map(|(whole, _, fraction)| format!("{}.{}", whole.unwrap_or_default(), fraction));

    alternative((fractional, digits())).try_map(|text| text.parse::<f64>().ok())
}

/// Parser for an optionally signed decimal number
pub fn decimal<'code>() -> impl Parser<'code, Output = f64, Error = ParseError<'code>> {
    signed(unsigned_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_digit() {
        let (ch, cursor) = digit().parse(Cursor::new("7a")).unwrap();
        assert_eq!(ch, '7');
        assert_eq!(cursor.rest(), "a");
        assert!(digit().parse(Cursor::new("a7")).is_err());
    }

    #[test]
    fn test_digits_requires_one() {
        let (text, cursor) = digits().parse(Cursor::new("0042+")).unwrap();
        assert_eq!(text, "0042");
        assert_eq!(cursor.rest(), "+");
        assert_eq!(digits().parse(Cursor::new("+1")), Err(ParseError::Mismatch));
    }

    #[test]
    fn test_posint() {
        assert_eq!(posint().parse(Cursor::new("12345")).unwrap().0, 12345);
        assert_eq!(
            posint().parse(Cursor::new("18446744073709551615")).unwrap().0,
            u64::MAX
        );
    }

    #[test]
    fn test_posint_overflow() {
        assert_eq!(
            posint().parse(Cursor::new("18446744073709551616")),
            Err(ParseError::Mismatch)
        );
    }

    #[test]
    fn test_integer_signs() {
        assert_eq!(integer().parse(Cursor::new("-42")).unwrap().0, -42);
        assert_eq!(integer().parse(Cursor::new("+42")).unwrap().0, 42);
        assert_eq!(integer().parse(Cursor::new("42")).unwrap().0, 42);
    }

    #[test]
    fn test_integer_bounds() {
        let (min, cursor) = integer().parse(Cursor::new("-9223372036854775808")).unwrap();
        assert_eq!(min, i64::MIN);
        assert!(cursor.eos());
        assert_eq!(integer().parse(Cursor::new("9223372036854775807")).unwrap().0, i64::MAX);
        assert_eq!(
            integer().parse(Cursor::new("9223372036854775808")),
            Err(ParseError::Mismatch)
        );
        assert_eq!(
            integer().parse(Cursor::new("-9223372036854775809")),
            Err(ParseError::Mismatch)
        );
    }

    #[test]
    fn test_sign_without_digits() {
        let cursor = Cursor::new("-x");
        assert!(integer().parse(cursor).is_err());
    }

    #[test]
    fn test_unsigned_decimal_forms() {
        assert_eq!(unsigned_decimal().parse(Cursor::new("12")).unwrap().0, 12.0);
        assert_eq!(unsigned_decimal().parse(Cursor::new("12.5")).unwrap().0, 12.5);
        assert_eq!(unsigned_decimal().parse(Cursor::new(".25")).unwrap().0, 0.25);
    }

    #[test]
    fn test_unsigned_decimal_trailing_point() {
        let (value, cursor) = unsigned_decimal().parse(Cursor::new("3.")).unwrap();
        assert_eq!(value, 3.0);
        assert_eq!(cursor.rest(), ".");
    }

    #[test]
    fn test_decimal_negative() {
        let (value, cursor) = decimal().parse(Cursor::new("-1.5 rest")).unwrap();
        assert_eq!(value, -1.5);
        assert_eq!(cursor.rest(), " rest");
    }
}
