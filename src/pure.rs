use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds with a value without consuming input
pub struct Pure<T, E> {
    value: T,
    _error: PhantomData<fn() -> E>,
}

impl<'code, T, E> Parser<'code> for Pure<T, E>
where
    T: Clone,
{
    type Output = T;
    type Error = E;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T, E>(value: T) -> Pure<T, E>
where
    T: Clone,
{
    Pure {
        value,
        _error: PhantomData,
    }
}

/// Parser that always fails with the given error
pub struct Fail<T, E> {
    error: E,
    _output: PhantomData<fn() -> T>,
}

impl<'code, T, E> Parser<'code> for Fail<T, E>
where
    E: Clone,
{
    type Output = T;
    type Error = E;

    fn parse(&self, _cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        Err(self.error.clone())
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T, E>(error: E) -> Fail<T, E>
where
    E: Clone,
{
    Fail {
        error,
        _output: PhantomData,
    }
}

/// Parser that replays a fixed result without consuming input
pub struct FromResult<T, E> {
    result: Result<T, E>,
}

impl<'code, T, E> Parser<'code> for FromResult<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = T;
    type Error = E;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output, Self::Error> {
        self.result.clone().map(|value| (value, cursor))
    }
}

pub fn from_result<T, E>(result: Result<T, E>) -> FromResult<T, E>
where
    T: Clone,
    E: Clone,
{
    FromResult { result }
}
