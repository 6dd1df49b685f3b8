use std::fmt::{Debug, Formatter};

use nom::IResult;
use nom::character::complete::digit1;
use nom::combinator::map_res;
use nom::error::{ErrorKind, FromExternalError, ParseError};

use crate::TresCount;

pub enum ParserError<I> {
    Overflow(I),
    Nom(I, ErrorKind),
}

impl<I: Debug> Debug for ParserError<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow(input) => write!(f, "Number {input:?} is out of range"),
            Self::Nom(input, error) => write!(f, "Parser error at {input:?}: expecting {error:?}"),
        }
    }
}

impl<I> ParseError<I> for ParserError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        ParserError::Nom(input, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E> FromExternalError<I, E> for ParserError<I> {
    fn from_external_error(input: I, _: ErrorKind, _: E) -> Self {
        ParserError::Overflow(input)
    }
}

pub type NomResult<'a, Ret> = IResult<&'a str, Ret, ParserError<&'a str>>;

/// Parses the leading run of decimal digits.
/// Anything after the digits is left in the remaining input.
pub fn p_count(input: &str) -> NomResult<'_, TresCount> {
    map_res(digit1, |number: &str| number.parse::<TresCount>())(input)
}
