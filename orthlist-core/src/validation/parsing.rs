//! Token parsing for the matrix text format

use crate::error::ParseError;
use crate::format::constants::{ADD_SYMBOL, MULTIPLY_SYMBOL, TRANSPOSE_SYMBOL};
use crate::format::Operation;

/// Parse a decimal `i32` with an optional leading `+` or `-`
///
/// Overflow is reported as [`ParseError::InvalidNumber`].
pub fn parse_i32(token: &str) -> Result<i32, ParseError> {
    token.parse::<i32>().map_err(|_| ParseError::InvalidNumber)
}

/// Map an operator character to its [`Operation`]
pub fn parse_operator(symbol: char) -> Result<Operation, ParseError> {
    match symbol {
        ADD_SYMBOL => Ok(Operation::Add),
        MULTIPLY_SYMBOL => Ok(Operation::Multiply),
        TRANSPOSE_SYMBOL => Ok(Operation::Transpose),
        other => Err(ParseError::UnknownOperator(other)),
    }
}
