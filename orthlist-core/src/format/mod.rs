//! Text format for matrix jobs
//!
//! Pure parsing and rendering of the line-oriented document read by the
//! `orthlist` runner. No I/O happens here.

pub mod constants;
pub mod input;
pub mod output;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use input::{parse_document, Document, OperandSpec};
pub use output::{render, render_document, render_operands};
#[cfg(feature = "serde")]
pub use snapshot::MatrixSnapshot;

use crate::error::{MatrixError, ParseError, Result};
use crate::matrix::OrthogonalMatrix;
use crate::ops;

/// Operation requested by the first character of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// `+`
    Add,
    /// `*`
    Multiply,
    /// `T`
    Transpose,
}

impl Operation {
    /// Character that selects this operation in a document
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => constants::ADD_SYMBOL,
            Operation::Multiply => constants::MULTIPLY_SYMBOL,
            Operation::Transpose => constants::TRANSPOSE_SYMBOL,
        }
    }

    /// Number of operand blocks the operation consumes
    pub const fn arity(self) -> usize {
        match self {
            Operation::Add | Operation::Multiply => 2,
            Operation::Transpose => 1,
        }
    }

    /// Apply the operation to exactly [`arity`](Self::arity) operands
    pub fn apply(self, operands: &[OrthogonalMatrix]) -> Result<OrthogonalMatrix> {
        match (self, operands) {
            (Operation::Add, [a, b]) => ops::add(a, b),
            (Operation::Multiply, [a, b]) => ops::multiply(a, b),
            (Operation::Transpose, [a]) => ops::transpose(a),
            (_, operands) if operands.len() < self.arity() => {
                Err(MatrixError::Parse(ParseError::MissingOperand))
            }
            _ => Err(MatrixError::Parse(ParseError::UnexpectedOperand)),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let verb = match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
            Operation::Transpose => "transpose",
        };
        write!(f, "{verb}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_checks_operand_count() {
        let m = OrthogonalMatrix::new(1, 1).unwrap();
        assert_eq!(
            Operation::Add.apply(core::slice::from_ref(&m)).unwrap_err(),
            MatrixError::Parse(ParseError::MissingOperand)
        );
        assert_eq!(
            Operation::Transpose.apply(&[m.clone(), m.clone()]).unwrap_err(),
            MatrixError::Parse(ParseError::UnexpectedOperand)
        );
        assert!(Operation::Transpose.apply(&[m]).is_ok());
    }
}
