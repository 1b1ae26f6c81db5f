//! Error types for orthlist operations

use crate::format::Operation;

/// Errors raised while reading an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Document contains no operator
    Empty,
    /// First character is not `+`, `*` or `T`
    UnknownOperator(char),
    /// A token could not be read as a 32-bit signed integer
    InvalidNumber,
    /// An operand block has no `<rows> <cols>` pair
    MissingDimensions,
    /// Token count after the dimensions is not a multiple of three
    IncompleteTriple,
    /// The operator needs more operand blocks than were given
    MissingOperand,
    /// More operand blocks than the operator accepts
    UnexpectedOperand,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "input contains no operator"),
            ParseError::UnknownOperator(op) => write!(f, "unknown operator '{op}'"),
            ParseError::InvalidNumber => write!(f, "token is not a 32-bit integer"),
            ParseError::MissingDimensions => write!(f, "operand is missing its dimensions"),
            ParseError::IncompleteTriple => write!(f, "operand ends with an incomplete triple"),
            ParseError::MissingOperand => write!(f, "operator is missing an operand"),
            ParseError::UnexpectedOperand => write!(f, "too many operands for operator"),
        }
    }
}

impl core::error::Error for ParseError {}

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Row or column count is zero or negative
    InvalidDimension { rows: i32, cols: i32 },
    /// Headers for a `rows x cols` matrix could not be allocated
    CapacityExceeded { rows: i32, cols: i32 },
    /// Operand shapes are incompatible; shapes are `(rows, cols)`
    DimensionMismatch {
        op: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Read coordinate lies outside the matrix
    OutOfRange { row: i32, col: i32 },
    /// Malformed input document
    Parse(ParseError),
}

/// Broad classification of a [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Construction,
    Shape,
    Access,
    Input,
}

impl MatrixError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::InvalidDimension { .. } | MatrixError::CapacityExceeded { .. } => {
                ErrorCategory::Construction
            }
            MatrixError::DimensionMismatch { .. } => ErrorCategory::Shape,
            MatrixError::OutOfRange { .. } => ErrorCategory::Access,
            MatrixError::Parse(_) => ErrorCategory::Input,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => {
                write!(f, "invalid matrix dimensions {rows}x{cols}")
            }
            MatrixError::CapacityExceeded { rows, cols } => {
                write!(f, "cannot allocate a {rows}x{cols} matrix")
            }
            MatrixError::DimensionMismatch { op, left, right } => write!(
                f,
                "cannot {op} a {}x{} matrix with a {}x{} matrix",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::OutOfRange { row, col } => {
                write!(f, "cell ({row}, {col}) is out of range")
            }
            MatrixError::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl core::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            MatrixError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for MatrixError {
    fn from(err: ParseError) -> Self {
        MatrixError::Parse(err)
    }
}

/// Result type for orthlist operations
pub type Result<T> = core::result::Result<T, MatrixError>;
