#![cfg_attr(not(test), no_std)]

//! orthlist core - cross-linked sparse matrix engine
//!
//! This crate provides the orthogonal-list sparse matrix, its arithmetic,
//! and the pure text format used to describe matrix jobs. It performs no I/O;
//! the `orthlist` crate adds files, logging and the command line.
//!
//! ```
//! use orthlist_core::OrthogonalMatrix;
//!
//! let mut a = OrthogonalMatrix::new(2, 2)?;
//! a.set_value(0, 0, 1);
//! a.set_value(1, 1, 4);
//! let t = a.transpose()?;
//! assert_eq!(t.get_value(1, 1)?, 4);
//! assert_eq!(t.get_value(0, 1)?, 0);
//! # Ok::<(), orthlist_core::MatrixError>(())
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod node;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::{ErrorCategory, MatrixError, ParseError, Result};
pub use format::{parse_document, render, Document, OperandSpec, Operation};
pub use matrix::{ChainIter, Entry, OrthogonalMatrix};
pub use node::{Header, NodeId};
pub use ops::{add, multiply, transpose};
pub use traits::{MatrixOperations, SparseMatrix};
pub use validation::{checked_index, parse_i32, validate_dimensions};
