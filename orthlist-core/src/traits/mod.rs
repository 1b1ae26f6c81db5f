//! Abstract matrix interfaces
//!
//! The renderer is written against these traits rather than the concrete
//! storage type.

pub mod matrix;

pub use matrix::{MatrixOperations, SparseMatrix};
