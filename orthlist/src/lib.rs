//! orthlist - cross-linked sparse matrix jobs
//!
//! This library runs matrix jobs described in a small text format on top of
//! the `orthlist-core` engine.
//!
//! ## Architecture
//!
//! - **orthlist-core**: engine, arithmetic, traits and the pure text format (no I/O)
//! - **orthlist**: file I/O, run configuration, logging, random generation and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orthlist::{run, RunConfig};
//!
//! fn example() -> Result<(), orthlist::RunError> {
//!     // Reads input1.txt and writes output1.txt
//!     let report = run(&RunConfig::default())?;
//!     println!("{} produced a {:?} matrix", report.op, report.result_shape);
//!     Ok(())
//! }
//! ```
//!
//! ## Job documents
//!
//! ```text
//! *
//! 2 2
//! 0 0 1
//! 1 1 2
//!
//! 2 2
//! 0 1 3
//! ```
//!
//! The first character picks the operation (`+`, `*` or `T`), each block
//! gives `<rows> <cols>` and then `<row> <col> <value>` triples. A failed job
//! leaves `Invalid Matrix Operation` in the output file.

// Re-export core abstractions
pub use orthlist_core::{
    // Engine
    add, multiply, transpose, Entry, OrthogonalMatrix,
    // Traits
    MatrixOperations, SparseMatrix,
    // Format
    parse_document, render, Document, Operation,
    // Error handling
    ErrorCategory, MatrixError, ParseError,
};

pub mod config;
pub mod error;
pub mod logging;
pub mod random;
pub mod runner;

pub use config::{OutputFormat, RunConfig};
pub use error::RunError;
pub use random::{fill_random, random_document, RandomSpec};
pub use runner::{run, run_with, Report};
