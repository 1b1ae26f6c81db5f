//! Input document parsing
//!
//! ```text
//! +
//! 2 2
//! 0 0 1
//! 1 1 4
//!
//! 2 2
//! 0 1 5
//! ```
//!
//! The first non-whitespace character selects the [`Operation`]. Each operand
//! block is a `<rows> <cols>` pair followed by whitespace-separated
//! `<row> <col> <value>` triples. For binary operators the first block ends
//! at the first blank line after it has started; the last block always runs
//! to the end of the input.

use alloc::vec::Vec;

use super::Operation;
use crate::error::{ParseError, Result};
use crate::matrix::OrthogonalMatrix;
use crate::validation::{parse_i32, parse_operator};

/// One parsed operand block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandSpec {
    pub rows: i32,
    pub cols: i32,
    /// `(row, col, value)` in document order
    pub triples: Vec<(i32, i32, i32)>,
}

impl OperandSpec {
    /// Construct the matrix; out-of-range triples are dropped by `set_value`
    pub fn build(&self) -> Result<OrthogonalMatrix> {
        OrthogonalMatrix::from_entries(self.rows, self.cols, self.triples.iter().copied())
    }

    fn from_tokens(tokens: &[&str]) -> core::result::Result<Self, ParseError> {
        let numbers = tokens
            .iter()
            .map(|token| parse_i32(token))
            .collect::<core::result::Result<Vec<_>, _>>()?;

        let [rows, cols, rest @ ..] = numbers.as_slice() else {
            return Err(ParseError::MissingDimensions);
        };
        if rest.len() % 3 != 0 {
            return Err(ParseError::IncompleteTriple);
        }

        Ok(Self {
            rows: *rows,
            cols: *cols,
            triples: rest
                .chunks_exact(3)
                .map(|triple| (triple[0], triple[1], triple[2]))
                .collect(),
        })
    }
}

/// A parsed job: an operation and its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub op: Operation,
    pub operands: Vec<OperandSpec>,
}

impl Document {
    /// Build every operand matrix, in document order
    pub fn build_operands(&self) -> Result<Vec<OrthogonalMatrix>> {
        self.operands.iter().map(OperandSpec::build).collect()
    }
}

/// Parse a whole input document
pub fn parse_document(text: &str) -> core::result::Result<Document, ParseError> {
    let text = text.trim_start();
    let symbol = text.chars().next().ok_or(ParseError::Empty)?;
    let op = parse_operator(symbol)?;
    let body = &text[symbol.len_utf8()..];

    let blocks = split_blocks(body, op.arity());
    if blocks.len() < op.arity() {
        return Err(ParseError::MissingOperand);
    }

    let operands = blocks
        .iter()
        .map(|tokens| OperandSpec::from_tokens(tokens))
        .collect::<core::result::Result<Vec<_>, _>>()?;
    Ok(Document { op, operands })
}

/// Split `body` into at most `count` token blocks. All blocks but the last
/// end at a blank line once they hold a token; empty blocks are not returned.
fn split_blocks(body: &str, count: usize) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::with_capacity(count);
    let mut current: Vec<&str> = Vec::new();

    for line in body.lines() {
        let last_block = blocks.len() + 1 >= count;
        if line.trim().is_empty() {
            if !last_block && !current.is_empty() {
                blocks.push(core::mem::take(&mut current));
            }
            continue;
        }
        current.extend(line.split_ascii_whitespace());
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}
