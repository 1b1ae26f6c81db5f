//! Text rendering of matrices and job documents

use alloc::string::{String, ToString};

use super::constants::{CELL_SEPARATOR, OPERAND_SEPARATOR, ROW_SEPARATOR};
use super::Operation;
use crate::error::Result;
use crate::matrix::OrthogonalMatrix;
use crate::traits::SparseMatrix;

/// Render every cell of `matrix`, row by row
///
/// Cells are joined with `", "` and rows with `"\n"`; there is no trailing
/// newline. Each cell is read through `get_value`, and the first failing
/// read aborts the rendering.
pub fn render<M: SparseMatrix + ?Sized>(matrix: &M) -> Result<String> {
    let (rows, cols) = matrix.dimensions();
    let mut out = String::new();

    for row in 0..rows {
        if row > 0 {
            out.push_str(ROW_SEPARATOR);
        }
        for col in 0..cols {
            if col > 0 {
                out.push_str(CELL_SEPARATOR);
            }
            let value = matrix.get_value(coordinate(row), coordinate(col))?;
            out.push_str(&value.to_string());
        }
    }
    Ok(out)
}

/// Render operands one after another, separated by a `------` line
pub fn render_operands<M: SparseMatrix>(operands: &[M]) -> Result<String> {
    let mut out = String::new();
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            out.push_str(OPERAND_SEPARATOR);
        }
        out.push_str(&render(operand)?);
    }
    Ok(out)
}

/// Write an input document for `op` whose operand blocks list the stored cells
pub fn render_document(op: Operation, operands: &[&OrthogonalMatrix]) -> String {
    let mut out = String::new();
    out.push(op.symbol());
    out.push('\n');

    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let (rows, cols) = operand.dimensions();
        push_line(&mut out, &[rows.to_string(), cols.to_string()]);
        for entry in operand.entries() {
            push_line(
                &mut out,
                &[
                    entry.row.to_string(),
                    entry.col.to_string(),
                    entry.value.to_string(),
                ],
            );
        }
    }
    out
}

fn push_line(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(field);
    }
    out.push('\n');
}

/// Indices beyond `i32` are passed as `i32::MAX` so the read reports them out of range
fn coordinate(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
