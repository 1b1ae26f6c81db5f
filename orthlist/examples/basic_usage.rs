//! Build two matrices, combine them, and print the results

use orthlist::{render, MatrixError, MatrixOperations, OrthogonalMatrix};

fn main() -> Result<(), MatrixError> {
    let a = OrthogonalMatrix::from_entries(2, 2, [(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)])?;
    let b = OrthogonalMatrix::from_entries(2, 2, [(0, 0, 5), (1, 1, 8)])?;

    println!("A + B =\n{}\n", render(&a.add(&b)?)?);
    println!("A * B =\n{}\n", render(&a.multiply(&b)?)?);
    println!("A^T =\n{}\n", render(&a.transpose()?)?);

    println!("B stores {} cells", b.nnz());
    for row in 0..b.rows() {
        println!("  row {row}: {:?}", b.get_row(row));
    }
    println!("B[0, 1] = {} (implicit zero)", b.get_value(0, 1)?);

    match b.get_value(5, 5) {
        Ok(value) => println!("B[5, 5] = {value}"),
        Err(err) => println!("B[5, 5]: {err}"),
    }
    Ok(())
}
