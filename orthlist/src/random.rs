//! Random matrix generation

use orthlist_core::format::render_document;
use orthlist_core::{OrthogonalMatrix, Operation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Result, RunError};

/// Settings for generating a random job document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSpec {
    pub rows: i32,
    pub cols: i32,
    /// Inclusive lower bound for cell values
    pub min: i32,
    /// Inclusive upper bound for cell values
    pub max: i32,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

impl RandomSpec {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            min: 0,
            max: 9,
            seed: None,
        }
    }

    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Write a uniformly drawn value from `min..=max` into every cell
pub fn fill_random<R: Rng>(
    matrix: &mut OrthogonalMatrix,
    min: i32,
    max: i32,
    rng: &mut R,
) -> Result<()> {
    if min > max {
        return Err(RunError::InvalidRange { min, max });
    }
    let (rows, cols) = matrix.dimensions();
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            matrix.set_value(row, col, rng.gen_range(min..=max));
        }
    }
    Ok(())
}

/// Generate a document for `op` with randomly filled operands
///
/// Multiplication gets a `rows x cols` and a `cols x rows` operand so the
/// shapes are accepted. The product itself only succeeds when `rows >= cols`.
pub fn random_document(op: Operation, spec: &RandomSpec) -> Result<String> {
    let mut rng = spec.rng();
    let shapes: &[(i32, i32)] = match op {
        Operation::Transpose => &[(spec.rows, spec.cols)],
        Operation::Add => &[(spec.rows, spec.cols), (spec.rows, spec.cols)],
        Operation::Multiply => &[(spec.rows, spec.cols), (spec.cols, spec.rows)],
    };

    let mut operands = Vec::with_capacity(shapes.len());
    for &(rows, cols) in shapes {
        let mut matrix = OrthogonalMatrix::new(rows, cols)?;
        fill_random(&mut matrix, spec.min, spec.max, &mut rng)?;
        operands.push(matrix);
    }
    debug!(op = %op, operands = operands.len(), "generated random operands");

    let refs: Vec<&OrthogonalMatrix> = operands.iter().collect();
    Ok(render_document(op, &refs))
}
