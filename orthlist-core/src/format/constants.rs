//! Format constants for matrix job documents

pub const ADD_SYMBOL: char = '+';
pub const MULTIPLY_SYMBOL: char = '*';
pub const TRANSPOSE_SYMBOL: char = 'T';

/// Separator between cells of one rendered row
pub const CELL_SEPARATOR: &str = ", ";

/// Separator between rendered rows
pub const ROW_SEPARATOR: &str = "\n";

/// Printed between the two operands when they are echoed
pub const OPERAND_SEPARATOR: &str = "\n------\n";

/// Sole content of the output file when a job fails
pub const FAILURE_SENTINEL: &str = "Invalid Matrix Operation";

pub const DEFAULT_INPUT_FILE: &str = "input1.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "output1.txt";
