//! Run configuration for matrix jobs

use std::path::PathBuf;

use orthlist_core::format::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Encoding of the result written to the output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated rows, one line per row
    #[default]
    Text,
    /// `MatrixSnapshot` as pretty-printed JSON
    #[cfg(feature = "serde")]
    Json,
}

/// Where a job is read from and how its result is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Job document path
    pub input: PathBuf,
    /// Result path; receives the failure sentinel when the job fails
    pub output: PathBuf,
    /// Print the parsed operands to stdout before computing
    pub echo_operands: bool,
    pub output_format: OutputFormat,
}

impl RunConfig {
    /// Create config for the given input and output paths
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Enable or disable printing the operands
    pub fn with_echo(mut self, echo_operands: bool) -> Self {
        self.echo_operands = echo_operands;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            echo_operands: true,
            output_format: OutputFormat::Text,
        }
    }
}
