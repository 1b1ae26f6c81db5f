//! Job execution: read a document, evaluate it, write the result
//!
//! Any failure after the input path is known replaces the output file's
//! content with [`FAILURE_SENTINEL`]; partial results are never written.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use orthlist_core::format::constants::FAILURE_SENTINEL;
use orthlist_core::format::{parse_document, render, render_operands};
use orthlist_core::{OrthogonalMatrix, Operation};
use tracing::{debug, info, warn};

use crate::config::{OutputFormat, RunConfig};
use crate::error::{Result, RunError};

/// Summary of a successful job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub op: Operation,
    /// `(rows, cols)` of each operand
    pub operand_shapes: Vec<(usize, usize)>,
    /// `(rows, cols)` of the result
    pub result_shape: (usize, usize),
    /// Text written to the output file
    pub output: String,
}

/// Run the job described by `config`, echoing operands to stdout
pub fn run(config: &RunConfig) -> Result<Report> {
    let stdout = io::stdout();
    let mut echo = stdout.lock();
    run_with(config, &mut echo)
}

/// Run the job described by `config`, echoing operands to `echo`
pub fn run_with<W: Write>(config: &RunConfig, echo: &mut W) -> Result<Report> {
    info!(input = %config.input.display(), output = %config.output.display(), "running job");

    match execute(config, echo) {
        Ok(report) => {
            write_file(&config.output, &report.output)?;
            info!(
                op = %report.op,
                rows = report.result_shape.0,
                cols = report.result_shape.1,
                "job finished"
            );
            Ok(report)
        }
        Err(err) => {
            warn!(error = %err, "job failed, writing failure sentinel");
            if let Err(write_err) = write_file(&config.output, FAILURE_SENTINEL) {
                warn!(error = %write_err, "could not write failure sentinel");
            }
            Err(err)
        }
    }
}

fn execute<W: Write>(config: &RunConfig, echo: &mut W) -> Result<Report> {
    let text = fs::read_to_string(&config.input).map_err(|source| RunError::Read {
        path: config.input.clone(),
        source,
    })?;

    let document = parse_document(&text)?;
    debug!(op = %document.op, operands = document.operands.len(), "parsed document");

    let operands = document.build_operands()?;

    if config.echo_operands {
        let listing = render_operands(&operands)?;
        writeln!(echo, "{listing}").map_err(RunError::Echo)?;
    }

    let result = document.op.apply(&operands)?;
    debug!(stored = result.nnz(), "operation complete");

    Ok(Report {
        op: document.op,
        operand_shapes: operands.iter().map(OrthogonalMatrix::dimensions).collect(),
        result_shape: result.dimensions(),
        output: encode(&result, config.output_format)?,
    })
}

fn encode(result: &OrthogonalMatrix, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render(result)?),
        #[cfg(feature = "serde")]
        OutputFormat::Json => {
            let snapshot = orthlist_core::format::MatrixSnapshot::from(result);
            Ok(serde_json::to_string_pretty(&snapshot)?)
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| RunError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(dir: &tempfile::TempDir, text: &str) -> RunConfig {
        let input = dir.path().join("input1.txt");
        fs::write(&input, text).unwrap();
        RunConfig::new(input, dir.path().join("output1.txt"))
    }

    #[test]
    fn test_transpose_job() {
        let dir = tempfile::tempdir().unwrap();
        let config = job(&dir, "T\n2 3\n0 0 1\n0 2 3\n1 1 5\n");
        let mut echo = Vec::new();

        let report = run_with(&config, &mut echo).unwrap();

        assert_eq!(report.op, Operation::Transpose);
        assert_eq!(report.operand_shapes, vec![(2, 3)]);
        assert_eq!(report.result_shape, (3, 2));
        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            "1, 0\n0, 5\n3, 0"
        );
        assert_eq!(String::from_utf8(echo).unwrap(), "1, 0, 3\n0, 5, 0\n");
    }

    #[test]
    fn test_echo_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = job(&dir, "T\n1 1\n0 0 2\n").with_echo(false);
        let mut echo = Vec::new();

        run_with(&config, &mut echo).unwrap();
        assert!(echo.is_empty());
    }

    #[test]
    fn test_failure_writes_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let config = job(&dir, "+\n2 2\n0 0 1\n\n3 3\n0 0 1\n");
        fs::write(&config.output, "stale").unwrap();
        let mut echo = Vec::new();

        let err = run_with(&config, &mut echo).unwrap_err();

        assert!(matches!(
            err,
            RunError::Matrix(orthlist_core::MatrixError::DimensionMismatch { .. })
        ));
        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            FAILURE_SENTINEL
        );
        // Operands are echoed before the operation is attempted.
        assert!(String::from_utf8(echo).unwrap().contains("------"));
    }

    #[test]
    fn test_missing_input_writes_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path().join("absent.txt"), dir.path().join("out.txt"));

        let err = run_with(&config, &mut Vec::new()).unwrap_err();

        assert!(matches!(err, RunError::Read { .. }));
        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            FAILURE_SENTINEL
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = job(&dir, "T\n1 2\n0 1 7\n")
            .with_echo(false)
            .with_output_format(OutputFormat::Json);

        run_with(&config, &mut Vec::new()).unwrap();

        let written = fs::read_to_string(&config.output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["rows"], 2);
        assert_eq!(value["cols"], 1);
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["value"], 7);
    }
}
