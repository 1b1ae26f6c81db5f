use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use orthlist::{logging, random_document, runner, OutputFormat, RandomSpec, RunConfig};
use orthlist_core::format::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use orthlist_core::format::{parse_document, OperandSpec};
use orthlist_core::validation::parse_operator;
use orthlist_core::OrthogonalMatrix;
use tracing::error;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "orthlist - add, multiply and transpose sparse integer matrices")]
struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// The requested subcommand; `run` with default paths when none is given
    fn into_command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Run(RunArgs::default_paths()))
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate a job document and write the result (default)
    Run(RunArgs),
    /// Show the operation and operand shapes of a job document
    Info {
        /// Job document to inspect
        #[arg(long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,
    },
    /// Print a randomly filled job document
    Random {
        #[arg(long)]
        rows: i32,

        #[arg(long)]
        cols: i32,

        /// Smallest cell value
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min: i32,

        /// Largest cell value
        #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
        max: i32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Operator character: T, + or *
        #[arg(long, default_value_t = 'T')]
        op: char,
    },
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Job document path
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Result path
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Do not print the operands
    #[arg(long)]
    quiet: bool,

    /// Write the result as JSON
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    /// Same values clap fills in when `run` is given without flags
    fn default_paths() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            quiet: false,
            #[cfg(feature = "serde")]
            json: false,
        }
    }

    fn into_config(self) -> RunConfig {
        let config = RunConfig::new(self.input, self.output).with_echo(!self.quiet);
        #[cfg(feature = "serde")]
        let config = if self.json {
            config.with_output_format(OutputFormat::Json)
        } else {
            config
        };
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let outcome = match cli.into_command() {
        Commands::Run(args) => handle_run(args),
        Commands::Info { input } => handle_info(&input),
        Commands::Random {
            rows,
            cols,
            min,
            max,
            seed,
            op,
        } => handle_random(rows, cols, min, max, seed, op),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_run(args: RunArgs) -> Result<ExitCode> {
    let config = args.into_config();
    match runner::run(&config) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            // The sentinel is already in the output file; report and fail.
            error!(error = %err, "job failed");
            Ok(ExitCode::from(1))
        }
    }
}

fn handle_info(input: &Path) -> Result<ExitCode> {
    print!("{}", describe_job(input)?);
    Ok(ExitCode::SUCCESS)
}

fn describe_job(input: &Path) -> Result<String> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let document = parse_document(&text).context("failed to parse job document")?;

    let mut out = String::new();
    writeln!(out, "Job: {}", input.display())?;
    writeln!(out, "  Operation: {} ({})", document.op, document.op.symbol())?;
    for (i, spec) in document.operands.iter().enumerate() {
        let matrix = spec.build().context("failed to build operand")?;
        describe_operand(&mut out, i, spec, &matrix)?;
    }
    Ok(out)
}

fn describe_operand(
    out: &mut String,
    index: usize,
    spec: &OperandSpec,
    matrix: &OrthogonalMatrix,
) -> std::fmt::Result {
    let (rows, cols) = matrix.dimensions();
    let longest_row = (0..rows).map(|r| matrix.row_len(r)).max().unwrap_or(0);
    let longest_col = (0..cols).map(|c| matrix.col_len(c)).max().unwrap_or(0);
    let dropped = spec.triples.len().saturating_sub(matrix.nnz());

    writeln!(out, "  Operand {index}: {rows} x {cols}")?;
    writeln!(out, "    Stored cells: {}", matrix.nnz())?;
    writeln!(out, "    Triples ignored or overwritten: {dropped}")?;
    writeln!(out, "    Longest row chain: {longest_row}")?;
    writeln!(out, "    Longest column chain: {longest_col}")
}

fn handle_random(
    rows: i32,
    cols: i32,
    min: i32,
    max: i32,
    seed: Option<u64>,
    op: char,
) -> Result<ExitCode> {
    let op = parse_operator(op)?;
    let mut spec = RandomSpec::new(rows, cols).with_range(min, max);
    if let Some(seed) = seed {
        spec = spec.with_seed(seed);
    }
    print!("{}", random_document(op, &spec)?);
    Ok(ExitCode::SUCCESS)
}
