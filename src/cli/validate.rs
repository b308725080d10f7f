//! Validate command - check that a cost matrix can be solved.
//!
//! Runs the same checks the solver performs at construction (rectangular shape, no
//! infinite or NaN entries) and reports the matrix shape.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_costs, OutputFormat};
use crate::core::matrix::CostMatrix;
use crate::parsing::InputFormat;

#[derive(Args)]
pub struct ValidateArgs {
    /// Cost matrix file (TSV, CSV or JSON, optionally .gz), or '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (detected from the file extension by default)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

/// Execute the validate command
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the matrix is rejected.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let costs = read_costs(&args.input, args.input_format)?;
    let matrix = CostMatrix::new(&costs)?;

    if verbose {
        eprintln!("Padded to {0}x{0} for solving", matrix.dim());
    }

    match format {
        OutputFormat::Text => {
            println!(
                "Valid cost matrix: {} workers x {} jobs",
                matrix.rows(),
                matrix.cols()
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.input.display().to_string(),
                "valid": true,
                "workers": matrix.rows(),
                "jobs": matrix.cols(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("workers\tjobs");
            println!("{}\t{}", matrix.rows(), matrix.cols());
        }
    }

    Ok(())
}
