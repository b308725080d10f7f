//! Command-line interface for assignment-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **solve**: Find the minimum-cost (or maximum-profit) assignment for a cost matrix
//! - **validate**: Check that a cost matrix is rectangular and finite
//!
//! ## Usage
//!
//! ```text
//! # Solve a tab-separated matrix, one worker per line
//! assignment-solver solve costs.tsv
//!
//! # Pipe a CSV matrix and maximize instead
//! cat profits.csv | assignment-solver solve - --input-format csv --maximize
//!
//! # JSON output for scripting
//! assignment-solver solve costs.json --format json
//!
//! # Check a matrix without solving it
//! assignment-solver validate costs.tsv.gz
//! ```

use std::io::stdin;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::parsing::{self, InputFormat};

pub mod solve;
pub mod validate;

#[derive(Parser)]
#[command(name = "assignment-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Solve worker/job assignment problems with the Hungarian algorithm")]
#[command(
    long_about = "assignment-solver finds an optimal one-to-one assignment of workers (rows) to jobs (columns) given a cost for every pairing.\n\nMatrices may be rectangular: with more workers than jobs some workers stay unassigned (reported as -1), with more jobs than workers some jobs stay unused.\n\nInput may be TSV, CSV or JSON, optionally gzip compressed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve the assignment problem for a cost matrix
    Solve(solve::SolveArgs),

    /// Validate a cost matrix without solving it
    Validate(validate::ValidateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Read a cost matrix from a path, or from stdin when the path is `-`.
///
/// Stdin defaults to TSV; files are detected from their extension unless `format` is given.
pub(crate) fn read_costs(
    input: &Path,
    format: Option<InputFormat>,
) -> anyhow::Result<Vec<Vec<f64>>> {
    let costs = if input.as_os_str() == "-" {
        parsing::parse_reader(stdin().lock(), format.unwrap_or(InputFormat::Tsv))?
    } else if let Some(format) = format {
        parsing::parse_file_as(input, format)?
    } else {
        parsing::parse_file(input)?
    };
    Ok(costs)
}
