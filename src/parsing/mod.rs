//! Parsers for reading cost matrices from files and streams.
//!
//! This module provides parsers for:
//!
//! - **TSV/CSV files**: One worker per line, one job cost per field
//! - **JSON files**: A bare array of rows, or an object with a `costs` array
//!
//! Any of these may be gzip compressed (`.tsv.gz`, `.csv.gz`, `.json.gz`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use assignment_solver::parsing::{parse_file, tsv::parse_tsv_text};
//! use std::path::Path;
//!
//! // Parse from a file, detecting the format from its extension
//! let costs = parse_file(Path::new("costs.tsv")).unwrap();
//!
//! // Or parse from text
//! let costs = parse_tsv_text("1\t2\n3\t4\n", '\t').unwrap();
//! ```
//!
//! Parsers check only syntax and size. Row lengths and non-finite values are left for
//! [`CostMatrix::new`](crate::core::matrix::CostMatrix::new) to reject, so every caller
//! sees the same structured errors.

use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

use crate::utils::validation::check_dimension_limit;

pub mod json;
pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON cost matrix: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid cost matrix format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Cost matrix too large: {rows}x{cols}")]
    TooLarge { rows: usize, cols: usize },
}

/// Text formats a cost matrix can be read from
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Tsv,
    Csv,
    Json,
}

impl InputFormat {
    /// Detect the format from a file name, ignoring a trailing `.gz`
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedFormat` if the extension is not recognized.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let name = path.to_string_lossy().to_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        let ext = Path::new(name).extension().and_then(|e| e.to_str());

        match ext {
            Some("tsv" | "txt") => Ok(Self::Tsv),
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ParseError::UnsupportedFormat(ext.to_string())),
            None => Err(ParseError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Check if the path names a gzip-compressed file
pub fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Parse a cost matrix file, detecting the format from its extension
///
/// # Errors
///
/// Returns `ParseError::UnsupportedFormat` for unknown extensions, `ParseError::Io` if
/// the file cannot be read, or any error from the format's parser.
pub fn parse_file(path: &Path) -> Result<Vec<Vec<f64>>, ParseError> {
    let format = InputFormat::from_path(path)?;
    parse_file_as(path, format)
}

/// Parse a cost matrix file in an explicit format
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error from the format's
/// parser.
pub fn parse_file_as(path: &Path, format: InputFormat) -> Result<Vec<Vec<f64>>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        parse_reader(BufReader::new(GzDecoder::new(file)), format)
    } else {
        parse_reader(BufReader::new(file), format)
    }
}

/// Read all of `reader` and parse it as `format`
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure or any error from the format's parser.
pub fn parse_reader<R: Read>(
    mut reader: R,
    format: InputFormat,
) -> Result<Vec<Vec<f64>>, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_text(&text, format)
}

/// Parse `text` as `format`
///
/// # Errors
///
/// Returns a format-specific parse error, or `ParseError::TooLarge` if the matrix
/// exceeds the dimension limit.
pub fn parse_text(text: &str, format: InputFormat) -> Result<Vec<Vec<f64>>, ParseError> {
    match format {
        InputFormat::Tsv => tsv::parse_tsv_text(text, '\t'),
        InputFormat::Csv => tsv::parse_tsv_text(text, ','),
        InputFormat::Json => json::parse_json_text(text),
    }
}

/// Reject matrices whose shape exceeds the dimension limit.
///
/// The widest row is used for the column count so ragged input is bounded too.
pub(crate) fn check_shape(costs: &[Vec<f64>]) -> Result<(), ParseError> {
    let rows = costs.len();
    let cols = costs.iter().map(Vec::len).max().unwrap_or(0);
    match check_dimension_limit(rows, cols) {
        Some(_) => Err(ParseError::TooLarge { rows, cols }),
        None => Ok(()),
    }
}
