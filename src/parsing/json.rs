use serde::Deserialize;

use crate::parsing::{check_shape, ParseError};

/// Accepted JSON layouts for a cost matrix
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCostMatrix {
    /// `[[1, 2], [3, 4]]`
    Rows(Vec<Vec<f64>>),
    /// `{"costs": [[1, 2], [3, 4]]}`
    Object { costs: Vec<Vec<f64>> },
}

/// Parse a JSON cost matrix, either a bare array of rows or an object with a `costs` field.
///
/// JSON has no literal for infinity or NaN, so every parsed entry is finite.
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not one of the accepted layouts, or
/// `ParseError::TooLarge` if the matrix exceeds the dimension limit.
pub fn parse_json_text(text: &str) -> Result<Vec<Vec<f64>>, ParseError> {
    let costs = match serde_json::from_str::<JsonCostMatrix>(text)? {
        JsonCostMatrix::Rows(costs) | JsonCostMatrix::Object { costs } => costs,
    };
    check_shape(&costs)?;
    Ok(costs)
}
