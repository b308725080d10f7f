use tracing::{debug, warn};

use crate::parsing::ParseError;
use crate::utils::validation::check_dimension_limit;

/// Parse TSV/CSV text with one worker per line and one job cost per field.
///
/// Blank lines and lines starting with `#` are skipped. If none of the fields on the first
/// remaining line parse as numbers it is taken to be a header of job names and skipped; a
/// line mixing numbers and non-numbers is always an error. Fields use
/// Rust float syntax, so `inf` and `NaN` are read as such and later rejected by the solver.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a field is not a number, or
/// `ParseError::TooLarge` if the matrix exceeds the dimension limit.
pub fn parse_tsv_text(text: &str, delimiter: char) -> Result<Vec<Vec<f64>>, ParseError> {
    let mut costs: Vec<Vec<f64>> = Vec::new();
    let mut max_cols = 0usize;
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let parsed: Vec<Option<f64>> = fields.iter().map(|f| f.parse::<f64>().ok()).collect();
        let is_header = first_data_line && parsed.iter().all(Option::is_none);
        first_data_line = false;
        if is_header {
            debug!(line = line_num, "Skipping header line");
            continue;
        }

        let row: Vec<f64> = match parsed.iter().copied().collect::<Option<_>>() {
            Some(row) => row,
            None => {
                let bad = fields
                    .iter()
                    .zip(&parsed)
                    .find(|(_, value)| value.is_none())
                    .map(|(field, _)| *field)
                    .unwrap_or_default();
                return Err(ParseError::InvalidFormat(format!(
                    "Invalid cost on line {line_num}: '{bad}'"
                )));
            }
        };

        if let Some(expected) = costs.first().map(Vec::len) {
            if row.len() != expected {
                warn!(
                    line = line_num,
                    expected,
                    found = row.len(),
                    "Row length differs from the first row"
                );
            }
        }

        // Check the limit before growing for DOS protection
        max_cols = max_cols.max(row.len());
        if check_dimension_limit(costs.len() + 1, max_cols).is_some() {
            return Err(ParseError::TooLarge {
                rows: costs.len() + 1,
                cols: max_cols,
            });
        }

        costs.push(row);
    }

    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv_text() {
        let tsv = "4\t1.5\t4\n4\t4.5\t6\n3\t2.25\t3\n";

        let costs = parse_tsv_text(tsv, '\t').unwrap();
        assert_eq!(costs.len(), 3);
        assert_eq!(costs[0], vec![4.0, 1.5, 4.0]);
        assert_eq!(costs[2][1], 2.25);
    }

    #[test]
    fn test_parse_csv_with_header() {
        let csv = r"job_a,job_b
1.0,2.0
3.0,4.0
";

        let costs = parse_tsv_text(csv, ',').unwrap();
        assert_eq!(costs, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_parse_tsv_comments_before_header() {
        let tsv = r"# Costs for the morning shift

drill	lathe
1	2
3	4
";
        let costs = parse_tsv_text(tsv, '\t').unwrap();
        assert_eq!(costs.len(), 2);
    }

    #[test]
    fn test_parse_tsv_negative_and_padded_fields() {
        let costs = parse_tsv_text(" -1 ,  2.5e1\n", ',').unwrap();
        assert_eq!(costs, vec![vec![-1.0, 25.0]]);
    }

    #[test]
    fn test_invalid_field_after_first_line() {
        let err = parse_tsv_text("1\t2\n3\tfour\n", '\t').unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => {
                assert!(msg.contains("line 2"), "{msg}");
                assert!(msg.contains("'four'"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        let costs = parse_tsv_text("1\tinf\nNaN\t2\n", '\t').unwrap();
        assert!(costs[0][1].is_infinite());
        assert!(costs[1][0].is_nan());
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let costs = parse_tsv_text("1\t2\n3\n", '\t').unwrap();
        assert_eq!(costs, vec![vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_tsv_text("", '\t').unwrap().is_empty());
        assert!(parse_tsv_text("# only a comment\n", '\t').unwrap().is_empty());
    }

    #[test]
    fn test_typo_in_first_row_is_not_a_header() {
        let err = parse_tsv_text("1,2o\n3,4\n", ',').unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => {
                assert!(msg.contains("line 1"), "{msg}");
                assert!(msg.contains("'2o'"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_only_one_header_line_is_skipped() {
        let err = parse_tsv_text("a\tb\nc\td\n1\t2\n", '\t').unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
    }
}
