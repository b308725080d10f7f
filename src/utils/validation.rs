//! Centralized input validation.

/// Maximum number of workers or jobs accepted from an input file.
///
/// The solver allocates a square matrix of side `max(workers, jobs)`, so this bounds
/// memory at roughly 800 MB of costs.
pub const MAX_DIMENSION: usize = 10_000;

/// Check whether a matrix of the given shape exceeds [`MAX_DIMENSION`].
///
/// Returns an error message if either side is too large, None if the shape is acceptable.
///
/// # Examples
///
/// ```
/// use assignment_solver::utils::validation::check_dimension_limit;
///
/// assert!(check_dimension_limit(100, 250).is_none());
/// assert!(check_dimension_limit(1, 20_000).is_some());
/// ```
#[must_use]
pub fn check_dimension_limit(rows: usize, cols: usize) -> Option<String> {
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        Some(format!(
            "Cost matrix is {rows}x{cols}: each side must be at most {MAX_DIMENSION}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_limit_boundary() {
        assert!(check_dimension_limit(MAX_DIMENSION, MAX_DIMENSION).is_none());
        assert!(check_dimension_limit(MAX_DIMENSION + 1, 1).is_some());
        assert!(check_dimension_limit(0, 0).is_none());
    }

    #[test]
    fn test_dimension_limit_message() {
        let msg = check_dimension_limit(3, 10_001).unwrap();
        assert!(msg.contains("3x10001"));
    }
}
