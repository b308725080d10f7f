use thiserror::Error;

/// Reasons a cost matrix is rejected at construction time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostMatrixError {
    #[error("Irregular cost matrix: row {row} has {found} columns, expected {expected}")]
    IrregularCostMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Infinite cost at row {row}, column {col}")]
    InfiniteCost { row: usize, col: usize },

    #[error("NaN cost at row {row}, column {col}")]
    NaNCost { row: usize, col: usize },
}

/// A validated cost matrix, zero-padded to a square of side `max(rows, cols)`.
///
/// Entry `(w, j)` is the cost of assigning worker `w` to job `j`. Padding cells cost 0 so
/// that a padded worker or job can be left unmatched for free.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    dim: usize,

    /// Row-major `dim * dim` cells
    cells: Vec<f64>,
}

impl CostMatrix {
    /// Validate and copy a rectangular cost matrix.
    ///
    /// The column count is taken from the first row. An empty slice is a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns `CostMatrixError::IrregularCostMatrix` if a row's length differs from the
    /// first row's, `CostMatrixError::InfiniteCost` for a positive or negative infinity, or
    /// `CostMatrixError::NaNCost` for a NaN entry. Rows are checked in order, so the
    /// first offending row determines the error.
    pub fn new<R: AsRef<[f64]>>(costs: &[R]) -> Result<Self, CostMatrixError> {
        let rows = costs.len();
        let cols = costs.first().map_or(0, |row| row.as_ref().len());
        let dim = rows.max(cols);

        let mut cells = vec![0.0; dim * dim];
        for (w, row) in costs.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(CostMatrixError::IrregularCostMatrix {
                    row: w,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (j, &cost) in row.iter().enumerate() {
                if cost.is_infinite() {
                    return Err(CostMatrixError::InfiniteCost { row: w, col: j });
                }
                if cost.is_nan() {
                    return Err(CostMatrixError::NaNCost { row: w, col: j });
                }
            }
            cells[w * dim..w * dim + cols].copy_from_slice(row);
        }

        Ok(Self {
            rows,
            cols,
            dim,
            cells,
        })
    }

    /// Number of workers in the original matrix
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of jobs in the original matrix
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Side of the padded square
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Cost of assigning `worker` to `job`; padding cells are 0
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the padded square.
    #[must_use]
    pub fn get(&self, worker: usize, job: usize) -> f64 {
        assert!(
            worker < self.dim && job < self.dim,
            "cell ({worker}, {job}) outside {0}x{0} matrix",
            self.dim
        );
        self.cells[worker * self.dim + job]
    }

    /// The padded row of costs for `worker`
    pub(crate) fn row(&self, worker: usize) -> &[f64] {
        &self.cells[worker * self.dim..(worker + 1) * self.dim]
    }

    /// Subtract each row's minimum from the row, then each column's minimum from the column.
    ///
    /// Every row and column ends up holding at least one zero. The optimal assignment is
    /// unchanged because each subtraction shifts the cost of every complete assignment by
    /// the same constant.
    pub fn reduce(&mut self) {
        let dim = self.dim;
        if dim == 0 {
            return;
        }

        for row in self.cells.chunks_exact_mut(dim) {
            let min = row.iter().copied().fold(f64::INFINITY, f64::min);
            for cost in row.iter_mut() {
                *cost -= min;
            }
        }

        let mut column_min = vec![f64::INFINITY; dim];
        for row in self.cells.chunks_exact(dim) {
            for (min, &cost) in column_min.iter_mut().zip(row) {
                *min = min.min(cost);
            }
        }
        for row in self.cells.chunks_exact_mut(dim) {
            for (cost, &min) in row.iter_mut().zip(&column_min) {
                *cost -= min;
            }
        }
    }
}
