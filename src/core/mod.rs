//! Core data types for assignment problems.
//!
//! - [`CostMatrix`]: A validated cost matrix, padded to a square with zero-cost cells
//! - [`CostMatrixError`]: Why a cost matrix was rejected
//! - [`Assignment`]: The job chosen for each worker
//!
//! ## Rectangular Problems
//!
//! Workers are rows and jobs are columns. When the counts differ, the matrix is padded
//! with zero-cost dummy workers or jobs so every real worker or job can be matched:
//!
//! | Shape | Unassigned workers | Unassigned jobs |
//! |-------|--------------------|-----------------|
//! | rows == cols | none | none |
//! | rows > cols | rows - cols | none |
//! | rows < cols | none | cols - rows |

pub mod assignment;
pub mod matrix;

pub use assignment::Assignment;
pub use matrix::{CostMatrix, CostMatrixError};
