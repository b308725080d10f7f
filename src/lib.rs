//! # assignment-solver
//!
//! A library for solving the linear assignment problem: given a cost for every pairing of
//! a worker with a job, find the one-to-one assignment with the lowest total cost.
//!
//! The solver is the Hungarian (Kuhn-Munkres) algorithm in its `O(n^3)` labeling form,
//! with dual labels, a cached minimum slack per job, and augmenting paths over the
//! equality subgraph.
//!
//! ## Features
//!
//! - **Rectangular matrices**: More workers than jobs leaves workers unassigned, more jobs
//!   than workers leaves jobs unused
//! - **Any finite costs**: Negative entries are fine, so negate a profit matrix to maximize
//! - **Structured errors**: Irregular rows, infinite and NaN entries are distinct variants
//! - **Deterministic**: The same matrix always yields the same assignment
//!
//! ## Example
//!
//! ```rust
//! use assignment_solver::{solve, CostMatrixError};
//!
//! let costs = vec![
//!     vec![1.0, 1.0, 0.8],
//!     vec![0.9, 0.8, 0.1],
//!     vec![0.9, 0.7, 0.4],
//! ];
//!
//! let assignment = solve(&costs).unwrap();
//! assert_eq!(assignment.to_signed(), vec![0, 2, 1]);
//!
//! // Workers without a job are reported as -1
//! let assignment = solve(&[vec![3.0], vec![1.0]]).unwrap();
//! assert_eq!(assignment.to_signed(), vec![-1, 0]);
//!
//! let err = solve(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
//! assert!(matches!(err, CostMatrixError::IrregularCostMatrix { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Cost matrix and assignment types
//! - [`solver`]: The Hungarian algorithm
//! - [`parsing`]: Readers for TSV, CSV and JSON cost matrices
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod solver;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::assignment::Assignment;
pub use crate::core::matrix::{CostMatrix, CostMatrixError};
pub use solver::hungarian::{solve, HungarianAlgorithm, SolverConfig};
