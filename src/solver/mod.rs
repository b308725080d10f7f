//! Minimum-cost assignment solver.
//!
//! - [`HungarianAlgorithm`]: Single-use solver instance for one cost matrix
//! - [`SolverConfig`]: Toggles for the warm-start heuristics
//! - [`solve`]: Construct and execute in one call
//!
//! ## Algorithm
//!
//! The solver follows the labeling form of the Hungarian (Kuhn-Munkres) method:
//!
//! 1. **Reduction**: Subtract row minima, then column minima
//! 2. **Initial labels**: Each job label is its column minimum, worker labels are zero
//! 3. **Greedy warm start**: Match free endpoints of zero-slack edges in row-major order
//! 4. **Phases**: From each unmatched worker, grow an alternating tree over zero-slack
//!    edges, relabeling by the minimum slack when stuck, until an unmatched job is reached;
//!    then flip the path so the matching grows by one
//!
//! Each phase is `O(n^2)` and there are at most `n` phases, so a solve is `O(n^3)` for
//! `n = max(workers, jobs)`.
//!
//! ## Example
//!
//! ```
//! use assignment_solver::{HungarianAlgorithm, SolverConfig};
//!
//! let costs = vec![
//!     vec![6.0, 0.0, 7.0, 5.0],
//!     vec![2.0, 6.0, 2.0, 6.0],
//!     vec![2.0, 7.0, 2.0, 1.0],
//!     vec![9.0, 4.0, 7.0, 1.0],
//! ];
//!
//! let solver = HungarianAlgorithm::with_config(&costs, SolverConfig::default()).unwrap();
//! let assignment = solver.execute();
//!
//! assert_eq!(assignment.to_signed(), vec![1, 0, 2, 3]);
//! assert_eq!(assignment.total_cost(&costs), 5.0);
//! ```

pub mod hungarian;

pub use hungarian::{solve, HungarianAlgorithm, SolverConfig};
