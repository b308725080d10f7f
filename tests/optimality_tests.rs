//! Optimality and Structural Property Tests
//!
//! Compares solver results against exhaustive search on small random matrices and checks
//! the shape guarantees of the returned assignment for square and rectangular inputs.

use std::collections::HashSet;

use assignment_solver::{solve, HungarianAlgorithm, SolverConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimum total cost over every assignment, by exhaustive search.
///
/// The matrix is padded with zero-cost cells to a square and every permutation is tried,
/// which matches the cardinality rules for rectangular inputs.
fn brute_force_min_cost(costs: &[Vec<f64>]) -> f64 {
    let rows = costs.len();
    let cols = costs.first().map_or(0, Vec::len);
    let dim = rows.max(cols);
    let cell = |w: usize, j: usize| if w < rows && j < cols { costs[w][j] } else { 0.0 };

    fn search(
        w: usize,
        dim: usize,
        used: &mut [bool],
        cell: &dyn Fn(usize, usize) -> f64,
    ) -> f64 {
        if w == dim {
            return 0.0;
        }
        let mut best = f64::INFINITY;
        for j in 0..dim {
            if !used[j] {
                used[j] = true;
                best = best.min(cell(w, j) + search(w + 1, dim, used, cell));
                used[j] = false;
            }
        }
        best
    }

    search(0, dim, &mut vec![false; dim], &cell)
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| f64::from(rng.random_range(-20i32..=20))).collect())
        .collect()
}

fn random_fractional_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(0.0..1.0)).collect())
        .collect()
}

/// Assert every assigned job is in range and used at most once
fn assert_distinct_jobs(result: &[i64], cols: usize) {
    let mut seen = HashSet::new();
    for &job in result.iter().filter(|&&j| j != -1) {
        assert!(job >= 0 && (job as usize) < cols, "job {job} out of range");
        assert!(seen.insert(job), "job {job} assigned twice in {result:?}");
    }
}

#[test]
fn test_square_matrices_are_permutations_with_optimal_cost() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 1..=6 {
        for _ in 0..25 {
            let costs = random_matrix(&mut rng, n, n);
            let assignment = solve(&costs).unwrap();
            let result = assignment.to_signed();

            assert_eq!(result.len(), n);
            assert!(!result.contains(&-1), "square result has -1: {result:?}");
            assert_distinct_jobs(&result, n);

            let expected = brute_force_min_cost(&costs);
            assert_eq!(assignment.total_cost(&costs), expected, "{costs:?}");
        }
    }
}

#[test]
fn test_fractional_costs_are_optimal() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 2..=5 {
        for _ in 0..25 {
            let costs = random_fractional_matrix(&mut rng, n, n);
            let cost = solve(&costs).unwrap().total_cost(&costs);
            let expected = brute_force_min_cost(&costs);
            assert!((cost - expected).abs() < 1e-9, "{cost} vs {expected}: {costs:?}");
        }
    }
}

#[test]
fn test_more_workers_than_jobs() {
    let mut rng = StdRng::seed_from_u64(1234);
    for rows in 2..=6 {
        for cols in 1..rows {
            for _ in 0..10 {
                let costs = random_matrix(&mut rng, rows, cols);
                let assignment = solve(&costs).unwrap();
                let result = assignment.to_signed();

                assert_eq!(result.len(), rows);
                let unassigned = result.iter().filter(|&&j| j == -1).count();
                assert_eq!(unassigned, rows - cols, "{result:?}");
                assert_distinct_jobs(&result, cols);
                assert_eq!(assignment.total_cost(&costs), brute_force_min_cost(&costs));
            }
        }
    }
}

#[test]
fn test_more_jobs_than_workers() {
    let mut rng = StdRng::seed_from_u64(99);
    for cols in 2..=6 {
        for rows in 1..cols {
            for _ in 0..10 {
                let costs = random_matrix(&mut rng, rows, cols);
                let assignment = solve(&costs).unwrap();
                let result = assignment.to_signed();

                assert_eq!(result.len(), rows);
                assert!(!result.contains(&-1), "{result:?}");
                assert_distinct_jobs(&result, cols);
                assert_eq!(assignment.unassigned_jobs().len(), cols - rows);
                assert_eq!(assignment.total_cost(&costs), brute_force_min_cost(&costs));
            }
        }
    }
}

#[test]
fn test_identical_input_gives_identical_result() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let costs = random_fractional_matrix(&mut rng, 8, 6);
        let first = solve(&costs).unwrap();
        let second = solve(&costs).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_heuristic_toggles_preserve_optimal_cost() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..30 {
        let rows = rng.random_range(1..=5);
        let cols = rng.random_range(1..=5);
        let costs = random_matrix(&mut rng, rows, cols);
        let expected = brute_force_min_cost(&costs);

        for reduce in [false, true] {
            for greedy_warm_start in [false, true] {
                let config = SolverConfig {
                    reduce,
                    greedy_warm_start,
                };
                let assignment = HungarianAlgorithm::with_config(&costs, config)
                    .unwrap()
                    .execute();
                assert_eq!(assignment.total_cost(&costs), expected, "{config:?}");
            }
        }
    }
}

#[test]
fn test_row_and_column_shifts_do_not_change_choice_quality() {
    // Adding a constant to a row or column of a square matrix adds that constant to every
    // complete assignment, so the optimum moves by exactly the sum of the shifts.
    let mut rng = StdRng::seed_from_u64(31);
    for n in 2..=5 {
        let costs = random_matrix(&mut rng, n, n);
        let mut shift = || f64::from(rng.random_range(-50i32..=50));
        let row_shift: Vec<f64> = (0..n).map(|_| shift()).collect();
        let col_shift: Vec<f64> = (0..n).map(|_| shift()).collect();
        let shifted: Vec<Vec<f64>> = costs
            .iter()
            .enumerate()
            .map(|(w, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, c)| c + row_shift[w] + col_shift[j])
                    .collect()
            })
            .collect();

        let assignment = solve(&shifted).unwrap();
        let total_shift: f64 = row_shift.iter().sum::<f64>() + col_shift.iter().sum::<f64>();
        assert_eq!(
            assignment.total_cost(&costs),
            brute_force_min_cost(&costs),
            "indices chosen on the shifted matrix must be optimal for the original"
        );
        assert_eq!(
            assignment.total_cost(&shifted),
            brute_force_min_cost(&costs) + total_shift
        );
    }
}

#[test]
fn test_uniform_matrix_keeps_diagonal() {
    let costs = vec![vec![3.0; 5]; 5];
    assert_eq!(solve(&costs).unwrap().to_signed(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_larger_random_matrix_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(100);
    let costs = random_fractional_matrix(&mut rng, 120, 120);
    let result = solve(&costs).unwrap().to_signed();
    assert!(!result.contains(&-1));
    assert_distinct_jobs(&result, 120);
}
