use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::assignment::Assignment;
use crate::core::matrix::{CostMatrix, CostMatrixError};

/// Configuration for the Hungarian solver.
///
/// Both options are warm-start heuristics. Turning them off never changes the optimal
/// cost, only how many augmenting phases are needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Subtract row and column minima before labeling
    pub reduce: bool,
    /// Greedily match zero-slack edges before the first phase
    pub greedy_warm_start: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            reduce: true,
            greedy_warm_start: true,
        }
    }
}

/// Hungarian (Kuhn-Munkres) solver for the minimum-cost assignment problem.
///
/// Dual labels are kept on workers and jobs with `u[w] + v[j] <= cost[w][j]` for every
/// edge; zero-slack edges form the equality subgraph the matching is built from. Each phase
/// grows an alternating tree from one unmatched worker, relabels by the minimum slack when
/// the tree runs out of tight edges, and augments once it reaches an unmatched job.
///
/// Runs in `O(n^3)` where `n = max(rows, cols)`. An instance is consumed by
/// [`HungarianAlgorithm::execute`]; solve another problem with a new instance.
#[derive(Debug)]
pub struct HungarianAlgorithm {
    costs: CostMatrix,
    config: SolverConfig,

    label_by_worker: Vec<f64>,
    label_by_job: Vec<f64>,

    match_job_by_worker: Vec<Option<usize>>,
    match_worker_by_job: Vec<Option<usize>>,

    /// Workers in the current phase's alternating tree
    committed_workers: Vec<bool>,
    /// Worker whose edge reached each job in the current tree; `None` if not yet reached
    parent_worker_by_committed_job: Vec<Option<usize>>,

    /// Minimum slack from any committed worker to each unreached job, and that worker
    min_slack_value_by_job: Vec<f64>,
    min_slack_worker_by_job: Vec<usize>,
}

impl HungarianAlgorithm {
    /// Create a solver for `costs`, where `costs[w][j]` is the cost of giving job `j` to
    /// worker `w`.
    ///
    /// # Errors
    ///
    /// Returns `CostMatrixError::IrregularCostMatrix` if rows differ in length,
    /// `CostMatrixError::InfiniteCost` for an infinite entry, or `CostMatrixError::NaNCost`
    /// for a NaN entry.
    pub fn new<R: AsRef<[f64]>>(costs: &[R]) -> Result<Self, CostMatrixError> {
        Self::with_config(costs, SolverConfig::default())
    }

    /// Create a solver with custom configuration
    ///
    /// # Errors
    ///
    /// Same as [`HungarianAlgorithm::new`].
    pub fn with_config<R: AsRef<[f64]>>(
        costs: &[R],
        config: SolverConfig,
    ) -> Result<Self, CostMatrixError> {
        Ok(Self::from_matrix(CostMatrix::new(costs)?, config))
    }

    /// Create a solver from an already validated matrix
    #[must_use]
    pub fn from_matrix(costs: CostMatrix, config: SolverConfig) -> Self {
        let dim = costs.dim();
        Self {
            costs,
            config,
            label_by_worker: vec![0.0; dim],
            label_by_job: vec![0.0; dim],
            match_job_by_worker: vec![None; dim],
            match_worker_by_job: vec![None; dim],
            committed_workers: vec![false; dim],
            parent_worker_by_committed_job: vec![None; dim],
            min_slack_value_by_job: vec![0.0; dim],
            min_slack_worker_by_job: vec![0; dim],
        }
    }

    /// Run the algorithm to completion.
    ///
    /// Returns the minimum-cost assignment, indexed by original worker. A worker is left
    /// unassigned only when there are more workers than jobs.
    #[must_use]
    pub fn execute(mut self) -> Assignment {
        debug!(
            rows = self.costs.rows(),
            cols = self.costs.cols(),
            dim = self.costs.dim(),
            "Solving assignment problem"
        );

        if self.config.reduce {
            self.costs.reduce();
        }
        self.compute_initial_feasible_solution();
        if self.config.greedy_warm_start {
            self.greedy_match();
        }

        let mut phases = 0usize;
        let mut relabels = 0usize;
        while let Some(worker) = self.fetch_unmatched_worker() {
            self.initialize_phase(worker);
            relabels += self.execute_phase();
            phases += 1;
        }
        debug!(phases, relabels, "Matching complete");

        let cols = self.costs.cols();
        let jobs_by_worker = self
            .match_job_by_worker
            .iter()
            .take(self.costs.rows())
            .map(|job| job.filter(|&j| j < cols))
            .collect();

        Assignment::new(jobs_by_worker, cols)
    }

    fn slack(&self, worker: usize, job: usize) -> f64 {
        self.costs.get(worker, job) - self.label_by_worker[worker] - self.label_by_job[job]
    }

    /// Worker labels start at zero and each job label is the minimum cost of its column,
    /// which is feasible by construction.
    fn compute_initial_feasible_solution(&mut self) {
        self.label_by_job.fill(f64::INFINITY);
        for w in 0..self.costs.dim() {
            for (label, &cost) in self.label_by_job.iter_mut().zip(self.costs.row(w)) {
                *label = label.min(cost);
            }
        }
    }

    /// Match every tight edge whose endpoints are both free, scanning in row-major order
    fn greedy_match(&mut self) {
        let dim = self.costs.dim();
        let mut matched = 0usize;
        for w in 0..dim {
            for j in 0..dim {
                if self.match_job_by_worker[w].is_none()
                    && self.match_worker_by_job[j].is_none()
                    && self.slack(w, j) == 0.0
                {
                    self.assign(w, j);
                    matched += 1;
                }
            }
        }
        debug!(matched, dim, "Greedy warm start");
    }

    fn fetch_unmatched_worker(&self) -> Option<usize> {
        self.match_job_by_worker.iter().position(Option::is_none)
    }

    /// Reset the tree to the single root `worker` and seed the slack cache from its edges
    fn initialize_phase(&mut self, worker: usize) {
        self.committed_workers.fill(false);
        self.parent_worker_by_committed_job.fill(None);
        self.committed_workers[worker] = true;
        for j in 0..self.costs.dim() {
            self.min_slack_value_by_job[j] = self.slack(worker, j);
            self.min_slack_worker_by_job[j] = worker;
        }
    }

    /// Grow the alternating tree until an augmenting path is found, then augment.
    ///
    /// Each iteration reaches one more job, so a phase finishes within `dim` iterations,
    /// each costing `O(dim)` thanks to the cached minimum slacks. Returns the number of
    /// relabels the phase needed.
    fn execute_phase(&mut self) -> usize {
        let mut relabels = 0;
        loop {
            let (job, slack) = self.min_slack_unreached_job();
            let worker = self.min_slack_worker_by_job[job];
            if slack > 0.0 {
                self.update_labeling(slack);
                relabels += 1;
            }
            self.parent_worker_by_committed_job[job] = Some(worker);

            match self.match_worker_by_job[job] {
                None => {
                    self.augment(worker, job);
                    return relabels;
                }
                Some(matched_worker) => self.commit_worker(matched_worker),
            }
        }
    }

    /// The unreached job with the smallest cached slack; the lowest index wins ties
    fn min_slack_unreached_job(&self) -> (usize, f64) {
        self.parent_worker_by_committed_job
            .iter()
            .zip(&self.min_slack_value_by_job)
            .enumerate()
            .filter(|(_, (parent, _))| parent.is_none())
            .fold(None, |best: Option<(usize, f64)>, (j, (_, &slack))| match best {
                Some((_, best_slack)) if best_slack <= slack => best,
                _ => Some((j, slack)),
            })
            .expect("tree has fewer committed workers than jobs, so a job is unreached")
    }

    /// Raise committed worker labels and lower reached job labels by `slack`.
    ///
    /// Edges inside the tree keep their slack, edges from the tree to unreached jobs lose
    /// `slack`, so the minimum of those becomes tight and every slack stays non-negative.
    fn update_labeling(&mut self, slack: f64) {
        trace!(slack, "Relabeling");
        for (label, _) in self
            .label_by_worker
            .iter_mut()
            .zip(&self.committed_workers)
            .filter(|(_, &committed)| committed)
        {
            *label += slack;
        }
        for j in 0..self.costs.dim() {
            if self.parent_worker_by_committed_job[j].is_some() {
                self.label_by_job[j] -= slack;
            } else {
                self.min_slack_value_by_job[j] -= slack;
            }
        }
    }

    /// Add `worker` to the tree and fold its edges into the slack cache
    fn commit_worker(&mut self, worker: usize) {
        self.committed_workers[worker] = true;
        for j in 0..self.costs.dim() {
            if self.parent_worker_by_committed_job[j].is_none() {
                let slack = self.slack(worker, j);
                if self.min_slack_value_by_job[j] > slack {
                    self.min_slack_value_by_job[j] = slack;
                    self.min_slack_worker_by_job[j] = worker;
                }
            }
        }
    }

    /// Flip the alternating path ending at the free `job`, reached from `worker`.
    ///
    /// Walks back towards the root: each worker takes the job that reached it and releases
    /// its previous job to the worker one step closer to the root.
    fn augment(&mut self, mut worker: usize, mut job: usize) {
        trace!(worker, job, "Augmenting path found");
        loop {
            let previous_job = self.match_job_by_worker[worker];
            self.assign(worker, job);
            let Some(previous_job) = previous_job else {
                return;
            };
            job = previous_job;
            worker = self.parent_worker_by_committed_job[job]
                .expect("jobs matched to committed workers are reached by the tree");
        }
    }

    fn assign(&mut self, worker: usize, job: usize) {
        self.match_job_by_worker[worker] = Some(job);
        self.match_worker_by_job[job] = Some(worker);
    }
}

/// Solve the assignment problem for `costs` with the default configuration.
///
/// # Errors
///
/// Returns a `CostMatrixError` if the matrix is irregular or holds a non-finite entry.
///
/// # Examples
///
/// ```
/// use assignment_solver::solve;
///
/// let costs = vec![vec![4.0, 1.5, 4.0], vec![4.0, 4.5, 6.0], vec![3.0, 2.25, 3.0]];
/// let assignment = solve(&costs).unwrap();
/// assert_eq!(assignment.to_signed(), vec![1, 0, 2]);
/// assert_eq!(assignment.total_cost(&costs), 8.5);
/// ```
pub fn solve<R: AsRef<[f64]>>(costs: &[R]) -> Result<Assignment, CostMatrixError> {
    Ok(HungarianAlgorithm::new(costs)?.execute())
}
