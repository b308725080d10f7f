/// Result of solving an assignment problem: the job chosen for each original worker.
///
/// Workers left without a job (only possible when there are more workers than jobs) hold
/// `None`. Use [`Assignment::to_signed`] for the conventional `-1`-for-unassigned form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    jobs_by_worker: Vec<Option<usize>>,
    job_count: usize,
}

impl Assignment {
    pub(crate) fn new(jobs_by_worker: Vec<Option<usize>>, job_count: usize) -> Self {
        Self {
            jobs_by_worker,
            job_count,
        }
    }

    /// The job assigned to `worker`, or `None` if the worker is unassigned or out of range
    #[must_use]
    pub fn job_for(&self, worker: usize) -> Option<usize> {
        self.jobs_by_worker.get(worker).copied().flatten()
    }

    /// Number of workers
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs_by_worker.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs_by_worker.is_empty()
    }

    /// Number of jobs in the problem this assignment solves
    #[must_use]
    pub fn job_count(&self) -> usize {
        self.job_count
    }

    /// `(worker, job)` for every worker, assigned or not
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.jobs_by_worker.iter().copied().enumerate()
    }

    /// `(worker, job)` for assigned workers only
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().filter_map(|(w, j)| j.map(|j| (w, j)))
    }

    /// Workers that received no job, in ascending order
    #[must_use]
    pub fn unassigned_workers(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, j)| j.is_none())
            .map(|(w, _)| w)
            .collect()
    }

    /// Jobs that no worker received, in ascending order
    #[must_use]
    pub fn unassigned_jobs(&self) -> Vec<usize> {
        let mut taken = vec![false; self.job_count];
        for (_, j) in self.pairs() {
            taken[j] = true;
        }
        taken
            .iter()
            .enumerate()
            .filter(|(_, &t)| !t)
            .map(|(j, _)| j)
            .collect()
    }

    /// One entry per worker: the assigned job index, or `-1` if unassigned
    #[must_use]
    pub fn to_signed(&self) -> Vec<i64> {
        self.jobs_by_worker
            .iter()
            .map(|j| j.and_then(|j| i64::try_from(j).ok()).unwrap_or(-1))
            .collect()
    }

    /// Total cost of the assigned pairs, looked up in `costs`.
    ///
    /// `costs` is normally the matrix that was solved, but any matrix covering the assigned
    /// cells can be used (e.g. the un-negated matrix after a maximization).
    ///
    /// # Panics
    ///
    /// Panics if `costs` has no cell for an assigned `(worker, job)` pair.
    #[must_use]
    pub fn total_cost<R: AsRef<[f64]>>(&self, costs: &[R]) -> f64 {
        self.pairs().map(|(w, j)| costs[w].as_ref()[j]).sum()
    }
}
