// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{common::JobId, problem::job::Job};
use flowshop_core::prelude::TimeDelta;

/// Immutable description of a scheduling problem: the job set, the
/// maintenance regime, and the search tunables.
///
/// Constructed through [`InstanceBuilder`](crate::problem::builder::InstanceBuilder),
/// which validates every field; a value of this type always satisfies the
/// model invariants (positive durations, no operation longer than the
/// maintenance period, punishment factor inside `(0, 1)`).
#[derive(Debug, Clone)]
pub struct ProblemInstance<T> {
    pub(crate) maintenance_length: TimeDelta<T>,
    pub(crate) maintenance_period: TimeDelta<T>,
    pub(crate) neighbour_search_count: usize,
    pub(crate) algorithm_retries: usize,
    pub(crate) tabu_list_size: usize,
    pub(crate) candidate_list_size: usize,
    pub(crate) renew_punishment_factor: f64,
    pub(crate) jobs: Vec<Job<T>>,
}

impl<T: Copy> ProblemInstance<T> {
    /// Length of every maintenance interval.
    #[inline]
    pub fn maintenance_length(&self) -> TimeDelta<T> {
        self.maintenance_length
    }

    /// Maximum productive time a machine may accumulate since its last
    /// maintenance before a new maintenance must be inserted.
    #[inline]
    pub fn maintenance_period(&self) -> TimeDelta<T> {
        self.maintenance_period
    }

    /// Number of distinct swap pairs sampled per tabu iteration.
    #[inline]
    pub fn neighbour_search_count(&self) -> usize {
        self.neighbour_search_count
    }

    /// Number of additional restarts; the driver runs `retries + 1`
    /// independent searches.
    #[inline]
    pub fn algorithm_retries(&self) -> usize {
        self.algorithm_retries
    }

    #[inline]
    pub fn tabu_list_size(&self) -> usize {
        self.tabu_list_size
    }

    /// Reserved tunable carried over from the input format. Nothing in the
    /// engine reads it.
    #[inline]
    pub fn candidate_list_size(&self) -> usize {
        self.candidate_list_size
    }

    /// Reserved penalty factor for operations that would straddle a
    /// maintenance interval. Validated to lie in `(0, 1)` but deliberately
    /// unused by placement and scoring.
    #[inline]
    pub fn renew_punishment_factor(&self) -> f64 {
        self.renew_punishment_factor
    }

    #[inline]
    pub fn jobs(&self) -> &[Job<T>] {
        &self.jobs
    }

    #[inline]
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn iter_jobs(&self) -> impl Iterator<Item = &Job<T>> {
        self.jobs.iter()
    }

    #[inline]
    pub fn job(&self, id: JobId) -> Option<&Job<T>> {
        self.jobs.iter().find(|j| j.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::builder::InstanceBuilder;
    use flowshop_core::prelude::TimeDelta;

    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    fn small_instance() -> ProblemInstance<i64> {
        InstanceBuilder::new(td(5), td(100))
            .with_neighbour_search_count(3)
            .with_algorithm_retries(2)
            .with_job(JobId::new(1), td(3), td(4))
            .with_job(JobId::new(2), td(2), td(6))
            .build()
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        let inst = small_instance();
        assert_eq!(inst.maintenance_length(), td(5));
        assert_eq!(inst.maintenance_period(), td(100));
        assert_eq!(inst.neighbour_search_count(), 3);
        assert_eq!(inst.algorithm_retries(), 2);
        assert_eq!(inst.tabu_list_size(), 4);
        assert_eq!(inst.candidate_list_size(), 5);
        assert_eq!(inst.job_count(), 2);
    }

    #[test]
    fn test_job_lookup() {
        let inst = small_instance();
        assert!(inst.job(JobId::new(2)).is_some());
        assert!(inst.job(JobId::new(9)).is_none());
    }
}
