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

//! Exhaustive search over operation-order permutations.
//!
//! Intended as a correctness oracle for small instances: every
//! permutation of the operation sequence is materialized with the
//! order-preserving policy and the minimum makespan wins. The walk starts
//! from the `(machine, job)`-sorted sequence and visits permutations in
//! lexicographic order until the generator wraps.

use crate::{
    construction::ScheduleBuilder,
    numeric::SolveNumeric,
    search::{err::SearchError, operation_pool, random_operation_order, SearchOutcome},
};
use flowshop_model::prelude::{Operation, ProblemInstance};

/// Rearranges `items` into the lexicographically next permutation.
///
/// Returns `false` (leaving `items` sorted ascending) once the last
/// permutation has been reached.
fn next_permutation<E: Ord>(items: &mut [E]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Exhaustive permutation search.
#[derive(Debug)]
pub struct ExactSearch<'p, T, R> {
    instance: &'p ProblemInstance<T>,
    rng: R,
}

impl<'p, T, R> ExactSearch<'p, T, R>
where
    T: SolveNumeric,
    R: rand::Rng,
{
    #[inline]
    pub fn new(instance: &'p ProblemInstance<T>, rng: R) -> Self {
        Self { instance, rng }
    }

    #[tracing::instrument(level = "debug", name = "Exact Search", skip_all)]
    pub fn run(&mut self) -> Result<SearchOutcome<T>, SearchError> {
        // One randomized construction seeds the incumbent before the
        // enumeration begins.
        let order = random_operation_order(self.instance, &mut self.rng);
        let mut best: Option<SearchOutcome<T>> =
            match ScheduleBuilder::new(self.instance).build_append_only(order) {
                Ok(schedule) => {
                    let makespan = schedule.makespan()?;
                    Some(SearchOutcome::new(schedule, makespan))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "randomized seeding stalled, starting without an incumbent");
                    None
                }
            };

        let mut ops: Vec<Operation<T>> = operation_pool(self.instance);
        ops.sort_unstable();

        let mut visited: u64 = 0;
        loop {
            let schedule = ScheduleBuilder::new(self.instance)
                .build_order_preserving(ops.iter().copied())?;
            let makespan = schedule.makespan()?;
            visited += 1;
            if best.as_ref().is_none_or(|b| makespan < b.makespan()) {
                tracing::debug!(%makespan, visited, "new optimum");
                best = Some(SearchOutcome::new(schedule, makespan));
            }
            if !next_permutation(&mut ops) {
                break;
            }
        }
        tracing::debug!(visited, "enumeration complete");

        best.ok_or(SearchError::NoRestartSucceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tabu::TabuSearch;
    use flowshop_core::prelude::{TimeDelta, TimePoint};
    use flowshop_model::prelude::JobId;
    use flowshop_model::problem::builder::InstanceBuilder;
    use flowshop_model::validation::validate_schedule;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }
    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }

    #[test]
    fn test_next_permutation_visits_all_orders() {
        let mut items = vec![1, 2, 3];
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        assert_eq!(seen.len(), 6);
        // Wrapped back to the sorted order.
        assert_eq!(items, vec![1, 2, 3]);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_next_permutation_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        assert!(!next_permutation(&mut empty));
        let mut single = vec![7];
        assert!(!next_permutation(&mut single));
    }

    #[test]
    fn test_two_job_optimum_interleaves_machines() {
        // J1 = (5, 1), J2 = (1, 5): both machines carry 6 units of work
        // and the jobs can fully interleave, so the optimum is 6.
        let inst = InstanceBuilder::new(td(1), td(100))
            .with_job(JobId::new(1), td(5), td(1))
            .with_job(JobId::new(2), td(1), td(5))
            .build()
            .unwrap();
        let outcome = ExactSearch::new(&inst, ChaCha8Rng::seed_from_u64(2))
            .run()
            .unwrap();
        assert_eq!(outcome.makespan(), tp(6));
        assert!(validate_schedule(&inst, outcome.schedule()).is_ok());
    }

    #[test]
    fn test_three_job_optimum_is_the_dominant_job_bound() {
        // Durations (2,3), (5,7), (11,13): no maintenance fires (period
        // exceeds all machine loads). J3 must serialize its 11 + 13 units,
        // and all other work fits alongside, so the optimum is 24.
        let inst = InstanceBuilder::new(td(1), td(100))
            .with_job(JobId::new(1), td(2), td(3))
            .with_job(JobId::new(2), td(5), td(7))
            .with_job(JobId::new(3), td(11), td(13))
            .build()
            .unwrap();
        let outcome = ExactSearch::new(&inst, ChaCha8Rng::seed_from_u64(3))
            .run()
            .unwrap();
        assert_eq!(outcome.makespan(), tp(24));
        // No maintenance should appear anywhere.
        for timeline in outcome.schedule().iter_timelines() {
            assert_eq!(timeline.iter_maintenances().count(), 0);
        }
        assert!(validate_schedule(&inst, outcome.schedule()).is_ok());
    }

    #[test]
    fn test_tabu_search_never_beats_the_oracle() {
        let inst = InstanceBuilder::new(td(2), td(50))
            .with_neighbour_search_count(3)
            .with_algorithm_retries(2)
            .with_job(JobId::new(1), td(3), td(5))
            .with_job(JobId::new(2), td(7), td(2))
            .with_job(JobId::new(3), td(4), td(6))
            .build()
            .unwrap();

        let optimum = ExactSearch::new(&inst, ChaCha8Rng::seed_from_u64(4))
            .run()
            .unwrap();
        let heuristic = TabuSearch::new(&inst, ChaCha8Rng::seed_from_u64(4))
            .with_sd_window(25)
            .with_max_local_iterations(400)
            .run()
            .unwrap();
        assert!(heuristic.makespan() >= optimum.makespan());
    }
}
