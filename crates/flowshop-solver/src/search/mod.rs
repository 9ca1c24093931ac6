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

pub mod err;
pub mod neighborhood;
pub mod tabu;

use crate::numeric::SolveNumeric;
use flowshop_core::prelude::TimePoint;
use flowshop_model::prelude::{Machine, Operation, ProblemInstance, Schedule};
use rand::seq::SliceRandom;

/// The best schedule a search produced, with its makespan.
#[derive(Debug, Clone)]
pub struct SearchOutcome<T> {
    schedule: Schedule<T>,
    makespan: TimePoint<T>,
}

impl<T: Copy> SearchOutcome<T> {
    #[inline]
    pub fn new(schedule: Schedule<T>, makespan: TimePoint<T>) -> Self {
        Self { schedule, makespan }
    }

    #[inline]
    pub fn schedule(&self) -> &Schedule<T> {
        &self.schedule
    }

    #[inline]
    pub fn makespan(&self) -> TimePoint<T> {
        self.makespan
    }

    #[inline]
    pub fn into_schedule(self) -> Schedule<T> {
        self.schedule
    }
}

/// Both operations of every job, machine-1 operation first per job.
pub fn operation_pool<T: SolveNumeric>(instance: &ProblemInstance<T>) -> Vec<Operation<T>> {
    let mut pool = Vec::with_capacity(instance.job_count() * 2);
    for job in instance.iter_jobs() {
        for machine in Machine::ALL {
            pool.push(Operation::new(
                machine,
                job.id(),
                job.processing_time(machine),
            ));
        }
    }
    pool
}

/// A uniformly shuffled operation pool; the seed ordering of a restart.
pub fn random_operation_order<T, R>(instance: &ProblemInstance<T>, rng: &mut R) -> Vec<Operation<T>>
where
    T: SolveNumeric,
    R: rand::Rng,
{
    let mut pool = operation_pool(instance);
    pool.shuffle(rng);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowshop_model::prelude::JobId;
    use flowshop_model::problem::builder::InstanceBuilder;
    use flowshop_core::prelude::TimeDelta;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    fn instance() -> ProblemInstance<i64> {
        InstanceBuilder::new(td(1), td(100))
            .with_job(JobId::new(1), td(2), td(3))
            .with_job(JobId::new(2), td(4), td(5))
            .build()
            .unwrap()
    }

    #[test]
    fn test_operation_pool_has_two_entries_per_job() {
        let pool = operation_pool(&instance());
        assert_eq!(pool.len(), 4);
        for machine in Machine::ALL {
            assert_eq!(pool.iter().filter(|o| o.machine() == machine).count(), 2);
        }
    }

    #[test]
    fn test_random_order_is_a_permutation_of_the_pool() {
        let inst = instance();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut shuffled = random_operation_order(&inst, &mut rng);
        let mut pool = operation_pool(&inst);
        shuffled.sort_unstable();
        pool.sort_unstable();
        assert_eq!(shuffled, pool);
    }

    #[test]
    fn test_random_order_is_deterministic_per_seed() {
        let inst = instance();
        let a = random_operation_order(&inst, &mut ChaCha8Rng::seed_from_u64(9));
        let b = random_operation_order(&inst, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
