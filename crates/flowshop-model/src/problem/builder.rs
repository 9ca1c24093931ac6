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

use crate::{
    common::{JobId, Machine},
    problem::{
        err::{
            DuplicateJobError, EmptyInstanceError, InstanceError, NonPositiveDurationError,
            NonPositiveTunableError, OperationExceedsPeriodError,
            PunishmentFactorOutOfRangeError,
        },
        instance::ProblemInstance,
        job::Job,
    },
};
use flowshop_core::prelude::TimeDelta;
use num_traits::Zero;

/// Validating builder for [`ProblemInstance`].
///
/// Defaults: `tabu_list_size = 4`, `candidate_list_size = 5`,
/// `neighbour_search_count = 1`, `algorithm_retries = 0`,
/// `renew_punishment_factor = 0.5`.
#[derive(Debug, Clone)]
pub struct InstanceBuilder<T> {
    maintenance_length: TimeDelta<T>,
    maintenance_period: TimeDelta<T>,
    neighbour_search_count: usize,
    algorithm_retries: usize,
    tabu_list_size: usize,
    candidate_list_size: usize,
    renew_punishment_factor: f64,
    jobs: Vec<Job<T>>,
}

impl<T: Copy + Ord + Zero> InstanceBuilder<T> {
    #[inline]
    pub fn new(maintenance_length: TimeDelta<T>, maintenance_period: TimeDelta<T>) -> Self {
        Self {
            maintenance_length,
            maintenance_period,
            neighbour_search_count: 1,
            algorithm_retries: 0,
            tabu_list_size: 4,
            candidate_list_size: 5,
            renew_punishment_factor: 0.5,
            jobs: Vec::new(),
        }
    }

    #[inline]
    pub fn with_neighbour_search_count(mut self, count: usize) -> Self {
        self.neighbour_search_count = count;
        self
    }

    #[inline]
    pub fn with_algorithm_retries(mut self, retries: usize) -> Self {
        self.algorithm_retries = retries;
        self
    }

    #[inline]
    pub fn with_tabu_list_size(mut self, size: usize) -> Self {
        self.tabu_list_size = size;
        self
    }

    #[inline]
    pub fn with_candidate_list_size(mut self, size: usize) -> Self {
        self.candidate_list_size = size;
        self
    }

    #[inline]
    pub fn with_renew_punishment_factor(mut self, factor: f64) -> Self {
        self.renew_punishment_factor = factor;
        self
    }

    #[inline]
    pub fn with_job(
        mut self,
        id: JobId,
        first_length: TimeDelta<T>,
        second_length: TimeDelta<T>,
    ) -> Self {
        self.jobs.push(Job::new(id, first_length, second_length));
        self
    }

    #[inline]
    pub fn add_job(&mut self, job: Job<T>) -> &mut Self {
        self.jobs.push(job);
        self
    }

    #[inline]
    pub fn extend_jobs<I>(&mut self, jobs: I) -> &mut Self
    where
        I: IntoIterator<Item = Job<T>>,
    {
        self.jobs.extend(jobs);
        self
    }

    pub fn build(self) -> Result<ProblemInstance<T>, InstanceError> {
        if self.jobs.is_empty() {
            return Err(EmptyInstanceError.into());
        }
        if !self.maintenance_length.is_positive() {
            return Err(NonPositiveTunableError::new("maintenanceLength").into());
        }
        if !self.maintenance_period.is_positive() {
            return Err(NonPositiveTunableError::new("maintenancePeriod").into());
        }
        if self.neighbour_search_count == 0 {
            return Err(NonPositiveTunableError::new("neighbourSearchCount").into());
        }
        if self.tabu_list_size == 0 {
            return Err(NonPositiveTunableError::new("tabuListSize").into());
        }
        if self.candidate_list_size == 0 {
            return Err(NonPositiveTunableError::new("candidateListSize").into());
        }
        if !(self.renew_punishment_factor > 0.0 && self.renew_punishment_factor < 1.0) {
            return Err(PunishmentFactorOutOfRangeError::new(self.renew_punishment_factor).into());
        }

        let mut seen: std::collections::BTreeSet<JobId> = std::collections::BTreeSet::new();
        for job in &self.jobs {
            if !seen.insert(job.id()) {
                return Err(DuplicateJobError::new(job.id()).into());
            }
            for machine in Machine::ALL {
                let length = job.processing_time(machine);
                if !length.is_positive() {
                    return Err(NonPositiveDurationError::new(job.id(), machine).into());
                }
                if length > self.maintenance_period {
                    return Err(OperationExceedsPeriodError::new(job.id(), machine).into());
                }
            }
        }

        Ok(ProblemInstance {
            maintenance_length: self.maintenance_length,
            maintenance_period: self.maintenance_period,
            neighbour_search_count: self.neighbour_search_count,
            algorithm_retries: self.algorithm_retries,
            tabu_list_size: self.tabu_list_size,
            candidate_list_size: self.candidate_list_size,
            renew_punishment_factor: self.renew_punishment_factor,
            jobs: self.jobs,
        })
    }
}
