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

//! Machine-checkable schedule invariants.
//!
//! Every schedule produced by a construction policy must pass
//! [`validate_schedule`]. The individual checks are exposed so tests can
//! target a single invariant.

pub mod err;

use crate::{
    common::Machine,
    problem::instance::ProblemInstance,
    solution::sol::Schedule,
    validation::err::{
        CoverageError, JobOverlapError, MaintenanceBudgetError, MaintenanceLengthError,
        TimelineOrderError, UnknownJobError, ValidationError,
    },
};
use flowshop_core::prelude::TimeDelta;
use num_traits::{CheckedAdd, CheckedSub, Zero};

/// Every job has exactly one operation block on each machine, and no block
/// references a job outside the instance.
pub fn validate_coverage<T>(
    instance: &ProblemInstance<T>,
    schedule: &Schedule<T>,
) -> Result<(), ValidationError>
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    for timeline in schedule.iter_timelines() {
        for block in timeline.iter_operations() {
            let Some(job) = block.job() else { continue };
            if instance.job(job).is_none() {
                return Err(UnknownJobError::new(job, timeline.machine()).into());
            }
        }
        for job in instance.iter_jobs() {
            let count = timeline
                .iter_operations()
                .filter(|b| b.job() == Some(job.id()))
                .count();
            if count != 1 {
                return Err(CoverageError::new(job.id(), timeline.machine(), count).into());
            }
        }
    }
    Ok(())
}

/// The two operation blocks of every job occupy disjoint wall-time
/// intervals.
pub fn validate_job_blocks_disjoint<T>(
    instance: &ProblemInstance<T>,
    schedule: &Schedule<T>,
) -> Result<(), JobOverlapError>
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    for job in instance.iter_jobs() {
        let first = schedule.find_operation(Machine::First, job.id());
        let second = schedule.find_operation(Machine::Second, job.id());
        if let (Some(a), Some(b)) = (first, second) {
            if a.interval().intersects(&b.interval()) {
                return Err(JobOverlapError::new(job.id()));
            }
        }
    }
    Ok(())
}

/// Blocks on each machine are sorted by start and never overlap their
/// predecessor.
pub fn validate_timeline_monotone<T>(schedule: &Schedule<T>) -> Result<(), TimelineOrderError>
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    for timeline in schedule.iter_timelines() {
        for pair in timeline.blocks().windows(2) {
            if pair[1].start() < pair[0].end() {
                return Err(TimelineOrderError::new(timeline.machine()));
            }
        }
    }
    Ok(())
}

/// No maintenance-free run of operations accumulates more productive time
/// than the maintenance period.
pub fn validate_maintenance_budget<T>(
    instance: &ProblemInstance<T>,
    schedule: &Schedule<T>,
) -> Result<(), MaintenanceBudgetError>
where
    T: Copy + Ord + CheckedAdd + CheckedSub + Zero,
{
    for timeline in schedule.iter_timelines() {
        let mut run: TimeDelta<T> = TimeDelta::zero();
        for block in timeline.blocks() {
            if block.kind().is_maintenance() {
                run = TimeDelta::zero();
                continue;
            }
            run += block.length();
            if run > instance.maintenance_period() {
                return Err(MaintenanceBudgetError::new(timeline.machine()));
            }
        }
    }
    Ok(())
}

/// Every maintenance block has the configured maintenance length.
pub fn validate_maintenance_lengths<T>(
    instance: &ProblemInstance<T>,
    schedule: &Schedule<T>,
) -> Result<(), MaintenanceLengthError>
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    for timeline in schedule.iter_timelines() {
        for block in timeline.iter_maintenances() {
            if block.length() != instance.maintenance_length() {
                return Err(MaintenanceLengthError::new(timeline.machine()));
            }
        }
    }
    Ok(())
}

/// Runs every schedule invariant in order.
pub fn validate_schedule<T>(
    instance: &ProblemInstance<T>,
    schedule: &Schedule<T>,
) -> Result<(), ValidationError>
where
    T: Copy + Ord + CheckedAdd + CheckedSub + Zero,
{
    validate_coverage(instance, schedule)?;
    validate_job_blocks_disjoint(instance, schedule)?;
    validate_timeline_monotone(schedule)?;
    validate_maintenance_budget(instance, schedule)?;
    validate_maintenance_lengths(instance, schedule)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::JobId,
        problem::builder::InstanceBuilder,
        solution::block::Block,
    };
    use flowshop_core::prelude::{TimeDelta, TimePoint};

    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }
    fn jid(v: u32) -> JobId {
        JobId::new(v)
    }

    fn instance() -> ProblemInstance<i64> {
        InstanceBuilder::new(td(2), td(10))
            .with_job(jid(1), td(3), td(4))
            .build()
            .unwrap()
    }

    fn valid_schedule() -> Schedule<i64> {
        let mut s = Schedule::new();
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(1), tp(0), td(3)));
        s.timeline_mut(Machine::Second)
            .push(Block::operation(Machine::Second, jid(1), tp(3), td(4)));
        s
    }

    #[test]
    fn test_valid_schedule_passes_all_checks() {
        let inst = instance();
        assert!(validate_schedule(&inst, &valid_schedule()).is_ok());
    }

    #[test]
    fn test_missing_operation_fails_coverage() {
        let inst = instance();
        let mut s: Schedule<i64> = Schedule::new();
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(1), tp(0), td(3)));
        assert!(matches!(
            validate_coverage(&inst, &s),
            Err(ValidationError::Coverage(_))
        ));
    }

    #[test]
    fn test_foreign_job_fails_coverage() {
        let inst = instance();
        let mut s = valid_schedule();
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(9), tp(3), td(1)));
        assert!(matches!(
            validate_coverage(&inst, &s),
            Err(ValidationError::UnknownJob(_))
        ));
    }

    #[test]
    fn test_overlapping_job_blocks_detected() {
        let inst = instance();
        let mut s = Schedule::new();
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(1), tp(0), td(3)));
        s.timeline_mut(Machine::Second)
            .push(Block::operation(Machine::Second, jid(1), tp(2), td(4)));
        assert!(validate_job_blocks_disjoint(&inst, &s).is_err());
    }

    #[test]
    fn test_abutting_job_blocks_are_disjoint() {
        let inst = instance();
        assert!(validate_job_blocks_disjoint(&inst, &valid_schedule()).is_ok());
    }

    #[test]
    fn test_budget_violation_detected() {
        let inst = InstanceBuilder::new(td(2), td(5))
            .with_job(jid(1), td(3), td(1))
            .with_job(jid(2), td(3), td(1))
            .build()
            .unwrap();

        // Two 3-long operations back to back exceed the period of 5.
        let mut s = Schedule::new();
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(1), tp(0), td(3)));
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(2), tp(3), td(3)));
        s.timeline_mut(Machine::Second)
            .push(Block::operation(Machine::Second, jid(1), tp(6), td(1)));
        s.timeline_mut(Machine::Second)
            .push(Block::operation(Machine::Second, jid(2), tp(7), td(1)));
        assert!(validate_maintenance_budget(&inst, &s).is_err());
    }

    #[test]
    fn test_budget_resets_after_maintenance() {
        let inst = InstanceBuilder::new(td(2), td(5))
            .with_job(jid(1), td(3), td(1))
            .with_job(jid(2), td(3), td(1))
            .build()
            .unwrap();

        let mut s = Schedule::new();
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(1), tp(0), td(3)));
        s.timeline_mut(Machine::First)
            .push(Block::maintenance(Machine::First, tp(3), td(2)));
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(2), tp(5), td(3)));
        s.timeline_mut(Machine::Second)
            .push(Block::operation(Machine::Second, jid(1), tp(8), td(1)));
        s.timeline_mut(Machine::Second)
            .push(Block::operation(Machine::Second, jid(2), tp(9), td(1)));
        assert!(validate_maintenance_budget(&inst, &s).is_ok());
    }

    #[test]
    fn test_wrong_maintenance_length_detected() {
        let inst = instance();
        let mut s = valid_schedule();
        s.timeline_mut(Machine::First)
            .push(Block::maintenance(Machine::First, tp(3), td(1)));
        assert!(validate_maintenance_lengths(&inst, &s).is_err());
    }

    #[test]
    fn test_monotone_timeline_check() {
        let s = valid_schedule();
        assert!(validate_timeline_monotone(&s).is_ok());
    }
}
