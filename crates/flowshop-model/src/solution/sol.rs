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
    solution::{block::Block, block::BlockKind, block::Operation, err::EmptyTimelineError, timeline::Timeline},
};
use flowshop_core::prelude::TimePoint;
use num_traits::{CheckedAdd, Zero};

/// A complete (or in-construction) schedule: one timeline per machine.
///
/// The [`Display`](std::fmt::Display) rendering emits one `|`-separated
/// line per machine, each entry `"<start> <label> <end>"` where the label
/// is the job id for operations and `M` for maintenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<T> {
    timelines: [Timeline<T>; 2],
}

impl<T: Copy + Ord + CheckedAdd + Zero> Schedule<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            timelines: [Timeline::new(Machine::First), Timeline::new(Machine::Second)],
        }
    }

    #[inline]
    pub fn timeline(&self, machine: Machine) -> &Timeline<T> {
        &self.timelines[machine.index()]
    }

    #[inline]
    pub fn timeline_mut(&mut self, machine: Machine) -> &mut Timeline<T> {
        &mut self.timelines[machine.index()]
    }

    #[inline]
    pub fn iter_timelines(&self) -> impl Iterator<Item = &Timeline<T>> {
        self.timelines.iter()
    }

    /// The operation block of `job` on `machine`, if placed.
    #[inline]
    pub fn find_operation(&self, machine: Machine, job: JobId) -> Option<Block<T>> {
        self.timeline(machine).find_job(job)
    }

    /// Completion time of the last operation across both machines.
    ///
    /// Maintenance blocks do not count: a schedule may end with a
    /// maintenance interval without extending the makespan.
    pub fn makespan(&self) -> Result<TimePoint<T>, EmptyTimelineError> {
        let mut result: Option<TimePoint<T>> = None;
        for timeline in &self.timelines {
            let last = timeline
                .last_operation()
                .ok_or_else(|| EmptyTimelineError::new(timeline.machine()))?;
            result = Some(match result {
                Some(best) => best.max(last.end()),
                None => last.end(),
            });
        }
        // Both machines contributed; the accumulator is set.
        result.ok_or_else(|| EmptyTimelineError::new(Machine::First))
    }

    /// The flat operation ordering this schedule was built from:
    /// machine-1 operations in timeline order, then machine-2 operations.
    /// Maintenance blocks are stripped and timings discarded.
    pub fn operation_order(&self) -> Vec<Operation<T>> {
        self.timelines
            .iter()
            .flat_map(|t| t.blocks().iter().filter_map(Block::to_operation))
            .collect()
    }
}

impl<T: Copy + Ord + CheckedAdd + Zero> Default for Schedule<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for Schedule<T>
where
    T: Copy + Ord + CheckedAdd + Zero + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, timeline) in self.timelines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for block in timeline.blocks() {
                match block.kind() {
                    BlockKind::Operation(job) => write!(
                        f,
                        "{} {} {}|",
                        block.start().value(),
                        job.value(),
                        block.end().value()
                    )?,
                    BlockKind::Maintenance => write!(
                        f,
                        "{} M {}|",
                        block.start().value(),
                        block.end().value()
                    )?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowshop_core::prelude::TimeDelta;

    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }
    fn jid(v: u32) -> JobId {
        JobId::new(v)
    }

    fn sample() -> Schedule<i64> {
        let mut s = Schedule::new();
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(1), tp(0), td(3)));
        s.timeline_mut(Machine::First)
            .push(Block::maintenance(Machine::First, tp(3), td(2)));
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(2), tp(5), td(1)));
        s.timeline_mut(Machine::Second)
            .push(Block::operation(Machine::Second, jid(2), tp(0), td(4)));
        s.timeline_mut(Machine::Second)
            .push(Block::operation(Machine::Second, jid(1), tp(4), td(3)));
        s
    }

    #[test]
    fn test_makespan_ignores_trailing_maintenance() {
        let mut s = sample();
        assert_eq!(s.makespan().unwrap(), tp(7));
        s.timeline_mut(Machine::Second)
            .push(Block::maintenance(Machine::Second, tp(7), td(10)));
        assert_eq!(s.makespan().unwrap(), tp(7));
    }

    #[test]
    fn test_makespan_fails_on_machine_without_operations() {
        let mut s: Schedule<i64> = Schedule::new();
        s.timeline_mut(Machine::First)
            .push(Block::operation(Machine::First, jid(1), tp(0), td(3)));
        let err = s.makespan().unwrap_err();
        assert_eq!(err.machine(), Machine::Second);
    }

    #[test]
    fn test_operation_order_strips_maintenance_and_timing() {
        let s = sample();
        let order = s.operation_order();
        assert_eq!(
            order,
            vec![
                Operation::new(Machine::First, jid(1), td(3)),
                Operation::new(Machine::First, jid(2), td(1)),
                Operation::new(Machine::Second, jid(2), td(4)),
                Operation::new(Machine::Second, jid(1), td(3)),
            ]
        );
    }

    #[test]
    fn test_display_renders_machine_lines() {
        let s = sample();
        let text = format!("{}", s);
        assert_eq!(text, "0 1 3|3 M 5|5 2 6|\n0 2 4|4 1 7|");
    }

    #[test]
    fn test_find_operation() {
        let s = sample();
        assert_eq!(
            s.find_operation(Machine::Second, jid(1)).unwrap().start(),
            tp(4)
        );
        assert!(s.find_operation(Machine::First, jid(9)).is_none());
    }
}
