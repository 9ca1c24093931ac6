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

//! Schedule construction from operation orderings.
//!
//! Two policies materialize a timed [`Schedule`] from an ordered operation
//! sequence:
//!
//! - **append-only** (`build_append_only`): operations whose tentative
//!   placement collides with the already-placed sibling are re-enqueued at
//!   the back of the deque. Used to seed a search from a random ordering.
//! - **order-preserving** (`build_order_preserving`): the sequence is kept
//!   as given; a colliding operation instead waits until its sibling ends,
//!   leaving a deliberate idle gap. Tabu neighbourhoods are defined over
//!   this policy.
//!
//! Both share the placement primitive that inserts maintenance blocks
//! whenever the productive time since the last maintenance would exceed
//! the maintenance period.

pub mod err;

use crate::{construction::err::*, numeric::SolveNumeric};
use flowshop_core::prelude::{TimeDelta, TimeInterval, TimePoint};
use flowshop_model::prelude::{Block, Machine, Operation, ProblemInstance, Schedule};
use std::collections::VecDeque;

// Extra drain iterations granted on top of the quadratic bound.
const DRAIN_SLACK: usize = 64;

/// Builds one schedule for one instance; consumed by either policy.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder<'p, T> {
    instance: &'p ProblemInstance<T>,
    schedule: Schedule<T>,
}

impl<'p, T: SolveNumeric> ScheduleBuilder<'p, T> {
    #[inline]
    pub fn new(instance: &'p ProblemInstance<T>) -> Self {
        Self {
            instance,
            schedule: Schedule::new(),
        }
    }

    /// Append-only policy: drains `ops` as a rotating deque, re-enqueuing
    /// operations whose tentative interval collides with their placed
    /// sibling. Fails with [`DrainExhaustedError`] once the `N² + K`
    /// iteration bound is hit.
    pub fn build_append_only<I>(mut self, ops: I) -> Result<Schedule<T>, PlacementError>
    where
        I: IntoIterator<Item = Operation<T>>,
    {
        let mut queue: VecDeque<Operation<T>> = ops.into_iter().collect();
        let bound = queue.len() * queue.len() + DRAIN_SLACK;
        let mut iterations = 0usize;

        while let Some(op) = queue.pop_front() {
            iterations += 1;
            if iterations > bound {
                return Err(DrainExhaustedError::new(queue.len() + 1, iterations).into());
            }
            if self.tentative_collides_with_sibling(&op) {
                queue.push_back(op);
                continue;
            }
            self.place_appending(op)?;
        }
        Ok(self.schedule)
    }

    /// Order-preserving policy: places every operation in sequence. A
    /// colliding operation waits until its sibling ends (idle gap on its
    /// machine) instead of being re-enqueued.
    pub fn build_order_preserving<I>(mut self, ops: I) -> Result<Schedule<T>, PlacementError>
    where
        I: IntoIterator<Item = Operation<T>>,
    {
        for op in ops {
            self.place_order_preserving(op)?;
        }
        Ok(self.schedule)
    }

    /// Sibling-collision test of the append-only policy.
    ///
    /// The tentative start is the current timeline end, before any
    /// maintenance the placement itself may still insert. A candidate
    /// accepted here can therefore shift past its tentative interval; the
    /// order-preserving policy re-checks after every maintenance and does
    /// not share this behaviour.
    fn tentative_collides_with_sibling(&self, op: &Operation<T>) -> bool {
        let Some(sibling) = self
            .schedule
            .find_operation(op.machine().other(), op.job())
        else {
            return false;
        };
        let t_now = self.schedule.timeline(op.machine()).end();
        TimeInterval::new(t_now, t_now + op.length()).intersects(&sibling.interval())
    }

    /// The placement primitive: append at the timeline end, inserting
    /// maintenance blocks until the operation fits before the next
    /// maintenance deadline.
    fn place_appending(&mut self, op: Operation<T>) -> Result<(), PlacementError> {
        self.ensure_fits_period(&op)?;
        loop {
            let machine = op.machine();
            let t_now = self.schedule.timeline(machine).end();
            if op.length() <= self.budget_from(machine, t_now) {
                self.push_operation(op, t_now);
                return Ok(());
            }
            self.push_maintenance(machine, t_now);
        }
    }

    fn place_order_preserving(&mut self, op: Operation<T>) -> Result<(), PlacementError> {
        self.ensure_fits_period(&op)?;
        loop {
            let machine = op.machine();
            let t_now = self.schedule.timeline(machine).end();
            if op.length() > self.budget_from(machine, t_now) {
                self.push_maintenance(machine, t_now);
                continue;
            }

            let sibling = self.schedule.find_operation(machine.other(), op.job());
            match sibling {
                Some(s)
                    if TimeInterval::new(t_now, t_now + op.length())
                        .intersects(&s.interval()) =>
                {
                    // Wait for the sibling; the machine stays idle between
                    // t_now and the sibling's end.
                    let t_try = s.end();
                    if op.length() <= self.budget_from(machine, t_try) {
                        self.push_operation(op, t_try);
                        return Ok(());
                    }
                    self.push_maintenance(machine, t_now);
                }
                _ => {
                    self.push_operation(op, t_now);
                    return Ok(());
                }
            }
        }
    }

    /// Remaining productive time on `machine` before a maintenance must be
    /// inserted, measured for a block that would start at `from`.
    fn budget_from(&self, machine: Machine, from: TimePoint<T>) -> TimeDelta<T> {
        let last_maintenance_end = self
            .schedule
            .timeline(machine)
            .last_maintenance()
            .map_or_else(TimePoint::zero, |b| b.end());
        self.instance.maintenance_period() - (from - last_maintenance_end)
    }

    fn ensure_fits_period(&self, op: &Operation<T>) -> Result<(), OversizedOperationError> {
        if op.length() > self.instance.maintenance_period() {
            return Err(OversizedOperationError::new(op.job(), op.machine()));
        }
        Ok(())
    }

    fn push_operation(&mut self, op: Operation<T>, start: TimePoint<T>) {
        self.schedule
            .timeline_mut(op.machine())
            .push(Block::operation(op.machine(), op.job(), start, op.length()));
    }

    fn push_maintenance(&mut self, machine: Machine, start: TimePoint<T>) {
        self.schedule.timeline_mut(machine).push(Block::maintenance(
            machine,
            start,
            self.instance.maintenance_length(),
        ));
    }
}
