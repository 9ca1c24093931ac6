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

use crate::common::{JobId, Machine};
use flowshop_core::prelude::{TimeDelta, TimeInterval, TimePoint};
use num_traits::CheckedAdd;

/// An operation that has not been placed on a timeline yet.
///
/// This is the element type of operation orderings: the neighbourhood swaps
/// and the exact enumerator permute sequences of these. The derived order
/// is lexicographic over `(machine, job, length)`, which is the canonical
/// enumeration start of the exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Operation<T> {
    machine: Machine,
    job: JobId,
    length: TimeDelta<T>,
}

impl<T: Copy> Operation<T> {
    #[inline]
    pub const fn new(machine: Machine, job: JobId, length: TimeDelta<T>) -> Self {
        Self {
            machine,
            job,
            length,
        }
    }

    #[inline]
    pub const fn machine(&self) -> Machine {
        self.machine
    }

    #[inline]
    pub const fn job(&self) -> JobId {
        self.job
    }

    #[inline]
    pub const fn length(&self) -> TimeDelta<T> {
        self.length
    }
}

/// What a placed block on a machine timeline represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A job's processing step; carries the owning job.
    Operation(JobId),
    /// A mandatory non-productive maintenance interval.
    Maintenance,
}

impl BlockKind {
    #[inline]
    pub const fn is_operation(&self) -> bool {
        matches!(self, BlockKind::Operation(_))
    }

    #[inline]
    pub const fn is_maintenance(&self) -> bool {
        matches!(self, BlockKind::Maintenance)
    }

    #[inline]
    pub const fn job(&self) -> Option<JobId> {
        match self {
            BlockKind::Operation(id) => Some(*id),
            BlockKind::Maintenance => None,
        }
    }
}

/// A placed interval on one machine. Equality compares every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block<T> {
    machine: Machine,
    kind: BlockKind,
    start: TimePoint<T>,
    length: TimeDelta<T>,
}

impl<T: Copy> Block<T> {
    #[inline]
    pub const fn operation(
        machine: Machine,
        job: JobId,
        start: TimePoint<T>,
        length: TimeDelta<T>,
    ) -> Self {
        Self {
            machine,
            kind: BlockKind::Operation(job),
            start,
            length,
        }
    }

    #[inline]
    pub const fn maintenance(machine: Machine, start: TimePoint<T>, length: TimeDelta<T>) -> Self {
        Self {
            machine,
            kind: BlockKind::Maintenance,
            start,
            length,
        }
    }

    #[inline]
    pub const fn machine(&self) -> Machine {
        self.machine
    }

    #[inline]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    #[inline]
    pub const fn start(&self) -> TimePoint<T> {
        self.start
    }

    #[inline]
    pub const fn length(&self) -> TimeDelta<T> {
        self.length
    }

    #[inline]
    pub const fn job(&self) -> Option<JobId> {
        self.kind.job()
    }

    #[inline]
    pub fn end(&self) -> TimePoint<T>
    where
        T: CheckedAdd,
    {
        self.start + self.length
    }

    /// The half-open wall-time interval `[start, end)` this block occupies.
    #[inline]
    pub fn interval(&self) -> TimeInterval<T>
    where
        T: Ord + CheckedAdd,
    {
        TimeInterval::new(self.start, self.end())
    }

    /// The unplaced operation this block was materialized from, or `None`
    /// for maintenance blocks.
    #[inline]
    pub fn to_operation(&self) -> Option<Operation<T>> {
        self.job()
            .map(|id| Operation::new(self.machine, id, self.length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }
    fn jid(v: u32) -> JobId {
        JobId::new(v)
    }

    #[test]
    fn test_operation_order_is_machine_then_job() {
        let a = Operation::new(Machine::First, jid(2), td(9));
        let b = Operation::new(Machine::First, jid(3), td(1));
        let c = Operation::new(Machine::Second, jid(1), td(1));
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_block_end_and_interval() {
        let b = Block::operation(Machine::First, jid(1), tp(4), td(3));
        assert_eq!(b.end(), tp(7));
        assert_eq!(b.interval(), TimeInterval::new(tp(4), tp(7)));
        assert_eq!(b.job(), Some(jid(1)));
        assert!(b.kind().is_operation());
    }

    #[test]
    fn test_maintenance_block_has_no_job() {
        let m = Block::maintenance(Machine::Second, tp(10), td(2));
        assert!(m.kind().is_maintenance());
        assert_eq!(m.job(), None);
        assert_eq!(m.to_operation(), None);
    }

    #[test]
    fn test_block_equality_compares_all_fields() {
        let a = Block::operation(Machine::First, jid(1), tp(0), td(3));
        let b = Block::operation(Machine::First, jid(1), tp(0), td(3));
        let c = Block::operation(Machine::First, jid(1), tp(1), td(3));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_round_trip_to_operation() {
        let b = Block::operation(Machine::Second, jid(5), tp(8), td(2));
        let op = b.to_operation().unwrap();
        assert_eq!(op, Operation::new(Machine::Second, jid(5), td(2)));
    }
}
