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
    solution::block::Block,
};
use flowshop_core::prelude::TimePoint;
use num_traits::{CheckedAdd, Zero};

/// The ordered block sequence of one machine.
///
/// Blocks are appended in start order; only the last block is ever followed
/// by future placements. Lookups hand out copies of the small `Block`
/// value, never references into the backing vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<T> {
    machine: Machine,
    blocks: Vec<Block<T>>,
}

impl<T: Copy + Ord + CheckedAdd> Timeline<T> {
    #[inline]
    pub fn new(machine: Machine) -> Self {
        Self {
            machine,
            blocks: Vec::new(),
        }
    }

    #[inline]
    pub fn machine(&self) -> Machine {
        self.machine
    }

    #[inline]
    pub fn blocks(&self) -> &[Block<T>] {
        &self.blocks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Appends a block. The block must belong to this machine and must not
    /// start before the current end of the timeline.
    #[inline]
    pub fn push(&mut self, block: Block<T>) {
        debug_assert_eq!(block.machine(), self.machine);
        debug_assert!(
            self.blocks
                .last()
                .is_none_or(|last| block.start() >= last.end())
        );
        self.blocks.push(block);
    }

    #[inline]
    pub fn last(&self) -> Option<Block<T>> {
        self.blocks.last().copied()
    }

    #[inline]
    pub fn last_operation(&self) -> Option<Block<T>> {
        self.blocks
            .iter()
            .rev()
            .find(|b| b.kind().is_operation())
            .copied()
    }

    #[inline]
    pub fn last_maintenance(&self) -> Option<Block<T>> {
        self.blocks
            .iter()
            .rev()
            .find(|b| b.kind().is_maintenance())
            .copied()
    }

    /// End of the occupied prefix; zero for an empty timeline.
    #[inline]
    pub fn end(&self) -> TimePoint<T>
    where
        T: Zero,
    {
        self.last().map_or_else(TimePoint::zero, |b| b.end())
    }

    /// The operation block of the given job, if already placed here.
    #[inline]
    pub fn find_job(&self, job: JobId) -> Option<Block<T>> {
        self.blocks.iter().find(|b| b.job() == Some(job)).copied()
    }

    #[inline]
    pub fn iter_operations(&self) -> impl Iterator<Item = &Block<T>> {
        self.blocks.iter().filter(|b| b.kind().is_operation())
    }

    #[inline]
    pub fn iter_maintenances(&self) -> impl Iterator<Item = &Block<T>> {
        self.blocks.iter().filter(|b| b.kind().is_maintenance())
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

    fn sample() -> Timeline<i64> {
        let mut t = Timeline::new(Machine::First);
        t.push(Block::operation(Machine::First, jid(1), tp(0), td(3)));
        t.push(Block::maintenance(Machine::First, tp(3), td(2)));
        t.push(Block::operation(Machine::First, jid(2), tp(5), td(4)));
        t
    }

    #[test]
    fn test_empty_timeline_ends_at_zero() {
        let t: Timeline<i64> = Timeline::new(Machine::Second);
        assert!(t.is_empty());
        assert_eq!(t.end(), tp(0));
        assert!(t.last().is_none());
        assert!(t.last_operation().is_none());
        assert!(t.last_maintenance().is_none());
    }

    #[test]
    fn test_last_lookups_by_kind() {
        let t = sample();
        assert_eq!(t.end(), tp(9));
        assert_eq!(t.last().unwrap().job(), Some(jid(2)));
        assert_eq!(t.last_operation().unwrap().job(), Some(jid(2)));
        assert_eq!(t.last_maintenance().unwrap().start(), tp(3));
    }

    #[test]
    fn test_find_job_skips_maintenance() {
        let t = sample();
        assert_eq!(t.find_job(jid(1)).unwrap().start(), tp(0));
        assert!(t.find_job(jid(3)).is_none());
    }

    #[test]
    fn test_kind_iterators() {
        let t = sample();
        assert_eq!(t.iter_operations().count(), 2);
        assert_eq!(t.iter_maintenances().count(), 1);
    }
}
