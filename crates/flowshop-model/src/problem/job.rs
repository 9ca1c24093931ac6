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
use flowshop_core::prelude::TimeDelta;

/// A work unit consisting of one operation per machine.
///
/// Immutable once loaded. Durations are strictly positive; the
/// [`InstanceBuilder`](crate::problem::builder::InstanceBuilder) enforces
/// this when assembling a [`ProblemInstance`](crate::problem::instance::ProblemInstance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Job<T> {
    id: JobId,
    first_length: TimeDelta<T>,
    second_length: TimeDelta<T>,
}

impl<T: Copy> Job<T> {
    #[inline]
    pub const fn new(id: JobId, first_length: TimeDelta<T>, second_length: TimeDelta<T>) -> Self {
        Self {
            id,
            first_length,
            second_length,
        }
    }

    #[inline]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Processing time of this job's operation on the given machine.
    #[inline]
    pub const fn processing_time(&self, machine: Machine) -> TimeDelta<T> {
        match machine {
            Machine::First => self.first_length,
            Machine::Second => self.second_length,
        }
    }
}
