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

use flowshop_model::prelude::{JobId, Machine};

/// The rotating deque of the append-only policy failed to drain within its
/// iteration bound: every remaining operation kept colliding with its
/// already-placed sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrainExhaustedError {
    remaining: usize,
    iterations: usize,
}

impl DrainExhaustedError {
    pub fn new(remaining: usize, iterations: usize) -> Self {
        Self {
            remaining,
            iterations,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl std::fmt::Display for DrainExhaustedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Append-only placement stalled with {} operation(s) left after {} iterations",
            self.remaining, self.iterations
        )
    }
}

impl std::error::Error for DrainExhaustedError {}

/// An operation is longer than the maintenance period; no maintenance
/// insertion can ever make it fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OversizedOperationError {
    job: JobId,
    machine: Machine,
}

impl OversizedOperationError {
    pub fn new(job: JobId, machine: Machine) -> Self {
        Self { job, machine }
    }

    pub fn job(&self) -> JobId {
        self.job
    }

    pub fn machine(&self) -> Machine {
        self.machine
    }
}

impl std::fmt::Display for OversizedOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Operation of job {} on {} exceeds the maintenance period and can never be placed",
            self.job, self.machine
        )
    }
}

impl std::error::Error for OversizedOperationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementError {
    DrainExhausted(DrainExhaustedError),
    OversizedOperation(OversizedOperationError),
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::DrainExhausted(e) => write!(f, "{}", e),
            PlacementError::OversizedOperation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlacementError {}

impl From<DrainExhaustedError> for PlacementError {
    fn from(err: DrainExhaustedError) -> Self {
        PlacementError::DrainExhausted(err)
    }
}

impl From<OversizedOperationError> for PlacementError {
    fn from(err: OversizedOperationError) -> Self {
        PlacementError::OversizedOperation(err)
    }
}
