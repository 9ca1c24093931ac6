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

use crate::construction::err::PlacementError;
use flowshop_model::solution::err::EmptyTimelineError;

/// Fewer distinct same-machine swap pairs exist than the neighbourhood
/// was asked to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEnoughSwapPairsError {
    requested: usize,
    available: usize,
}

impl NotEnoughSwapPairsError {
    pub fn new(requested: usize, available: usize) -> Self {
        Self {
            requested,
            available,
        }
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn available(&self) -> usize {
        self.available
    }
}

impl std::fmt::Display for NotEnoughSwapPairsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Requested {} distinct swap pairs but only {} exist; lower `neighbourSearchCount`",
            self.requested, self.available
        )
    }
}

impl std::error::Error for NotEnoughSwapPairsError {}

#[derive(Debug)]
pub enum SearchError {
    Placement(PlacementError),
    EmptyTimeline(EmptyTimelineError),
    NoRestartSucceeded,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Placement(e) => write!(f, "{}", e),
            SearchError::EmptyTimeline(e) => write!(f, "{}", e),
            SearchError::NoRestartSucceeded => {
                write!(f, "No restart produced a feasible schedule")
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl From<PlacementError> for SearchError {
    fn from(err: PlacementError) -> Self {
        SearchError::Placement(err)
    }
}

impl From<EmptyTimelineError> for SearchError {
    fn from(err: EmptyTimelineError) -> Self {
        SearchError::EmptyTimeline(err)
    }
}
