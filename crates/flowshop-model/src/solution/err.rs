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

use crate::common::Machine;

/// Raised when a makespan is requested from a schedule whose machine has
/// no operation blocks. Indicates a bug in the schedule construction, not
/// bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyTimelineError {
    machine: Machine,
}

impl EmptyTimelineError {
    pub fn new(machine: Machine) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> Machine {
        self.machine
    }
}

impl std::fmt::Display for EmptyTimelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No operation blocks on {}; the makespan is undefined",
            self.machine
        )
    }
}

impl std::error::Error for EmptyTimelineError {}
