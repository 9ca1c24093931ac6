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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoverageError {
    job: JobId,
    machine: Machine,
    count: usize,
}

impl CoverageError {
    pub fn new(job: JobId, machine: Machine, count: usize) -> Self {
        Self {
            job,
            machine,
            count,
        }
    }

    pub fn job(&self) -> JobId {
        self.job
    }

    pub fn machine(&self) -> Machine {
        self.machine
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl std::fmt::Display for CoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Job {} appears {} times on {} (expected exactly once)",
            self.job, self.count, self.machine
        )
    }
}

impl std::error::Error for CoverageError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownJobError {
    job: JobId,
    machine: Machine,
}

impl UnknownJobError {
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

impl std::fmt::Display for UnknownJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "An operation block on {} references job {}, which the instance does not define",
            self.machine, self.job
        )
    }
}

impl std::error::Error for UnknownJobError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobOverlapError {
    job: JobId,
}

impl JobOverlapError {
    pub fn new(job: JobId) -> Self {
        Self { job }
    }

    pub fn job(&self) -> JobId {
        self.job
    }
}

impl std::fmt::Display for JobOverlapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The two operations of job {} overlap in wall time",
            self.job
        )
    }
}

impl std::error::Error for JobOverlapError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelineOrderError {
    machine: Machine,
}

impl TimelineOrderError {
    pub fn new(machine: Machine) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> Machine {
        self.machine
    }
}

impl std::fmt::Display for TimelineOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Blocks on {} are not in non-overlapping start order",
            self.machine
        )
    }
}

impl std::error::Error for TimelineOrderError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaintenanceBudgetError {
    machine: Machine,
}

impl MaintenanceBudgetError {
    pub fn new(machine: Machine) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> Machine {
        self.machine
    }
}

impl std::fmt::Display for MaintenanceBudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A maintenance-free run on {} exceeds the maintenance period",
            self.machine
        )
    }
}

impl std::error::Error for MaintenanceBudgetError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaintenanceLengthError {
    machine: Machine,
}

impl MaintenanceLengthError {
    pub fn new(machine: Machine) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> Machine {
        self.machine
    }
}

impl std::fmt::Display for MaintenanceLengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A maintenance block on {} does not have the configured maintenance length",
            self.machine
        )
    }
}

impl std::error::Error for MaintenanceLengthError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Coverage(CoverageError),
    UnknownJob(UnknownJobError),
    JobOverlap(JobOverlapError),
    TimelineOrder(TimelineOrderError),
    MaintenanceBudget(MaintenanceBudgetError),
    MaintenanceLength(MaintenanceLengthError),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Coverage(e) => write!(f, "{}", e),
            ValidationError::UnknownJob(e) => write!(f, "{}", e),
            ValidationError::JobOverlap(e) => write!(f, "{}", e),
            ValidationError::TimelineOrder(e) => write!(f, "{}", e),
            ValidationError::MaintenanceBudget(e) => write!(f, "{}", e),
            ValidationError::MaintenanceLength(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<CoverageError> for ValidationError {
    fn from(err: CoverageError) -> Self {
        ValidationError::Coverage(err)
    }
}

impl From<UnknownJobError> for ValidationError {
    fn from(err: UnknownJobError) -> Self {
        ValidationError::UnknownJob(err)
    }
}

impl From<JobOverlapError> for ValidationError {
    fn from(err: JobOverlapError) -> Self {
        ValidationError::JobOverlap(err)
    }
}

impl From<TimelineOrderError> for ValidationError {
    fn from(err: TimelineOrderError) -> Self {
        ValidationError::TimelineOrder(err)
    }
}

impl From<MaintenanceBudgetError> for ValidationError {
    fn from(err: MaintenanceBudgetError) -> Self {
        ValidationError::MaintenanceBudget(err)
    }
}

impl From<MaintenanceLengthError> for ValidationError {
    fn from(err: MaintenanceLengthError) -> Self {
        ValidationError::MaintenanceLength(err)
    }
}
