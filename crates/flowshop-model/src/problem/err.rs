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
pub struct EmptyInstanceError;

impl std::fmt::Display for EmptyInstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The instance contains no jobs.")
    }
}

impl std::error::Error for EmptyInstanceError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateJobError {
    id: JobId,
}

impl DuplicateJobError {
    pub fn new(id: JobId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> JobId {
        self.id
    }
}

impl std::fmt::Display for DuplicateJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Job {} is defined more than once", self.id)
    }
}

impl std::error::Error for DuplicateJobError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonPositiveDurationError {
    id: JobId,
    machine: Machine,
}

impl NonPositiveDurationError {
    pub fn new(id: JobId, machine: Machine) -> Self {
        Self { id, machine }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn machine(&self) -> Machine {
        self.machine
    }
}

impl std::fmt::Display for NonPositiveDurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Job {} has a non-positive duration on {}",
            self.id, self.machine
        )
    }
}

impl std::error::Error for NonPositiveDurationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationExceedsPeriodError {
    id: JobId,
    machine: Machine,
}

impl OperationExceedsPeriodError {
    pub fn new(id: JobId, machine: Machine) -> Self {
        Self { id, machine }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn machine(&self) -> Machine {
        self.machine
    }
}

impl std::fmt::Display for OperationExceedsPeriodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Job {} on {} is longer than the maintenance period; no placement can fit it between maintenances",
            self.id, self.machine
        )
    }
}

impl std::error::Error for OperationExceedsPeriodError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PunishmentFactorOutOfRangeError {
    value: f64,
}

impl PunishmentFactorOutOfRangeError {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl std::fmt::Display for PunishmentFactorOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Punishment factor {} is not between 0 < x < 1",
            self.value
        )
    }
}

impl std::error::Error for PunishmentFactorOutOfRangeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonPositiveTunableError {
    tunable: &'static str,
}

impl NonPositiveTunableError {
    pub fn new(tunable: &'static str) -> Self {
        Self { tunable }
    }

    pub fn tunable(&self) -> &'static str {
        self.tunable
    }
}

impl std::fmt::Display for NonPositiveTunableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` must be at least 1", self.tunable)
    }
}

impl std::error::Error for NonPositiveTunableError {}

#[derive(Debug, Clone, PartialEq)]
pub enum InstanceError {
    Empty(EmptyInstanceError),
    DuplicateJob(DuplicateJobError),
    NonPositiveDuration(NonPositiveDurationError),
    OperationExceedsPeriod(OperationExceedsPeriodError),
    PunishmentFactorOutOfRange(PunishmentFactorOutOfRangeError),
    NonPositiveTunable(NonPositiveTunableError),
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::Empty(e) => write!(f, "{}", e),
            InstanceError::DuplicateJob(e) => write!(f, "{}", e),
            InstanceError::NonPositiveDuration(e) => write!(f, "{}", e),
            InstanceError::OperationExceedsPeriod(e) => write!(f, "{}", e),
            InstanceError::PunishmentFactorOutOfRange(e) => write!(f, "{}", e),
            InstanceError::NonPositiveTunable(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InstanceError {}

impl From<EmptyInstanceError> for InstanceError {
    fn from(err: EmptyInstanceError) -> Self {
        InstanceError::Empty(err)
    }
}

impl From<DuplicateJobError> for InstanceError {
    fn from(err: DuplicateJobError) -> Self {
        InstanceError::DuplicateJob(err)
    }
}

impl From<NonPositiveDurationError> for InstanceError {
    fn from(err: NonPositiveDurationError) -> Self {
        InstanceError::NonPositiveDuration(err)
    }
}

impl From<OperationExceedsPeriodError> for InstanceError {
    fn from(err: OperationExceedsPeriodError) -> Self {
        InstanceError::OperationExceedsPeriod(err)
    }
}

impl From<PunishmentFactorOutOfRangeError> for InstanceError {
    fn from(err: PunishmentFactorOutOfRangeError) -> Self {
        InstanceError::PunishmentFactorOutOfRange(err)
    }
}

impl From<NonPositiveTunableError> for InstanceError {
    fn from(err: NonPositiveTunableError) -> Self {
        InstanceError::NonPositiveTunable(err)
    }
}

#[derive(Debug)]
pub enum InstanceLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidJobId(String),
    Instance(InstanceError),
}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for InstanceLoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<InstanceError> for InstanceLoadError {
    fn from(e: InstanceError) -> Self {
        Self::Instance(e)
    }
}

impl std::fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InstanceLoadError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            Json(e) => write!(f, "malformed instance document: {e}"),
            InvalidJobId(key) => {
                write!(f, "task key {key:?} is not a positive integer job id")
            }
            Instance(e) => write!(f, "invalid instance: {e}"),
        }
    }
}

impl std::error::Error for InstanceLoadError {}
