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
    common::JobId,
    problem::{builder::InstanceBuilder, err::InstanceLoadError, instance::ProblemInstance},
};
use flowshop_core::prelude::TimeDelta;
use serde::Deserialize;
use std::{collections::BTreeMap, fs::File, io::Read, path::Path};

/// Loads a [`ProblemInstance`] from the JSON instance document.
///
/// The document carries the maintenance regime, the search tunables and a
/// `tasks` map from decimal job ids to per-machine durations keyed `"1"`
/// and `"2"`. `tabuListSize` and `candidateListSize` may be given to
/// override their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceLoader;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInstance {
    maintenance_length: i64,
    maintenance_period: i64,
    neighbour_search_count: usize,
    algorithm_retries: usize,
    operation_renew_punishment_factor: f64,
    #[serde(default)]
    tabu_list_size: Option<usize>,
    #[serde(default)]
    candidate_list_size: Option<usize>,
    tasks: BTreeMap<String, RawTask>,
}

#[derive(Debug, Deserialize)]
struct RawTask {
    #[serde(rename = "1")]
    first: i64,
    #[serde(rename = "2")]
    second: i64,
}

impl InstanceLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn from_str(&self, s: &str) -> Result<ProblemInstance<i64>, InstanceLoadError> {
        let raw: RawInstance = serde_json::from_str(s)?;
        self.assemble(raw)
    }

    pub fn from_reader<R: Read>(&self, r: R) -> Result<ProblemInstance<i64>, InstanceLoadError> {
        let raw: RawInstance = serde_json::from_reader(r)?;
        self.assemble(raw)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<ProblemInstance<i64>, InstanceLoadError> {
        let file = File::open(path)?;
        self.from_reader(file)
    }

    fn assemble(&self, raw: RawInstance) -> Result<ProblemInstance<i64>, InstanceLoadError> {
        let mut builder = InstanceBuilder::new(
            TimeDelta::new(raw.maintenance_length),
            TimeDelta::new(raw.maintenance_period),
        )
        .with_neighbour_search_count(raw.neighbour_search_count)
        .with_algorithm_retries(raw.algorithm_retries)
        .with_renew_punishment_factor(raw.operation_renew_punishment_factor);

        if let Some(size) = raw.tabu_list_size {
            builder = builder.with_tabu_list_size(size);
        }
        if let Some(size) = raw.candidate_list_size {
            builder = builder.with_candidate_list_size(size);
        }

        for (key, task) in raw.tasks {
            let id = key
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .map(JobId::new)
                .ok_or_else(|| InstanceLoadError::InvalidJobId(key.clone()))?;
            builder = builder.with_job(id, TimeDelta::new(task.first), TimeDelta::new(task.second));
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Machine;

    const SMALL_OK: &str = r#"{
        "maintenanceLength": 2,
        "maintenancePeriod": 12,
        "neighbourSearchCount": 4,
        "algorithmRetries": 3,
        "operationRenewPunishmentFactor": 0.25,
        "tasks": {
            "1": { "1": 3, "2": 1 },
            "2": { "1": 5, "2": 7 }
        }
    }"#;

    #[test]
    fn test_loads_minimal_document() {
        let inst = InstanceLoader::new().from_str(SMALL_OK).unwrap();
        assert_eq!(inst.maintenance_length(), TimeDelta::new(2));
        assert_eq!(inst.maintenance_period(), TimeDelta::new(12));
        assert_eq!(inst.neighbour_search_count(), 4);
        assert_eq!(inst.algorithm_retries(), 3);
        assert_eq!(inst.job_count(), 2);
        // Defaults from the format, not the document.
        assert_eq!(inst.tabu_list_size(), 4);
        assert_eq!(inst.candidate_list_size(), 5);

        let j2 = inst.job(JobId::new(2)).unwrap();
        assert_eq!(j2.processing_time(Machine::First), TimeDelta::new(5));
        assert_eq!(j2.processing_time(Machine::Second), TimeDelta::new(7));
    }

    #[test]
    fn test_optional_list_sizes_override_defaults() {
        let doc = r#"{
            "maintenanceLength": 1,
            "maintenancePeriod": 10,
            "neighbourSearchCount": 1,
            "algorithmRetries": 0,
            "operationRenewPunishmentFactor": 0.5,
            "tabuListSize": 7,
            "candidateListSize": 2,
            "tasks": { "1": { "1": 1, "2": 1 } }
        }"#;
        let inst = InstanceLoader::new().from_str(doc).unwrap();
        assert_eq!(inst.tabu_list_size(), 7);
        assert_eq!(inst.candidate_list_size(), 2);
    }

    #[test]
    fn test_missing_field_is_a_json_error() {
        let doc = r#"{ "maintenanceLength": 1, "tasks": {} }"#;
        let err = InstanceLoader::new().from_str(doc).unwrap_err();
        assert!(matches!(err, InstanceLoadError::Json(_)));
    }

    #[test]
    fn test_rejects_bad_job_keys() {
        for key in ["0", "-3", "abc", ""] {
            let doc = format!(
                r#"{{
                    "maintenanceLength": 1,
                    "maintenancePeriod": 10,
                    "neighbourSearchCount": 1,
                    "algorithmRetries": 0,
                    "operationRenewPunishmentFactor": 0.5,
                    "tasks": {{ "{key}": {{ "1": 1, "2": 1 }} }}
                }}"#
            );
            let err = InstanceLoader::new().from_str(&doc).unwrap_err();
            assert!(matches!(err, InstanceLoadError::InvalidJobId(_)));
        }
    }

    #[test]
    fn test_builder_rejections_surface_as_instance_errors() {
        let doc = r#"{
            "maintenanceLength": 1,
            "maintenancePeriod": 10,
            "neighbourSearchCount": 1,
            "algorithmRetries": 0,
            "operationRenewPunishmentFactor": 1.5,
            "tasks": { "1": { "1": 1, "2": 1 } }
        }"#;
        let err = InstanceLoader::new().from_str(doc).unwrap_err();
        assert!(matches!(err, InstanceLoadError::Instance(_)));
    }
}
