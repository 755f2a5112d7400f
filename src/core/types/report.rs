use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::AppResult;

/// Final outcome of a single mutant, as named by the mutation-testing report schema
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum MutantStatus {
    Killed,
    Survived,
    NoCoverage,
    CompileError,
    RuntimeError,
    Timeout,
    Ignored,
    Pending,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutantResult {
    pub id: String,
    pub mutator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(default)]
    pub location: Location,
    pub status: MutantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covered_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub killed_by: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub mutants: Vec<MutantResult>,
}

/// Score thresholds carried by the report itself (informational only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub high: f64,
    pub low: f64,
}

/// A finished mutation testing report handed over by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationTestReport {
    #[serde(default)]
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(default)]
    pub files: BTreeMap<String, FileResult>,
}

impl MutationTestReport {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Iterate over every mutant in every file
    pub fn mutants(&self) -> impl Iterator<Item = &MutantResult> {
        self.files.values().flat_map(|file| file.mutants.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const REPORT: &str = r#"{
        "schemaVersion": "1.0",
        "thresholds": { "high": 80, "low": 60 },
        "files": {
            "src/add.js": {
                "language": "javascript",
                "source": "function add(a, b) { return a + b; }",
                "mutants": [
                    {
                        "id": "1",
                        "mutatorName": "ArithmeticOperator",
                        "replacement": "a - b",
                        "location": { "start": { "line": 1, "column": 29 }, "end": { "line": 1, "column": 34 } },
                        "status": "Killed",
                        "killedBy": ["0"]
                    },
                    {
                        "id": "2",
                        "mutatorName": "BlockStatement",
                        "location": { "start": { "line": 1, "column": 20 }, "end": { "line": 1, "column": 37 } },
                        "status": "NoCoverage"
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn parses_schema_report() {
        let report = MutationTestReport::from_json(REPORT).unwrap();
        assert_eq!(report.schema_version, "1.0");
        assert_eq!(report.thresholds.unwrap().high, 80.0);

        let file = &report.files["src/add.js"];
        assert_eq!(file.language, "javascript");
        assert_eq!(file.mutants.len(), 2);
        assert_eq!(file.mutants[0].mutator_name, "ArithmeticOperator");
        assert_eq!(file.mutants[0].killed_by.as_deref(), Some(&["0".to_string()][..]));
        assert_eq!(file.mutants[1].status, MutantStatus::NoCoverage);
        assert_eq!(file.mutants[1].location.start.column, 20);
    }

    #[test]
    fn ignores_unknown_fields_and_missing_files() {
        let report =
            MutationTestReport::from_json(r#"{"schemaVersion": "2", "framework": {"name": "x"}}"#)
                .unwrap();
        assert!(report.files.is_empty());
        assert_eq!(report.mutants().count(), 0);
    }

    #[test]
    fn rejects_unknown_status() {
        let json = r#"{"files": {"a.js": {"mutants": [
            {"id": "1", "mutatorName": "X", "status": "Exploded"}
        ]}}}"#;
        assert!(MutationTestReport::from_json(json).is_err());
    }

    #[test]
    fn status_round_trips_through_strum() {
        assert_eq!(MutantStatus::NoCoverage.to_string(), "NoCoverage");
        assert_eq!(
            MutantStatus::from_str("RuntimeError").unwrap(),
            MutantStatus::RuntimeError
        );
        assert!(MutantStatus::from_str("killed").is_err());
    }
}
