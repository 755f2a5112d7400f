use serde::Serialize;

use crate::types::{FileResult, MutantStatus, MutationTestReport};

/// Mutant counts and derived scores for a report or a single file
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub killed: usize,
    pub timeout: usize,
    pub survived: usize,
    pub no_coverage: usize,
    pub compile_errors: usize,
    pub runtime_errors: usize,
    pub ignored: usize,
    pub pending: usize,
    pub total_detected: usize,
    pub total_undetected: usize,
    pub total_covered: usize,
    pub total_valid: usize,
    pub total_invalid: usize,
    pub total_mutants: usize,
    /// NaN when there are no valid mutants
    pub mutation_score: f64,
    /// NaN when no mutant was covered
    pub mutation_score_based_on_covered_code: f64,
}

impl Metrics {
    pub fn from_report(report: &MutationTestReport) -> Self {
        Self::from_statuses(report.mutants().map(|m| m.status))
    }

    pub fn from_file(file: &FileResult) -> Self {
        Self::from_statuses(file.mutants.iter().map(|m| m.status))
    }

    pub fn from_statuses(statuses: impl IntoIterator<Item = MutantStatus>) -> Self {
        let mut metrics = Metrics::default();
        for status in statuses {
            match status {
                MutantStatus::Killed => metrics.killed += 1,
                MutantStatus::Timeout => metrics.timeout += 1,
                MutantStatus::Survived => metrics.survived += 1,
                MutantStatus::NoCoverage => metrics.no_coverage += 1,
                MutantStatus::CompileError => metrics.compile_errors += 1,
                MutantStatus::RuntimeError => metrics.runtime_errors += 1,
                MutantStatus::Ignored => metrics.ignored += 1,
                MutantStatus::Pending => metrics.pending += 1,
            }
        }

        metrics.total_detected = metrics.killed + metrics.timeout;
        metrics.total_undetected = metrics.survived + metrics.no_coverage;
        metrics.total_covered = metrics.total_detected + metrics.survived;
        metrics.total_valid = metrics.total_detected + metrics.total_undetected;
        metrics.total_invalid = metrics.compile_errors + metrics.runtime_errors;
        metrics.total_mutants =
            metrics.total_valid + metrics.total_invalid + metrics.ignored + metrics.pending;

        metrics.mutation_score = percentage(metrics.total_detected, metrics.total_valid);
        metrics.mutation_score_based_on_covered_code =
            percentage(metrics.total_detected, metrics.total_covered);
        metrics
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        f64::NAN
    }
}
