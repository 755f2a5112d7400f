use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::core::badge::Badge;
use crate::core::metrics::Metrics;
use crate::types::config::BadgeReporterConfig;
use crate::types::{AppResult, MutationTestReport};

pub const REPORTER_NAME: &str = "badge-reporter";
pub const BADGE_FILENAME: &str = "badge.svg";

/// Output folder used when none is configured, relative to the working directory
pub fn default_base_dir() -> PathBuf {
    ["reports", "mutation", "badge"].iter().collect()
}

/// Hook invoked by the host once a mutation testing run is complete
pub trait Reporter: Send + Sync {
    /// Reporter name (e.g., "badge-reporter")
    fn name(&self) -> &'static str;

    /// Consume the final report. Errors abort the reporting step.
    fn on_mutation_test_report_ready(&self, report: &MutationTestReport) -> AppResult<()>;
}

/// Writes an SVG badge showing the mutation score of the report
pub struct BadgeReporter {
    config: BadgeReporterConfig,
    working_dir: Option<PathBuf>,
}

impl BadgeReporter {
    pub fn new(config: BadgeReporterConfig) -> Self {
        Self {
            config,
            working_dir: None,
        }
    }

    /// Resolve relative output folders against `dir` instead of the process cwd
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn base_dir(&self) -> PathBuf {
        match self.config.base_dir() {
            Some(dir) => {
                debug!("Using configured output folder {dir}");
                PathBuf::from(dir)
            }
            None => {
                let dir = default_base_dir();
                debug!(
                    "No base folder configuration found (using configuration: [badge_reporter] base_dir = \"output/folder\"), using default {}",
                    dir.display()
                );
                dir
            }
        }
    }

    pub fn badge_for_score(&self, score: f64) -> String {
        Badge::for_score(score).render(self.config.escape())
    }

    /// Write the rendered badge to `<base_dir>/badge.svg`, replacing any previous one
    pub fn write_badge(&self, svg: &str) -> AppResult<PathBuf> {
        let base_dir = self.resolve(&self.base_dir())?;
        let badge_path = base_dir.join(BADGE_FILENAME);
        fs::create_dir_all(&base_dir)?;
        fs::write(&badge_path, svg)?;
        info!("Your badge can be found at: {}", badge_path.display());
        Ok(badge_path)
    }

    /// Score, render and write the badge for a finished report
    pub fn report(&self, report: &MutationTestReport) -> AppResult<PathBuf> {
        let metrics = Metrics::from_report(report);
        let score = metrics.mutation_score;
        if score.is_nan() {
            warn!("Report contains no valid mutants; the badge will read NaN%");
        } else {
            debug!(
                "Mutation score {:.2}% ({} of {} valid mutants detected)",
                score, metrics.total_detected, metrics.total_valid
            );
        }

        let svg = self.badge_for_score(score);
        self.write_badge(&svg)
    }

    fn resolve(&self, dir: &Path) -> AppResult<PathBuf> {
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }
        match &self.working_dir {
            Some(working_dir) => Ok(std::path::absolute(working_dir.join(dir))?),
            None => Ok(std::path::absolute(dir)?),
        }
    }
}

impl Reporter for BadgeReporter {
    fn name(&self) -> &'static str {
        REPORTER_NAME
    }

    fn on_mutation_test_report_ready(&self, report: &MutationTestReport) -> AppResult<()> {
        self.report(report)?;
        Ok(())
    }
}
