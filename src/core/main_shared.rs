use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::core::cli::Args;
use crate::core::logging::init_logging;
use crate::core::metrics::Metrics;
use crate::core::reporter::{BadgeReporter, Reporter};
use crate::types::config::{CliOverrides, config, init_with_overrides};
use crate::types::{AppResult, MutationTestReport};

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        config: args.config.clone(),
        base_dir: args.base_dir.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides)?;

    // Initialize logging after config so level/color are applied
    init_logging()?;
    debug!("Current working directory: {}", env::current_dir()?.display());

    let report_path = PathBuf::from(&args.report);
    debug!("Reading mutation report from {}", report_path.display());
    let report = MutationTestReport::from_path(&report_path)?;
    if let Some(thresholds) = report.thresholds {
        debug!(
            "Report thresholds (high {}, low {}) are not used for the badge color",
            thresholds.high, thresholds.low
        );
    }

    if args.metrics {
        println!(
            "{}",
            serde_json::to_string_pretty(&Metrics::from_report(&report))?
        );
    }

    let reporter = BadgeReporter::new(config().badge_reporter());
    debug!("Running reporter {}", reporter.name());
    reporter.on_mutation_test_report_ready(&report)?;

    Ok(())
}
