use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Mutation testing report (JSON, mutation-testing-report-schema)
    #[arg(value_name = "REPORT")]
    pub report: String,

    /// All relative paths will be interpreted relative to this directory.
    #[arg(long)]
    pub cwd: Option<String>,

    /// Config file to use instead of the nearest mewt-badge.toml
    #[arg(long)]
    pub config: Option<String>,

    /// Output folder for badge.svg (overrides config [badge_reporter].base_dir)
    #[arg(long = "base-dir")]
    pub base_dir: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level")]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color")]
    pub log_color: Option<String>,

    /// Print the aggregated report metrics as JSON to stdout
    #[arg(long)]
    pub metrics: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_report_and_overrides() {
        let args = Args::try_parse_from([
            "mewt-badge",
            "mutation.json",
            "--base-dir",
            "out/x",
            "--log.level",
            "debug",
            "--metrics",
        ])
        .unwrap();
        assert_eq!(args.report, "mutation.json");
        assert_eq!(args.base_dir.as_deref(), Some("out/x"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.metrics);
        assert!(args.config.is_none());
    }

    #[test]
    fn report_is_required() {
        assert!(Args::try_parse_from(["mewt-badge"]).is_err());
    }
}
