use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::AppResult;

pub const DEFAULT_CONFIG_FILENAME: &str = "mewt-badge.toml";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct BadgeReporterConfig {
    pub base_dir: Option<String>, // None = default report folder (semantic)
    pub escape: Option<bool>,
}

impl BadgeReporterConfig {
    /// Configured output folder, if one was given and is not blank
    pub fn base_dir(&self) -> Option<&str> {
        self.base_dir.as_deref().filter(|dir| !dir.trim().is_empty())
    }

    pub fn escape(&self) -> bool {
        self.escape.unwrap_or(false)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            base_dir: self.base_dir().map(|s| s.to_string()),
            escape: Some(self.escape()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub log: Option<LogConfig>,
    pub badge_reporter: Option<BadgeReporterConfig>,
}

impl Config {
    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn badge_reporter(&self) -> BadgeReporterConfig {
        self.badge_reporter.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            log: Some(self.log().to_effective()),
            badge_reporter: Some(self.badge_reporter().to_effective()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<String>, // explicit config file, skips discovery
    pub base_dir: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

pub fn init_with_overrides(overrides: &CliOverrides) -> AppResult<()> {
    // 1) Config file: explicit path, else walk up from cwd and use the first one found
    let path = match &overrides.config {
        Some(explicit) => Some(PathBuf::from(explicit)),
        None => find_nearest_config_file(),
    };
    let file_cfg = match path {
        Some(path) => Some(read_config_file(&path)?),
        None => None,
    };

    // 2) CLI arguments (highest priority). Only override if user specified.
    let cfg = build_config(file_cfg.as_ref(), overrides);

    let _ = CONFIG.set(cfg);
    Ok(())
}

pub fn build_config(file: Option<&Config>, overrides: &CliOverrides) -> Config {
    let mut cfg = Config::default();
    if let Some(file) = file {
        apply_file_config(&mut cfg, file);
    }
    apply_cli_overrides(&mut cfg, overrides);
    cfg
}

pub fn read_config_file(path: &Path) -> AppResult<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str::<Config>(&contents)?)
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge badge reporter section
    if let Some(file_badge) = &file.badge_reporter {
        let mut badge = cfg.badge_reporter.clone().unwrap_or_default();
        if file_badge.base_dir.is_some() {
            badge.base_dir = file_badge.base_dir.clone();
        }
        if file_badge.escape.is_some() {
            badge.escape = file_badge.escape;
        }
        cfg.badge_reporter = Some(badge);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // Badge reporter overrides
    if let Some(base_dir) = &overrides.base_dir
        && !base_dir.trim().is_empty()
    {
        let mut badge = cfg.badge_reporter.clone().unwrap_or_default();
        badge.base_dir = Some(base_dir.clone());
        cfg.badge_reporter = Some(badge);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(DEFAULT_CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled_stderr(), // logs go to stderr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(toml_text: &str) -> Config {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn defaults_when_nothing_configured() {
        let cfg = build_config(None, &CliOverrides::default());
        assert_eq!(cfg.log().level(), "info");
        assert_eq!(cfg.log().color(), None);
        assert_eq!(cfg.badge_reporter().base_dir(), None);
        assert!(!cfg.badge_reporter().escape());
    }

    #[test]
    fn file_values_are_applied() {
        let file = file_config(
            r#"
            [log]
            level = "debug"
            color = false

            [badge_reporter]
            base_dir = "out/x"
            escape = true
            "#,
        );
        let cfg = build_config(Some(&file), &CliOverrides::default());
        assert_eq!(cfg.log().level(), "debug");
        assert_eq!(cfg.log().color(), Some(false));
        assert_eq!(cfg.badge_reporter().base_dir(), Some("out/x"));
        assert!(cfg.badge_reporter().escape());
    }

    #[test]
    fn cli_overrides_win_over_file() {
        let file = file_config(
            r#"
            [log]
            level = "warn"

            [badge_reporter]
            base_dir = "from/file"
            escape = true
            "#,
        );
        let overrides = CliOverrides {
            base_dir: Some("from/cli".to_string()),
            log_level: Some(" trace ".to_string()),
            log_color: Some("ON".to_string()),
            ..Default::default()
        };
        let cfg = build_config(Some(&file), &overrides);
        assert_eq!(cfg.badge_reporter().base_dir(), Some("from/cli"));
        assert!(cfg.badge_reporter().escape());
        assert_eq!(cfg.log().level(), "trace");
        assert_eq!(cfg.log().color(), Some(true));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let file = file_config("[badge_reporter]\nbase_dir = \"kept\"\n");
        let overrides = CliOverrides {
            base_dir: Some("   ".to_string()),
            log_color: Some("maybe".to_string()),
            ..Default::default()
        };
        let cfg = build_config(Some(&file), &overrides);
        assert_eq!(cfg.badge_reporter().base_dir(), Some("kept"));
        assert_eq!(cfg.log().color(), None);
    }

    #[test]
    fn blank_base_dir_counts_as_unset() {
        let badge = BadgeReporterConfig {
            base_dir: Some(String::new()),
            escape: None,
        };
        assert_eq!(badge.base_dir(), None);
        assert_eq!(badge.to_effective().base_dir, None);
        assert_eq!(badge.to_effective().escape, Some(false));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(&path, "[badge_reporter\nbase_dir = 1").unwrap();
        assert!(read_config_file(&path).is_err());
    }
}
