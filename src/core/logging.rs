use console::style;
use log::{Level, LevelFilter};

use crate::types::{AppError, AppResult};
use crate::types::config::{colors_enabled, config};

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

fn level_label(level: Level, color: bool) -> String {
    let label = format!("{:<5}", level);
    if !color {
        return label;
    }
    // `color` is already resolved for stderr; console must not re-detect from stdout
    let styled = style(label).for_stderr().force_styling(true);
    match level {
        Level::Error => styled.red().bold().to_string(),
        Level::Warn => styled.yellow().to_string(),
        Level::Info => styled.green().to_string(),
        Level::Debug => styled.cyan().to_string(),
        Level::Trace => styled.dim().to_string(),
    }
}

/// Route `log` records to stderr at the configured level
pub fn init_logging() -> AppResult<()> {
    let level = parse_level(config().log().level());
    let color = colors_enabled();

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}] {}",
                level_label(record.level(), color),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| AppError::Custom(format!("Failed to initialize logging: {e}")))?;
    Ok(())
}
