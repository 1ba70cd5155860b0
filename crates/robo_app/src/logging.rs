//! `fern` dispatcher writing `[LEVEL target] message` lines to stdout.

use log::LevelFilter;

/// Environment variable that overrides the configured level.
pub const LOG_ENV: &str = "ROBO_LOG";

/// `configured`, unless `env` names a valid level (`off`, `error` ... `trace`,
/// any case).
pub fn effective_level(configured: LevelFilter, env: Option<&str>) -> LevelFilter {
    env.and_then(|value| value.trim().parse().ok())
        .unwrap_or(configured)
}

pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!("[{level} {target}] {message}")
}

/// Installs the global logger.  Fails if one is already installed.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{}", format_line(record.level(), record.target(), message)))
        })
        .level(level)
        // the GPU stack is chatty at info
        .level_for("wgpu_core", LevelFilter::Warn)
        .level_for("wgpu_hal", LevelFilter::Warn)
        .level_for("naga", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_when_valid() {
        assert_eq!(effective_level(LevelFilter::Info, Some("debug")), LevelFilter::Debug);
        assert_eq!(effective_level(LevelFilter::Info, Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(effective_level(LevelFilter::Info, Some("off")), LevelFilter::Off);
    }

    #[test]
    fn invalid_or_missing_env_keeps_configured() {
        assert_eq!(effective_level(LevelFilter::Warn, None), LevelFilter::Warn);
        assert_eq!(effective_level(LevelFilter::Warn, Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn line_format() {
        let line = format_line(log::Level::Info, "robo_core::state", &format_args!("width: {} height: {}", 1024, 768));
        assert_eq!(line, "[INFO robo_core::state] width: 1024 height: 768");
    }
}
