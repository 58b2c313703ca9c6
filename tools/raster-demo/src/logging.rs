//! Logger setup for the demo binary.
//!
//! The library only emits through the `log` facade; `env_logger` is
//! installed here, once, from the `--log` and `--color` flags.

use std::sync::Once;

use clap::ValueEnum;

/// Filter used when neither `--log` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// When to color log lines.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogColor {
    /// Color when stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl From<LogColor> for env_logger::WriteStyle {
    fn from(color: LogColor) -> Self {
        match color {
            LogColor::Auto => env_logger::WriteStyle::Auto,
            LogColor::Always => env_logger::WriteStyle::Always,
            LogColor::Never => env_logger::WriteStyle::Never,
        }
    }
}

/// Picks the filter string: the flag, then the environment, then
/// [`DEFAULT_FILTER`]. Blank values are skipped.
pub fn resolve_filter(flag: Option<&str>, env: Option<&str>) -> String {
    [flag, env]
        .into_iter()
        .flatten()
        .find(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_owned()
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has an effect.
pub fn init_logging(flag: Option<&str>, color: LogColor) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(flag, env.as_deref());
        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(color.into())
            .init();
        log::debug!("logging with filter {filter:?}, color {color:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(resolve_filter(Some("debug"), Some("warn")), "debug");
        assert_eq!(resolve_filter(None, Some("warn")), "warn");
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
    }

    #[test]
    fn test_blank_filters_skipped() {
        assert_eq!(resolve_filter(Some("  "), Some("raster_curves=trace")), "raster_curves=trace");
        assert_eq!(resolve_filter(Some(""), Some("")), DEFAULT_FILTER);
    }

    #[test]
    fn test_color_maps_to_write_style() {
        assert!(matches!(
            env_logger::WriteStyle::from(LogColor::Never),
            env_logger::WriteStyle::Never
        ));
        assert!(matches!(
            env_logger::WriteStyle::from(LogColor::Always),
            env_logger::WriteStyle::Always
        ));
        assert!(matches!(
            env_logger::WriteStyle::from(LogColor::default()),
            env_logger::WriteStyle::Auto
        ));
    }
}
