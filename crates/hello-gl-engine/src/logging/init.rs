use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "hello_gl_engine=debug").
///
/// `target` defaults to stdout: context version and shader diagnostics are
/// meant to show up next to the program's regular output.
#[derive(Debug)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub target: env_logger::Target,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            target: env_logger::Target::Stdout,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call it first thing in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let mut builder = builder(&config, rust_log.as_deref());
        builder.target(config.target);

        // `try_init` so a logger installed by a test harness does not panic us.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

/// Filter priority: explicit `env_filter`, then `RUST_LOG`, then `info`.
fn builder(config: &LoggingConfig, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter.as_deref().or(rust_log) {
        builder.parse_filters(filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.write_style(config.write_style);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logs_to_stdout() {
        let cfg = LoggingConfig::default();
        assert!(cfg.env_filter.is_none());
        assert!(matches!(cfg.target, env_logger::Target::Stdout));
    }

    fn max_level(config: &LoggingConfig, rust_log: Option<&str>) -> log::LevelFilter {
        builder(config, rust_log).build().filter()
    }

    #[test]
    fn explicit_filter_wins_over_rust_log() {
        let cfg = LoggingConfig {
            env_filter: Some("error".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(max_level(&cfg, Some("trace")), log::LevelFilter::Error);
    }

    #[test]
    fn rust_log_used_without_explicit_filter() {
        let cfg = LoggingConfig::default();
        assert_eq!(max_level(&cfg, Some("debug")), log::LevelFilter::Debug);
    }

    #[test]
    fn falls_back_to_info() {
        let cfg = LoggingConfig::default();
        assert_eq!(max_level(&cfg, None), log::LevelFilter::Info);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig {
            env_filter: Some("warn".into()),
            ..LoggingConfig::default()
        });
        init_logging(LoggingConfig::default());
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
    }
}
