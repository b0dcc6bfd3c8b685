use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log directives '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "subscriber already installed: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Crates whose spans and events follow `APP_LOG_LEVEL`; everything else
/// stays at `warn`.
const OWN_TARGETS: [&str; 2] = ["junta_ai", "junta_ai_api"];

/// Expands a bare level such as `debug` into per-crate directives. Anything
/// already shaped like a directive list is used as given.
fn default_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains(['=', ',']) {
        return level.to_string();
    }

    let mut directives = String::from("warn");
    for target in OWN_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    let directives = default_directives(level);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::EnvFilter {
        value: directives,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_level() {
        let err = build_filter("junta_ai=verbose").expect_err("filter should not parse");
        assert!(err.to_string().contains("junta_ai=verbose"));
    }

    #[test]
    fn accepts_directive_lists() {
        assert!(build_filter("info,junta_ai=debug").is_ok());
    }

    #[test]
    fn bare_level_scopes_to_own_crates() {
        assert_eq!(
            default_directives(" debug "),
            "warn,junta_ai=debug,junta_ai_api=debug"
        );
        assert!(build_filter("info").is_ok());
    }

    #[test]
    fn bare_invalid_level_is_rejected() {
        let err = build_filter("verbose").expect_err("level should not parse");
        assert!(err.to_string().contains("junta_ai=verbose"));
    }
}
