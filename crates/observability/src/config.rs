use std::env;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "RETAIL_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the process-wide subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl LogFormat {
    /// Parse a format name. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "text" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Raw value of `RETAIL_LOG_FORMAT` when it could not be parsed.
    pub rejected_format: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None => Self {
                format: LogFormat::default(),
                rejected_format: None,
            },
            Some(raw) => match LogFormat::parse(raw) {
                Some(format) => Self {
                    format,
                    rejected_format: None,
                },
                None => Self {
                    format: LogFormat::default(),
                    rejected_format: Some(raw.to_string()),
                },
            },
        }
    }
}
