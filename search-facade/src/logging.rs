//! Tracing subscriber setup.

use std::env;
use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` selects JSON output; anything else is plain text.
    pub fn from_env() -> Self {
        Self::parse(env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Load `.env`, then install the global subscriber in the format it selects.
///
/// `RUST_LOG` and `LOG_FORMAT` may therefore be set in `.env`.
pub fn init_from_env() {
    dotenv::dotenv().ok();
    init(LogFormat::from_env());
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// command output. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_format() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Text);
        assert_eq!(LogFormat::parse(None), LogFormat::Text);
    }

    #[test]
    fn test_env_file_selects_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "LOG_FORMAT=json").unwrap();

        dotenv::from_path(file.path()).unwrap();

        assert_eq!(LogFormat::from_env(), LogFormat::Json);
    }
}
