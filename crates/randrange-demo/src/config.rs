//! Demo configuration, read from the environment.

use std::str::FromStr;

use crate::error::AppError;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "RANDRANGE_LOG_FORMAT must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Settings for a demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Lower bound of the demonstrated range.
    pub minimum: f64,
    /// Upper bound of the demonstrated range.
    pub maximum: f64,
    /// Number of values drawn by the populate demonstration.
    pub count: usize,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 4.0,
            count: 5,
            log_format: LogFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            minimum: parse_var(&lookup, "RANDRANGE_MINIMUM", defaults.minimum)?,
            maximum: parse_var(&lookup, "RANDRANGE_MAXIMUM", defaults.maximum)?,
            count: parse_var(&lookup, "RANDRANGE_COUNT", defaults.count)?,
            log_format: match lookup("RANDRANGE_LOG_FORMAT") {
                Some(raw) => raw.parse()?,
                None => defaults.log_format,
            },
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} must be a valid number: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("RANDRANGE_MINIMUM", "-2.5"),
            ("RANDRANGE_MAXIMUM", " 10 "),
            ("RANDRANGE_COUNT", "12"),
            ("RANDRANGE_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(
            config,
            DemoConfig {
                minimum: -2.5,
                maximum: 10.0,
                count: 12,
                log_format: LogFormat::Json,
            }
        );
    }

    #[test]
    fn test_unparseable_number_is_config_error() {
        let err = DemoConfig::from_lookup(lookup_from(&[("RANDRANGE_MAXIMUM", "lots")]))
            .unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.starts_with("RANDRANGE_MAXIMUM")),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_count_is_config_error() {
        let err =
            DemoConfig::from_lookup(lookup_from(&[("RANDRANGE_COUNT", "-1")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_unknown_log_format_is_config_error() {
        let err = DemoConfig::from_lookup(lookup_from(&[("RANDRANGE_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
