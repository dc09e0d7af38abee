//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use simplelog::LevelFilter;

use crate::error::DemoError;

/// Log level variable, e.g. `FORMA_LOG=trace`.
pub const LOG_LEVEL_VAR: &str = "FORMA_LOG";
/// Explicit log file path; skips rotation in the cache directory.
pub const LOG_FILE_VAR: &str = "FORMA_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Debug,
            log_file: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DemoError> {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_level = LevelFilter::from_str(level.trim())
                .map_err(|_| DemoError::InvalidLogLevel(level.clone()))?;
        }
        if let Some(path) = lookup(LOG_FILE_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_debug_without_file() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn reads_level_and_file() {
        let config = DemoConfig::from_lookup(lookup(&[
            (LOG_LEVEL_VAR, "TRACE"),
            (LOG_FILE_VAR, "/tmp/forma.log"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/forma.log")));
    }

    #[test]
    fn empty_values_are_unset() {
        let config =
            DemoConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, " "), (LOG_FILE_VAR, "")])).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn rejects_unknown_level() {
        let err = DemoConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "loud")])).unwrap_err();
        assert!(matches!(err, DemoError::InvalidLogLevel(level) if level == "loud"));
    }
}
