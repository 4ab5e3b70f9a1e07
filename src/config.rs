//! Calculator constants and environment driven settings.

use std::env;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Longest prefix a split may produce; /30 is the smallest block with 2 usable hosts.
pub const MAX_SPLIT_LENGTH: u8 = 30;

/// Smallest subnet or host count accepted by a split.
pub const MIN_SPLIT_PARAMETER: u32 = 2;

/// Upper bound offered for subnet-count splits.
pub const SUBNET_COUNT_MAX: u32 = 1024;

/// Upper bound offered for host-count splits.
pub const HOST_COUNT_MAX: u32 = 65534;

/// Network shown when no CIDR is given.
pub const DEFAULT_CIDR: &str = "192.168.1.0/24";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_SPLIT_LIMIT: usize = 256;

/// Output format for the command line front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Settings read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    pub output: OutputFormat,
    /// Maximum number of child subnets printed per split.
    pub split_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            output: OutputFormat::Text,
            split_limit: DEFAULT_SPLIT_LIMIT,
        }
    }
}

impl Settings {
    /// Load `.env` (if present) and read `SUBNET_CALC_*` variables.
    pub fn from_env() -> Settings {
        dotenv::dotenv().ok();
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Log config path only, so logging can be up before the other settings are parsed.
    pub fn log_config_from_env() -> String {
        dotenv::dotenv().ok();
        Settings::log_config_from_lookup(|key| env::var(key).ok())
    }

    pub fn log_config_from_lookup<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("SUBNET_CALC_LOG_CONFIG").unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string())
    }

    /// Build settings from an arbitrary key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let output = match lookup("SUBNET_CALC_OUTPUT") {
            Some(v) => v.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring SUBNET_CALC_OUTPUT: {e}");
                defaults.output
            }),
            None => defaults.output,
        };

        let split_limit = match lookup("SUBNET_CALC_SPLIT_LIMIT") {
            Some(v) => v.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring SUBNET_CALC_SPLIT_LIMIT='{v}', not a number");
                defaults.split_limit
            }),
            None => defaults.split_limit,
        };

        Settings {
            log_config: Settings::log_config_from_lookup(&lookup),
            output,
            split_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_config, "log4rs.yml");
        assert_eq!(settings.split_limit, 256);
    }

    #[test]
    fn test_settings_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("SUBNET_CALC_OUTPUT", "JSON"),
            ("SUBNET_CALC_SPLIT_LIMIT", "16"),
            ("SUBNET_CALC_LOG_CONFIG", "/tmp/log.yml"),
        ]
        .into_iter()
        .collect();
        let settings = Settings::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.split_limit, 16);
        assert_eq!(settings.log_config, "/tmp/log.yml");
    }

    #[test]
    fn test_log_config_read_on_its_own() {
        let lookup = |k: &str| match k {
            "SUBNET_CALC_LOG_CONFIG" => Some("conf/log.yml".to_string()),
            "SUBNET_CALC_OUTPUT" => Some("yaml".to_string()),
            _ => None,
        };
        assert_eq!(Settings::log_config_from_lookup(lookup), "conf/log.yml");
        assert_eq!(Settings::from_lookup(lookup).log_config, "conf/log.yml");
        assert_eq!(Settings::log_config_from_lookup(|_| None), DEFAULT_LOG_CONFIG);
    }

    #[test]
    fn test_settings_bad_values_fall_back() {
        let settings = Settings::from_lookup(|k| match k {
            "SUBNET_CALC_OUTPUT" => Some("yaml".to_string()),
            "SUBNET_CALC_SPLIT_LIMIT" => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(settings.output, OutputFormat::Text);
        assert_eq!(settings.split_limit, DEFAULT_SPLIT_LIMIT);
    }
}
