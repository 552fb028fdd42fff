use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub ranker: RankerSettings,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// JSON file holding an array of per-token analysis bundles.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankerSettings {
    pub min_breakout_probability: u8,
    pub max_candidates: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub json_logs: bool,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    pub fn load_or_default() -> Result<Self> {
        // Try config.toml first, then config.example.toml
        Self::load("config.toml")
            .or_else(|_| Self::load("config.example.toml"))
            .context("Failed to load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_src = r#"
            [input]
            path = "data/tokens.json"

            [ranker]
            min_breakout_probability = 60
            max_candidates = 10

            [monitoring]
            log_level = "info"
            json_logs = false
        "#;

        let config: Config = toml::from_str(toml_src).unwrap();
        assert_eq!(config.input.path, "data/tokens.json");
        assert_eq!(config.ranker.min_breakout_probability, 60);
        assert_eq!(config.ranker.max_candidates, 10);
        assert!(!config.monitoring.json_logs);
    }
}
