use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};

const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CACHE_CAPACITY: usize = 64;
const DEFAULT_OUTPUT_PATH: &str = "./output";

/// Engine settings loaded from a TOML file, for callers that prefer a
/// config file over CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub engine: EngineSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSection {
    pub api_endpoint: Option<String>,
    pub offline: Option<bool>,
    pub timeout_seconds: Option<u64>,
    pub cache_capacity: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str_content(&content)
    }

    pub fn from_str_content(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> Option<&str> {
        if self.engine.offline.unwrap_or(false) {
            return None;
        }
        self.engine.api_endpoint.as_deref()
    }

    fn request_timeout_secs(&self) -> u64 {
        self.engine.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    fn cache_capacity(&self) -> usize {
        self.engine.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)
    }

    fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.engine.api_endpoint {
            validate_url("engine.api_endpoint", endpoint)?;
        }
        validate_positive_number(
            "engine.timeout_seconds",
            self.request_timeout_secs() as usize,
            1,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let content = r#"
[engine]
api_endpoint = "https://positions.example.com/v1"
timeout_seconds = 3
cache_capacity = 16

[output]
path = "./charts"
"#;
        let config = TomlConfig::from_str_content(content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.api_endpoint(),
            Some("https://positions.example.com/v1")
        );
        assert_eq!(config.request_timeout_secs(), 3);
        assert_eq!(config.cache_capacity(), 16);
        assert_eq!(config.output_path(), "./charts");
    }

    #[test]
    fn test_defaults_applied_for_missing_fields() {
        let content = "[engine]\n";
        let config = TomlConfig::from_str_content(content).unwrap();
        assert_eq!(config.api_endpoint(), None);
        assert_eq!(config.request_timeout_secs(), 5);
        assert_eq!(config.cache_capacity(), 64);
        assert_eq!(config.output_path(), "./output");
    }

    #[test]
    fn test_offline_flag_hides_the_endpoint() {
        let content = r#"
[engine]
api_endpoint = "https://positions.example.com/v1"
offline = true
"#;
        let config = TomlConfig::from_str_content(content).unwrap();
        assert_eq!(config.api_endpoint(), None);
    }

    #[test]
    fn test_bad_url_fails_validation() {
        let content = r#"
[engine]
api_endpoint = "ftp://positions.example.com"
"#;
        let config = TomlConfig::from_str_content(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        assert!(TomlConfig::from_str_content("[engine").is_err());
    }
}
