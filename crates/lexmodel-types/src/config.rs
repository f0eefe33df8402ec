//! Client configuration types.
//!
//! `ClientConfig` is the top-level `config.toml` that selects the regional
//! endpoint and whether requests are checked against the service
//! constraints before they are bound.

use serde::{Deserialize, Serialize};

/// Region used when neither the config file nor the caller names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Settings applied when binding requests.
///
/// Loaded from `~/.lexmodel/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// AWS region of the model building endpoint.
    #[serde(default = "default_region")]
    pub region: String,

    /// Full endpoint override (e.g. a local mock). Replaces the regional
    /// `https://models.lex.{region}.amazonaws.com` endpoint when set.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Whether requests are checked against the documented constraints.
    #[serde(default)]
    pub validation: ValidationMode,

    /// Suffix appended to the `User-Agent` header.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            validation: ValidationMode::default(),
            user_agent: None,
        }
    }
}

/// Client-side constraint checking.
///
/// - Strict: violations fail the request before it is bound
/// - Off: requests are bound as-is and the service does the checking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Strict,
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert!(config.endpoint.is_none());
        assert_eq!(config.validation, ValidationMode::Strict);
    }

    #[test]
    fn test_client_config_deserialize_with_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_client_config_deserialize_with_values() {
        let toml_str = r#"
region = "eu-west-1"
endpoint = "http://localhost:4566"
validation = "off"
user_agent = "ci-pipeline"
"#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.validation, ValidationMode::Off);
        assert_eq!(config.user_agent.as_deref(), Some("ci-pipeline"));
    }

    #[test]
    fn test_client_config_rejects_unknown_validation_mode() {
        assert!(toml::from_str::<ClientConfig>(r#"validation = "lenient""#).is_err());
    }
}
