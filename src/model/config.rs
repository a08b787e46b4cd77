use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

const ENV_CONFIG_PATH: &str = "COPYGEN_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// LLM gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the OpenAI-compatible chat completions gateway
    #[serde(default = "default_gateway_url")]
    pub base_url: Url,
    /// Model identifier passed on every completion request
    #[serde(default = "default_model")]
    pub model: String,
    /// Whether to run the brand-name sanitize pass on the positioning draft
    #[serde(default = "default_sanitize")]
    pub sanitize_positioning: bool,
}

fn default_gateway_url() -> Url {
    Url::parse(DEFAULT_GATEWAY_URL).expect("default gateway URL is valid")
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_sanitize() -> bool {
    true
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_gateway_url(),
            model: default_model(),
            sanitize_positioning: true,
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let gateway = Self::load_config_file(&config_path)
            .map(|cf| cf.gateway)
            .unwrap_or_default();

        Self {
            gateway,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_defaults() {
        let gateway = GatewayConfig::default();
        assert_eq!(
            gateway.base_url.as_str(),
            "https://ai.gateway.lovable.dev/v1"
        );
        assert_eq!(gateway.model, "google/gemini-2.5-flash");
        assert!(gateway.sanitize_positioning);
    }

    #[test]
    fn test_partial_yaml_uses_field_defaults() {
        let parsed: ConfigFile =
            serde_yaml::from_str("gateway:\n  model: openai/gpt-5-mini\n").unwrap();
        assert_eq!(parsed.gateway.model, "openai/gpt-5-mini");
        assert_eq!(
            parsed.gateway.base_url.as_str(),
            "https://ai.gateway.lovable.dev/v1"
        );
    }
}
