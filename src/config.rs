use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Environment variable that overrides the listening port
pub const PORT_ENV: &str = "EXTRACT_PORT";

/// Configuration for the extraction service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Address to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on a single page fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// User-Agent header sent with every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply the port override from the environment, if set
    pub fn with_env_overrides(self) -> Result<Self, Box<dyn Error>> {
        let port = std::env::var(PORT_ENV).ok();
        self.with_port_override(port.as_deref())
    }

    /// Replace the port with `port` when it is present and non-empty
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self, Box<dyn Error>> {
        if let Some(port) = port.filter(|port| !port.is_empty()) {
            self.port = port
                .parse()
                .map_err(|e| format!("invalid {} '{}': {}", PORT_ENV, port, e))?;
        }
        Ok(self)
    }

    /// Socket address string for the server to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Default value for host
fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default value for port
fn default_port() -> u16 {
    8080
}

/// Default value for fetch_timeout_secs
fn default_fetch_timeout_secs() -> u64 {
    30
}

/// Default value for user_agent
fn default_user_agent() -> String {
    format!("page-extract/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.user_agent.starts_with("page-extract/"));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ExtractorConfig::from_json(r#"{"port": 9090}"#).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.fetch_timeout_secs, 30);

        let config = ExtractorConfig::from_json("{}").unwrap();
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        assert!(ExtractorConfig::from_json(r#"{"port": "eighty"}"#).is_err());
        assert!(ExtractorConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_port_override() {
        let config = ExtractorConfig::default()
            .with_port_override(Some("8081"))
            .unwrap();
        assert_eq!(config.port, 8081);

        let config = ExtractorConfig::default().with_port_override(Some("")).unwrap();
        assert_eq!(config.port, 8080);

        let config = ExtractorConfig::default().with_port_override(None).unwrap();
        assert_eq!(config.port, 8080);

        assert!(ExtractorConfig::default()
            .with_port_override(Some("eighty"))
            .is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "page-extract-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"host": "127.0.0.1", "fetch_timeout_secs": 5}"#).unwrap();

        let config = ExtractorConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.fetch_timeout_secs, 5);
    }
}
