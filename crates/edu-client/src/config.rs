//! Client Configuration

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://ai-agent-backened.onrender.com";

/// Environment variable overriding the backend URL
pub const API_URL_ENV: &str = "EDU_API_URL";

/// Client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Configuration for a backend base URL; trailing slashes are dropped
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read `EDU_API_URL`, falling back to the default backend
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok())
    }

    /// Use `value` unless it is missing or blank
    pub fn from_value(value: Option<String>) -> Self {
        value
            .filter(|url| !url.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_blank_value_uses_default() {
        assert_eq!(ClientConfig::from_value(Some("  ".into())), ClientConfig::default());
        assert_eq!(ClientConfig::from_value(None), ClientConfig::default());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::from_value(Some("http://localhost:5000//".into()));
        assert_eq!(config.base_url(), "http://localhost:5000");
    }
}
