//! Client configuration (blogr.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::BodyFormat;

/// Default development address of the post service
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Main client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the remote post service
    pub api_url: String,

    /// How many posts the recent list shows
    pub recent_posts: usize,

    /// Moment.js-style display format for post dates
    pub date_format: String,

    /// Body rendering
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            recent_posts: 5,
            date_format: "YYYY-MM-DD".to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ClientConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Body rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Which shape post bodies have: `markdown` or `html`
    pub body_format: BodyFormat,
}

/// Resolve the API base URL: an explicit flag wins over the environment,
/// which wins over the configured value
pub fn resolve_api_url(flag: Option<&str>, env: Option<&str>, configured: &str) -> String {
    flag.filter(|v| !v.is_empty())
        .or(env.filter(|v| !v.is_empty()))
        .unwrap_or(configured)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.recent_posts, 5);
        assert_eq!(config.render.body_format, BodyFormat::Markdown);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
api_url: https://blog.example.com
recent_posts: 10
render:
  body_format: html
"#;
        let config: ClientConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api_url, "https://blog.example.com");
        assert_eq!(config.recent_posts, 10);
        assert_eq!(config.render.body_format, BodyFormat::Html);
        assert_eq!(config.date_format, "YYYY-MM-DD");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url: http://10.0.0.2:9090").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.2:9090");
    }

    #[test]
    fn test_resolve_api_url_precedence() {
        assert_eq!(
            resolve_api_url(Some("http://flag"), Some("http://env"), "http://file"),
            "http://flag"
        );
        assert_eq!(
            resolve_api_url(None, Some("http://env"), "http://file"),
            "http://env"
        );
        assert_eq!(resolve_api_url(None, None, "http://file"), "http://file");
        assert_eq!(
            resolve_api_url(Some(""), Some(""), DEFAULT_API_URL),
            DEFAULT_API_URL
        );
    }
}
