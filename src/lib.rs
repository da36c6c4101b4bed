//! blogr: a terminal client for remote blog post APIs
//!
//! This crate provides a command-line blog browsing and editing client.
//! Posts live behind a remote HTTP service that owns persistence; every
//! view fetches independently and renders to the terminal.

pub mod api;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod views;

use anyhow::Result;
use std::path::Path;

/// Environment variable overriding the configured API base URL
pub const API_URL_ENV: &str = "BLOG_API_URL";

/// Configuration file name looked up in the base directory
pub const CONFIG_FILE: &str = "blogr.yml";

/// The main blogr application
#[derive(Clone)]
pub struct Blog {
    /// Client configuration
    pub config: config::ClientConfig,
}

impl Blog {
    /// Create an instance from a directory, loading blogr.yml when present
    /// and applying the environment and flag overrides for the API URL
    pub fn new<P: AsRef<Path>>(base_dir: P, api_url_flag: Option<&str>) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            config::ClientConfig::load(&config_path)?
        } else {
            config::ClientConfig::default()
        };

        let env = std::env::var(API_URL_ENV).ok();
        config.api_url = config::resolve_api_url(api_url_flag, env.as_deref(), &config.api_url);

        Ok(Self { config })
    }

    /// Build the HTTP client for the configured service
    pub fn api(&self) -> api::HttpApi {
        api::HttpApi::new(&self.config.api_url)
    }

    /// Renderer for post bodies per the configured strategy
    pub fn renderer(&self) -> content::BodyRenderer {
        content::BodyRenderer::new(self.config.render.body_format)
    }
}
