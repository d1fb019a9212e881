//! Centralized application configuration.
//!
//! Single source of truth for server settings, with sensible defaults and
//! environment-variable overrides.

use std::net::SocketAddr;

/// Default values for configuration.
mod defaults {
    pub fn http_port() -> u16 {
        3040
    }
    pub fn http_bind_addr() -> String {
        "0.0.0.0".to_string()
    }
    pub fn default_page_size() -> u32 {
        20
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP listener binds to.
    pub http_bind_addr: String,
    /// Port the HTTP listener binds to.
    pub http_port: u16,
    /// Page size used when a list request supplies none.
    pub default_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_bind_addr: defaults::http_bind_addr(),
            http_port: defaults::http_port(),
            default_page_size: defaults::default_page_size(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `SHELFMARK_BIND_ADDR`, `SHELFMARK_PORT`,
    /// `SHELFMARK_PAGE_SIZE`.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("SHELFMARK_BIND_ADDR") {
            config.http_bind_addr = addr;
        }
        if let Ok(port) = std::env::var("SHELFMARK_PORT") {
            config.http_port = port.parse()?;
        }
        if let Ok(size) = std::env::var("SHELFMARK_PAGE_SIZE") {
            config.default_page_size = size.parse()?;
        }

        if config.default_page_size == 0 {
            anyhow::bail!("SHELFMARK_PAGE_SIZE must be greater than zero");
        }

        Ok(config)
    }

    /// Socket address for the HTTP listener.
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.http_bind_addr, self.http_port).parse()?)
    }
}
