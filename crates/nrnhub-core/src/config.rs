//! Site configuration.
//!
//! One base URL is shared by the delivery endpoint (absolute image URLs),
//! the console client (API target), and the management UI (creative
//! preview normalization). The three must agree, so it lives here.

use serde::{Deserialize, Serialize};

/// Default inquiry listing page size.
pub const DEFAULT_INQUIRY_PAGE_SIZE: usize = 50;

/// Runtime configuration for the NRNHUB workloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public base URL, scheme plus host (e.g. "https://nrnhub.com").
    pub base_url: String,
    /// Shared admin bearer token; empty disables all admin routes.
    pub admin_token: String,
    /// Page size for the inquiry listing.
    #[serde(default = "default_page_size")]
    pub inquiry_page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_INQUIRY_PAGE_SIZE
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            admin_token: String::new(),
            inquiry_page_size: DEFAULT_INQUIRY_PAGE_SIZE,
        }
    }
}

impl SiteConfig {
    /// Load configuration from the runtime environment.
    ///
    /// On Spin this reads component variables (`base_url`, `admin_token`,
    /// `inquiry_page_size`); natively it reads the matching `NRNHUB_*`
    /// environment variables. Unset values fall back to defaults.
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            base_url: read_var("base_url")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            admin_token: read_var("admin_token").unwrap_or(defaults.admin_token),
            inquiry_page_size: read_var("inquiry_page_size")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.inquiry_page_size),
        }
    }

    /// Override the base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the admin token.
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = token.into();
        self
    }
}

#[cfg(target_arch = "wasm32")]
fn read_var(name: &str) -> Option<String> {
    spin_sdk::variables::get(name).ok().filter(|v| !v.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_var(name: &str) -> Option<String> {
    let env_name = format!("NRNHUB_{}", name.to_ascii_uppercase());
    std::env::var(env_name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = SiteConfig::default().with_base_url("https://nrnhub.com/");
        assert_eq!(config.base_url, "https://nrnhub.com");
    }

    #[test]
    fn test_default_admin_token_empty() {
        let config = SiteConfig::default();
        assert!(config.admin_token.is_empty());
        assert_eq!(config.inquiry_page_size, DEFAULT_INQUIRY_PAGE_SIZE);
    }
}
