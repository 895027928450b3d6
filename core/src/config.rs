//! Where the menu API lives.

use crate::client::MenuClient;

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "MENU_API_URL";

/// Base URL used when `MENU_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let base_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    pub fn client(&self) -> MenuClient {
        MenuClient::new(&self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}
