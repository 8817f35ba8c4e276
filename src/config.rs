//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a static WASM bundle, so there is no runtime config file.
//! The backend address is baked in at build time from `TWEET_API_URL` and
//! falls back to the local development server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Backend address used when `TWEET_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// `localStorage` key holding the username entered at login.
pub const USERNAME_STORAGE_KEY: &str = "username";

/// Settings shared by every screen through the application context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address every REST path is joined onto.
    pub api_base_url: &'static str,
    /// How long a notification stays visible before dismissing itself.
    pub toast_duration: Duration,
    /// Pause between a successful registration and the switch to login.
    pub register_redirect_delay: Duration,
}

impl ClientConfig {
    /// Build the configuration from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("TWEET_API_URL"))
    }

    fn with_base_url(base_url: Option<&'static str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self { api_base_url, ..Self::default() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL,
            toast_duration: Duration::from_millis(3000),
            register_redirect_delay: Duration::from_millis(1500),
        }
    }
}
