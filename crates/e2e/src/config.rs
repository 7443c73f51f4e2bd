//! Harness configuration
//!
//! All settings have working defaults for a locally running Todo application
//! and can be overridden through `TODO_*` environment variables.

use std::time::Duration;

use crate::pages::locator::DEFAULT_TIMEOUT_MS;

/// Configuration shared by both test suites.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Base address of the Todo application API.
    pub api_base_url: String,

    /// Base address of the rendered UI.
    pub ui_base_url: String,

    /// Run the browser headless.
    pub headless: bool,

    /// Viewport dimensions.
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Bound for every UI visibility wait, in milliseconds.
    pub wait_timeout_ms: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3002".to_string(),
            ui_base_url: "http://localhost:3000".to_string(),
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            wait_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl HarnessConfig {
    /// Build a configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env_or("TODO_API_URL", &defaults.api_base_url),
            ui_base_url: env_or("TODO_UI_URL", &defaults.ui_base_url),
            headless: std::env::var("TODO_UI_HEADLESS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.headless),
            viewport_width: defaults.viewport_width,
            viewport_height: defaults.viewport_height,
            wait_timeout_ms: std::env::var("TODO_UI_WAIT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.wait_timeout_ms),
        }
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim(), "0" | "false" | "no")
}
