//! Error types for the verification harness

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Seeding failed: {0}")]
    Seed(String),

    #[error("Fixture setup failed: {0}")]
    Fixture(String),

    #[error("Browser launch failed: {0}")]
    BrowserLaunch(String),

    #[error("Timed out after {timeout_ms} ms waiting for {what}")]
    Timeout { what: String, timeout_ms: u64 },

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Unsupported locator operation: {0}")]
    Locator(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
