//! Error types for the dashboard smoke check

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Timeout {timeout_ms}ms exceeded waiting for URL matching '{pattern}' (last URL: {last_url})")]
    NavigationTimeout {
        pattern: String,
        timeout_ms: u64,
        last_url: String,
    },

    #[error("Invalid URL pattern '{pattern}': {reason}")]
    InvalidUrlPattern { pattern: String, reason: String },
}
