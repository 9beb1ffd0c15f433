//! Common utilities shared by browser drivers
//!
//! URL pattern matching and polling used while waiting on the page.

use log::debug;
use regex::Regex;
use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::SmokeError;

// ============================================================================
// URL Patterns
// ============================================================================

/// Pattern a page URL is matched against
///
/// `/.../` is treated as a regular expression searched anywhere in the URL,
/// anything else as a glob where `**` spans path separators and `?` is a
/// literal character, as in Playwright URL globs.
#[derive(Debug, Clone)]
pub enum UrlPattern {
    Glob { pattern: glob::Pattern, source: String },
    Regex(Regex),
}

impl UrlPattern {
    pub fn parse(pattern: &str) -> Result<Self, SmokeError> {
        let invalid = |reason: String| SmokeError::InvalidUrlPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if pattern.len() >= 2 && pattern.starts_with('/') && pattern.ends_with('/') {
            let body = &pattern[1..pattern.len() - 1];
            let re = Regex::new(body).map_err(|e| invalid(e.to_string()))?;
            return Ok(UrlPattern::Regex(re));
        }

        let escaped = pattern.replace('?', "[?]");
        let glob = glob::Pattern::new(&escaped).map_err(|e| invalid(e.msg.to_string()))?;
        Ok(UrlPattern::Glob {
            pattern: glob,
            source: pattern.to_string(),
        })
    }

    pub fn matches(&self, url: &str) -> bool {
        match self {
            UrlPattern::Glob { pattern, .. } => pattern.matches(url),
            UrlPattern::Regex(re) => re.is_match(url),
        }
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        match self {
            UrlPattern::Glob { source, .. } => source,
            UrlPattern::Regex(re) => re.as_str(),
        }
    }
}

// ============================================================================
// Polling Utilities
// ============================================================================

/// Configuration for polling operations
#[derive(Clone)]
pub struct PollConfig {
    pub timeout_ms: u64,
    pub initial_interval_ms: u64,
    pub max_interval_ms: u64,
    pub use_exponential_backoff: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10000,
            initial_interval_ms: 100,
            max_interval_ms: 500,
            use_exponential_backoff: true,
        }
    }
}

impl PollConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout_ms: timeout.as_millis() as u64,
            ..Self::default()
        }
    }
}

/// Generic polling function with optional exponential backoff
///
/// Calls `check_fn` repeatedly until it returns `true` or timeout is reached.
/// The check always runs at least once.
/// Returns `true` if condition was met, `false` if timed out.
pub async fn wait_until<F, Fut>(check_fn: F, config: PollConfig) -> bool
where
    F: Fn() -> Fut,
    Fut: Future<Output = bool>,
{
    let start = Instant::now();
    let timeout = Duration::from_millis(config.timeout_ms);
    let mut interval = config.initial_interval_ms.max(1);

    loop {
        if check_fn().await {
            return true;
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            return false;
        }

        let remaining = timeout - elapsed;
        tokio::time::sleep(Duration::from_millis(interval).min(remaining)).await;

        if config.use_exponential_backoff {
            interval = (interval * 3 / 2).min(config.max_interval_ms.max(1));
        }
    }
}

/// Poll `read_url` until it yields a URL matching `pattern`
///
/// A failed read (the execution context is torn down mid-redirect, for
/// example) counts as "not there yet". Only the timeout ends the wait.
pub async fn wait_for_url_match<F, Fut>(
    read_url: F,
    pattern: &UrlPattern,
    timeout: Duration,
) -> Result<String, SmokeError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = anyhow::Result<String>>,
{
    let last_url: Mutex<Option<String>> = Mutex::new(None);
    let read_url = &read_url;
    let last = &last_url;

    let matched = wait_until(
        move || async move {
            match read_url().await {
                Ok(url) => {
                    let hit = pattern.matches(&url);
                    if let Ok(mut guard) = last.lock() {
                        *guard = Some(url);
                    }
                    hit
                }
                Err(e) => {
                    debug!("page URL not readable yet: {:#}", e);
                    false
                }
            }
        },
        PollConfig::with_timeout(timeout),
    )
    .await;

    let last_url = last_url.into_inner().ok().flatten();
    match (matched, last_url) {
        (true, Some(url)) => Ok(url),
        (_, last_url) => Err(SmokeError::NavigationTimeout {
            pattern: pattern.as_str().to_string(),
            timeout_ms: timeout.as_millis() as u64,
            last_url: last_url.unwrap_or_else(|| "<unreadable>".to_string()),
        }),
    }
}
