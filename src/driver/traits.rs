use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use crate::driver::common::UrlPattern;

/// Browser page interface the dashboard check runs against
///
/// Selectors are CSS selectors. The real implementation drives a Playwright
/// page; tests substitute an in-memory page.
#[async_trait]
pub trait BrowserPage: Send + Sync {
    /// Navigate to an absolute URL and wait for the load event
    async fn goto(&self, url: &str) -> Result<()>;

    /// Replace the value of an input field
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Click the first element matching the selector
    async fn click(&self, selector: &str) -> Result<()>;

    /// Wait until the page URL matches `pattern`
    ///
    /// Returns the matching URL. Fails with
    /// [`SmokeError::NavigationTimeout`](crate::error::SmokeError) once
    /// `timeout` elapses without a match.
    async fn wait_for_url(&self, pattern: &UrlPattern, timeout: Duration) -> Result<String>;

    /// Whether an element matching the selector exists and is visible.
    /// A missing element is not an error.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Save a PNG screenshot, creating parent directories as needed
    async fn take_screenshot(&self, path: &Path, full_page: bool) -> Result<()>;

    /// Current page URL
    async fn current_url(&self) -> Result<String>;

    /// Close the browser. Safe to call more than once.
    async fn close(&self) -> Result<()>;
}
