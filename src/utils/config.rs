use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost";
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
pub const DEFAULT_DASHBOARD_PATTERN: &str = "**/artist/dashboard";
pub const DEFAULT_EMAIL: &str = "test.artist@example.com";
pub const DEFAULT_PASSWORD: &str = "Password123";
pub const DEFAULT_SCREENSHOT_PATH: &str = "dashboard-test.png";

/// Login credentials for the artist account
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

/// CSS selectors for the login form and the dashboard regions under check
#[derive(Debug, Clone)]
pub struct DashboardSelectors {
    pub email_input: String,
    pub password_input: String,
    pub submit_button: String,
    pub loading: String,
    pub content: String,
    pub empty_state: String,
    pub stats: String,
}

impl Default for DashboardSelectors {
    fn default() -> Self {
        Self {
            email_input: r#"input[type="email"]"#.to_string(),
            password_input: r#"input[type="password"]"#.to_string(),
            submit_button: r#"button[type="submit"]"#.to_string(),
            loading: ".loading-container".to_string(),
            content: ".dashboard-content".to_string(),
            empty_state: ".empty-state".to_string(),
            stats: ".stats-grid".to_string(),
        }
    }
}

/// Fixed waits used by the run
#[derive(Debug, Clone)]
pub struct Timings {
    /// Pause after the login page loads
    pub settle: Duration,
    /// Upper bound on the redirect to the dashboard
    pub navigation_timeout: Duration,
    /// Pause for the dashboard's API calls to finish
    pub data_load: Duration,
    /// Pause before closing the browser so the page can be watched
    pub observe: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(2000),
            navigation_timeout: Duration::from_millis(10000),
            data_load: Duration::from_millis(3000),
            observe: Duration::from_millis(5000),
        }
    }
}

impl Timings {
    /// No waiting at all; navigation still gets a short poll window
    pub fn immediate() -> Self {
        Self {
            settle: Duration::ZERO,
            navigation_timeout: Duration::from_millis(50),
            data_load: Duration::ZERO,
            observe: Duration::ZERO,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    pub base_url: String,
    pub login_path: String,
    /// Glob (`**/artist/dashboard`) or `/regex/` the post-login URL must match
    pub dashboard_pattern: String,
    pub credentials: Credentials,
    pub selectors: DashboardSelectors,
    pub timings: Timings,
    pub screenshot_path: PathBuf,
    pub full_page_screenshot: bool,
    pub headless: bool,
    /// CDP endpoint of an already running browser (e.g. http://localhost:9222)
    pub cdp_endpoint: Option<String>,
    /// Where to write the JSON run report, if anywhere
    pub report_path: Option<PathBuf>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        let headless = std::env::var("DASHBOARD_SMOKE_HEADLESS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let cdp_endpoint = std::env::var("DASHBOARD_SMOKE_CDP_ENDPOINT").ok();

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            dashboard_pattern: DEFAULT_DASHBOARD_PATTERN.to_string(),
            credentials: Credentials::default(),
            selectors: DashboardSelectors::default(),
            timings: Timings::default(),
            screenshot_path: PathBuf::from(DEFAULT_SCREENSHOT_PATH),
            full_page_screenshot: true,
            headless,
            cdp_endpoint,
            report_path: None,
        }
    }
}

impl SmokeConfig {
    /// Full URL of the login page
    pub fn login_url(&self) -> String {
        if self.login_path.starts_with("http://") || self.login_path.starts_with("https://") {
            return self.login_path.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.login_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_run() {
        let config = SmokeConfig::default();
        assert_eq!(config.login_url(), "http://localhost/auth/login");
        assert_eq!(config.dashboard_pattern, "**/artist/dashboard");
        assert_eq!(config.credentials.email, "test.artist@example.com");
        assert_eq!(config.selectors.loading, ".loading-container");
        assert_eq!(config.selectors.email_input, r#"input[type="email"]"#);
        assert_eq!(config.timings.navigation_timeout, Duration::from_secs(10));
        assert_eq!(config.timings.observe, Duration::from_secs(5));
        assert!(config.full_page_screenshot);
        assert!(config.report_path.is_none());
    }

    #[test]
    fn test_login_url_joining() {
        let mut config = SmokeConfig::default();
        config.base_url = "http://127.0.0.1:4200/".to_string();
        assert_eq!(config.login_url(), "http://127.0.0.1:4200/auth/login");

        config.login_path = "https://example.test/signin".to_string();
        assert_eq!(config.login_url(), "https://example.test/signin");
    }
}
