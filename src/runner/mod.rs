pub mod state;

use anyhow::Result;
use log::{debug, warn};

use crate::driver::common::UrlPattern;
use crate::driver::traits::BrowserPage;
use crate::driver::web::{WebDriver, WebDriverConfig};
use crate::report::console;
use crate::utils::config::SmokeConfig;
use state::{DashboardCheck, RunOutcome, Verdict, VisibilityFlags};

/// Launch a browser and check the artist dashboard
pub async fn run_dashboard_check(config: &SmokeConfig) -> Result<RunOutcome> {
    // Validate before a browser window appears.
    let pattern = UrlPattern::parse(&config.dashboard_pattern)?;

    let driver = WebDriver::new(WebDriverConfig::from(config)).await?;
    check_dashboard(&driver, config, &pattern).await
}

/// Log in, sample the dashboard, screenshot it and print the verdict
///
/// The page is closed exactly once before returning, whichever way the run
/// ends. Any failure while waiting for the redirect after login is reported
/// as [`RunOutcome::NavigationFailed`]; other failures are returned as errors.
pub async fn check_dashboard(
    page: &dyn BrowserPage,
    config: &SmokeConfig,
    pattern: &UrlPattern,
) -> Result<RunOutcome> {
    let result = drive(page, config, pattern).await;

    let closed = page.close().await;
    let outcome = result?;
    if let Err(e) = closed {
        warn!("Browser did not close cleanly: {:#}", e);
    }

    if let RunOutcome::Completed(ref check) = outcome {
        console::verdict(check.verdict);
    }
    Ok(outcome)
}

async fn drive(
    page: &dyn BrowserPage,
    config: &SmokeConfig,
    pattern: &UrlPattern,
) -> Result<RunOutcome> {
    let timings = &config.timings;
    let selectors = &config.selectors;

    console::step("Navigating to login page...");
    page.goto(&config.login_url()).await?;
    match page.current_url().await {
        Ok(url) => debug!("login page loaded at {}", url),
        Err(e) => debug!("login page URL not readable: {:#}", e),
    }
    tokio::time::sleep(timings.settle).await;

    console::step("Logging in as artist...");
    page.fill(&selectors.email_input, &config.credentials.email)
        .await?;
    page.fill(&selectors.password_input, &config.credentials.password)
        .await?;
    page.click(&selectors.submit_button).await?;

    let dashboard_url = match page.wait_for_url(pattern, timings.navigation_timeout).await {
        Ok(url) => url,
        Err(e) => {
            let error = format!("{:#}", e);
            console::navigation_failed(&error);
            return Ok(RunOutcome::NavigationFailed { error });
        }
    };
    console::navigated(&dashboard_url);

    println!();
    console::step("Waiting for dashboard to load...");
    tokio::time::sleep(timings.data_load).await;

    let flags = sample_flags(page, config).await?;
    let verdict = Verdict::from_flags(&flags);
    debug!("flags {:?} -> {:?}", flags, verdict);

    page.take_screenshot(&config.screenshot_path, config.full_page_screenshot)
        .await?;
    console::screenshot_saved(&config.screenshot_path);

    console::observing(timings.observe);
    tokio::time::sleep(timings.observe).await;

    Ok(RunOutcome::Completed(DashboardCheck {
        dashboard_url,
        flags,
        verdict,
        screenshot_path: config.screenshot_path.clone(),
    }))
}

async fn sample_flags(page: &dyn BrowserPage, config: &SmokeConfig) -> Result<VisibilityFlags> {
    let selectors = &config.selectors;

    let loading = page.is_visible(&selectors.loading).await?;
    console::flag("Loading spinner visible", loading);

    let content = page.is_visible(&selectors.content).await?;
    console::flag("Dashboard content visible", content);

    let empty_state = page.is_visible(&selectors.empty_state).await?;
    console::flag("Empty state visible", empty_state);

    let stats = page.is_visible(&selectors.stats).await?;
    console::flag("Stats grid visible", stats);

    Ok(VisibilityFlags {
        loading,
        content,
        empty_state,
        stats,
    })
}
