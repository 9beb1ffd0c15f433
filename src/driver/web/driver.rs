//! Web Driver implementation using Playwright
//!
//! Launches (or attaches to) a Chromium-family browser and exposes the single
//! page the dashboard check drives.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use playwright::api::{Browser, BrowserContext, Page, ScreenshotType, Viewport};
use playwright::Playwright;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::driver::common::{wait_for_url_match, UrlPattern};
use crate::driver::traits::BrowserPage;
use crate::utils::config::SmokeConfig;

const VIEWPORT_WIDTH: i32 = 1280;
const VIEWPORT_HEIGHT: i32 = 720;

/// Web Driver configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebDriverConfig {
    pub headless: bool,
    /// CDP endpoint to connect to existing browser (e.g. http://localhost:9222)
    pub cdp_endpoint: Option<String>,
}

impl From<&SmokeConfig> for WebDriverConfig {
    fn from(config: &SmokeConfig) -> Self {
        Self {
            headless: config.headless,
            cdp_endpoint: config.cdp_endpoint.clone(),
        }
    }
}

/// Web Driver using Playwright
pub struct WebDriver {
    #[allow(dead_code)]
    playwright: Playwright,
    browser: Browser,
    #[allow(dead_code)]
    context: BrowserContext,
    page: Arc<Mutex<Page>>,
    closed: AtomicBool,
}

impl WebDriver {
    /// Start Playwright, open the browser and a fresh page
    pub async fn new(config: WebDriverConfig) -> Result<Self> {
        let playwright = Playwright::initialize()
            .await
            .context("Failed to initialize Playwright")?;

        let chromium = playwright.chromium();
        let browser = if let Some(ref endpoint) = config.cdp_endpoint {
            info!("Connecting to browser over CDP at {}", endpoint);
            match chromium
                .connect_over_cdp_builder(endpoint)
                .connect_over_cdp()
                .await
            {
                Ok(b) => b,
                Err(e) => {
                    warn!("Could not connect to {}: {}, launching instead", endpoint, e);
                    launch_chromium_browser(&chromium, &config).await?
                }
            }
        } else {
            launch_chromium_browser(&chromium, &config).await?
        };

        let context = browser
            .context_builder()
            .build()
            .await
            .context("Failed to create browser context")?;
        let page = context.new_page().await.context("Failed to open page")?;

        page.set_viewport_size(Viewport {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        })
        .await?;

        Ok(Self {
            playwright,
            browser,
            context,
            page: Arc::new(Mutex::new(page)),
            closed: AtomicBool::new(false),
        })
    }

    async fn location(&self) -> Result<String> {
        let page = self.page.lock().await;
        let href: String = page
            .evaluate("() => window.location.href", ())
            .await
            .context("Failed to read page URL")?;
        Ok(href)
    }
}

#[async_trait]
impl BrowserPage for WebDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        debug!("goto {}", url);
        let page = self.page.lock().await;
        page.goto_builder(url)
            .goto()
            .await
            .with_context(|| format!("Failed to navigate to {}", url))?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        debug!("fill {}", selector);
        let page = self.page.lock().await;
        page.fill_builder(selector, value)
            .fill()
            .await
            .with_context(|| format!("Failed to fill '{}'", selector))?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        debug!("click {}", selector);
        let page = self.page.lock().await;
        page.click_builder(selector)
            .click()
            .await
            .with_context(|| format!("Failed to click '{}'", selector))?;
        Ok(())
    }

    async fn wait_for_url(&self, pattern: &UrlPattern, timeout: Duration) -> Result<String> {
        debug!("waiting up to {:?} for URL {}", timeout, pattern.as_str());

        let this = self;
        let url = wait_for_url_match(move || this.location(), pattern, timeout).await?;
        Ok(url)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let page = self.page.lock().await;
        let element = page.query_selector(selector).await?;
        let visible = match element {
            Some(el) => el.is_visible().await?,
            None => false,
        };
        debug!("{} visible: {}", selector, visible);
        Ok(visible)
    }

    async fn take_screenshot(&self, path: &Path, full_page: bool) -> Result<()> {
        let page = self.page.lock().await;
        let path_buf = path.to_path_buf();

        if let Some(parent) = path_buf.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        page.screenshot_builder()
            .path(path_buf)
            .full_page(full_page)
            .r#type(ScreenshotType::Png)
            .screenshot()
            .await
            .with_context(|| format!("Failed to save screenshot to {}", path.display()))?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        self.location().await
    }

    async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        debug!("closing browser");
        self.browser
            .close()
            .await
            .context("Failed to close browser")?;
        Ok(())
    }
}

async fn launch_chromium_browser(
    chromium: &playwright::api::BrowserType,
    config: &WebDriverConfig,
) -> Result<Browser> {
    let mut launcher = chromium.launcher();
    launcher = launcher.headless(config.headless);

    let env_path = std::env::var("PLAYWRIGHT_CHROMIUM_EXECUTABLE_PATH")
        .ok()
        .map(PathBuf::from);
    let system_path = find_system_browser();

    if let Some(ref path) = env_path {
        info!("Using browser from env: {}", path.display());
        launcher = launcher.executable(path);
    } else if let Some(ref path) = system_path {
        info!("Using discovered browser: {}", path.display());
        launcher = launcher.executable(path);
    } else {
        info!("No browser executable found, using Playwright's bundled Chromium");
    }

    let args: Vec<String> = [
        "--no-sandbox",
        "--disable-setuid-sandbox",
        "--disable-dev-shm-usage",
        "--ignore-certificate-errors",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    launcher = launcher.args(&args);

    Ok(launcher
        .launch()
        .await
        .context("Failed to launch Chromium")?)
}

fn find_system_browser() -> Option<PathBuf> {
    let common_paths = [
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        "/usr/bin/google-chrome",
        "/usr/bin/google-chrome-stable",
        "/Applications/Chromium.app/Contents/MacOS/Chromium",
        "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
        "/usr/bin/chromium",
        "/usr/bin/chromium-browser",
        "/snap/bin/chromium",
    ];

    common_paths
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}
