use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

use dashboard_smoke::report::{self, RunReport};
use dashboard_smoke::{run_dashboard_check, SmokeConfig};

#[derive(Parser)]
#[command(name = "dashboard-smoke")]
#[command(version = "0.1.0")]
#[command(about = "Log in as an artist and check the dashboard renders", long_about = None)]
struct Cli {
    /// Base URL of the application
    #[arg(long)]
    base_url: Option<String>,

    /// Artist account email
    #[arg(long)]
    email: Option<String>,

    /// Artist account password
    #[arg(long)]
    password: Option<String>,

    /// Where to save the dashboard screenshot
    #[arg(short, long)]
    screenshot: Option<PathBuf>,

    /// Run the browser without a window
    #[arg(long, default_value = "false")]
    headless: bool,

    /// How long to keep the browser open after the screenshot (ms)
    #[arg(long)]
    observe_ms: Option<u64>,

    /// How long to wait for the redirect to the dashboard (ms)
    #[arg(long)]
    nav_timeout_ms: Option<u64>,

    /// Write a JSON summary of the run to this file
    #[arg(short, long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> SmokeConfig {
        let mut config = SmokeConfig::default();

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(email) = self.email {
            config.credentials.email = email;
        }
        if let Some(password) = self.password {
            config.credentials.password = password;
        }
        if let Some(screenshot) = self.screenshot {
            config.screenshot_path = screenshot;
        }
        if self.headless {
            config.headless = true;
        }
        if let Some(ms) = self.observe_ms {
            config.timings.observe = Duration::from_millis(ms);
        }
        if let Some(ms) = self.nav_timeout_ms {
            config.timings.navigation_timeout = Duration::from_millis(ms);
        }
        config.report_path = self.report;

        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    let started_at = Utc::now();

    println!(
        "{} Checking artist dashboard at: {}",
        "▶".green().bold(),
        config.base_url.cyan()
    );
    if config.headless {
        println!("  Headless: {}", "Enabled".yellow());
    }

    let outcome = run_dashboard_check(&config).await?;

    if let Some(ref path) = config.report_path {
        let run_report = RunReport::new(&config.login_url(), started_at, &outcome);
        report::json::generate(&run_report, path)?;
        report::console::report_saved(path);
    }

    // Pass or fail, the verdict is only printed.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_keeps_fixed_run() {
        let config = Cli::try_parse_from(["dashboard-smoke"]).unwrap().into_config();
        let defaults = SmokeConfig::default();

        assert_eq!(config.login_url(), "http://localhost/auth/login");
        assert_eq!(config.dashboard_pattern, "**/artist/dashboard");
        assert_eq!(config.credentials.email, "test.artist@example.com");
        assert_eq!(config.credentials.password, "Password123");
        assert_eq!(config.screenshot_path, PathBuf::from("dashboard-test.png"));
        assert_eq!(config.headless, defaults.headless);
        assert_eq!(config.timings.observe, Duration::from_secs(5));
        assert_eq!(config.timings.navigation_timeout, Duration::from_secs(10));
        assert_eq!(config.timings.settle, Duration::from_secs(2));
        assert_eq!(config.timings.data_load, Duration::from_secs(3));
        assert!(config.report_path.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Cli::try_parse_from([
            "dashboard-smoke",
            "--base-url",
            "http://127.0.0.1:4200",
            "--email",
            "other@example.com",
            "--password",
            "Secret456",
            "--screenshot",
            "out/shot.png",
            "--headless",
            "--observe-ms",
            "250",
            "--nav-timeout-ms",
            "3000",
            "--report",
            "out/run.json",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.login_url(), "http://127.0.0.1:4200/auth/login");
        assert_eq!(config.credentials.email, "other@example.com");
        assert_eq!(config.credentials.password, "Secret456");
        assert_eq!(config.screenshot_path, PathBuf::from("out/shot.png"));
        assert!(config.headless);
        assert_eq!(config.timings.observe, Duration::from_millis(250));
        assert_eq!(config.timings.navigation_timeout, Duration::from_millis(3000));
        assert_eq!(config.timings.data_load, Duration::from_secs(3));
        assert_eq!(config.report_path, Some(PathBuf::from("out/run.json")));
    }

    #[test]
    fn test_short_flags() {
        let config = Cli::try_parse_from(["dashboard-smoke", "-s", "a.png", "-r", "b.json"])
            .unwrap()
            .into_config();

        assert_eq!(config.screenshot_path, PathBuf::from("a.png"));
        assert_eq!(config.report_path, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["dashboard-smoke", "--observe-ms", "soon"]).is_err());
    }
}
