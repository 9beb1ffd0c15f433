//! Human-readable status lines on stdout

use colored::Colorize;
use std::path::Path;
use std::time::Duration;

use crate::runner::state::Verdict;

pub fn step(message: &str) {
    println!("{} {}", "▶".blue(), message);
}

pub fn navigated(url: &str) {
    println!("{} Navigated to: {}", "✓".green(), url.cyan());
}

pub fn navigation_failed(error: &str) {
    println!("{} Navigation failed: {}", "✗".red(), error);
}

pub fn flag(label: &str, visible: bool) {
    let value = if visible {
        "true".green()
    } else {
        "false".yellow()
    };
    println!("  {}: {}", label, value);
}

pub fn screenshot_saved(path: &Path) {
    println!(
        "\n{} Screenshot saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
}

pub fn observing(duration: Duration) {
    println!("\n{} {}", "👀".blue(), observation_message(duration));
}

fn observation_message(duration: Duration) -> String {
    format!(
        "Waiting {} seconds for observation...",
        duration.as_secs_f64()
    )
}

pub fn verdict(verdict: Verdict) {
    println!("\n{}", "=== TEST RESULT ===".bold());
    let line = verdict.summary();
    if verdict.is_pass() {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }
}

pub fn report_saved(path: &Path) {
    println!("{} JSON report saved to: {}", "📊".blue(), path.display());
}
