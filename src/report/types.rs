use crate::runner::state::{RunOutcome, Verdict, VisibilityFlags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Machine-readable summary of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub login_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub navigated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<VisibilityFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_path: Option<PathBuf>,
}

impl RunReport {
    pub fn new(login_url: &str, started_at: DateTime<Utc>, outcome: &RunOutcome) -> Self {
        let mut report = Self {
            login_url: login_url.to_string(),
            started_at,
            finished_at: Utc::now(),
            navigated: false,
            navigation_error: None,
            dashboard_url: None,
            flags: None,
            verdict: None,
            message: None,
            passed: false,
            screenshot_path: None,
        };

        match outcome {
            RunOutcome::NavigationFailed { error } => {
                report.navigation_error = Some(error.clone());
            }
            RunOutcome::Completed(check) => {
                report.navigated = true;
                report.dashboard_url = Some(check.dashboard_url.clone());
                report.flags = Some(check.flags);
                report.verdict = Some(check.verdict);
                report.message = Some(check.verdict.message().to_string());
                report.passed = check.verdict.is_pass();
                report.screenshot_path = Some(check.screenshot_path.clone());
            }
        }

        report
    }
}
