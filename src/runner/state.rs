use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Visibility of the dashboard regions, sampled once after the data-load wait
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityFlags {
    pub loading: bool,
    pub content: bool,
    pub empty_state: bool,
    /// Sampled and reported but not part of the verdict
    pub stats: bool,
}

/// Outcome of the dashboard check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    StuckLoading,
    EmptyState,
    ContentDisplayed,
    NoContent,
}

impl Verdict {
    /// Loading wins over everything, then content with an empty state, then content alone.
    pub fn from_flags(flags: &VisibilityFlags) -> Self {
        if flags.loading {
            Verdict::StuckLoading
        } else if flags.content && flags.empty_state {
            Verdict::EmptyState
        } else if flags.content {
            Verdict::ContentDisplayed
        } else {
            Verdict::NoContent
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::EmptyState | Verdict::ContentDisplayed)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::StuckLoading => "Dashboard stuck in loading state",
            Verdict::EmptyState => "Empty state displayed correctly",
            Verdict::ContentDisplayed => "Dashboard content displayed",
            Verdict::NoContent => "No content displayed",
        }
    }

    /// Full verdict line, e.g. `✓ PASS: Dashboard content displayed`
    pub fn summary(&self) -> String {
        if self.is_pass() {
            format!("✓ PASS: {}", self.message())
        } else {
            format!("✗ FAIL: {}", self.message())
        }
    }
}

/// Everything observed on a dashboard that was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCheck {
    pub dashboard_url: String,
    pub flags: VisibilityFlags,
    pub verdict: Verdict,
    pub screenshot_path: PathBuf,
}

/// Result of a whole run
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The redirect after login never happened; nothing on the dashboard was checked
    NavigationFailed { error: String },
    Completed(DashboardCheck),
}

impl RunOutcome {
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            RunOutcome::NavigationFailed { .. } => None,
            RunOutcome::Completed(check) => Some(check.verdict),
        }
    }
}
