use super::types::RunReport;
use anyhow::{Context, Result};
use std::path::Path;

/// Write the run report as pretty JSON
pub fn generate(report: &RunReport, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    Ok(())
}
