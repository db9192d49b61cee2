use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::Summary;
use crate::packages::PackageOutcome;

/// How processed packages are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One message line per workout
    #[default]
    Text,
    /// JSON array, one entry per package
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// JSON entry for one package
#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    tag: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn render(outcomes: &[PackageOutcome], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcomes)),
        OutputFormat::Json => render_json(outcomes),
    }
}

/// Summary messages, with a `Skipped package` line in place of each failure
pub fn render_text(outcomes: &[PackageOutcome]) -> String {
    outcomes
        .iter()
        .enumerate()
        .map(|(index, outcome)| match &outcome.result {
            Ok(summary) => summary.message(),
            Err(err) => format!(
                "Skipped package #{} ({}): {}",
                index + 1,
                outcome.package.tag,
                err
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(outcomes: &[PackageOutcome]) -> serde_json::Result<String> {
    let entries: Vec<ReportEntry<'_>> = outcomes
        .iter()
        .map(|outcome| ReportEntry {
            tag: &outcome.package.tag,
            summary: outcome.result.as_ref().ok(),
            error: outcome.result.as_ref().err().map(ToString::to_string),
        })
        .collect();

    serde_json::to_string_pretty(&entries)
}
