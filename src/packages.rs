//! Sensor packages and the sources they come from
//!
//! A package is the raw form a sensor feed produces: a workout tag and an
//! ordered list of numbers. Packages can come from the built-in demo set,
//! from the config file, or from a CSV or JSON file.

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, info_span};

use crate::dispatch::read_package;
use crate::error::{DispatchError, InputError};
use crate::models::Summary;

/// One tag plus its ordered readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub tag: String,
    pub readings: Vec<f64>,
}

impl Package {
    pub fn new(tag: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            tag: tag.into(),
            readings,
        }
    }
}

/// Result of processing one package
#[derive(Debug, Clone, PartialEq)]
pub struct PackageOutcome {
    pub package: Package,
    pub result: Result<Summary, DispatchError>,
}

impl PackageOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// The three sample packages: a pool swim, a run and a race walk
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Dispatch and summarize every package independently
pub fn process_packages(packages: &[Package]) -> Vec<PackageOutcome> {
    let span = info_span!("process_packages", count = packages.len());
    let _enter = span.enter();

    let outcomes: Vec<PackageOutcome> = packages
        .iter()
        .map(|package| PackageOutcome {
            package: package.clone(),
            result: read_package(&package.tag, &package.readings).map(|training| training.summarize()),
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(
        processed = outcomes.len(),
        failed,
        "Packages processed"
    );

    outcomes
}

/// Load packages from a `.csv` or `.json` file
pub fn load_packages(path: &Path) -> Result<Vec<Package>, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    let parse: fn(&str) -> Result<Vec<Package>, InputError> = match extension.as_deref() {
        Some("csv") => parse_csv,
        Some("json") => parse_json,
        _ => {
            return Err(InputError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let packages = parse(&content)?;
    info!(path = %path.display(), count = packages.len(), "Loaded packages");
    Ok(packages)
}

/// Headerless rows: tag first, readings after. Rows may differ in length.
///
/// A blank reading before the last non-blank one is a parse error, so a
/// missing value never shifts later readings into its slot.
pub fn parse_csv(content: &str) -> Result<Vec<Package>, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut packages = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(row, e.to_string()))?;

        let mut fields = record.iter();
        let tag = match fields.next() {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => return Err(csv_error(row, "missing workout tag".to_string())),
        };

        // Trailing commas are tolerated; a blank field anywhere else is a missing reading.
        let mut raw: Vec<&str> = fields.collect();
        while raw.last().is_some_and(|field| field.is_empty()) {
            raw.pop();
        }

        let readings = raw
            .iter()
            .enumerate()
            .map(|(position, field)| {
                if field.is_empty() {
                    return Err(csv_error(
                        row,
                        format!("reading {} is blank", position + 1),
                    ));
                }
                field
                    .parse::<f64>()
                    .map_err(|_| csv_error(row, format!("'{}' is not a number", field)))
            })
            .collect::<Result<Vec<f64>, InputError>>()?;

        packages.push(Package { tag, readings });
    }

    Ok(packages)
}

/// JSON array of `{"tag": ..., "readings": [...]}` objects
pub fn parse_json(content: &str) -> Result<Vec<Package>, InputError> {
    serde_json::from_str(content).map_err(|e| InputError::Parse {
        format: "json".to_string(),
        reason: e.to_string(),
    })
}

fn csv_error(row: usize, reason: String) -> InputError {
    InputError::Parse {
        format: "csv".to_string(),
        reason: format!("row {}: {}", row + 1, reason),
    }
}
