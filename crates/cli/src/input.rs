//! File loaders for metric sets, dated points and configuration.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use analytics::{AnalyticsConfig, DatedValue, EntityRecord, MetricSet, RawMetrics, Series};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use tracing::{debug, info};

use crate::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

fn format_of(path: &Path) -> Format {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext == "csv" {
        Format::Csv
    } else {
        Format::Json
    }
}

fn open(path: &Path) -> CliResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| format!("Failed to open {:?}: {}", path, e))?;
    Ok(BufReader::new(file))
}

/// Load a metric set: a JSON object of arrays, or a CSV with one column per metric.
///
/// `null` and empty cells are absent samples.
pub fn load_metrics(path: &Path) -> CliResult<MetricSet> {
    let set = match format_of(path) {
        Format::Json => serde_json::from_reader(open(path)?)
            .map_err(|e| format!("Failed to parse JSON: {}", e))?,
        Format::Csv => load_csv_metrics(path)?,
    };
    info!(metrics = set.len(), "loaded metric set from {:?}", path);
    Ok(set)
}

fn load_csv_metrics(path: &Path) -> CliResult<MetricSet> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len()];
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        for (col, cell) in record.iter().enumerate().take(headers.len()) {
            let cell = cell.trim();
            let value = if cell.is_empty() {
                None
            } else {
                Some(cell.parse::<f64>().map_err(|_| {
                    format!("Row {}, column '{}': '{}' is not a number", row + 1, &headers[col], cell)
                })?)
            };
            columns[col].push(value);
        }
    }

    let raw: RawMetrics = headers
        .iter()
        .map(|h| h.trim().to_string())
        .zip(columns)
        .collect();
    MetricSet::try_from(raw).map_err(|e| e.to_string())
}

/// Load one series, by metric name or the first metric as written in the file.
pub fn load_series(path: &Path, column: Option<&str>) -> CliResult<Series> {
    let set = load_metrics(path)?;
    let name = match column {
        Some(name) => name.to_string(),
        None => first_metric_name(path)?.ok_or_else(|| "Input contains no metrics".to_string())?,
    };
    let data = set
        .get(&name)
        .ok_or_else(|| format!("Column '{}' not found", name))?;
    debug!(metric = %name, len = data.len(), "selected series");
    Ok(data.to_vec())
}

/// Metric names in the order the file lists them.
struct KeyOrder(Vec<String>);

impl<'de> Deserialize<'de> for KeyOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = KeyOrder;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of metric arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<KeyOrder, A::Error> {
                let mut keys = Vec::new();
                while let Some((key, IgnoredAny)) = map.next_entry::<String, IgnoredAny>()? {
                    keys.push(key);
                }
                Ok(KeyOrder(keys))
            }
        }

        deserializer.deserialize_map(KeyVisitor)
    }
}

fn first_metric_name(path: &Path) -> CliResult<Option<String>> {
    match format_of(path) {
        Format::Json => {
            let KeyOrder(keys) = serde_json::from_reader(open(path)?)
                .map_err(|e| format!("Failed to parse JSON: {}", e))?;
            Ok(keys.into_iter().next())
        }
        Format::Csv => {
            let mut reader = csv::Reader::from_reader(open(path)?);
            let headers = reader
                .headers()
                .map_err(|e| format!("Failed to read headers: {}", e))?;
            Ok(headers.iter().next().map(|h| h.trim().to_string()))
        }
    }
}

/// Load dated observations: a JSON array of `{date, value}`, or a CSV with
/// `date` and `value` columns.
pub fn load_points(path: &Path) -> CliResult<Vec<DatedValue>> {
    let points: Vec<DatedValue> = match format_of(path) {
        Format::Json => serde_json::from_reader(open(path)?)
            .map_err(|e| format!("Failed to parse JSON: {}", e))?,
        Format::Csv => {
            let mut reader = csv::Reader::from_reader(open(path)?);
            reader
                .deserialize()
                .collect::<Result<Vec<DatedValue>, csv::Error>>()
                .map_err(|e| format!("Failed to read record: {}", e))?
        }
    };
    info!(points = points.len(), "loaded dated points from {:?}", path);
    Ok(points)
}

/// Load a JSON array of directory entities.
pub fn load_entities(path: &Path) -> CliResult<Vec<EntityRecord>> {
    let entities: Vec<EntityRecord> = serde_json::from_reader(open(path)?)
        .map_err(|e| format!("Failed to parse entities: {}", e))?;
    info!(entities = entities.len(), "loaded entities from {:?}", path);
    Ok(entities)
}

/// Load configuration from JSON, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> CliResult<AnalyticsConfig> {
    match path {
        Some(path) => serde_json::from_reader(open(path)?)
            .map_err(|e| format!("Failed to parse config: {}", e)),
        None => Ok(AnalyticsConfig::default()),
    }
}
