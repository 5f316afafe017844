//! Class-metrics report loading.
//!
//! A report is a JSON object keyed by fully-qualified class name. Each value
//! holds the metrics computed for that class:
//!
//! ```json
//! {
//!   "Modules\\Common\\Mailer": { "ccn": 7, "mi": 71.3, "filename": "Modules/Common/Mailer.php" }
//! }
//! ```
//!
//! Records are kept as raw JSON until a caller asks for them, so classes
//! outside the namespace of interest are never interpreted.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::core::{Error, Result};

/// Default cyclomatic complexity for classes whose record omits `ccn`.
pub const DEFAULT_CCN: i64 = 0;

/// Default maintainability index for classes whose record omits `mi`.
pub const DEFAULT_MI: i64 = 100;

/// Metrics recorded for a single class.
///
/// `ccn` and `mi` keep the number exactly as the report wrote it, so an
/// integer prints as `90` and a float as `90.0`. Use [`ClassMetrics::ccn_value`]
/// and [`ClassMetrics::mi_value`] for comparisons. An explicit `null` is not
/// a missing field and fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Cyclomatic complexity.
    #[serde(default = "default_ccn")]
    pub ccn: Number,
    /// Maintainability index.
    #[serde(default = "default_mi")]
    pub mi: Number,
    /// Source file the class was found in, when the report records it.
    #[serde(default)]
    pub filename: Option<String>,
}

impl Default for ClassMetrics {
    fn default() -> Self {
        Self {
            ccn: default_ccn(),
            mi: default_mi(),
            filename: None,
        }
    }
}

impl ClassMetrics {
    /// Interpret a raw report record for `class`.
    pub fn from_value(class: &str, value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::malformed(class, "metrics record is not an object"));
        }
        Self::deserialize(value).map_err(|e| Error::malformed(class, e.to_string()))
    }

    pub fn ccn_value(&self) -> f64 {
        number_value(&self.ccn)
    }

    pub fn mi_value(&self) -> f64 {
        number_value(&self.mi)
    }
}

/// Numeric value of a report number for comparisons.
pub fn number_value(n: &Number) -> f64 {
    n.as_f64().unwrap_or_default()
}

fn default_ccn() -> Number {
    Number::from(DEFAULT_CCN)
}

fn default_mi() -> Number {
    Number::from(DEFAULT_MI)
}

/// Class name to metrics record, in document order.
///
/// A class name that appears twice keeps its first position and its last
/// record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReport {
    entries: Vec<(String, Value)>,
}

impl MetricsReport {
    /// Parse a report from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Iterate over `(class name, raw record)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for MetricsReport {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = MetricsReport;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by class name")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, Value)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                let mut positions: HashMap<String, usize> = HashMap::with_capacity(entries.capacity());
                while let Some((name, value)) = map.next_entry::<String, Value>()? {
                    match positions.get(&name) {
                        Some(&index) => entries[index].1 = value,
                        None => {
                            positions.insert(name.clone(), entries.len());
                            entries.push((name, value));
                        }
                    }
                }
                Ok(MetricsReport { entries })
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}

/// Load the report at `path`.
///
/// The file handle is dropped before returning, on success and on failure.
pub fn load(path: impl AsRef<Path>) -> Result<MetricsReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    let report: MetricsReport = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::parse(path, e.to_string()))?;

    tracing::debug!(path = %path.display(), classes = report.len(), "loaded metrics report");
    Ok(report)
}
