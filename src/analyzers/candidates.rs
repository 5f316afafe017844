//! Refactoring candidate selection.
//!
//! A class becomes a candidate when its name falls inside the configured
//! namespace and at least one of its metrics crosses a threshold:
//!
//! - **CCN** (cyclomatic complexity) strictly greater than `thresholds.ccn`
//! - **MI** (maintainability index) strictly lower than `thresholds.mi`
//!
//! Candidates are ranked by CCN, highest first. Ties keep report order.
//!
//! # Example
//!
//! ```
//! use sift::analyzers::candidates::Analyzer;
//! use sift::config::Config;
//! use sift::report::MetricsReport;
//!
//! let report = MetricsReport::from_json(
//!     r#"{"Modules\\Common\\A": {"ccn": 10, "mi": 90}, "Other\\C": {"ccn": 20}}"#,
//! ).unwrap();
//! let analysis = Analyzer::from_config(&Config::default()).analyze(&report).unwrap();
//! assert_eq!(analysis.summary.candidates_found, 1);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::config::{Config, Thresholds};
use crate::core::Result;
use crate::report::{number_value, ClassMetrics, MetricsReport};

/// Candidate selector and ranker.
#[derive(Debug, Clone)]
pub struct Analyzer {
    namespace: String,
    thresholds: Thresholds,
    limit: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Analyzer {
    /// Create an analyzer for `namespace` with explicit thresholds.
    pub fn new(namespace: impl Into<String>, thresholds: Thresholds, limit: usize) -> Self {
        Self {
            namespace: namespace.into(),
            thresholds,
            limit,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.namespace.clone(), config.thresholds, config.limit)
    }

    /// Whether a class's metrics cross either threshold.
    pub fn qualifies(&self, metrics: &ClassMetrics) -> bool {
        metrics.ccn_value() > f64::from(self.thresholds.ccn)
            || metrics.mi_value() < self.thresholds.mi
    }

    /// Collect candidates in report order.
    ///
    /// Only records of classes inside the namespace are interpreted; a
    /// malformed record there fails the whole selection.
    pub fn select(&self, report: &MetricsReport) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for (name, value) in report.iter() {
            if !name.contains(self.namespace.as_str()) {
                continue;
            }
            let metrics = ClassMetrics::from_value(name, value)?;
            if self.qualifies(&metrics) {
                candidates.push(Candidate::new(name, metrics));
            }
        }
        tracing::debug!(
            namespace = %self.namespace,
            selected = candidates.len(),
            "selected candidates"
        );
        Ok(candidates)
    }

    /// Select, rank and summarize. `candidates` is truncated to the limit;
    /// `summary.candidates_found` counts every qualifying class.
    pub fn analyze(&self, report: &MetricsReport) -> Result<Analysis> {
        let mut candidates = rank(self.select(report)?);
        let summary = AnalysisSummary::from_candidates(&candidates, self.limit);
        candidates.truncate(self.limit);

        Ok(Analysis {
            namespace: self.namespace.clone(),
            total_classes: report.len(),
            candidates,
            summary,
        })
    }
}

/// Sort candidates by CCN, highest first. The sort is stable.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.ccn_value().total_cmp(&a.ccn_value()));
    candidates
}

/// A class selected for review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub ccn: Number,
    pub mi: Number,
    pub file: Option<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, metrics: ClassMetrics) -> Self {
        Self {
            name: name.into(),
            ccn: metrics.ccn,
            mi: metrics.mi,
            file: metrics.filename,
        }
    }

    pub fn ccn_value(&self) -> f64 {
        number_value(&self.ccn)
    }

    pub fn mi_value(&self) -> f64 {
        number_value(&self.mi)
    }
}

/// Candidate analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub namespace: String,
    pub total_classes: usize,
    pub candidates: Vec<Candidate>,
    pub summary: AnalysisSummary,
}

/// Summary statistics over every qualifying class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub candidates_found: usize,
    pub reported: usize,
    pub max_ccn: Option<f64>,
    pub min_mi: Option<f64>,
}

impl AnalysisSummary {
    fn from_candidates(candidates: &[Candidate], limit: usize) -> Self {
        Self {
            candidates_found: candidates.len(),
            reported: candidates.len().min(limit),
            max_ccn: candidates.iter().map(Candidate::ccn_value).reduce(f64::max),
            min_mi: candidates.iter().map(Candidate::mi_value).reduce(f64::min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(json: &str) -> MetricsReport {
        MetricsReport::from_json(json).unwrap()
    }

    fn names(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_reference_example() {
        let report = report(
            r#"{
                "Modules\\Common\\A": {"ccn": 10, "mi": 90},
                "Modules\\Common\\B": {"ccn": 2, "mi": 80},
                "Other\\C": {"ccn": 20, "mi": 10}
            }"#,
        );
        let analysis = Analyzer::default().analyze(&report).unwrap();
        assert_eq!(analysis.summary.candidates_found, 2);
        assert_eq!(
            names(&analysis.candidates),
            vec!["Modules\\Common\\A", "Modules\\Common\\B"]
        );
        assert_eq!(analysis.total_classes, 3);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let analyzer = Analyzer::default();
        let at_ccn = ClassMetrics {
            ccn: Number::from(4),
            ..ClassMetrics::default()
        };
        let at_mi = ClassMetrics {
            mi: Number::from(85),
            ..ClassMetrics::default()
        };
        assert!(!analyzer.qualifies(&at_ccn));
        assert!(!analyzer.qualifies(&at_mi));
        assert!(analyzer.qualifies(&ClassMetrics {
            ccn: Number::from(5),
            ..ClassMetrics::default()
        }));
        assert!(analyzer.qualifies(&ClassMetrics {
            mi: Number::from_f64(84.99).unwrap(),
            ..ClassMetrics::default()
        }));
    }

    #[test]
    fn test_missing_fields_never_qualify_alone() {
        let report = report(
            r#"{
                "Modules\\Common\\Empty": {},
                "Modules\\Common\\OnlyLowMi": {"mi": 40},
                "Modules\\Common\\OnlyHighCcn": {"ccn": 9}
            }"#,
        );
        let selected = Analyzer::default().select(&report).unwrap();
        assert_eq!(
            names(&selected),
            vec!["Modules\\Common\\OnlyLowMi", "Modules\\Common\\OnlyHighCcn"]
        );
    }

    #[test]
    fn test_filename_copied_through() {
        let report = report(
            r#"{
                "Modules\\Common\\A": {"ccn": 6, "filename": "Modules/Common/A.php"},
                "Modules\\Common\\B": {"ccn": 6}
            }"#,
        );
        let selected = Analyzer::default().select(&report).unwrap();
        assert_eq!(selected[0].file.as_deref(), Some("Modules/Common/A.php"));
        assert!(selected[1].file.is_none());
    }

    #[test]
    fn test_namespace_is_substring_match() {
        let report = report(
            r#"{
                "App\\Modules\\Common\\Deep\\X": {"ccn": 5},
                "Modules\\CommonTools\\Y": {"ccn": 5},
                "Modules/Common/Z": {"ccn": 5}
            }"#,
        );
        let selected = Analyzer::default().select(&report).unwrap();
        assert_eq!(
            names(&selected),
            vec!["App\\Modules\\Common\\Deep\\X", "Modules\\CommonTools\\Y"]
        );
    }

    #[test]
    fn test_malformed_entry_outside_namespace_is_ignored() {
        let report = report(r#"{"Other\\C": "garbage", "Modules\\Common\\A": {"ccn": 5}}"#);
        let selected = Analyzer::default().select(&report).unwrap();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_malformed_entry_inside_namespace_fails() {
        let report = report(r#"{"Modules\\Common\\A": {"ccn": "many"}}"#);
        assert!(Analyzer::default().select(&report).is_err());
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let make = |name: &str, ccn: i64| Candidate {
            name: name.to_string(),
            ccn: Number::from(ccn),
            mi: Number::from(50),
            file: None,
        };
        let ranked = rank(vec![
            make("a", 3),
            make("b", 9),
            make("c", 3),
            make("d", 12),
            make("e", 9),
        ]);
        assert_eq!(names(&ranked), vec!["d", "b", "e", "a", "c"]);
    }

    #[test]
    fn test_limit_truncates_but_counts_all() {
        let entries: Vec<String> = (0..15)
            .map(|i| format!(r#""Modules\\Common\\C{i}": {{"ccn": {}}}"#, i + 5))
            .collect();
        let report = report(&format!("{{{}}}", entries.join(",")));
        let analysis = Analyzer::default().analyze(&report).unwrap();
        assert_eq!(analysis.summary.candidates_found, 15);
        assert_eq!(analysis.summary.reported, 10);
        assert_eq!(analysis.candidates.len(), 10);
        assert_eq!(analysis.candidates[0].ccn_value(), 19.0);
        assert_eq!(analysis.summary.max_ccn, Some(19.0));
    }

    #[test]
    fn test_custom_thresholds() {
        let analyzer = Analyzer::new("App", Thresholds { ccn: 10, mi: 50.0 }, 5);
        let report = report(r#"{"App\\A": {"ccn": 8, "mi": 60}, "App\\B": {"ccn": 11}}"#);
        let selected = analyzer.select(&report).unwrap();
        assert_eq!(names(&selected), vec!["App\\B"]);
    }

    #[test]
    fn test_summary_of_empty_selection() {
        let analysis = Analyzer::default().analyze(&MetricsReport::default()).unwrap();
        assert_eq!(analysis.summary.candidates_found, 0);
        assert!(analysis.summary.max_ccn.is_none());
        assert!(analysis.summary.min_mi.is_none());
    }

    #[test]
    fn test_duplicate_class_counts_once_with_last_record() {
        let report = report(
            r#"{"Modules\\Common\\A": {"ccn": 5}, "Modules\\Common\\A": {"ccn": 6}}"#,
        );
        let analysis = Analyzer::default().analyze(&report).unwrap();
        assert_eq!(analysis.summary.candidates_found, 1);
        assert_eq!(analysis.candidates[0].ccn, Number::from(6));
    }

    #[test]
    fn test_float_and_negative_ccn() {
        let report = report(
            r#"{
                "Modules\\Common\\Neg": {"ccn": -1, "mi": 60},
                "Modules\\Common\\Float": {"ccn": 5.0},
                "Modules\\Common\\Int": {"ccn": 7}
            }"#,
        );
        let selected = rank(Analyzer::default().select(&report).unwrap());
        assert_eq!(
            names(&selected),
            vec!["Modules\\Common\\Int", "Modules\\Common\\Float", "Modules\\Common\\Neg"]
        );
    }

    #[test]
    fn test_null_metric_in_namespace_fails() {
        let report = report(r#"{"Modules\\Common\\A": {"ccn": null, "mi": 50}}"#);
        assert!(Analyzer::default().select(&report).is_err());
    }
}
