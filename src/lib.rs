//! Sift - refactoring candidate triage over class-metrics reports.
//!
//! Sift reads a JSON report of per-class cyclomatic complexity (CCN) and
//! maintainability index (MI), keeps the classes of one namespace that are
//! too complex or too hard to maintain, and ranks them by complexity.
//!
//! # Example
//!
//! ```no_run
//! use sift::analyzers::candidates::Analyzer;
//! use sift::config::Config;
//!
//! let config = Config::default();
//! let report = sift::report::load(&config.report).unwrap();
//! let analysis = Analyzer::from_config(&config).analyze(&report).unwrap();
//! println!("Found {} candidates", analysis.summary.candidates_found);
//! ```

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod report;

pub use analyzers::candidates::{Analysis, Analyzer, Candidate};
pub use report::{ClassMetrics, MetricsReport};
