//! Plain-text output for candidate analyses.

use std::io::Write;

use crate::analyzers::candidates::{Analysis, Candidate};
use crate::core::Result;

/// Write the line announcing which namespace is being analyzed.
pub fn write_header<W: Write>(namespace: &str, writer: &mut W) -> Result<()> {
    writeln!(writer, "Analyzing {namespace} classes...")?;
    Ok(())
}

/// Write the candidate count followed by one line per reported candidate.
pub fn write_analysis<W: Write>(analysis: &Analysis, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "Found {} candidates.",
        analysis.summary.candidates_found
    )?;
    for candidate in &analysis.candidates {
        writeln!(writer, "{}", format_candidate(candidate))?;
    }
    Ok(())
}

/// Format a single candidate line.
pub fn format_candidate(candidate: &Candidate) -> String {
    format!(
        "Class: {}, CCN: {}, MI: {}",
        candidate.name, candidate.ccn, candidate.mi
    )
}
