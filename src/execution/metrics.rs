//! Peak heap extraction from the profiler's text report
//!
//! The report tool prints a summary whose last lines read, for example:
//!
//! ```text
//! peak heap memory consumption: 12.50K
//! peak RSS (including heaptrack overhead): 5.21M
//! total memory leaked: 1.02K
//! ```
//!
//! Only the line three positions before the end of the output is inspected.
//! That offset is a format coupling; if the report layout changes, this
//! module is the only place to update.

use crate::execution::invoker::{OutputCapture, ToolInvoker, ToolRequest};
use crate::io::configuration::{PEAK_HEAP_LINE_FROM_END, PEAK_HEAP_MARKER, UNIT_MULTIPLIER};
use crate::io::error::{HarnessError, Result, metric_parse};
use crate::io::paths::ArtifactPaths;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Convert a reported size to bytes
///
/// `unit` is one of `""` or `"B"` (bytes), `"K"`, `"M"` or `"G"`, each step
/// a factor of 1024.
///
/// # Errors
///
/// Returns a parse error if `value` is not a decimal number or `unit` is unknown
pub fn extract_bytes(value: &str, unit: &str) -> Result<f64> {
    let number: f64 = value
        .parse()
        .map_err(|e| metric_parse(&format!("'{value}' is not a decimal number: {e}"), None))?;
    let multiplier = match unit {
        "" | "B" => 1.0,
        "K" => UNIT_MULTIPLIER,
        "M" => UNIT_MULTIPLIER * UNIT_MULTIPLIER,
        "G" => UNIT_MULTIPLIER * UNIT_MULTIPLIER * UNIT_MULTIPLIER,
        other => {
            return Err(metric_parse(&format!("unknown unit suffix '{other}'"), None));
        }
    };
    Ok(number * multiplier)
}

/// Split `[0-9.]+[BKMG]?` off the start of `text`
fn split_quantity(text: &str) -> (&str, &str) {
    let digits_end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, rest) = text.split_at(digits_end);
    let unit = match rest.chars().next() {
        Some(c @ ('B' | 'K' | 'M' | 'G')) => rest.get(..c.len_utf8()).unwrap_or(""),
        _ => "",
    };
    (number, unit)
}

/// Parse the peak heap consumption, in bytes, out of a full report
///
/// # Errors
///
/// Returns a parse error if:
/// - The report has fewer lines than the expected offset
/// - The line at the offset does not mention peak heap consumption
/// - The value after the marker is not a number with an optional unit
pub fn parse_peak_heap(report: &str) -> Result<f64> {
    let line = report
        .split('\n')
        .rev()
        .nth(PEAK_HEAP_LINE_FROM_END)
        .ok_or_else(|| metric_parse(&"report is shorter than expected", None))?;

    let marker_at = line
        .find(PEAK_HEAP_MARKER)
        .ok_or_else(|| metric_parse(&"peak heap line not found", Some(line)))?;
    let tail = line
        .get(marker_at + PEAK_HEAP_MARKER.len()..)
        .unwrap_or_default();

    let (number, unit) = split_quantity(tail);
    if number.is_empty() {
        return Err(metric_parse(&"no value after peak heap marker", Some(line)));
    }
    match extract_bytes(number, unit) {
        Err(HarnessError::MetricParse { reason, .. }) => Err(metric_parse(&reason, Some(line))),
        other => other,
    }
}

/// Runs the report tool on a recording and parses its peak heap value
pub struct MetricExtractor<I> {
    report_tool: PathBuf,
    invoker: I,
}

impl<I: ToolInvoker> MetricExtractor<I> {
    /// Create an extractor using `report_tool`
    pub fn new(report_tool: impl Into<PathBuf>, invoker: I) -> Self {
        Self {
            report_tool: report_tool.into(),
            invoker,
        }
    }

    /// The request issued for sample `id`
    pub fn request(&self, paths: &ArtifactPaths, id: &str) -> ToolRequest {
        ToolRequest {
            tool: self.report_tool.clone(),
            args: vec![paths.compressed_record(id).into_os_string()],
            capture: OutputCapture::Stdout,
        }
    }

    /// Peak heap bytes of sample `id`
    ///
    /// # Errors
    ///
    /// Returns a parse error if the report does not carry the peak heap line,
    /// which includes the case of a missing recording or report tool
    pub fn extract(&mut self, paths: &ArtifactPaths, id: &str) -> Result<f64> {
        let request = self.request(paths, id);
        let output = self.invoker.invoke(&request);
        if !output.status.success() {
            warn!(id, status = ?output.status, "report tool did not exit cleanly");
        }
        let bytes = parse_peak_heap(&output.stdout)?;
        debug!(id, bytes, "peak heap");
        Ok(bytes)
    }

    /// Borrow the underlying invoker
    pub const fn invoker(&self) -> &I {
        &self.invoker
    }
}
