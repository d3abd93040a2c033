//! Error types for descriptor generation, measurement and chart export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all harness operations
#[derive(Debug)]
pub enum HarnessError {
    /// Failed to serialize an instance descriptor
    DescriptorWrite {
        /// Descriptor file that was being produced
        path: PathBuf,
        /// Underlying serialization error
        source: serde_yaml::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Profiler report did not carry the expected peak heap line
    ///
    /// Usually means the report tool changed its layout or the profiled
    /// process crashed before a recording was written.
    MetricParse {
        /// What did not match
        reason: String,
        /// The report line that was inspected, if there was one
        line: Option<String>,
    },

    /// A stage failed for one sample of a sweep
    Sample {
        /// Sweep name
        sweep: String,
        /// Parameter value of the failing sample
        value: u64,
        /// Repetition index of the failing sample
        repetition: u64,
        /// Stage failure
        source: Box<HarnessError>,
    },

    /// Plotting backend failed while drawing a chart
    ChartDraw {
        /// Destination of the chart being drawn
        path: PathBuf,
        /// Underlying drawing error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to save a rendered chart to disk
    ChartExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DescriptorWrite { path, source } => {
                write!(
                    f,
                    "Failed to serialize descriptor '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MetricParse { reason, line } => match line {
                Some(line) => write!(
                    f,
                    "Failed to parse profiler report: {reason} (line: '{line}')"
                ),
                None => write!(f, "Failed to parse profiler report: {reason}"),
            },
            Self::Sample {
                sweep,
                value,
                repetition,
                source,
            } => {
                write!(
                    f,
                    "Sweep '{sweep}' failed at value {value}, repetition {repetition}: {source}"
                )
            }
            Self::ChartDraw { path, source } => {
                write!(f, "Failed to draw chart '{}': {source}", path.display())
            }
            Self::ChartExport { path, source } => {
                write!(
                    f,
                    "Failed to export chart to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DescriptorWrite { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ChartExport { source, .. } => Some(source),
            Self::ChartDraw { source, .. } => Some(source.as_ref()),
            Self::Sample { source, .. } => Some(source.as_ref()),
            Self::MetricParse { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for harness results
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Attaches the failing sample's coordinates to a stage error
pub trait WithSample<T> {
    /// Wrap the error in [`HarnessError::Sample`]
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped with the sweep name, value and repetition
    fn with_sample(self, sweep: &str, value: u64, repetition: u64) -> Result<T>;
}

impl<T> WithSample<T> for Result<T> {
    fn with_sample(self, sweep: &str, value: u64, repetition: u64) -> Result<T> {
        self.map_err(|source| HarnessError::Sample {
            sweep: sweep.to_string(),
            value,
            repetition,
            source: Box::new(source),
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HarnessError {
    HarnessError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a metric parse error
pub fn metric_parse(reason: &impl ToString, line: Option<&str>) -> HarnessError {
    HarnessError::MetricParse {
        reason: reason.to_string(),
        line: line.map(str::to_string),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> HarnessError {
    HarnessError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
