//! Benchmark harness measuring how an external instance generator scales
//!
//! A sweep writes one YAML descriptor per (parameter value, repetition),
//! runs the generator on each under a heap profiler, extracts peak heap
//! consumption from the profiler's report and renders the distributions
//! as box plots.

#![forbid(unsafe_code)]

/// Box-plot statistics and PNG rendering
pub mod chart;
/// Profiled execution, metric extraction and sweep aggregation
pub mod execution;
/// Input/output operations and error handling
pub mod io;
/// Instance descriptors and sweep definitions
pub mod spec;

pub use io::error::{HarnessError, Result};
