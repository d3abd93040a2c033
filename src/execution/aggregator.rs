//! Drives a sweep to completion and collects its measurements

use crate::chart::render::Metric;
use crate::chart::statistics::median;
use crate::execution::invoker::ToolInvoker;
use crate::execution::metrics::MetricExtractor;
use crate::execution::runner::ProcessRunner;
use crate::io::error::{Result, WithSample};
use crate::io::paths::ArtifactPaths;
use crate::io::progress::ProgressManager;
use crate::spec::descriptor::descriptor_id;
use crate::spec::sweep::SweepDefinition;
use tracing::info;

/// One observation of one (value, repetition) sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Wall-clock duration of the profiled run, absent for untimed sweeps
    pub duration_ns: Option<u64>,
    /// Peak heap consumption in bytes
    pub peak_heap_bytes: f64,
}

/// Measurements of a whole sweep
///
/// `samples[i][r]` is repetition `r` of `parameter_range[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSweepResult {
    name: String,
    parameter_range: Vec<u64>,
    samples: Vec<Vec<Measurement>>,
}

impl AggregatedSweepResult {
    /// Assemble a result from already collected samples
    pub fn new(
        name: impl Into<String>,
        parameter_range: Vec<u64>,
        samples: Vec<Vec<Measurement>>,
    ) -> Self {
        Self {
            name: name.into(),
            parameter_range,
            samples,
        }
    }

    /// Sweep name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter values, one per outer bucket
    pub fn parameter_range(&self) -> &[u64] {
        &self.parameter_range
    }

    /// Measurements, outer index by parameter value, inner by repetition
    pub fn samples(&self) -> &[Vec<Measurement>] {
        &self.samples
    }

    /// Number of outer buckets
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no bucket has been recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Per-bucket values of one metric
    ///
    /// Wall-clock values are nanoseconds, peak heap values are bytes.
    /// Returns `None` for wall-clock when any sample lacks a duration.
    pub fn series(&self, metric: Metric) -> Option<Vec<Vec<f64>>> {
        self.samples
            .iter()
            .map(|bucket| {
                bucket
                    .iter()
                    .map(|m| match metric {
                        Metric::WallClock => m.duration_ns.map(|ns| ns as f64),
                        Metric::PeakHeap => Some(m.peak_heap_bytes),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Runs every sample of a sweep, strictly in order
pub struct SweepAggregator<'a, R, E> {
    runner: &'a mut ProcessRunner<R>,
    extractor: &'a mut MetricExtractor<E>,
    paths: &'a ArtifactPaths,
    progress: Option<&'a mut ProgressManager>,
}

impl<'a, R: ToolInvoker, E: ToolInvoker> SweepAggregator<'a, R, E> {
    /// Aggregator using the given stages and artifact locations
    pub const fn new(
        runner: &'a mut ProcessRunner<R>,
        extractor: &'a mut MetricExtractor<E>,
        paths: &'a ArtifactPaths,
    ) -> Self {
        Self {
            runner,
            extractor,
            paths,
            progress: None,
        }
    }

    /// Report progress through `progress` while running
    pub fn with_progress(mut self, progress: &'a mut ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run the sweep: values ascending, repetitions ascending, one run and
    /// one extraction per sample
    ///
    /// Descriptors must already be on disk.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure, wrapped with the value and repetition
    /// it occurred at. No sample is retried and nothing partial is returned.
    /// Progress bars are cleared before the error is returned.
    pub fn run(&mut self, sweep: &SweepDefinition) -> Result<AggregatedSweepResult> {
        let values = sweep.parameter_range();
        info!(
            sweep = sweep.name(),
            values = values.len(),
            repetitions = sweep.repetitions(),
            "starting sweep"
        );
        if let Some(progress) = self.progress.as_deref_mut() {
            progress.start_sweep(sweep.name(), values.len(), sweep.repetitions());
        }

        let mut samples = Vec::with_capacity(values.len());
        for &value in values {
            if let Some(progress) = self.progress.as_deref_mut() {
                progress.start_value(value);
            }

            let mut bucket = Vec::with_capacity(sweep.repetitions() as usize);
            for repetition in 0..sweep.repetitions() {
                let measurement = self
                    .measure(sweep, value, repetition)
                    .inspect_err(|_| {
                        if let Some(progress) = self.progress.as_deref_mut() {
                            progress.finish();
                        }
                    })
                    .with_sample(sweep.name(), value, repetition)?;
                bucket.push(measurement);
                if let Some(progress) = self.progress.as_deref_mut() {
                    progress.complete_repetition();
                }
            }

            log_bucket(value, &bucket);
            samples.push(bucket);
            if let Some(progress) = self.progress.as_deref_mut() {
                progress.complete_value();
            }
        }

        if let Some(progress) = self.progress.as_deref_mut() {
            progress.finish();
        }
        info!(sweep = sweep.name(), "sweep complete");

        Ok(AggregatedSweepResult::new(
            sweep.name(),
            values.to_vec(),
            samples,
        ))
    }

    fn measure(
        &mut self,
        sweep: &SweepDefinition,
        value: u64,
        repetition: u64,
    ) -> Result<Measurement> {
        let id = descriptor_id(sweep.name(), value, repetition);
        let elapsed = self.runner.run(self.paths, &id);
        let peak_heap_bytes = self.extractor.extract(self.paths, &id)?;

        Ok(Measurement {
            duration_ns: sweep
                .timed()
                .then(|| u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)),
            peak_heap_bytes,
        })
    }
}

fn log_bucket(value: u64, bucket: &[Measurement]) {
    let heap: Vec<f64> = bucket.iter().map(|m| m.peak_heap_bytes).collect();
    let durations: Vec<f64> = bucket
        .iter()
        .filter_map(|m| m.duration_ns.map(|ns| ns as f64))
        .collect();

    info!(
        value,
        median_peak_heap_bytes = median(&heap),
        median_duration_ns = median(&durations),
        "value measured"
    );
}
