//! Command-line interface running the built-in sweeps end to end

use crate::chart::render::ChartRenderer;
use crate::execution::aggregator::{AggregatedSweepResult, SweepAggregator};
use crate::execution::invoker::SystemInvoker;
use crate::execution::metrics::MetricExtractor;
use crate::execution::runner::ProcessRunner;
use crate::io::configuration::{
    DEFAULT_CHART_DIR, DEFAULT_OUTPUT_ROOT, DEFAULT_PROFILER, DEFAULT_PROGRAM, DEFAULT_REPORT_TOOL,
};
use crate::io::error::Result;
use crate::io::paths::ArtifactPaths;
use crate::io::progress::ProgressManager;
use crate::spec::catalog::SweepKind;
use crate::spec::generator::SpecGenerator;
use crate::spec::sweep::SweepDefinition;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "sweepbench")]
#[command(
    author,
    version,
    about = "Measure time and peak heap of an instance generator across parameter sweeps"
)]
/// Command-line arguments for the sweep harness
pub struct Cli {
    /// Sweeps to run, all of them when omitted
    #[arg(value_enum, value_name = "SWEEP")]
    pub sweeps: Vec<SweepKind>,

    /// Instance generator binary under test
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub program: PathBuf,

    /// Memory profiler wrapping each run
    #[arg(long, default_value = DEFAULT_PROFILER)]
    pub profiler: PathBuf,

    /// Report printer for profiler recordings
    #[arg(long, default_value = DEFAULT_REPORT_TOOL)]
    pub report_tool: PathBuf,

    /// Directory receiving descriptors and recordings
    #[arg(short, long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub output_root: PathBuf,

    /// Directory receiving rendered charts
    #[arg(short, long, default_value = DEFAULT_CHART_DIR)]
    pub chart_dir: PathBuf,

    /// Override the repetitions per parameter value
    #[arg(short, long)]
    pub repetitions: Option<u64>,

    /// Only write descriptors, do not run or chart anything
    #[arg(short, long)]
    pub generate_only: bool,

    /// Suppress progress bars and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every sample
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Sweeps selected on the command line, in run order
    pub fn selected_sweeps(&self) -> Vec<SweepKind> {
        if self.sweeps.is_empty() {
            SweepKind::ALL.to_vec()
        } else {
            SweepKind::ALL
                .into_iter()
                .filter(|kind| self.sweeps.contains(kind))
                .collect()
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Generates, measures and charts the selected sweeps one after another
pub struct SweepProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SweepProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run every selected sweep
    ///
    /// # Errors
    ///
    /// Returns the first failure of any stage; later sweeps are not started
    pub fn process(&mut self) -> Result<()> {
        for kind in self.cli.selected_sweeps() {
            self.process_sweep(kind)?;
        }
        Ok(())
    }

    /// Definition of `kind` with the repetition override applied
    ///
    /// # Errors
    ///
    /// Returns an error if the override is zero
    pub fn definition(&self, kind: SweepKind) -> Result<SweepDefinition> {
        let definition = kind.definition()?;
        match self.cli.repetitions {
            Some(repetitions) => definition.with_repetitions(repetitions),
            None => Ok(definition),
        }
    }

    fn process_sweep(&mut self, kind: SweepKind) -> Result<()> {
        let sweep = self.definition(kind)?;
        let paths = ArtifactPaths::new(&self.cli.output_root, sweep.name());

        SpecGenerator::new(&paths).write_all(&sweep)?;
        if self.cli.generate_only {
            return Ok(());
        }

        let result = self.measure(&sweep, &paths)?;

        let renderer = ChartRenderer::default();
        for chart in kind.charts(&self.cli.chart_dir) {
            renderer.render(&result, &chart)?;
        }
        info!(sweep = sweep.name(), "charts written");
        Ok(())
    }

    fn measure(
        &mut self,
        sweep: &SweepDefinition,
        paths: &ArtifactPaths,
    ) -> Result<AggregatedSweepResult> {
        let mut runner = ProcessRunner::new(&self.cli.profiler, &self.cli.program, SystemInvoker);
        let mut extractor = MetricExtractor::new(&self.cli.report_tool, SystemInvoker);

        let mut aggregator = SweepAggregator::new(&mut runner, &mut extractor, paths);
        if let Some(ref mut pm) = self.progress_manager {
            aggregator = aggregator.with_progress(pm);
        }
        aggregator.run(sweep)
    }
}
