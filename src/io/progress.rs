//! Nested sweep and repetition progress bars

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Tracks how far a sweep has advanced
///
/// The outer bar counts parameter values, the inner bar counts repetitions of
/// the current value.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    value_bar: Option<ProgressBar>,
    repetition_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static VALUE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} \
             [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static REPETITION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "  repetitions [{{bar:{PROGRESS_BAR_WIDTH}.green/white}}] {{pos}}/{{len}} ({{eta}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager with no active sweep
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            value_bar: None,
            repetition_bar: None,
        }
    }

    /// Start displaying a sweep over `value_count` parameter values
    pub fn start_sweep(&mut self, name: &str, value_count: usize, repetitions: u64) {
        self.finish();

        let value_bar = ProgressBar::new(value_count as u64);
        value_bar.set_style(VALUE_STYLE.clone());
        value_bar.set_prefix(name.to_string());
        self.value_bar = Some(self.multi_progress.add(value_bar));

        let repetition_bar = ProgressBar::new(repetitions);
        repetition_bar.set_style(REPETITION_STYLE.clone());
        self.repetition_bar = Some(self.multi_progress.add(repetition_bar));
    }

    /// Announce the parameter value now being measured
    pub fn start_value(&mut self, value: u64) {
        if let Some(ref bar) = self.value_bar {
            bar.set_message(format!("value {value}"));
        }
        if let Some(ref bar) = self.repetition_bar {
            bar.reset();
        }
    }

    /// One repetition of the current value finished
    pub fn complete_repetition(&mut self) {
        if let Some(ref bar) = self.repetition_bar {
            bar.inc(1);
        }
    }

    /// All repetitions of the current value finished
    pub fn complete_value(&mut self) {
        if let Some(ref bar) = self.value_bar {
            bar.inc(1);
        }
    }

    /// Position of the outer bar, zero when no sweep is active
    pub fn completed_values(&self) -> u64 {
        self.value_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(bar) = self.repetition_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(bar) = self.value_bar.take() {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
