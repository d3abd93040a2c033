//! Five-number summaries for box plots

use crate::io::configuration::{NOTCH_FACTOR, WHISKER_IQR_FACTOR};

/// Quantile `q` in `[0, 1]` of ascending `sorted`, linearly interpolated
///
/// Returns `None` for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = q.clamp(0.0, 1.0) * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let low = *sorted.get(lower)?;
    let high = *sorted.get(upper)?;
    Some((position - lower as f64).mul_add(high - low, low))
}

/// Median of unsorted `values`, `None` when empty
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile(&sorted, 0.5)
}

/// Summary of one bucket as drawn on a box plot
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    /// Lower fence, `q1 - 1.5 * IQR`
    pub whisker_low: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Upper fence, `q3 + 1.5 * IQR`
    pub whisker_high: f64,
    /// Lower edge of the median confidence notch
    pub notch_low: f64,
    /// Upper edge of the median confidence notch
    pub notch_high: f64,
    /// Samples beyond the fences
    pub outliers: Vec<f64>,
    /// Number of samples summarized
    pub count: usize,
}

impl BoxStats {
    /// Summarize `values`, `None` when empty
    ///
    /// Whiskers end at the Tukey fences 1.5 IQR beyond the box, as drawn by
    /// `plotters::element::Boxplot`; the notch spans `median ± 1.57 * IQR / sqrt(n)`.
    pub fn from_samples(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25)?;
        let median = quantile(&sorted, 0.5)?;
        let q3 = quantile(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let whisker_low = WHISKER_IQR_FACTOR.mul_add(-iqr, q1);
        let whisker_high = WHISKER_IQR_FACTOR.mul_add(iqr, q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        let notch = NOTCH_FACTOR * iqr / (sorted.len() as f64).sqrt();

        Some(Self {
            whisker_low,
            q1,
            median,
            q3,
            whisker_high,
            notch_low: median - notch,
            notch_high: median + notch,
            outliers,
            count: sorted.len(),
        })
    }

    /// Smallest value drawn for this box, outliers included
    pub fn min(&self) -> f64 {
        self.outliers
            .iter()
            .copied()
            .fold(self.whisker_low, f64::min)
    }

    /// Largest value drawn for this box, outliers included
    pub fn max(&self) -> f64 {
        self.outliers
            .iter()
            .copied()
            .fold(self.whisker_high, f64::max)
    }
}
