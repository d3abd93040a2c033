//! Box-plot PNG rendering of aggregated sweeps

use crate::chart::statistics::BoxStats;
use crate::execution::aggregator::AggregatedSweepResult;
use crate::io::configuration::{CHART_HEIGHT, CHART_WIDTH};
use crate::io::error::{HarnessError, Result, file_system, invalid_parameter};
use image::RgbImage;
use plotters::prelude::{
    BLACK, BitMapBackend, Boxplot, ChartBuilder, Circle, Color, IntoDrawingArea,
    IntoSegmentedCoord, PathElement, Quartiles, RGBColor, Rectangle, SegmentValue, WHITE,
};
use std::ops::Range;
use std::path::PathBuf;
use tracing::info;

const BOX_FILL: RGBColor = RGBColor(166, 206, 227);
const CAPTION_FONT: (&str, i32) = ("sans-serif", 24);

type DrawResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Measured quantity a chart plots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Wall-clock duration in nanoseconds
    WallClock,
    /// Peak heap consumption in bytes
    PeakHeap,
}

/// Which outer buckets to draw: every `step`-th starting at `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSelection {
    /// First bucket index
    pub start: usize,
    /// Stride between drawn buckets
    pub step: usize,
}

impl Default for IndexSelection {
    fn default() -> Self {
        Self { start: 0, step: 1 }
    }
}

impl IndexSelection {
    /// Every `step`-th bucket from `start`
    pub const fn new(start: usize, step: usize) -> Self {
        Self { start, step }
    }

    /// Selected indices of a sweep with `len` buckets
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is zero or nothing is selected
    pub fn indices(&self, len: usize) -> Result<Vec<usize>> {
        if self.step == 0 {
            return Err(invalid_parameter("step", &self.step, &"must be positive"));
        }
        let indices: Vec<usize> = (self.start..len).step_by(self.step).collect();
        if indices.is_empty() {
            return Err(invalid_parameter(
                "start",
                &self.start,
                &format!("selects no bucket of a sweep with {len} values"),
            ));
        }
        Ok(indices)
    }
}

/// Box appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxStyle {
    /// Fill the inter-quartile box
    pub filled: bool,
    /// Indent the box around the median confidence interval
    pub notched: bool,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Plotted quantity
    pub metric: Metric,
    /// Chart title
    pub title: String,
    /// X axis title
    pub x_label: String,
    /// Y axis title
    pub y_label: String,
    /// PNG destination
    pub output: PathBuf,
    /// Buckets to draw
    pub selection: IndexSelection,
    /// Box appearance
    pub style: BoxStyle,
}

/// What was drawn
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    /// Written image
    pub path: PathBuf,
    /// X tick labels, the parameter values of the drawn buckets
    pub ticks: Vec<String>,
    /// Summary of each drawn bucket, aligned with `ticks`
    pub boxes: Vec<BoxStats>,
}

/// Draws box plots of aggregated sweeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(CHART_WIDTH, CHART_HEIGHT)
    }
}

/// Value span covered by `boxes` with 5% headroom on each side
fn value_range(boxes: &[BoxStats]) -> Range<f32> {
    let low = boxes.iter().map(BoxStats::min).fold(f64::INFINITY, f64::min);
    let high = boxes
        .iter()
        .map(BoxStats::max)
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = if high > low {
        (high - low) * 0.05
    } else {
        low.abs().max(1.0) * 0.05
    };
    (low - pad) as f32..(high + pad) as f32
}

/// Tick label of a segment on the bucket axis
fn tick_label(ticks: &[String], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => usize::try_from(*index)
            .ok()
            .and_then(|index| ticks.get(index))
            .cloned()
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

/// Compact axis label for `value`
pub fn format_axis_value(value: f64) -> String {
    if value.abs() >= 100_000.0 {
        format!("{value:.2e}")
    } else if value.fract().abs() < f64::EPSILON || value.abs() >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

impl ChartRenderer {
    /// Renderer producing `width` by `height` images
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render `spec` for `result` and write the PNG
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selection is empty or a selected bucket has no samples
    /// - A wall-clock chart is requested for an untimed sweep
    /// - Drawing fails, for instance when no font can be loaded
    /// - The output directory cannot be created or the image cannot be saved
    pub fn render(
        &self,
        result: &AggregatedSweepResult,
        spec: &ChartSpec,
    ) -> Result<RenderedChart> {
        let (image, ticks, boxes) = self.draw(result, spec)?;

        if let Some(parent) = spec.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }
        image
            .save(&spec.output)
            .map_err(|e| HarnessError::ChartExport {
                path: spec.output.clone(),
                source: e,
            })?;

        info!(chart = %spec.output.display(), boxes = boxes.len(), "rendered chart");
        Ok(RenderedChart {
            path: spec.output.clone(),
            ticks,
            boxes,
        })
    }

    /// Draw the chart in memory, returning the image, tick labels and box summaries
    ///
    /// # Errors
    ///
    /// Same selection, metric and drawing errors as [`ChartRenderer::render`]
    pub fn draw(
        &self,
        result: &AggregatedSweepResult,
        spec: &ChartSpec,
    ) -> Result<(RgbImage, Vec<String>, Vec<BoxStats>)> {
        let series = result.series(spec.metric).ok_or_else(|| {
            invalid_parameter(
                "metric",
                &format!("{:?}", spec.metric),
                &format!("sweep '{}' was not timed", result.name()),
            )
        })?;

        let mut ticks = Vec::new();
        let mut buckets = Vec::new();
        let mut boxes = Vec::new();
        for index in spec.selection.indices(series.len())? {
            let bucket = series.get(index).map_or(&[][..], Vec::as_slice);
            let stats = BoxStats::from_samples(bucket).ok_or_else(|| {
                invalid_parameter("bucket", &index, &"has no samples")
            })?;
            let label = result
                .parameter_range()
                .get(index)
                .map_or_else(|| index.to_string(), u64::to_string);
            ticks.push(label);
            buckets.push(bucket);
            boxes.push(stats);
        }

        let mut buffer = vec![0_u8; self.width as usize * self.height as usize * 3];
        self.plot(&mut buffer, spec, &ticks, &buckets, &boxes)
            .map_err(|source| HarnessError::ChartDraw {
                path: spec.output.clone(),
                source,
            })?;
        let image = RgbImage::from_raw(self.width, self.height, buffer).ok_or_else(|| {
            invalid_parameter(
                "size",
                &format!("{}x{}", self.width, self.height),
                &"does not match the drawn buffer",
            )
        })?;
        Ok((image, ticks, boxes))
    }

    fn plot(
        &self,
        buffer: &mut [u8],
        spec: &ChartSpec,
        ticks: &[String],
        buckets: &[&[f64]],
        boxes: &[BoxStats],
    ) -> DrawResult {
        let root =
            BitMapBackend::with_buffer(buffer, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        // A single-value integer axis collapses, so always span at least two slots
        let last = (boxes.len() as i32 - 1).max(1);
        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, CAPTION_FONT)
            .margin(15)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d((0..last).into_segmented(), value_range(boxes))?;

        let x_formatter = |value: &SegmentValue<i32>| tick_label(ticks, value);
        let y_formatter = |value: &f32| format_axis_value(f64::from(*value));
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(ticks.len() + 1)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .draw()?;

        let (plot_width, _) = chart.plotting_area().dim_in_pixel();
        let box_width = (plot_width / (last as u32 + 1) / 2).max(4);
        let half = box_width as i32 / 2;

        for (i, (&bucket, stats)) in buckets.iter().zip(boxes).enumerate() {
            let key = i as i32;
            let pixel = |value: f64| {
                chart
                    .plotting_area()
                    .map_coordinate(&(SegmentValue::CenterOf(key), value as f32))
            };
            let (center, q3) = pixel(stats.q3);
            let (_, q1) = pixel(stats.q1);
            let (_, median) = pixel(stats.median);
            let (_, notch_high) = pixel(stats.notch_high);
            let (_, notch_low) = pixel(stats.notch_low);

            if spec.style.filled {
                root.draw(&Rectangle::new(
                    [(center - half, q3), (center + half, q1)],
                    BOX_FILL.filled(),
                ))?;
            }

            chart.draw_series(std::iter::once(
                Boxplot::new_vertical(SegmentValue::CenterOf(key), &Quartiles::new(bucket))
                    .width(box_width)
                    .whisker_width(0.5)
                    .style(BLACK),
            ))?;

            if spec.style.notched {
                // Pixel rows grow downwards: q3 is above q1
                let top = notch_high.clamp(q3, q1);
                let bottom = notch_low.clamp(q3, q1);
                let inset = half / 2;
                for (edge, step) in [(center - half, inset), (center + half, -inset)] {
                    root.draw(&PathElement::new(
                        vec![(edge, top), (edge + step, median), (edge, bottom)],
                        BLACK,
                    ))?;
                }
            }

            chart.draw_series(stats.outliers.iter().map(|&value| {
                Circle::new(
                    (SegmentValue::CenterOf(key), value as f32),
                    3,
                    BLACK.filled(),
                )
            }))?;
        }

        root.present()?;
        Ok(())
    }
}
