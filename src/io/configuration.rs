//! Harness constants and runtime configuration defaults

// External tools
/// Instance generator binary measured by the sweeps
pub const DEFAULT_PROGRAM: &str = "./target/profiling/instance_gen";
/// Memory profiler wrapping every run
pub const DEFAULT_PROFILER: &str = "heaptrack";
/// Companion tool printing a text report from a recording
pub const DEFAULT_REPORT_TOOL: &str = "heaptrack_print";

// Artifact locations
/// Directory holding one subdirectory of descriptors and recordings per sweep
pub const DEFAULT_OUTPUT_ROOT: &str = "tests/instance_gen";
/// Directory receiving the rendered charts
pub const DEFAULT_CHART_DIR: &str = "grafici";
/// Extension of descriptor files
pub const DESCRIPTOR_EXTENSION: &str = "yaml";
/// Extension passed to the profiler for its recording
pub const RECORD_EXTENSION: &str = "heaptrack";
/// Extension the profiler appends when it compresses the recording
pub const COMPRESSED_RECORD_EXTENSION: &str = "zst";

// Report layout the extractor is coupled to
/// Marker preceding the peak heap value in the report
pub const PEAK_HEAP_MARKER: &str = "peak heap memory consumption: ";
/// Position of the peak heap line counted from the end of the report, zero based
///
/// The report ends with a newline, so the trailing empty element is position 0.
pub const PEAK_HEAP_LINE_FROM_END: usize = 3;
/// Bytes per unit step of the report's size suffixes
pub const UNIT_MULTIPLIER: f64 = 1024.0;

// Chart geometry
/// Rendered chart width in pixels
pub const CHART_WIDTH: u32 = 1280;
/// Rendered chart height in pixels
pub const CHART_HEIGHT: u32 = 720;
/// Whisker reach as a multiple of the inter-quartile range
pub const WHISKER_IQR_FACTOR: f64 = 1.5;
/// Notch half-width factor applied to `IQR / sqrt(n)`
pub const NOTCH_FACTOR: f64 = 1.57;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Grid dimension sweep: fixed obstacles, growing square grid
/// Sweep name, also the descriptor id prefix
pub const DIMENSION_SWEEP_NAME: &str = "const_obj_no_agents_dim_incr";
/// First grid dimension
pub const DIMENSION_START: u64 = 500;
/// Last grid dimension, inclusive
pub const DIMENSION_END: u64 = 5000;
/// Step between grid dimensions
pub const DIMENSION_STEP: u64 = 100;
/// Repetitions per grid dimension
pub const DIMENSION_REPETITIONS: u64 = 100;
/// Obstacle count held constant across the sweep
pub const DIMENSION_OBSTACLES: u64 = 800;
/// Noise cell size of the dimension sweep
pub const DIMENSION_NOISE_CELL_SIZE: u64 = 5;
/// Noise offset of the dimension sweep
pub const DIMENSION_NOISE_OFFSET: f64 = 0.1;
/// First bucket drawn on the dimension charts
pub const DIMENSION_CHART_START: usize = 5;
/// Stride between buckets drawn on the dimension charts
pub const DIMENSION_CHART_STEP: usize = 2;

// Obstacle sweep: growing obstacle count on a near-square grid
/// Sweep name, also the descriptor id prefix
pub const OBSTACLE_SWEEP_NAME: &str = "const_obj_no_agents_obs_incr";
/// First obstacle count
pub const OBSTACLE_START: u64 = 1000;
/// Last obstacle count, inclusive
pub const OBSTACLE_END: u64 = 9750;
/// Step between obstacle counts
pub const OBSTACLE_STEP: u64 = 250;
/// Repetitions per obstacle count
pub const OBSTACLE_REPETITIONS: u64 = 25;
/// Generator time budget for the obstacle sweep
pub const OBSTACLE_TIME_MAX: u64 = 1;

// Agents are disabled in both sweeps
/// Number of agents requested from the generator
pub const AGENT_COUNT: u64 = 0;
/// Agent stop probability passed through to the generator
pub const AGENT_STOP_PROBABILITY: f64 = 1.0;
