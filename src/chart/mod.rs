//! Box-plot charts of sweep results

/// Chart layout and PNG export
pub mod render;
/// Box-plot summaries
pub mod statistics;
