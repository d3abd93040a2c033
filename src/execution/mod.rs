/// Sweep driver and result collection
pub mod aggregator;
/// External tool launching
pub mod invoker;
/// Peak heap extraction from profiler reports
pub mod metrics;
/// Profiled, timed program runs
pub mod runner;
