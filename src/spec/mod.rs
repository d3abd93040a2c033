/// Built-in sweep definitions and chart plans
pub mod catalog;
/// Instance descriptor document
pub mod descriptor;
/// Descriptor materialization
pub mod generator;
/// Sweep definitions and parameter ranges
pub mod sweep;
