pub mod catalog;
pub mod descriptor;
pub mod sweep;
