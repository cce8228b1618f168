pub mod config;
pub mod edge;
pub mod preprocess;
pub mod simulate;
