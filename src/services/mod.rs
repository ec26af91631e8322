//! External inputs
//!
//! Loading record files (JSON, YAML, CSV) and style files from disk.

pub mod loader;

pub use loader::{load_records, load_style};
