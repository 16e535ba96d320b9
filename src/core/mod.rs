//! Core utilities for the Sleeper league exporter
//!
//! - `http`: request headers shared by every API call
//! - `output`: timestamped file naming and compact JSON writing

pub mod http;
pub mod output;

pub use http::default_headers;
pub use output::{write_compact_json, OutputPaths, DEFAULT_OUTPUT_DIR};
