//! Timestamped JSON output files.
//!
//! Each run writes a pair of files sharing one `YYYY-MM-DD_HHMMSS` prefix, so
//! earlier exports are never touched.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::Result;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./data";

/// File-name prefix format: `2026-10-19_184502`
pub const FILE_PREFIX_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// Paths for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub snapshot: PathBuf,
    pub waivers: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, timestamp: NaiveDateTime) -> Self {
        let prefix = timestamp.format(FILE_PREFIX_FORMAT).to_string();
        Self {
            snapshot: dir.join(format!("{}_league_min.json", prefix)),
            waivers: dir.join(format!("{}_waivers.json", prefix)),
        }
    }
}

/// Serialize `value` as compact JSON to `path`, creating parent directories.
pub fn write_compact_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut w = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer(&mut w, value)?;
    w.flush()?;
    Ok(())
}
