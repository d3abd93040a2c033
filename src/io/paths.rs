//! Naming policy for every artifact a sweep produces

use crate::io::configuration::{
    COMPRESSED_RECORD_EXTENSION, DESCRIPTOR_EXTENSION, RECORD_EXTENSION,
};
use std::path::{Path, PathBuf};

/// Resolves descriptor, recording and report-input paths for one sweep
///
/// Generator, runner and extractor all derive their paths from here so they
/// cannot disagree on where a sample's artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    sweep_dir: PathBuf,
}

impl ArtifactPaths {
    /// Artifacts of `sweep_name` live in `<root>/<sweep_name>/`
    pub fn new(root: impl AsRef<Path>, sweep_name: &str) -> Self {
        Self {
            sweep_dir: root.as_ref().join(sweep_name),
        }
    }

    /// Directory holding the sweep's descriptors and recordings
    pub fn sweep_dir(&self) -> &Path {
        &self.sweep_dir
    }

    /// `<id>.yaml`
    pub fn descriptor(&self, id: &str) -> PathBuf {
        self.sweep_dir.join(format!("{id}.{DESCRIPTOR_EXTENSION}"))
    }

    /// Output path handed to the profiler
    pub fn record(&self, id: &str) -> PathBuf {
        self.sweep_dir.join(format!("{id}.{RECORD_EXTENSION}"))
    }

    /// Recording as actually written by the profiler, compressed
    pub fn compressed_record(&self, id: &str) -> PathBuf {
        self.sweep_dir.join(format!(
            "{id}.{RECORD_EXTENSION}.{COMPRESSED_RECORD_EXTENSION}"
        ))
    }
}
