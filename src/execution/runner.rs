//! Profiled, timed execution of the instance generator

use crate::execution::invoker::{OutputCapture, ToolInvoker, ToolRequest};
use crate::io::paths::ArtifactPaths;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Runs the program under the profiler for one descriptor
///
/// Equivalent to `<profiler> -o <record> <program> -c <descriptor>`.
pub struct ProcessRunner<I> {
    profiler: PathBuf,
    program: PathBuf,
    invoker: I,
}

impl<I: ToolInvoker> ProcessRunner<I> {
    /// Create a runner for `program` wrapped by `profiler`
    pub fn new(profiler: impl Into<PathBuf>, program: impl Into<PathBuf>, invoker: I) -> Self {
        Self {
            profiler: profiler.into(),
            program: program.into(),
            invoker,
        }
    }

    /// The request issued for sample `id`
    pub fn request(&self, paths: &ArtifactPaths, id: &str) -> ToolRequest {
        ToolRequest {
            tool: self.profiler.clone(),
            args: vec![
                OsString::from("-o"),
                paths.record(id).into_os_string(),
                self.program.clone().into_os_string(),
                OsString::from("-c"),
                paths.descriptor(id).into_os_string(),
            ],
            capture: OutputCapture::Discard,
        }
    }

    /// Run sample `id` and return the wall-clock time of the blocking call
    ///
    /// A profiler or program that fails to launch or exits non-zero still
    /// yields a duration; the missing recording surfaces during extraction.
    pub fn run(&mut self, paths: &ArtifactPaths, id: &str) -> Duration {
        let request = self.request(paths, id);
        let output = self.invoker.invoke(&request);
        if !output.status.success() {
            warn!(id, status = ?output.status, "profiled run did not exit cleanly");
        }
        output.elapsed
    }

    /// Borrow the underlying invoker
    pub const fn invoker(&self) -> &I {
        &self.invoker
    }
}
