//! Launching external tools as blocking child processes

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

/// What to do with the child's standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCapture {
    /// Send stdout and stderr to the null device
    Discard,
    /// Collect stdout as text, discard stderr
    Stdout,
}

/// One external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequest {
    /// Executable to run
    pub tool: PathBuf,
    /// Arguments in order
    pub args: Vec<OsString>,
    /// Handling of the child's output streams
    pub capture: OutputCapture,
}

/// How the child process ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Exited with the given code
    Exited(i32),
    /// Terminated by a signal
    Signaled,
    /// Could not be started at all
    LaunchFailed(String),
}

impl ToolStatus {
    /// Exited with code zero
    pub const fn success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }
}

/// Result of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit status
    pub status: ToolStatus,
    /// Captured stdout, empty when discarded or not launched
    pub stdout: String,
    /// Wall-clock time spanning the whole blocking call
    pub elapsed: Duration,
}

/// Runs a named tool with arguments and reports its output and duration
///
/// Never fails: a tool that cannot be launched is reported through
/// [`ToolStatus::LaunchFailed`] so that timing callers still get a duration.
pub trait ToolInvoker {
    /// Run the request to completion
    fn invoke(&mut self, request: &ToolRequest) -> ToolOutput;
}

/// Invoker backed by real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInvoker;

impl ToolInvoker for SystemInvoker {
    fn invoke(&mut self, request: &ToolRequest) -> ToolOutput {
        let mut command = Command::new(&request.tool);
        command.args(&request.args).stdin(Stdio::null()).stderr(Stdio::null());
        match request.capture {
            OutputCapture::Discard => command.stdout(Stdio::null()),
            OutputCapture::Stdout => command.stdout(Stdio::piped()),
        };

        debug!(tool = %request.tool.display(), args = ?request.args, "launching");
        let start = Instant::now();
        let result = command.output();
        let elapsed = start.elapsed();

        match result {
            Ok(output) => ToolOutput {
                status: output
                    .status
                    .code()
                    .map_or(ToolStatus::Signaled, ToolStatus::Exited),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                elapsed,
            },
            Err(e) => ToolOutput {
                status: ToolStatus::LaunchFailed(e.to_string()),
                stdout: String::new(),
                elapsed,
            },
        }
    }
}
