use std::sync::Mutex;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::info;

use crate::error::Result;
use crate::traits::Manage;
use crate::types::Captured;

/// In-memory tool for development and testing on hosts without VirtualBox.
///
/// Every invocation is recorded; captured runs return a canned stdout and
/// every run reports the configured exit code.
#[derive(Debug, Default)]
pub struct RecordingTool {
    calls: Mutex<Vec<Vec<String>>>,
    stdout: String,
    code: i32,
}

impl RecordingTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stdout returned by every captured run.
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    /// Exit code reported by every run.
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Argument vectors seen so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, args: &[String]) {
        info!(args = ?args, "recording: VBoxManage");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(args.to_vec());
        }
    }
}

impl Manage for RecordingTool {
    fn run<'a>(&'a self, args: &'a [String]) -> BoxFuture<'a, Result<i32>> {
        self.record(args);
        futures_util::future::ready(Ok(self.code)).boxed()
    }

    fn capture<'a>(&'a self, args: &'a [String]) -> BoxFuture<'a, Result<Captured>> {
        self.record(args);
        futures_util::future::ready(Ok(Captured {
            code: self.code,
            stdout: self.stdout.clone(),
        }))
        .boxed()
    }
}
