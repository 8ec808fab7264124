use std::path::PathBuf;
use std::process::Stdio;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::debug;

use crate::error::{Result, VboxError};
use crate::traits::Manage;
use crate::types::Captured;

/// Default binary name, resolved through `PATH`.
pub const DEFAULT_BINARY: &str = "VBoxManage";

/// Runs the real `VBoxManage` binary as a child process.
#[derive(Debug, Clone)]
pub struct VBoxManage {
    binary: PathBuf,
}

impl Default for VBoxManage {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.into(),
        }
    }
}

impl VBoxManage {
    pub fn new(binary: Option<PathBuf>) -> Self {
        Self {
            binary: binary.unwrap_or_else(|| DEFAULT_BINARY.into()),
        }
    }

    pub fn binary(&self) -> &std::path::Path {
        &self.binary
    }

    fn command(&self, args: &[String]) -> tokio::process::Command {
        debug!(binary = %self.binary.display(), args = ?args, "VBoxManage command line");
        let mut cmd = tokio::process::Command::new(&self.binary);
        cmd.args(args);
        cmd
    }

    fn spawn_error(&self, e: std::io::Error) -> VboxError {
        let binary = self.binary.display().to_string();
        if e.kind() == std::io::ErrorKind::NotFound {
            VboxError::ToolNotFound { binary }
        } else {
            VboxError::SpawnFailed { binary, source: e }
        }
    }
}

/// Signal deaths have no exit code; report them as a plain failure.
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

impl Manage for VBoxManage {
    fn run<'a>(&'a self, args: &'a [String]) -> BoxFuture<'a, Result<i32>> {
        async move {
            let status = self
                .command(args)
                .status()
                .await
                .map_err(|e| self.spawn_error(e))?;
            debug!(status = %status, "VBoxManage exited");
            Ok(exit_code(status))
        }
        .boxed()
    }

    fn capture<'a>(&'a self, args: &'a [String]) -> BoxFuture<'a, Result<Captured>> {
        async move {
            let output = self
                .command(args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::inherit())
                .output()
                .await
                .map_err(|e| self.spawn_error(e))?;
            debug!(status = %output.status, bytes = output.stdout.len(), "VBoxManage exited");
            Ok(Captured {
                code: exit_code(output.status),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_tool_not_found() {
        let tool = VBoxManage::new(Some("/nonexistent/vbm-test/VBoxManage".into()));
        let err = tool.run(&[]).await.unwrap_err();
        assert!(matches!(err, VboxError::ToolNotFound { .. }));

        let err = tool.capture(&["list".into()]).await.unwrap_err();
        assert!(matches!(err, VboxError::ToolNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exit_codes_are_reported_verbatim() {
        let ok = VBoxManage::new(Some("true".into()));
        assert_eq!(ok.run(&[]).await.unwrap(), 0);

        let failing = VBoxManage::new(Some("false".into()));
        assert_eq!(failing.run(&[]).await.unwrap(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn capture_collects_stdout() {
        let echo = VBoxManage::new(Some("echo".into()));
        let out = echo
            .capture(&["State:".into(), "running".into()])
            .await
            .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "State: running\n");
    }

    #[test]
    fn default_binary() {
        assert_eq!(VBoxManage::default().binary(), std::path::Path::new("VBoxManage"));
        assert_eq!(VBoxManage::new(None).binary(), std::path::Path::new("VBoxManage"));
    }
}
