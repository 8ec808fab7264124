//! Location of the VirtualBox global configuration file.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, VboxError};

/// The two host families with distinct configuration layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Linux,
}

impl OsFamily {
    /// Classify a shell-style OS identifier (`$OSTYPE` or `std::env::consts::OS`).
    ///
    /// Anything that is not a Darwin/macOS identifier gets the Linux layout.
    pub fn from_os_type(os_type: &str) -> Self {
        let os_type = os_type.to_ascii_lowercase();
        if os_type.starts_with("darwin") || os_type == "macos" {
            OsFamily::MacOs
        } else {
            OsFamily::Linux
        }
    }
}

/// `VirtualBox.xml` under `home` for the given family.
pub fn config_path(family: OsFamily, home: &Path) -> PathBuf {
    let dir = match family {
        OsFamily::MacOs => home.join("Library").join("VirtualBox"),
        OsFamily::Linux => home.join(".config").join("VirtualBox"),
    };
    dir.join("VirtualBox.xml")
}

/// Open `path` in `editor` and wait for it to exit.
pub async fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    info!(editor = %editor, path = %path.display(), "opening config in editor");
    let status = tokio::process::Command::new(editor)
        .arg(path)
        .status()
        .await
        .map_err(|e| VboxError::EditorFailed {
            editor: editor.into(),
            path: path.into(),
            detail: e.to_string(),
        })?;
    debug!(status = %status, "editor exited");

    if !status.success() {
        return Err(VboxError::EditorFailed {
            editor: editor.into(),
            path: path.into(),
            detail: format!("exited with status {status}"),
        });
    }
    Ok(())
}
