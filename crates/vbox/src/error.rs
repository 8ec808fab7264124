use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VboxError>;

#[derive(Debug, Error, Diagnostic)]
pub enum VboxError {
    #[error("external tool '{binary}' was not found")]
    #[diagnostic(
        code(vbox::tool_not_found),
        help("install VirtualBox or point VBM_VBOXMANAGE at the VBoxManage binary")
    )]
    ToolNotFound { binary: String },

    #[error("failed to run '{binary}'")]
    #[diagnostic(code(vbox::spawn_failed))]
    SpawnFailed {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine the home directory")]
    #[diagnostic(code(vbox::no_home), help("set HOME"))]
    NoHomeDir,

    #[error("editor '{editor}' failed on {}: {detail}", .path.display())]
    #[diagnostic(code(vbox::editor_failed), help("set EDITOR to a working editor"))]
    EditorFailed {
        editor: String,
        path: PathBuf,
        detail: String,
    },

    #[error(transparent)]
    #[diagnostic(code(vbox::io))]
    Io(#[from] std::io::Error),
}
