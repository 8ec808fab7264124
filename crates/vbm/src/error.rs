use miette::Diagnostic;
use thiserror::Error;
use vbox::VboxError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("{command}: {detail}")]
    #[diagnostic(
        code(vbm::usage),
        help("run 'vbm help <command>' to see how a command is used")
    )]
    Usage { command: String, detail: String },

    #[error("unknown command '{name}'")]
    #[diagnostic(
        code(vbm::command_not_found),
        help("run 'vbm commands' to list the available commands")
    )]
    CommandNotFound { name: String },

    /// The tool already printed its own error; only the exit code is kept.
    #[error("VBoxManage exited with status {code}")]
    #[diagnostic(code(vbm::tool_failed))]
    ToolFailed { code: i32 },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Vbox(#[from] VboxError),

    #[error("failed to write output")]
    #[diagnostic(code(vbm::output))]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ToolFailed { code } => u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::CommandNotFound { name: "x".into() }.exit_code(), 1);
        assert_eq!(
            CliError::Usage {
                command: "start".into(),
                detail: "missing id".into()
            }
            .exit_code(),
            1
        );
        assert_eq!(CliError::ToolFailed { code: 1 }.exit_code(), 1);
        assert_eq!(CliError::ToolFailed { code: 3 }.exit_code(), 3);
        assert_eq!(CliError::ToolFailed { code: -1 }.exit_code(), 1);
        assert_eq!(CliError::ToolFailed { code: 256 }.exit_code(), 1);
    }
}
