use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use vbox::VBoxManage;

mod commands;
mod dispatch;
mod error;
mod registry;
mod settings;

use commands::Context;
use dispatch::Invocation;
use error::CliError;
use registry::Registry;
use settings::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let invocation = Invocation::parse(std::env::args().skip(1));

    // Compact format on stderr, no timestamps, no targets
    let default_level = if invocation.debug() { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let settings = Settings::from_env();
    debug!(?settings, ?invocation, "starting");

    let tool = Arc::new(VBoxManage::new(settings.vboxmanage.clone()));
    let mut ctx = Context::new(
        settings,
        Registry::builtin(),
        tool,
        Box::new(std::io::stdout()),
    );

    let result = dispatch::dispatch(&mut ctx, invocation).await;
    let result = result.and_then(|()| ctx.flush());
    ExitCode::from(finish(result, &mut std::io::stderr()))
}

/// Report the outcome on `err` and pick the exit code.
fn finish(result: error::Result<()>, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e @ CliError::ToolFailed { .. }) => {
            // VBoxManage has already explained itself on stderr.
            debug!(error = %e, "exiting with the tool's status");
            e.exit_code()
        }
        Err(e) => {
            let code = e.exit_code();
            let _ = writeln!(err, "{:?}", miette::Report::new(e));
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_silent() {
        let mut err = Vec::new();
        assert_eq!(finish(Ok(()), &mut err), 0);
        assert!(err.is_empty());
    }

    #[test]
    fn tool_failure_keeps_its_code_and_prints_nothing() {
        let mut err = Vec::new();
        assert_eq!(finish(Err(CliError::ToolFailed { code: 2 }), &mut err), 2);
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut err = Vec::new();
        let code = finish(
            Err(CliError::CommandNotFound {
                name: "frobnicate".into(),
            }),
            &mut err,
        );
        assert_eq!(code, 1);
        let text = String::from_utf8_lossy(&err);
        assert!(text.contains("unknown command"));
        assert!(text.contains("frobnicate"));
    }

    #[test]
    fn usage_error_is_reported() {
        let mut err = Vec::new();
        let code = finish(
            Err(CliError::Usage {
                command: "start".into(),
                detail: "missing <NAME|UUID>".into(),
            }),
            &mut err,
        );
        assert_eq!(code, 1);
        assert!(String::from_utf8_lossy(&err).contains("missing <NAME|UUID>"));
    }
}
