pub mod config;
pub mod forwarding;
pub mod info;
pub mod list;
pub mod manage;
pub mod show;
pub mod start;
pub mod status;
pub mod stop;

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use clap::error::ErrorKind;
use vbox::{Manage, VmOp};

use crate::error::{CliError, Result};
use crate::registry::Registry;
use crate::settings::Settings;

/// What every handler gets to work with.
pub struct Context {
    pub settings: Settings,
    pub registry: Registry,
    tool: Arc<dyn Manage>,
    pub out: Box<dyn Write + Send>,
}

/// A single VM name or UUID.
#[derive(Parser)]
pub struct VmArg {
    /// VM name or UUID
    #[arg(value_name = "NAME|UUID")]
    pub id: String,
}

impl Context {
    pub fn new(
        settings: Settings,
        registry: Registry,
        tool: Arc<dyn Manage>,
        out: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            settings,
            registry,
            tool,
            out,
        }
    }

    /// Parse a handler's arguments.
    ///
    /// Returns `None` when `--help` was asked for and has been printed.
    pub fn parse<T: Parser>(&mut self, command: &str, args: Vec<String>) -> Result<Option<T>> {
        let argv = std::iter::once(format!("vbm {command}")).chain(args);
        match T::try_parse_from(argv) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(self.out, "{}", e.render())?;
                Ok(None)
            }
            Err(e) => {
                let rendered = e.render().to_string();
                Err(CliError::Usage {
                    command: command.to_string(),
                    detail: rendered.trim_start_matches("error: ").trim_end().to_string(),
                })
            }
        }
    }

    /// Run `op` with the tool's output going straight to the terminal.
    pub async fn run(&mut self, op: VmOp) -> Result<()> {
        self.run_args(op.args()).await
    }

    /// Run the tool with a raw argument vector.
    pub async fn run_args(&mut self, args: Vec<String>) -> Result<()> {
        // Our own output has to reach the terminal before the child's.
        self.out.flush()?;
        let code = self.tool.run(&args).await?;
        if code != 0 {
            return Err(CliError::ToolFailed { code });
        }
        Ok(())
    }

    /// Run `op` and return what it printed.
    pub async fn capture(&mut self, op: VmOp) -> Result<String> {
        let args = op.args();
        let captured = self.tool.capture(&args).await?;
        if !captured.success() {
            return Err(CliError::ToolFailed {
                code: captured.code,
            });
        }
        Ok(captured.stdout)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Shared body of the single-VM commands.
async fn single(
    ctx: &mut Context,
    command: &'static str,
    args: Vec<String>,
    op: fn(String) -> VmOp,
) -> Result<()> {
    let Some(VmArg { id }) = ctx.parse::<VmArg>(command, args)? else {
        return Ok(());
    };
    ctx.run(op(id)).await
}
