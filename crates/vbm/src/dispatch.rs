//! Turns the raw argument list into exactly one handler call.

use std::collections::BTreeSet;

use tracing::debug;

use crate::commands::Context;
use crate::error::{CliError, Result};
use crate::registry::{CommandSpec, Registry};

/// Flags recognized before the command name (`--debug` anywhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GlobalFlag {
    Help,
    Version,
    Debug,
}

/// The process arguments split into global flags, command and command arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub flags: BTreeSet<GlobalFlag>,
    /// `None` when no command was given.
    pub command: Option<String>,
    pub args: Vec<String>,
}

impl Invocation {
    /// Split `argv` (without the program name).
    ///
    /// `-h`/`--help` and `--version` only count before the command name and
    /// stand in for the `help` and `version` commands. `--debug` is taken out
    /// wherever it appears. Every token after the command name is passed on
    /// untouched.
    pub fn parse<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut invocation = Self::default();

        for token in argv.into_iter().map(Into::into) {
            if token == "--debug" {
                invocation.flags.insert(GlobalFlag::Debug);
                continue;
            }
            if invocation.command.is_some() {
                invocation.args.push(token);
                continue;
            }
            let command = match token.as_str() {
                "-h" | "--help" => {
                    invocation.flags.insert(GlobalFlag::Help);
                    "help".to_string()
                }
                "--version" => {
                    invocation.flags.insert(GlobalFlag::Version);
                    "version".to_string()
                }
                _ => token,
            };
            invocation.command = Some(command);
        }

        invocation
    }

    pub fn debug(&self) -> bool {
        self.flags.contains(&GlobalFlag::Debug)
    }
}

/// Find the handler for `command`, falling back to `default` when no
/// command (or an empty one) was given.
pub fn resolve(
    registry: &Registry,
    command: Option<&str>,
    default: &str,
) -> Result<&'static CommandSpec> {
    let name = command.filter(|c| !c.is_empty()).unwrap_or(default);
    registry.get(name).ok_or_else(|| CliError::CommandNotFound {
        name: name.to_string(),
    })
}

/// Resolve the invocation's command and run it to completion.
pub async fn dispatch(ctx: &mut Context, invocation: Invocation) -> Result<()> {
    let spec = resolve(
        &ctx.registry,
        invocation.command.as_deref(),
        &ctx.settings.default_command,
    )?;
    debug!(command = spec.name, args = ?invocation.args, "dispatching");
    (spec.handler)(ctx, invocation.args).await
}
