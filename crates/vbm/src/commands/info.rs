//! Commands that only describe the program itself.

use std::io::Write;

use clap::Parser;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use super::Context;
use crate::dispatch::resolve;
use crate::error::Result;

const PROG: &str = "vbm";

/// Show usage, or the help of a single command
#[derive(Parser)]
pub struct HelpArgs {
    /// Command to describe
    command: Option<String>,
}

/// List available commands
#[derive(Parser)]
pub struct CommandsArgs {
    /// Print bare names, one per line
    #[arg(long)]
    raw: bool,
}

pub fn run_help(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    async move {
        let Some(args) = ctx.parse::<HelpArgs>("help", args)? else {
            return Ok(());
        };

        if let Some(name) = args.command {
            let spec = resolve(&ctx.registry, Some(name.as_str()), "help")?;
            writeln!(ctx.out, "{PROG} {}: {}", spec.name, spec.about)?;
            writeln!(ctx.out)?;
            writeln!(ctx.out, "Usage:")?;
            for line in spec.usage {
                writeln!(ctx.out, "  {PROG} {line}")?;
            }
            return Ok(());
        }

        writeln!(ctx.out, "{PROG}: a terse front end for VBoxManage")?;
        writeln!(ctx.out)?;
        writeln!(ctx.out, "Usage:")?;
        for spec in ctx.registry.iter() {
            for line in spec.usage {
                writeln!(ctx.out, "  {PROG} {line}")?;
            }
        }
        writeln!(ctx.out)?;
        writeln!(ctx.out, "Options:")?;
        writeln!(ctx.out, "  --debug    trace what is being run (any position)")?;
        writeln!(ctx.out)?;
        writeln!(
            ctx.out,
            "Run '{PROG} help <command>' for details on a single command."
        )?;
        Ok(())
    }
    .boxed()
}

pub fn run_commands(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    async move {
        let Some(args) = ctx.parse::<CommandsArgs>("commands", args)? else {
            return Ok(());
        };

        let width = ctx.registry.iter().map(|s| s.name.len()).max().unwrap_or(0);
        for spec in ctx.registry.iter() {
            if args.raw {
                writeln!(ctx.out, "{}", spec.name)?;
            } else {
                writeln!(ctx.out, "{:<width$}  {}", spec.name, spec.about)?;
            }
        }
        Ok(())
    }
    .boxed()
}

pub fn run_version(ctx: &mut Context, _args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    async move {
        writeln!(ctx.out, "{PROG} {}", env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }
    .boxed()
}
