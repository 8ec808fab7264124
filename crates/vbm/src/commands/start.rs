use clap::Parser;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::info;
use vbox::VmOp;

use super::{Context, single};
use crate::error::Result;

/// Start a VM
#[derive(Parser)]
pub struct StartArgs {
    /// VM name or UUID
    #[arg(value_name = "NAME|UUID")]
    id: String,

    /// Start without a console window
    #[arg(long)]
    headless: bool,
}

pub fn run_start(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    async move {
        let Some(args) = ctx.parse::<StartArgs>("start", args)? else {
            return Ok(());
        };
        info!(id = %args.id, headless = args.headless, "starting VM");
        ctx.run(VmOp::Start {
            id: args.id,
            headless: args.headless,
        })
        .await
    }
    .boxed()
}

pub fn run_pause(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    single(ctx, "pause", args, |id| VmOp::Pause { id }).boxed()
}

pub fn run_resume(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    single(ctx, "resume", args, |id| VmOp::Resume { id }).boxed()
}

pub fn run_reset(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    single(ctx, "reset", args, |id| VmOp::Reset { id }).boxed()
}
