use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use vbox::VmOp;

use super::{Context, single};
use crate::error::Result;

/// Save state and stop.
pub fn run_stop(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    single(ctx, "stop", args, save_state).boxed()
}

/// Same tool call as `stop`, reported under its own name.
pub fn run_halt(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    single(ctx, "halt", args, save_state).boxed()
}

fn save_state(id: String) -> VmOp {
    VmOp::SaveState { id }
}

pub fn run_kill(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    single(ctx, "kill", args, |id| VmOp::PowerOff { id }).boxed()
}
