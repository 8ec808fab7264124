use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use super::Context;
use crate::error::Result;

/// Hand the arguments to VBoxManage untouched.
pub fn run(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    ctx.run_args(args).boxed()
}
