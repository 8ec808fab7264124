use std::io::Write;

use clap::Parser;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::warn;
use vbox::VmOp;
use vbox::status::{annotate, extract_state};

use super::{Context, list};
use crate::error::Result;

/// Show the state of a VM, or of every VM
#[derive(Parser)]
pub struct StatusArgs {
    /// VM name or UUID; every VM when omitted
    #[arg(value_name = "NAME|UUID")]
    id: Option<String>,

    /// Include the detail after the state, such as when it was entered
    #[arg(long, short = 'l')]
    long: bool,

    /// Ignored
    #[arg(hide = true)]
    #[allow(dead_code)]
    extra: Vec<String>,
}

pub fn run(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    async move {
        let Some(args) = ctx.parse::<StatusArgs>("status", args)? else {
            return Ok(());
        };
        let Some(id) = args.id else {
            return list::list_status(ctx).await;
        };

        let info = ctx.capture(VmOp::ShowInfo { id: id.clone() }).await?;
        match extract_state(&info, args.long) {
            Some(state) => writeln!(ctx.out, "{}", annotate(state))?,
            None => warn!(id = %id, "showvminfo reported no state"),
        }
        Ok(())
    }
    .boxed()
}
