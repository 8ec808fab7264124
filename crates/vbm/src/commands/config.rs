use std::io::Write;

use clap::Parser;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use vbox::config::open_in_editor;

use super::Context;
use crate::error::Result;

/// Open the VirtualBox configuration file in $EDITOR
#[derive(Parser)]
pub struct ConfigArgs {
    /// Print the file's path instead of opening it
    #[arg(long)]
    path: bool,
}

pub fn run(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    async move {
        let Some(args) = ctx.parse::<ConfigArgs>("config", args)? else {
            return Ok(());
        };
        let path = ctx.settings.config_path()?;
        if args.path {
            writeln!(ctx.out, "{}", path.display())?;
            return Ok(());
        }
        ctx.flush()?;
        open_in_editor(&ctx.settings.editor, &path).await?;
        Ok(())
    }
    .boxed()
}
