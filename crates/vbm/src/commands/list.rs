use std::io::Write;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use vbox::status::{annotate, list_states};
use vbox::{ListMode, VmOp};

use super::Context;
use crate::error::Result;

/// `running` and `status` pick a listing; anything else lists every VM.
pub fn run(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    async move {
        match args.first().map(String::as_str) {
            Some("running") => ctx.run(VmOp::List(ListMode::Running)).await,
            Some("status") => list_status(ctx).await,
            _ => ctx.run(VmOp::List(ListMode::All)).await,
        }
    }
    .boxed()
}

/// Print `name: state` for every registered VM.
pub(super) async fn list_status(ctx: &mut Context) -> Result<()> {
    let listing = ctx.capture(VmOp::List(ListMode::Detailed)).await?;
    for (name, state) in list_states(&listing) {
        writeln!(ctx.out, "{name}: {}", annotate(state))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use vbox::RecordingTool;

    use crate::commands::testing::context;
    use crate::error::CliError;

    const LISTING: &str = "\
Name:                        web
UUID:                        1111
State:                       running (since 2024-03-01T09:15:42.123000000)

Name:                        db
UUID:                        2222
State:                       powered off (since 2024-02-28T17:00:00.000000000)

Name:                        ci
UUID:                        3333
State:                       aborted (since 2024-02-27T08:00:00.000000000)
";

    #[tokio::test]
    async fn plain_and_running() {
        let tool = Arc::new(RecordingTool::new());
        let (mut ctx, _out) = context(tool.clone());

        run(&mut ctx, vec![]).await.unwrap();
        run(&mut ctx, vec!["running".into()]).await.unwrap();
        assert_eq!(
            tool.calls(),
            vec![vec!["list", "vms"], vec!["list", "runningvms"]]
        );
    }

    #[tokio::test]
    async fn status_mode_annotates_each_vm() {
        let tool = Arc::new(RecordingTool::new().with_stdout(LISTING));
        let (mut ctx, out) = context(tool.clone());

        run(&mut ctx, vec!["status".into()]).await.unwrap();
        assert_eq!(
            out.contents(),
            "web: ✅ running\ndb: ⏹ powered off\nci: ❌ aborted\n"
        );
    }

    #[tokio::test]
    async fn unknown_mode_lists_every_vm() {
        let tool = Arc::new(RecordingTool::new());
        let (mut ctx, _out) = context(tool.clone());

        run(&mut ctx, vec!["foo".into()]).await.unwrap();
        run(&mut ctx, vec!["paused".into(), "extra".into()]).await.unwrap();
        assert_eq!(
            tool.calls(),
            vec![vec!["list", "vms"], vec!["list", "vms"]]
        );
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let tool = Arc::new(RecordingTool::new().with_exit_code(1));
        let (mut ctx, _out) = context(tool.clone());

        let err = run(&mut ctx, vec!["status".into()]).await.unwrap_err();
        assert!(matches!(err, CliError::ToolFailed { code: 1 }));
    }
}
