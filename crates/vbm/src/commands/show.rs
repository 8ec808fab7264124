use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use vbox::VmOp;

use super::{Context, single};
use crate::error::Result;

pub fn run(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    single(ctx, "show", args, |id| VmOp::ShowInfo { id }).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use vbox::RecordingTool;

    use crate::commands::testing::context;
    use crate::error::CliError;

    #[tokio::test]
    async fn show_dumps_vm_info() {
        let tool = Arc::new(RecordingTool::new());
        let (mut ctx, _out) = context(tool.clone());

        run(&mut ctx, vec!["box".into()]).await.unwrap();
        assert_eq!(tool.calls(), vec![vec!["showvminfo", "box"]]);

        assert!(matches!(
            run(&mut ctx, vec![]).await,
            Err(CliError::Usage { .. })
        ));
        assert_eq!(tool.calls().len(), 1);
    }
}
