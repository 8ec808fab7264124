use std::io::Write;

use clap::{Parser, Subcommand};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::info;
use vbox::{NatRule, VmOp, forwarding};

use super::Context;
use crate::error::Result;

/// Manage NAT port forwarding rules on the first network adapter
#[derive(Parser)]
#[command(arg_required_else_help = true)]
pub struct ForwardingArgs {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Forward a loopback host port to the same guest port
    Add {
        #[arg(value_name = "VM-NAME")]
        vm: String,
        #[arg(value_name = "RULE-NAME")]
        rule: String,
        port: u16,
    },
    /// Show the forwarding rules of a VM
    List {
        #[arg(value_name = "VM-NAME")]
        vm: String,
    },
    /// Remove a forwarding rule
    Delete {
        #[arg(value_name = "VM-NAME")]
        vm: String,
        #[arg(value_name = "RULE-NAME")]
        rule: String,
    },
}

pub fn run(ctx: &mut Context, args: Vec<String>) -> BoxFuture<'_, Result<()>> {
    async move {
        let Some(args) = ctx.parse::<ForwardingArgs>("forwarding", args)? else {
            return Ok(());
        };
        match args.action {
            Action::Add { vm, rule, port } => {
                let rule = NatRule::new(rule, port);
                info!(vm = %vm, rule = %rule, "adding port forward");
                ctx.run(VmOp::NatAdd { vm, rule }).await
            }
            Action::List { vm } => {
                let info = ctx.capture(VmOp::ShowInfo { id: vm }).await?;
                let rules = forwarding::rules(&info);
                if rules.is_empty() {
                    writeln!(ctx.out, "No forwarding rules.")?;
                }
                for rule in rules {
                    writeln!(ctx.out, "{rule}")?;
                }
                Ok(())
            }
            Action::Delete { vm, rule } => {
                info!(vm = %vm, rule = %rule, "deleting port forward");
                ctx.run(VmOp::NatDelete { vm, rule }).await
            }
        }
    }
    .boxed()
}
