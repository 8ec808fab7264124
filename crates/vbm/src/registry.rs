use futures_util::future::BoxFuture;

use crate::commands::{
    Context, config, forwarding, info, list, manage, show, start, status, stop,
};
use crate::error::Result;

/// Runs one command with the arguments that followed its name.
pub type Handler = for<'a> fn(&'a mut Context, Vec<String>) -> BoxFuture<'a, Result<()>>;

/// A named command, its help text and its handler.
pub struct CommandSpec {
    pub name: &'static str,
    pub about: &'static str,
    /// Usage lines without the program name.
    pub usage: &'static [&'static str],
    pub handler: Handler,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "commands",
        about: "List available commands",
        usage: &["commands [--raw]"],
        handler: info::run_commands,
    },
    CommandSpec {
        name: "config",
        about: "Open the VirtualBox configuration file in $EDITOR",
        usage: &["config [--path]"],
        handler: config::run,
    },
    CommandSpec {
        name: "forwarding",
        about: "Manage NAT port forwarding rules",
        usage: &[
            "forwarding add <vm-name> <rule-name> <port>",
            "forwarding list <vm-name>",
            "forwarding delete <vm-name> <rule-name>",
        ],
        handler: forwarding::run,
    },
    CommandSpec {
        name: "halt",
        about: "Save the state of a VM and stop it (alias of stop)",
        usage: &["halt (<name>|<uuid>)"],
        handler: stop::run_halt,
    },
    CommandSpec {
        name: "help",
        about: "Show usage, or the help of a single command",
        usage: &["help [<command>]", "-h", "--help"],
        handler: info::run_help,
    },
    CommandSpec {
        name: "kill",
        about: "Power off a VM immediately",
        usage: &["kill (<name>|<uuid>)"],
        handler: stop::run_kill,
    },
    CommandSpec {
        name: "list",
        about: "List VMs, only running ones, or every VM with its state",
        usage: &["list [running|status]"],
        handler: list::run,
    },
    CommandSpec {
        name: "manage",
        about: "Pass arguments straight to VBoxManage",
        usage: &["manage [<tool-option>...] <tool-command>"],
        handler: manage::run,
    },
    CommandSpec {
        name: "pause",
        about: "Pause a running VM",
        usage: &["pause (<name>|<uuid>)"],
        handler: start::run_pause,
    },
    CommandSpec {
        name: "reset",
        about: "Hard-reset a VM",
        usage: &["reset (<name>|<uuid>)"],
        handler: start::run_reset,
    },
    CommandSpec {
        name: "resume",
        about: "Resume a paused VM",
        usage: &["resume (<name>|<uuid>)"],
        handler: start::run_resume,
    },
    CommandSpec {
        name: "show",
        about: "Show everything VBoxManage knows about a VM",
        usage: &["show (<name>|<uuid>)"],
        handler: show::run,
    },
    CommandSpec {
        name: "start",
        about: "Start a VM, optionally without a console window",
        usage: &["start (<name>|<uuid>) [--headless]"],
        handler: start::run_start,
    },
    CommandSpec {
        name: "status",
        about: "Show the state of one VM, or of every VM",
        usage: &["status [(<name>|<uuid>) [--long|-l]]"],
        handler: status::run,
    },
    CommandSpec {
        name: "stop",
        about: "Save the state of a VM and stop it",
        usage: &["stop (<name>|<uuid>)"],
        handler: stop::run_stop,
    },
    CommandSpec {
        name: "version",
        about: "Show the vbm version",
        usage: &["version", "--version"],
        handler: info::run_version,
    },
];

/// The set of invocable commands.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    commands: &'static [CommandSpec],
}

impl Registry {
    /// Every command this binary ships with.
    pub fn builtin() -> Self {
        Self { commands: COMMANDS }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&'static CommandSpec> {
        let commands: &'static [CommandSpec] = self.commands;
        commands.iter().find(|spec| spec.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CommandSpec> + use<> {
        let commands: &'static [CommandSpec] = self.commands;
        commands.iter()
    }
}
