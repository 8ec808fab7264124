use std::fmt;

/// Output of a captured tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    pub code: i32,
    pub stdout: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Which `list` listing to ask the tool for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Every registered VM, names and UUIDs only.
    All,
    /// Running VMs only.
    Running,
    /// Every registered VM with full details (`-l`).
    Detailed,
}

/// A host-to-guest TCP port forward on the first NAT adapter.
///
/// Binds to loopback on the host and uses the same port number on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatRule {
    pub name: String,
    pub port: u16,
}

impl NatRule {
    pub fn new(name: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            port,
        }
    }
}

impl fmt::Display for NatRule {
    // name,proto,host-ip,host-port,guest-ip,guest-port
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},tcp,127.0.0.1,{},,{}",
            self.name, self.port, self.port
        )
    }
}

/// A single operation understood by the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmOp {
    Start { id: String, headless: bool },
    SaveState { id: String },
    PowerOff { id: String },
    Pause { id: String },
    Resume { id: String },
    Reset { id: String },
    ShowInfo { id: String },
    List(ListMode),
    NatAdd { vm: String, rule: NatRule },
    NatDelete { vm: String, rule: String },
}

impl VmOp {
    /// The tool's argument vector for this operation.
    pub fn args(&self) -> Vec<String> {
        match self {
            VmOp::Start { id, headless } => {
                let mut args = vec!["startvm".to_string(), id.clone()];
                if *headless {
                    args.extend(["--type".to_string(), "headless".to_string()]);
                }
                args
            }
            VmOp::SaveState { id } => control(id, "savestate"),
            VmOp::PowerOff { id } => control(id, "poweroff"),
            VmOp::Pause { id } => control(id, "pause"),
            VmOp::Resume { id } => control(id, "resume"),
            VmOp::Reset { id } => control(id, "reset"),
            VmOp::ShowInfo { id } => vec!["showvminfo".into(), id.clone()],
            VmOp::List(mode) => {
                let mut args = vec!["list".to_string()];
                match mode {
                    ListMode::All => args.push("vms".into()),
                    ListMode::Running => args.push("runningvms".into()),
                    ListMode::Detailed => args.extend(["vms".to_string(), "-l".to_string()]),
                }
                args
            }
            VmOp::NatAdd { vm, rule } => vec![
                "modifyvm".into(),
                vm.clone(),
                "--natpf1".into(),
                rule.to_string(),
            ],
            VmOp::NatDelete { vm, rule } => vec![
                "controlvm".into(),
                vm.clone(),
                "natpf1".into(),
                "delete".into(),
                rule.clone(),
            ],
        }
    }
}

fn control(id: &str, action: &str) -> Vec<String> {
    vec!["controlvm".into(), id.into(), action.into()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_start_differs_only_by_type_flag() {
        let plain = VmOp::Start {
            id: "box".into(),
            headless: false,
        }
        .args();
        let headless = VmOp::Start {
            id: "box".into(),
            headless: true,
        }
        .args();

        assert_eq!(plain, ["startvm", "box"]);
        assert_eq!(headless, ["startvm", "box", "--type", "headless"]);
        assert_eq!(&headless[..2], &plain[..]);
    }

    #[test]
    fn controlvm_templates() {
        let id = || "4f3c".to_string();
        assert_eq!(
            VmOp::SaveState { id: id() }.args(),
            ["controlvm", "4f3c", "savestate"]
        );
        assert_eq!(
            VmOp::PowerOff { id: id() }.args(),
            ["controlvm", "4f3c", "poweroff"]
        );
        assert_eq!(VmOp::Pause { id: id() }.args(), ["controlvm", "4f3c", "pause"]);
        assert_eq!(
            VmOp::Resume { id: id() }.args(),
            ["controlvm", "4f3c", "resume"]
        );
        assert_eq!(VmOp::Reset { id: id() }.args(), ["controlvm", "4f3c", "reset"]);
    }

    #[test]
    fn list_modes() {
        assert_eq!(VmOp::List(ListMode::All).args(), ["list", "vms"]);
        assert_eq!(VmOp::List(ListMode::Running).args(), ["list", "runningvms"]);
        assert_eq!(VmOp::List(ListMode::Detailed).args(), ["list", "vms", "-l"]);
    }

    #[test]
    fn nat_rule_string() {
        let rule = NatRule::new("tcp5000", 5000);
        assert_eq!(rule.to_string(), "tcp5000,tcp,127.0.0.1,5000,,5000");

        let add = VmOp::NatAdd {
            vm: "box".into(),
            rule,
        };
        assert_eq!(
            add.args(),
            ["modifyvm", "box", "--natpf1", "tcp5000,tcp,127.0.0.1,5000,,5000"]
        );
    }

    #[test]
    fn nat_delete_template() {
        let op = VmOp::NatDelete {
            vm: "box".into(),
            rule: "tcp5000".into(),
        };
        assert_eq!(op.args(), ["controlvm", "box", "natpf1", "delete", "tcp5000"]);
    }
}
