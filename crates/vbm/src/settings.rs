use std::path::PathBuf;

use vbox::VboxError;
use vbox::config::{self, OsFamily};

pub const DEFAULT_COMMAND_VAR: &str = "VBM_DEFAULT_COMMAND";
pub const VBOXMANAGE_VAR: &str = "VBM_VBOXMANAGE";
pub const EDITOR_VAR: &str = "EDITOR";
pub const OS_TYPE_VAR: &str = "OSTYPE";

const DEFAULT_COMMAND: &str = "help";
const DEFAULT_EDITOR: &str = "vi";

/// Process-wide configuration, read from the environment once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Command run when the invocation names none.
    pub default_command: String,
    /// Override for the VBoxManage binary.
    pub vboxmanage: Option<PathBuf>,
    pub editor: String,
    /// Shell-style OS identifier; `$OSTYPE` is usually not exported, so this
    /// falls back to the target OS.
    pub os_type: String,
    pub home: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        let mut settings = Self::from_lookup(|key| std::env::var(key).ok());
        settings.home = dirs::home_dir();
        settings
    }

    /// Build settings from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            default_command: var(DEFAULT_COMMAND_VAR).unwrap_or_else(|| DEFAULT_COMMAND.into()),
            vboxmanage: var(VBOXMANAGE_VAR).map(PathBuf::from),
            editor: var(EDITOR_VAR).unwrap_or_else(|| DEFAULT_EDITOR.into()),
            os_type: var(OS_TYPE_VAR).unwrap_or_else(|| std::env::consts::OS.into()),
            home: None,
        }
    }

    pub fn os_family(&self) -> OsFamily {
        OsFamily::from_os_type(&self.os_type)
    }

    /// Path of the VirtualBox configuration file for this host.
    pub fn config_path(&self) -> Result<PathBuf, VboxError> {
        let home = self.home.as_deref().ok_or(VboxError::NoHomeDir)?;
        Ok(config::config_path(self.os_family(), home))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings.default_command, "help");
        assert_eq!(settings.editor, "vi");
        assert_eq!(settings.vboxmanage, None);
        assert_eq!(settings.os_type, std::env::consts::OS);
    }

    #[test]
    fn overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("VBM_DEFAULT_COMMAND", "status"),
            ("VBM_VBOXMANAGE", "/opt/vbox/VBoxManage"),
            ("EDITOR", "nano"),
            ("OSTYPE", "darwin23"),
        ]));
        assert_eq!(settings.default_command, "status");
        assert_eq!(settings.vboxmanage, Some(PathBuf::from("/opt/vbox/VBoxManage")));
        assert_eq!(settings.editor, "nano");
        assert_eq!(settings.os_family(), OsFamily::MacOs);
    }

    #[test]
    fn empty_values_are_unset() {
        let settings = Settings::from_lookup(lookup(&[("VBM_DEFAULT_COMMAND", ""), ("EDITOR", "")]));
        assert_eq!(settings.default_command, "help");
        assert_eq!(settings.editor, "vi");
    }

    #[test]
    fn config_path_needs_home() {
        let mut settings = Settings::from_lookup(lookup(&[("OSTYPE", "linux-gnu")]));
        assert!(matches!(settings.config_path(), Err(VboxError::NoHomeDir)));

        settings.home = Some("/home/ada".into());
        assert_eq!(
            settings.config_path().unwrap(),
            PathBuf::from("/home/ada/.config/VirtualBox/VirtualBox.xml")
        );
    }
}
