const NIC_PREFIX: &str = "NIC";
const RULE_MARKER: &str = "Rule";

/// Port-forwarding rule lines (`NIC 1 Rule(0): ...`) from `showvminfo` output.
pub fn rules(info: &str) -> Vec<&str> {
    info.lines()
        .filter(|line| line.starts_with(NIC_PREFIX) && line.contains(RULE_MARKER))
        .collect()
}
