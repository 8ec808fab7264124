//! Turns raw `VBoxManage` output into the status text shown to users.

/// State keywords and the glyph placed in front of each.
pub const MARKERS: &[(&str, &str)] = &[
    ("running", "✅"),
    ("paused", "⏸"),
    ("saved", "💾"),
    ("powered off", "⏹"),
    ("aborted", "❌"),
];

const NAME_LABEL: &str = "Name:";
const STATE_LABEL: &str = "State:";

/// Prefix every state keyword in `text` with its marker.
///
/// The text is scanned once from the left and a keyword is consumed as soon
/// as it is marked, so each occurrence gets exactly one marker whatever the
/// order of [`MARKERS`]. Text without keywords comes back unchanged.
pub fn annotate(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    'scan: while let Some(c) = rest.chars().next() {
        for (keyword, marker) in MARKERS {
            if let Some(tail) = rest.strip_prefix(keyword) {
                out.push_str(marker);
                out.push(' ');
                out.push_str(keyword);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Text after the first `State:` label of `showvminfo` output.
///
/// The long form keeps the parenthetical detail (`running (since ...)`);
/// the short form is only the state itself (`running`).
pub fn extract_state(info: &str, long: bool) -> Option<&str> {
    info.lines()
        .find_map(|line| line.strip_prefix(STATE_LABEL))
        .map(|value| {
            let value = value.trim();
            if long { value } else { bare_state(value) }
        })
}

/// `(name, state)` pairs from `list vms -l` output.
///
/// Each `State:` line is paired with the closest `Name:` line above it;
/// states with no preceding name are skipped.
pub fn list_states(listing: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut name = None;

    for line in listing.lines() {
        if let Some(value) = line.strip_prefix(NAME_LABEL) {
            name = Some(value.trim());
        } else if let Some(value) = line.strip_prefix(STATE_LABEL) {
            if let Some(n) = name.take() {
                pairs.push((n, bare_state(value.trim())));
            }
        }
    }

    pairs
}

fn bare_state(value: &str) -> &str {
    match value.find('(') {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}
