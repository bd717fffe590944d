// src/config/packages.rs

//! Prefix-to-package map for the local registry commands.

/// Maps short prefixes to full package names for `sub`, `unsub` and `dev`.
/// The prefix is arbitrary; it doesn't need to match a folder name.
pub const LOCAL_PACKAGES: &[(&str, &str)] = &[
    ("cc", "@company/client-core"),
    ("tap", "@company/tapestry"),
];

pub fn resolve(prefix: &str) -> Option<&'static str> {
    let normalized = prefix.to_lowercase();
    LOCAL_PACKAGES
        .iter()
        .find(|(p, _)| *p == normalized)
        .map(|(_, name)| *name)
}

/// One `- prefix (package)` line per configured package.
pub fn describe_all() -> Vec<String> {
    LOCAL_PACKAGES
        .iter()
        .map(|(prefix, name)| format!("- {prefix} ({name})"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive_on_the_prefix() {
        assert_eq!(resolve("cc"), Some("@company/client-core"));
        assert_eq!(resolve("CC"), Some("@company/client-core"));
        assert_eq!(resolve("nope"), None);
    }
}
