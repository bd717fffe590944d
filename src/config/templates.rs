// src/config/templates.rs

//! Scaffold template registry.

/// One scaffoldable project template.
#[derive(Debug, Clone)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Folder name under the templates root holding the template's files.
    pub folder_name: &'static str,
}

pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        name: "node-cli",
        description: "Can be used to build a node CLI.",
        folder_name: "node-cli-project",
    },
    TemplateInfo {
        name: "rust-cli",
        description: "Starter for a small Rust CLI.",
        folder_name: "rust-cli-project",
    },
];

pub fn find(name: &str) -> Option<&'static TemplateInfo> {
    TEMPLATES.iter().find(|t| t.name == name)
}
