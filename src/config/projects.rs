// src/config/projects.rs

//! Per-developer project table, keyed by repo folder name.
//!
//! A "project" here is just a folder with some settings attached: what
//! `setup` should run, which solution file `open` should prefer, and how
//! `dev` watches it.

/// Settings for one project, looked up by the folder it lives in.
#[derive(Debug, Clone)]
pub struct Project {
    pub folder_name: &'static str,
    /// Relative path to a solution file `open` should prefer.
    pub solution_file_path: Option<&'static str>,
    /// Commands `setup` runs for this project, in order.
    pub setup_commands: &'static [&'static str],
    /// Arguments for the `dev` watch mode's file watcher.
    pub watcher_args: &'static [&'static str],
    /// package.json locations; the first one wins for working-directory
    /// resolution in the local registry commands.
    pub package_json_paths: &'static [&'static str],
}

/// The configured projects. Extend as new repos need `setup`, `open` or
/// `dev` support.
pub const PROJECTS: &[Project] = &[
    Project {
        folder_name: "client-web",
        solution_file_path: None,
        setup_commands: &["yarn client", "yarn server"],
        watcher_args: &[],
        package_json_paths: &["package.json"],
    },
    Project {
        folder_name: "common-api-service",
        solution_file_path: Some("Common.ApiService/Common.ApiService.sln"),
        setup_commands: &[],
        watcher_args: &[],
        package_json_paths: &[],
    },
    Project {
        folder_name: "client-core",
        solution_file_path: None,
        setup_commands: &["yarn install"],
        watcher_args: &["--watch", "src", "--ext", "ts", "--exec", "local-npm publish"],
        package_json_paths: &["packages/core/package.json"],
    },
];

pub fn find_by_folder(folder_name: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.folder_name == folder_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_by_exact_folder_name() {
        assert!(find_by_folder("client-web").is_some());
        assert!(find_by_folder("client-Web").is_none());
        assert!(find_by_folder("unknown").is_none());
    }
}
