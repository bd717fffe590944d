// src/commands/scaffold.rs

//! `scaffold`: copy a project template into a new folder.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::templates;
use crate::errors::{Result, ToolbeltError};

pub fn scaffold(project_type: Option<&str>, name: Option<&str>, list: bool) -> Result<()> {
    if list {
        print_templates();
        return Ok(());
    }

    let (Some(project_type), Some(name)) = (project_type, name) else {
        error!("A template type and project name are required. Known templates:");
        print_templates();
        return Ok(());
    };
    let Some(template) = templates::find(project_type) else {
        error!("Unknown template \"{project_type}\". Known templates:");
        print_templates();
        return Ok(());
    };

    let source = templates_root()?.join(template.folder_name);
    if !source.is_dir() {
        return Err(ToolbeltError::ConfigError(format!(
            "template folder {} does not exist",
            source.display()
        )));
    }
    let dest = std::env::current_dir()?.join(name);
    if dest.exists() {
        return Err(ToolbeltError::ConfigError(format!(
            "{} already exists",
            dest.display()
        )));
    }

    copy_dir_recursive(&source, &dest)?;
    info!(
        "Created {} from the {} template",
        dest.display(),
        template.name
    );
    Ok(())
}

/// Template sources live next to the store in the local data directory; the
/// `TOOLBELT_TEMPLATES` env var overrides that for development.
fn templates_root() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("TOOLBELT_TEMPLATES") {
        return Ok(PathBuf::from(dir));
    }
    let dir = dirs::data_local_dir().ok_or_else(|| {
        ToolbeltError::ConfigError("no local data directory available on this platform".to_string())
    })?;
    Ok(dir.join("toolbelt").join("templates"))
}

fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn print_templates() {
    for template in templates::TEMPLATES {
        println!("- {}: {}", template.name, template.description);
    }
}
