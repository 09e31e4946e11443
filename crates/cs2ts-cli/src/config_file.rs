//! Configuration file discovery, parsing and validation

use anyhow::{Context, Result};
use cs2ts_core::CodegenConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names searched in the working directory, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["cs2ts.config.json", "cs2ts.config.toml"];

/// One `.csproj` path or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectFiles {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl ProjectFiles {
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            ProjectFiles::One(path) => std::slice::from_ref(path),
            ProjectFiles::Many(paths) => paths,
        }
    }

    fn paths_mut(&mut self) -> &mut [PathBuf] {
        match self {
            ProjectFiles::One(path) => std::slice::from_mut(path),
            ProjectFiles::Many(paths) => paths,
        }
    }
}

/// cs2ts.config.json / cs2ts.config.toml structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Projects whose directories are scanned for `.cs` files
    pub project_files: ProjectFiles,

    #[serde(flatten)]
    pub codegen: CodegenConfig,
}

impl ProjectConfig {
    /// Load a configuration file, choosing the format from its extension.
    ///
    /// Relative project and output paths are resolved against the directory
    /// holding the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            _ => Self::from_json_str(&content),
        }
        .with_context(|| format!("Invalid config: {}", path.display()))?;

        if let Some(base_dir) = path.parent() {
            config.resolve_relative_to(base_dir);
        }

        Ok(config)
    }

    /// Parse configuration from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON config")
    }

    /// Parse configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML config")
    }

    fn resolve_relative_to(&mut self, base_dir: &Path) {
        for project in self.project_files.paths_mut() {
            if project.is_relative() {
                *project = base_dir.join(&*project);
            }
        }
        if self.codegen.output_path.is_relative() {
            self.codegen.output_path = base_dir.join(&self.codegen.output_path);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.codegen.validate()?;

        let projects = self.project_files.paths();
        if projects.is_empty() {
            anyhow::bail!("projectFiles must name at least one .csproj file");
        }

        for project in projects {
            if !project.exists() {
                anyhow::bail!("Project file not found: {}", project.display());
            }
            if !project.is_file() {
                anyhow::bail!("Project path is not a file: {}", project.display());
            }
            if project.extension().and_then(|ext| ext.to_str()) != Some("csproj") {
                anyhow::bail!("Project file must be a .csproj file: {}", project.display());
            }
        }

        Ok(())
    }

    /// Directories scanned for sources, one per project file
    pub fn project_dirs(&self) -> Vec<PathBuf> {
        self.project_files
            .paths()
            .iter()
            .map(|project| {
                project
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."))
            })
            .collect()
    }
}

/// Find the configuration file to use.
///
/// An explicit path wins; otherwise the first of [`CONFIG_FILE_NAMES`] present
/// in `dir` is used.
pub fn locate(explicit: Option<PathBuf>, dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .with_context(|| {
            format!(
                "No configuration file found in {} (expected {}); run `cs2ts init` to create one",
                dir.display(),
                CONFIG_FILE_NAMES.join(" or ")
            )
        })
}

/// Locate, load and validate the configuration
pub fn load(explicit: Option<PathBuf>) -> Result<(PathBuf, ProjectConfig)> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let path = locate(explicit, &cwd)?;

    let config = ProjectConfig::from_file(&path)?;
    config.validate()?;

    Ok((path, config))
}

/// Check command implementation
pub fn check(explicit: Option<PathBuf>) -> Result<()> {
    let (path, config) = load(explicit)?;

    println!("Checking config: {}", path.display());
    for project in config.project_files.paths() {
        println!("✓ Project: {}", project.display());
    }
    println!("✓ Output: {}", config.codegen.output_path.display());
    println!("✓ Marker: [{}]", config.codegen.target_annotation);
    println!(
        "✓ Mode: {}",
        if config.codegen.single_output_file {
            "single file"
        } else {
            "one file per source"
        }
    );
    println!("\nConfiguration is valid!");

    Ok(())
}
