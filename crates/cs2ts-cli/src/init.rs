//! Init command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};

mod templates {
    pub const JSON_CONFIG: &str = include_str!("../templates/cs2ts.config.json");
    pub const TOML_CONFIG: &str = include_str!("../templates/cs2ts.config.toml");
}

/// Format of the generated sample configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ConfigFormat::Json => "cs2ts.config.json",
            ConfigFormat::Toml => "cs2ts.config.toml",
        }
    }

    fn template(self) -> &'static str {
        match self {
            ConfigFormat::Json => templates::JSON_CONFIG,
            ConfigFormat::Toml => templates::TOML_CONFIG,
        }
    }
}

/// Init command entry point, writing into the working directory
pub fn run(format: ConfigFormat) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    match write_sample(&cwd, format)? {
        Some(path) => {
            println!("Created {}", path.display());
            println!("\nEdit projectFiles and outputPath, then run `cs2ts generate`.");
        }
        None => {
            println!(
                "{} already exists, leaving it unchanged",
                format.file_name()
            );
        }
    }

    Ok(())
}

/// Write the sample configuration into `dir`.
///
/// Returns `None` without touching anything when the file already exists.
pub fn write_sample(dir: &Path, format: ConfigFormat) -> Result<Option<PathBuf>> {
    let path = dir.join(format.file_name());
    if path.exists() {
        return Ok(None);
    }

    fs::write(&path, format.template())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Some(path))
}
