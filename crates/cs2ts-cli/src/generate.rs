//! Generate command implementation

use crate::config_file::{self, ProjectConfig};
use crate::discover::discover_sources;
use anyhow::{Context, Result, bail};
use chrono::Utc;
use cs2ts_core::{
    CodegenConfig, DeclarationParser, FileParseResult, OutputLayout, OutputUnit, assemble,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the full pipeline: load config, parse every project, write output.
pub fn run(explicit_config: Option<PathBuf>) -> Result<()> {
    let (config_path, config) = config_file::load(explicit_config)?;

    println!("Using config: {}", config_path.display());
    println!("Output: {}", config.codegen.output_path.display());

    let results = parse_projects(&config)?;
    if results.is_empty() {
        println!(
            "No [{}] declarations found, nothing to generate",
            config.codegen.target_annotation
        );
        return Ok(());
    }

    check_unit_paths(&results, &config.codegen)?;
    let units = assemble(&results, &config.codegen, Utc::now());
    write_units(&config.codegen.output_path, &units)?;

    println!("\n✓ Generated {} file(s)", units.len());
    Ok(())
}

/// Parse every source file of every configured project.
///
/// Files are visited in sorted order per project, projects in configuration
/// order.
pub fn parse_projects(config: &ProjectConfig) -> Result<Vec<FileParseResult>> {
    let parser = DeclarationParser::new(&config.codegen.target_annotation)?;
    let mut results = Vec::new();

    for project_dir in config.project_dirs() {
        let sources = discover_sources(&project_dir)?;
        info!(
            project = %project_dir.display(),
            files = sources.len(),
            "scanning project"
        );

        for source in sources {
            let Some(result) = parser.parse_file(&source, &project_dir)? else {
                continue;
            };

            for declaration in &result.declarations {
                let kind = if declaration.is_enum() { "enum" } else { "class" };
                println!(
                    "  Found {kind} {} in {}",
                    declaration.name,
                    result.relative_path.display()
                );
            }
            results.push(result);
        }
    }

    Ok(results)
}

/// Fail when two source files would be written to the same output file.
///
/// Happens when several projects share a relative path (`Api/Models/User.cs`
/// and `Domain/Models/User.cs`) or when names collapse under the file naming
/// convention. Single-file mode has one unit and never collides.
pub fn check_unit_paths(results: &[FileParseResult], config: &CodegenConfig) -> Result<()> {
    if config.single_output_file {
        return Ok(());
    }

    let layout = OutputLayout::new(config);
    let mut owners: HashMap<PathBuf, &Path> = HashMap::new();

    for result in results {
        let unit = layout.unit_path(&result.relative_path);
        if let Some(previous) = owners.insert(unit.clone(), result.source_file_path.as_path()) {
            bail!(
                "{} and {} both generate {}; rename one of them or use singleOutputFile",
                previous.display(),
                result.source_file_path.display(),
                unit.display()
            );
        }
    }

    Ok(())
}

/// Write every unit, creating directories as needed.
pub fn write_units(output_root: &Path, units: &[OutputUnit]) -> Result<()> {
    fs::create_dir_all(output_root).with_context(|| {
        format!("Failed to create output directory: {}", output_root.display())
    })?;

    for unit in units {
        if let Some(parent) = unit.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&unit.path, &unit.contents)
            .with_context(|| format!("Failed to write {}", unit.path.display()))?;

        println!("Generated: {}", unit.path.display());
    }

    Ok(())
}
