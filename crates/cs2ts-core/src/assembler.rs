//! Grouping emitted declarations into output files.
//!
//! # Unit layout
//!
//! ```text
//! /**
//!  * Auto-generated by cs2ts
//!  * Generated at: 2026-01-01T00:00:00.000Z
//!  * Do not edit this file manually
//!  */
//!
//! import type { Address } from './address';
//!
//! export interface User {
//!   home: Address;
//! }
//! ```
//!
//! The import block is omitted when empty and is never produced in
//! single-file mode.

use crate::config::CodegenConfig;
use crate::emitter::emit_declaration;
use crate::index::{ClassLocationIndex, OutputLayout};
use crate::ir::{DeclarationBody, FileParseResult, SourceDeclaration};
use crate::resolver::{primitive_for, resolve};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Destination path, under the configured output root.
    pub path: PathBuf,

    /// Complete file contents.
    pub contents: String,
}

/// The comment block opening every generated file.
pub fn file_header(generated_at: DateTime<Utc>) -> String {
    format!(
        "/**\n * Auto-generated by cs2ts\n * Generated at: {}\n * Do not edit this file manually\n */",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Build every output unit for a batch of parsed files.
///
/// In multi-file mode the cross-reference index is built from all results
/// before any unit is rendered. Nothing is written to disk. An empty batch
/// produces no units.
pub fn assemble(
    results: &[FileParseResult],
    config: &CodegenConfig,
    generated_at: DateTime<Utc>,
) -> Vec<OutputUnit> {
    if results.iter().all(|result| result.declarations.is_empty()) {
        debug!("no declarations to assemble");
        return Vec::new();
    }

    let layout = OutputLayout::new(config);
    let header = file_header(generated_at);

    let units = if config.single_output_file {
        vec![assemble_single(results, config, &layout, &header)]
    } else {
        let index = ClassLocationIndex::build(results, &layout);
        results
            .iter()
            .filter(|result| !result.declarations.is_empty())
            .map(|result| assemble_unit(result, config, &layout, &index, &header))
            .collect()
    };

    info!(units = units.len(), "assembled output");
    units
}

fn assemble_single(
    results: &[FileParseResult],
    config: &CodegenConfig,
    layout: &OutputLayout,
    header: &str,
) -> OutputUnit {
    let mut declarations: Vec<&SourceDeclaration> = results
        .iter()
        .flat_map(|result| &result.declarations)
        .collect();

    if config.sort_declarations {
        declarations.sort_by(|a, b| {
            b.is_enum()
                .cmp(&a.is_enum())
                .then_with(|| a.name.cmp(&b.name))
        });
    }

    let rendered: Vec<String> = declarations
        .iter()
        .map(|declaration| emit_declaration(declaration, config.naming_convention))
        .collect();

    OutputUnit {
        path: layout.single_file_path(),
        contents: render_unit(header, &[], &rendered),
    }
}

fn assemble_unit(
    result: &FileParseResult,
    config: &CodegenConfig,
    layout: &OutputLayout,
    index: &ClassLocationIndex,
    header: &str,
) -> OutputUnit {
    let path = layout.unit_path(&result.relative_path);
    let imports = import_lines(result, &path, index);

    let rendered: Vec<String> = result
        .declarations
        .iter()
        .map(|declaration| emit_declaration(declaration, config.naming_convention))
        .collect();

    OutputUnit {
        contents: render_unit(header, &imports, &rendered),
        path,
    }
}

fn render_unit(header: &str, imports: &[String], declarations: &[String]) -> String {
    let mut contents = String::from(header);
    contents.push_str("\n\n");

    if !imports.is_empty() {
        contents.push_str(&imports.join("\n"));
        contents.push_str("\n\n");
    }

    contents.push_str(&declarations.join("\n\n"));
    contents.push('\n');
    contents
}

/// Import statements needed by one unit, ordered by relative path.
fn import_lines(result: &FileParseResult, unit_path: &Path, index: &ClassLocationIndex) -> Vec<String> {
    let local: HashSet<&str> = result
        .declarations
        .iter()
        .map(|declaration| declaration.name.as_str())
        .collect();

    let mut by_path: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for declaration in &result.declarations {
        let DeclarationBody::Class(shape) = &declaration.body else {
            continue;
        };

        for name in referenced_names(declaration) {
            if local.contains(name.as_str())
                || shape.generic_parameters.contains(&name)
                || primitive_for(&name).is_some()
            {
                continue;
            }

            match index.get(&name) {
                Some(target) if target != unit_path => {
                    by_path
                        .entry(relative_import_path(unit_path, target))
                        .or_default()
                        .insert(name);
                }
                Some(_) => {}
                None => debug!(name = %name, "reference not in index, no import"),
            }
        }
    }

    by_path
        .into_iter()
        .map(|(path, names)| {
            let names: Vec<String> = names.into_iter().collect();
            format!("import type {{ {} }} from '{path}';", names.join(", "))
        })
        .collect()
}

/// Every type name a class declaration refers to: its base type, the base
/// type's arguments and everything reachable from member types.
fn referenced_names(declaration: &SourceDeclaration) -> Vec<String> {
    let DeclarationBody::Class(shape) = &declaration.body else {
        return Vec::new();
    };

    let mut names = Vec::new();

    let base_types = shape
        .inherits_from
        .iter()
        .chain(&shape.base_generic_arguments)
        .map(|text| resolve(text));
    for resolved in base_types {
        let mut refs = Vec::new();
        resolved.ty.collect_references(&mut refs);
        names.extend(refs.into_iter().map(str::to_string));
    }

    for member in &shape.members {
        let mut refs = Vec::new();
        member.ty.collect_references(&mut refs);
        names.extend(refs.into_iter().map(str::to_string));
    }

    names
}

/// Module specifier for importing `to` from a file at `from`.
///
/// The extension is dropped, separators are always `/`, and a path that does
/// not climb out of the current directory starts with `./`.
pub fn relative_import_path(from: &Path, to: &Path) -> String {
    let from_dir: Vec<String> = from
        .parent()
        .map(path_segments)
        .unwrap_or_default();
    let target = path_segments(&to.with_extension(""));

    let common = from_dir
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    parts.extend(std::iter::repeat_n("..", from_dir.len() - common));
    parts.extend(target[common..].iter().map(String::as_str));

    let joined = parts.join("/");
    if joined.starts_with("../") {
        joined
    } else {
        format!("./{joined}")
    }
}

fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
#[path = "assembler/assembler_tests.rs"]
mod assembler_tests;
