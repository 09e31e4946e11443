//! Output path derivation and the cross-reference index.
//!
//! [`OutputLayout`] is the only place output paths are computed. The index and
//! the assembler both go through it, so an import always points at a path
//! that is actually written.

use crate::config::{CodegenConfig, PathNaming};
use crate::ir::FileParseResult;
use crate::naming::convert;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// Extension of every generated file.
pub const OUTPUT_EXTENSION: &str = "ts";

/// File name used in single-file mode.
pub const SINGLE_FILE_NAME: &str = "types.ts";

/// Maps source-relative paths to output paths.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLayout {
    root: PathBuf,
    naming: PathNaming,
    suffix: Option<String>,
}

impl OutputLayout {
    pub fn new(config: &CodegenConfig) -> Self {
        Self {
            root: config.output_path.clone(),
            naming: config.file_naming_convention,
            suffix: config
                .file_suffix
                .as_deref()
                .map(str::trim)
                .filter(|suffix| !suffix.is_empty())
                .map(str::to_string),
        }
    }

    /// Output root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output path for the unit generated from `relative_source`.
    ///
    /// `Models/OrderLine.cs` with kebab naming and suffix `Dto` becomes
    /// `<root>/models/order-line-dto.ts`.
    pub fn unit_path(&self, relative_source: &Path) -> PathBuf {
        let mut path = self.root.clone();

        if let Some(parent) = relative_source.parent() {
            for component in parent.components() {
                if let Component::Normal(segment) = component {
                    path.push(convert(&segment.to_string_lossy(), self.naming.dir()));
                }
            }
        }

        let stem = relative_source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base = match &self.suffix {
            Some(suffix) => format!("{stem}-{suffix}"),
            None => stem,
        };

        path.push(format!(
            "{}.{OUTPUT_EXTENSION}",
            convert(&base, self.naming.file())
        ));
        path
    }

    /// Output path used in single-file mode.
    pub fn single_file_path(&self) -> PathBuf {
        self.root.join(SINGLE_FILE_NAME)
    }
}

/// Declaration name to output path.
///
/// Built from every parsed file before anything is emitted. Names are global:
/// when two declarations share a name the later one wins.
#[derive(Debug, Clone, Default)]
pub struct ClassLocationIndex {
    locations: HashMap<String, PathBuf>,
}

impl ClassLocationIndex {
    /// Index every declaration of every parsed file.
    pub fn build(results: &[FileParseResult], layout: &OutputLayout) -> Self {
        let mut locations: HashMap<String, PathBuf> = HashMap::new();

        for result in results {
            let unit = layout.unit_path(&result.relative_path);
            for declaration in &result.declarations {
                if let Some(previous) = locations.insert(declaration.name.clone(), unit.clone()) {
                    warn!(
                        name = %declaration.name,
                        previous = %previous.display(),
                        current = %unit.display(),
                        source = %result.source_file_path.display(),
                        "duplicate declaration name, later declaration wins"
                    );
                }
            }
        }

        Self { locations }
    }

    /// Output path of the unit declaring `name`.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.locations.get(name).map(PathBuf::as_path)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locations.len()
    }
}
