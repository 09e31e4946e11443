//! Generator configuration types

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Case style applied to member names, file names and directory names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingConvention {
    /// `firstName`
    Camel,
    /// `FirstName`
    Pascal,
    /// `first_name`
    Snake,
    /// `first-name`
    Kebab,
}

/// Naming conventions for generated paths.
///
/// Accepts either a single convention used for both files and directories,
/// or an object naming each one separately:
///
/// ```json
/// { "fileNamingConvention": "kebab" }
/// { "fileNamingConvention": { "file": "camel", "dir": "kebab" } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathNaming {
    Uniform(NamingConvention),
    Split {
        file: NamingConvention,
        dir: NamingConvention,
    },
}

impl PathNaming {
    /// Convention for output file base names
    pub fn file(&self) -> NamingConvention {
        match self {
            PathNaming::Uniform(convention) => *convention,
            PathNaming::Split { file, .. } => *file,
        }
    }

    /// Convention for each output directory segment
    pub fn dir(&self) -> NamingConvention {
        match self {
            PathNaming::Uniform(convention) => *convention,
            PathNaming::Split { dir, .. } => *dir,
        }
    }
}

impl Default for PathNaming {
    fn default() -> Self {
        PathNaming::Uniform(NamingConvention::Kebab)
    }
}

/// Configuration consumed by the generation pipeline.
///
/// Defaults are applied once, during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenConfig {
    /// Root directory for generated files
    pub output_path: PathBuf,

    /// Attribute name that opts a declaration into generation
    #[serde(default = "default_target_annotation")]
    pub target_annotation: String,

    /// Write every declaration into a single `types.ts`
    #[serde(default)]
    pub single_output_file: bool,

    /// Convention for generated member names
    #[serde(default = "default_member_naming")]
    pub naming_convention: NamingConvention,

    /// Convention for generated file and directory names
    #[serde(default)]
    pub file_naming_convention: PathNaming,

    /// Suffix appended to generated file base names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_suffix: Option<String>,

    /// Order single-file output as enums first, then alphabetically
    #[serde(default)]
    pub sort_declarations: bool,
}

fn default_target_annotation() -> String {
    "TypeSharp".to_string()
}

fn default_member_naming() -> NamingConvention {
    NamingConvention::Camel
}

impl CodegenConfig {
    /// Create a configuration with defaults for everything but the output root
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            target_annotation: default_target_annotation(),
            single_output_file: false,
            naming_convention: default_member_naming(),
            file_naming_convention: PathNaming::default(),
            file_suffix: None,
            sort_declarations: false,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodegenResult<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(CodegenError::InvalidConfig(
                "outputPath cannot be empty".to_string(),
            ));
        }

        if !is_identifier(&self.target_annotation) {
            return Err(CodegenError::InvalidConfig(format!(
                "targetAnnotation must be a plain identifier, got '{}'",
                self.target_annotation
            )));
        }

        if let Some(suffix) = &self.file_suffix {
            if suffix.contains(['/', '\\']) {
                return Err(CodegenError::InvalidConfig(format!(
                    "fileSuffix cannot contain path separators, got '{suffix}'"
                )));
            }
        }

        Ok(())
    }
}

/// Check whether a string is a C#-style identifier
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
