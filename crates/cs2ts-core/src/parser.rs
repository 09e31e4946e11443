//! Annotation-driven declaration extraction.
//!
//! Extraction is textual: comments are stripped, every marker occurrence is
//! located with a regex, and the declaration that follows is read with the
//! balanced-bracket scanners in [`crate::scan`]. Declarations that do not fit
//! the recognised enum or class shape are skipped.

pub mod comments;
mod locator;
mod members;

use crate::error::{CodegenError, CodegenResult};
use crate::ir::{FileParseResult, SourceDeclaration};
use regex::Regex;
use std::path::Path;
use tracing::debug;

pub use comments::strip_comments;

/// Extracts declarations carrying one marker attribute.
#[derive(Debug, Clone)]
pub struct DeclarationParser {
    marker: Regex,
}

impl DeclarationParser {
    /// Compile the marker pattern for `marker` (for example `TypeSharp`).
    pub fn new(marker: &str) -> CodegenResult<Self> {
        Ok(Self {
            marker: locator::marker_regex(marker)?,
        })
    }

    /// Extract every annotated declaration from source text, in source order.
    pub fn parse_source(&self, source: &str) -> Vec<SourceDeclaration> {
        let cleaned = strip_comments(source);
        locator::locate_declarations(&cleaned, &self.marker)
    }

    /// Read and parse one source file.
    ///
    /// Returns `Ok(None)` when the file has no annotated declarations. The
    /// relative path is taken against `project_dir`; a file outside it keeps
    /// just its file name.
    pub fn parse_file(
        &self,
        path: &Path,
        project_dir: &Path,
    ) -> CodegenResult<Option<FileParseResult>> {
        let source = std::fs::read_to_string(path).map_err(|source| CodegenError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let declarations = self.parse_source(&source);
        if declarations.is_empty() {
            debug!(path = %path.display(), "no annotated declarations");
            return Ok(None);
        }

        let relative_path = match path.strip_prefix(project_dir) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path.file_name().map(Into::into).unwrap_or_default(),
        };

        debug!(
            path = %path.display(),
            count = declarations.len(),
            "parsed declarations"
        );

        Ok(Some(FileParseResult {
            source_file_path: path.to_path_buf(),
            relative_path,
            declarations,
        }))
    }
}

/// Convenience wrapper compiling the marker and parsing one source text.
pub fn parse_source(source: &str, marker: &str) -> CodegenResult<Vec<SourceDeclaration>> {
    Ok(DeclarationParser::new(marker)?.parse_source(source))
}
