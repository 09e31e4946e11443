//! Source file discovery

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Build output and dependency directories never scanned
const EXCLUDED_DIRS: [&str; 3] = ["bin", "obj", "node_modules"];

/// Find every `.cs` file under `project_dir`, sorted.
pub fn discover_sources(project_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/**/*.cs",
        glob::Pattern::escape(&project_dir.to_string_lossy())
    );

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("Invalid source pattern: {pattern}"))? {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!(error = %err, "skipping unreadable path");
                continue;
            }
        };

        let relative = path.strip_prefix(project_dir).unwrap_or(&path);
        if is_excluded(relative) {
            debug!(path = %path.display(), "excluded");
            continue;
        }

        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_excluded(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name)),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, relative: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relative(dir: &TempDir, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(dir.path())
                    .unwrap()
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .collect()
    }

    #[test]
    fn discover_sources___finds_nested_cs_files_sorted() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "Models/User.cs");
        touch(&dir, "Program.cs");
        touch(&dir, "Models/Sales/Order.cs");
        touch(&dir, "README.md");

        let files = discover_sources(dir.path()).unwrap();

        assert_eq!(
            relative(&dir, &files),
            vec!["Models/Sales/Order.cs", "Models/User.cs", "Program.cs"]
        );
    }

    #[test]
    fn discover_sources___skips_build_and_dependency_dirs() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "bin/Debug/Generated.cs");
        touch(&dir, "obj/AssemblyInfo.cs");
        touch(&dir, "web/node_modules/pkg/Thing.cs");
        touch(&dir, "Models/Binary.cs");

        let files = discover_sources(dir.path()).unwrap();

        assert_eq!(relative(&dir, &files), vec!["Models/Binary.cs"]);
    }

    #[test]
    fn discover_sources___glob_characters_in_project_dir___are_literal() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "Api [v2]/Models/User.cs");

        let files = discover_sources(&dir.path().join("Api [v2]")).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn is_excluded___only_whole_segments() {
        assert!(is_excluded(Path::new("obj/Foo.cs")));
        assert!(is_excluded(Path::new("a/bin/Foo.cs")));
        assert!(!is_excluded(Path::new("objects/Foo.cs")));
        assert!(!is_excluded(Path::new("Binary.cs")));
    }
}
