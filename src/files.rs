//! Source-file collection for the scan command.
//!
//! Directory targets are walked gitignore-aware; only files whose extension
//! is in the configured list are analyzed. The engine itself never touches
//! the filesystem, so everything here belongs to the CLI boundary.

use crate::rules::Language;
use std::path::{Path, PathBuf};

/// Maps a file extension to the language its rule sets are gated on.
pub fn language_for_extension(ext: &str) -> Language {
    match ext {
        "swift" => Language::Swift,
        "js" | "mjs" | "jsx" => Language::JavaScript,
        _ => Language::Unrecognized,
    }
}

pub fn language_for_path(path: &Path) -> Language {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    language_for_extension(ext)
}

/// Collects the files to analyze under `target`. A file target is returned
/// as-is; a directory is walked recursively, honoring .gitignore.
pub fn collect_source_files(target: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if target.is_file() {
        return vec![target.to_path_buf()];
    }

    let mut files = Vec::new();
    let walker = ignore::WalkBuilder::new(target)
        .hidden(false)
        .git_ignore(true)
        .build();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if extensions.iter().any(|e| e == ext) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_language_for_extension() {
        assert_eq!(language_for_extension("swift"), Language::Swift);
        assert_eq!(language_for_extension("js"), Language::JavaScript);
        assert_eq!(language_for_extension("mjs"), Language::JavaScript);
        assert_eq!(language_for_extension("py"), Language::Unrecognized);
        assert_eq!(language_for_extension(""), Language::Unrecognized);
    }

    #[test]
    fn test_collect_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.swift"), "let x = 1").unwrap();
        fs::write(dir.path().join("b.js"), "const y = 2;").unwrap();
        fs::write(dir.path().join("c.py"), "z = 3").unwrap();

        let files = collect_source_files(
            dir.path(),
            &["swift".to_string(), "js".to_string()],
        );
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| {
            let ext = f.extension().unwrap().to_str().unwrap();
            ext == "swift" || ext == "js"
        }));
    }

    #[test]
    fn test_collect_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Sources/App");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("main.swift"), "print(\"hi\")").unwrap();

        let files = collect_source_files(dir.path(), &["swift".to_string()]);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_file_target_returned_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("only.py");
        fs::write(&file, "z = 3").unwrap();

        // Extension filtering only applies to directory walks
        let files = collect_source_files(&file, &["swift".to_string()]);
        assert_eq!(files, vec![file]);
    }
}
