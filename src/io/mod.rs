//! File system helpers.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::errors::SortError;

pub fn read_file(path: &Path) -> Result<String, SortError> {
    fs::read_to_string(path)
        .map_err(|source| SortError::file_system(format!("failed to read {}", path.display()), path, source))
}

pub fn write_file(path: &Path, content: &str) -> Result<(), SortError> {
    fs::write(path, content)
        .map_err(|source| SortError::file_system(format!("failed to write {}", path.display()), path, source))
}

/// All `.sol` files under `root`, honoring gitignore rules, sorted by path so
/// batch runs are deterministic.
pub fn find_solidity_files(root: &Path) -> Result<Vec<PathBuf>, SortError> {
    let mut files = Vec::new();
    let walker = WalkBuilder::new(root).hidden(false).git_ignore(true).build();

    for entry in walker {
        let entry = entry.map_err(|error| SortError::FileSystem {
            message: error.to_string(),
            path: Some(root.to_path_buf()),
            source: None,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("sol") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
