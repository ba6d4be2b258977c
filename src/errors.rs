//! Shared error types for the application

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for solsort operations
#[derive(Debug, Error)]
pub enum SortError {
    /// A function declared a visibility outside the recognized set, or none
    /// at all, while carrying no constructor/receive/fallback role
    #[error(
        "function '{name}' at line {line} has unrecognized visibility '{}'",
        .value.as_deref().unwrap_or("<missing>")
    )]
    UnrecognizedVisibility {
        name: String,
        value: Option<String>,
        line: usize,
    },

    /// A declaration claims to be function-like but is missing the fields
    /// needed to classify it
    #[error("malformed declaration at line {line}: {message}")]
    MalformedDeclaration { line: usize, message: String },

    /// Parsing errors
    #[error("failed to parse {}: {message}", .file.display())]
    Parse { file: PathBuf, message: String },

    /// The Solidity grammar could not be loaded into the parser
    #[error("failed to load Solidity grammar")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// File system related errors
    #[error("file system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl SortError {
    pub fn file_system(message: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }
}
