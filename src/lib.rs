// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod core;
pub mod emit;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::analyzers::{SolidityAnalyzer, SolidityAst};
pub use crate::core::ordering::{classify, classify_and_order, is_canonically_ordered, Category};
pub use crate::core::{ContractScope, Declaration, DeclarationKind, ScopeKind, Span};
pub use crate::emit::reorder_source;
pub use crate::errors::SortError;

use std::path::Path;

/// Parse `source` and return it with every contract-like scope's functions in
/// canonical order. Convenience entry point over the analyzer and emitter.
pub fn reorder_source_text(source: &str, path: &Path) -> Result<String, SortError> {
    let mut analyzer = SolidityAnalyzer::new()?;
    let ast = analyzer.parse(source, path.to_path_buf())?;
    emit::reorder_source(source, &ast.contracts())
}
