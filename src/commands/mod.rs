//! CLI command implementations for solsort operations.
//!
//! Each submodule handles a specific command with its configuration and
//! execution logic:
//! - **sort**: reorder contract functions in files, to stdout or in place
//! - **check**: report files whose function ordering deviates, without
//!   rewriting anything

pub mod check;
pub mod sort;

pub use check::{check_paths, CheckConfig, CheckReport};
pub use sort::{sort_path, SortConfig};
