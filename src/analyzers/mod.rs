//! Source analyzers.
//!
//! One analyzer per supported language; Solidity is the only one today. The
//! analyzer is the boundary to the third-party parser: everything past it
//! works on [`crate::core::Declaration`] records and never touches syntax
//! trees.

pub mod solidity;

pub use solidity::{SolidityAnalyzer, SolidityAst};
