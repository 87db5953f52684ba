//! Script generation and reconciliation.
//!
//! - `blocks`: splits a script into top-level blocks and the text between them
//! - `pattern`: wildcard patterns telling parameter-only edits from hand edits
//! - `reconcile`: the pure block-level merge
//! - `generator`: file I/O and the replace/update/preserve policy

pub mod blocks;
pub mod generator;
pub mod pattern;
pub mod reconcile;

pub use generator::CodeGenerator;
