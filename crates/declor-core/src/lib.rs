//! declor-core: Core abstractions for member reordering
//!
//! This crate provides:
//! - `Edit`: A span-based, byte-faithful source replacement
//! - `apply_edits()`: Function to apply a set of non-overlapping edits

mod edit;

pub use edit::{apply_edits, Edit, EditError};
