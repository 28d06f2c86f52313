//! reactive-shared - Shared helpers for reactive view layers
//!
//! This crate provides functionality to:
//! - Convert camelCase identifiers to hyphen-case (`fooBar` -> `foo-bar`)
//! - Detect whether a value has changed, with signed-zero and NaN awareness
//! - Diff two snapshots of values element by element

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use app::diff::{DiffError, any_changed, changed_indices};
pub use domain::changed::{ChangeDetect, has_changed};
pub use domain::hyphenate::hyphenate;
pub use domain::value::Value;
