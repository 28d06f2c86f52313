//! Application layer - Use case implementations
//!
//! This module builds batch operations on top of the domain layer.

pub mod diff;
