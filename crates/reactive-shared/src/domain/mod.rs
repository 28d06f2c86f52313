//! Domain layer - Pure computational logic
//!
//! This module contains pure functions without I/O dependencies.

pub mod changed;
pub mod hyphenate;
pub mod value;
