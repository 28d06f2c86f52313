//! Shared constants

// =============================================================================
// Hyphenation
// =============================================================================

/// Separator inserted in front of an upper-case letter inside a word
pub const HYPHEN: char = '-';

// =============================================================================
// Batch diff
// =============================================================================

/// Slices shorter than this are compared sequentially even with the
/// `parallel` feature, since splitting work costs more than it saves.
pub const PARALLEL_DIFF_THRESHOLD: usize = 1 << 12; // 4,096
