//! Snapshot diff
//!
//! Applies change detection element-wise to two snapshots of equal length.
//! With the `parallel` feature, large snapshots are compared on the rayon
//! thread pool.

use crate::domain::changed::ChangeDetect;
use thiserror::Error;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_DIFF_THRESHOLD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Errors from snapshot comparison
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Snapshots have different lengths
    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Find the positions whose value changed between two snapshots
///
/// # Arguments
/// * `previous` - The old snapshot
/// * `next` - The new snapshot, same length as `previous`
///
/// # Returns
/// Indices in ascending order where `previous[i].has_changed(&next[i])`
pub fn changed_indices<T: ChangeDetect + Sync>(
    previous: &[T],
    next: &[T],
) -> Result<Vec<usize>, DiffError> {
    check_lengths(previous, next)?;
    Ok(collect_changed(previous, next))
}

/// Check whether any position changed between two snapshots
pub fn any_changed<T: ChangeDetect + Sync>(previous: &[T], next: &[T]) -> Result<bool, DiffError> {
    check_lengths(previous, next)?;
    Ok(find_any_changed(previous, next))
}

// =============================================================================
// Sequential / parallel implementations
// =============================================================================

fn collect_changed_sequential<T: ChangeDetect>(previous: &[T], next: &[T]) -> Vec<usize> {
    previous
        .iter()
        .zip(next)
        .enumerate()
        .filter(|(_, (x, y))| x.has_changed(y))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_changed<T: ChangeDetect>(previous: &[T], next: &[T]) -> Vec<usize> {
    collect_changed_sequential(previous, next)
}

#[cfg(feature = "parallel")]
fn collect_changed<T: ChangeDetect + Sync>(previous: &[T], next: &[T]) -> Vec<usize> {
    if previous.len() < PARALLEL_DIFF_THRESHOLD {
        return collect_changed_sequential(previous, next);
    }

    // Indexed parallel iterators keep ascending order on collect
    previous
        .par_iter()
        .zip(next.par_iter())
        .enumerate()
        .filter(|(_, (x, y))| x.has_changed(y))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn find_any_changed<T: ChangeDetect>(previous: &[T], next: &[T]) -> bool {
    previous.iter().zip(next).any(|(x, y)| x.has_changed(y))
}

#[cfg(feature = "parallel")]
fn find_any_changed<T: ChangeDetect + Sync>(previous: &[T], next: &[T]) -> bool {
    if previous.len() < PARALLEL_DIFF_THRESHOLD {
        return previous.iter().zip(next).any(|(x, y)| x.has_changed(y));
    }

    previous
        .par_iter()
        .zip(next.par_iter())
        .any(|(x, y)| x.has_changed(y))
}

fn check_lengths<T>(previous: &[T], next: &[T]) -> Result<(), DiffError> {
    if previous.len() != next.len() {
        return Err(DiffError::LengthMismatch {
            expected: previous.len(),
            found: next.len(),
        });
    }
    Ok(())
}
