//! Ordered-list transfer algorithm.
//!
//! Pure functions that remove an item from one ordered sequence and insert
//! it into the same or another sequence. Inputs are borrowed and never
//! mutated; results are fresh vectors. Destination indices are clamped
//! rather than rejected because pointer geometry can overshoot by one
//! during fast movement.

use thiserror::Error;

/// Precondition failures for the transfer functions.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// The source index does not address an element.
    #[error("source index {index} is out of range for a sequence of length {len}")]
    SourceIndexOutOfRange {
        /// Requested source index.
        index: usize,
        /// Length of the source sequence.
        len: usize,
    },

    /// The element at the source index is not the item being transferred.
    #[error("element at source index {index} is not the transferred item")]
    ItemMismatch {
        /// Requested source index.
        index: usize,
    },
}

/// Clamps an insertion index into `[0, len]`.
///
/// `len` itself is a valid result and means "append".
#[must_use]
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len)
}

/// Moves the element at `from_index` to `to_index` within one sequence.
///
/// `to_index` is interpreted after the removal and clamped to the shortened
/// length, so any index at or past the end appends.
///
/// # Errors
///
/// Returns [`SequenceError::SourceIndexOutOfRange`] when `from_index` does
/// not address an element.
pub fn reorder<T: Clone>(
    sequence: &[T],
    from_index: usize,
    to_index: usize,
) -> Result<Vec<T>, SequenceError> {
    let mut result = sequence.to_vec();
    if from_index >= result.len() {
        return Err(SequenceError::SourceIndexOutOfRange {
            index: from_index,
            len: result.len(),
        });
    }
    if from_index == to_index {
        return Ok(result);
    }
    let item = result.remove(from_index);
    let target = clamp_index(to_index, result.len());
    result.insert(target, item);
    Ok(result)
}

/// Moves `item` from `source[from_index]` into `dest` at `to_index`.
///
/// Returns `(source', dest')`. `to_index` is clamped to `[0, dest.len()]`.
///
/// # Errors
///
/// Returns [`SequenceError::SourceIndexOutOfRange`] when `from_index` does
/// not address an element of `source`, or [`SequenceError::ItemMismatch`]
/// when the element there is not `item`.
pub fn transfer<T: Clone + PartialEq>(
    source: &[T],
    dest: &[T],
    from_index: usize,
    to_index: usize,
    item: &T,
) -> Result<(Vec<T>, Vec<T>), SequenceError> {
    let current = source
        .get(from_index)
        .ok_or(SequenceError::SourceIndexOutOfRange {
            index: from_index,
            len: source.len(),
        })?;
    if current != item {
        return Err(SequenceError::ItemMismatch { index: from_index });
    }

    let mut new_source = source.to_vec();
    new_source.remove(from_index);

    let mut new_dest = dest.to_vec();
    let target = clamp_index(to_index, new_dest.len());
    new_dest.insert(target, item.clone());

    Ok((new_source, new_dest))
}
