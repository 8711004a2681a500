//! Pointer geometry for drop previews.
//!
//! The presentation layer measures the rendered cards; this module only
//! turns those measurements into an insertion index.

/// Returns the insertion index for a pointer at `pointer_y` over a column
/// whose rendered cards have the given vertical midpoints, top to bottom.
///
/// The result is the index of the first card whose midpoint lies below the
/// pointer, or the card count when the pointer is below every midpoint. A
/// pointer exactly on a midpoint counts as below that card.
#[must_use]
pub fn preview_index(pointer_y: f64, card_midpoints: &[f64]) -> usize {
    card_midpoints
        .iter()
        .position(|midpoint| pointer_y < *midpoint)
        .unwrap_or(card_midpoints.len())
}
