//! Boundary finder
//!
//! Picks the offset at which the next chunk ends. The search starts at the
//! target offset and walks outward in both directions until it reaches a
//! space byte, so a chunk never ends inside a word unless the rest of the
//! text holds no space at all.

use crate::whitespace::is_space;

/// Find the split offset for the next chunk of `text`
///
/// Returns `text.len()` when the remaining text fits in `target` bytes.
/// Otherwise the nearest space at or before `target` (the lower boundary) is
/// preferred when it is no farther than the nearest space after it (the
/// upper boundary) and is not at offset 0. Failing that, the upper boundary
/// is used if one exists before the end of the text, and the whole remaining
/// text otherwise.
///
/// For non-empty `text` and `target >= 1` the result is in `1..=text.len()`.
pub fn find_split_point(text: &[u8], target: usize) -> usize {
    let len = text.len();
    if len <= target {
        return len;
    }

    let mut lower = target;
    while lower > 0 && !is_space(text[lower]) {
        lower -= 1;
    }

    let mut upper = target;
    while upper < len && !is_space(text[upper]) {
        upper += 1;
    }

    if target - lower <= upper - target && lower > 0 {
        lower
    } else if upper < len {
        upper
    } else {
        len
    }
}
