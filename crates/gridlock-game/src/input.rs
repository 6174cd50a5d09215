//! Key-code to cell-value mapping for keyboard-driven front ends.

use std::ops::RangeInclusive;

/// Browser key codes for the top-row digit keys `0`-`9`.
const TOP_ROW: RangeInclusive<usize> = 48..=57;
/// Browser key codes for the numpad digit keys `0`-`9`.
const NUMPAD: RangeInclusive<usize> = 96..=105;
/// Offset from a numpad key code to its digit.
const NUMPAD_OFFSET: usize = 96;

/// Maps a digit-key code to the cell value it enters, or `None` for any
/// other key.
///
/// Both the top-row range (48-57) and the numpad range (96-105) map to the
/// digits 0-9; `0` clears a cell. The board validates the value against its
/// own size, so values beyond a small board's range are rejected there, not
/// here.
///
/// # Examples
///
/// ```
/// use gridlock_game::value_from_key_code;
///
/// assert_eq!(value_from_key_code(49), Some(1)); // top-row '1'
/// assert_eq!(value_from_key_code(97), Some(1)); // numpad '1'
/// assert_eq!(value_from_key_code(65), None); // 'a'
/// ```
#[must_use]
pub fn value_from_key_code(code: usize) -> Option<usize> {
    if TOP_ROW.contains(&code) {
        Some(code - TOP_ROW.start())
    } else if NUMPAD.contains(&code) {
        Some(code - NUMPAD_OFFSET)
    } else {
        None
    }
}
