//! # Quiz Primitives
//!
//! Hardcoded constants of the quiz engine.
//!
//! These are compiled into the binary and immutable at runtime. Catalog
//! content varies; these rules do not.

// =============================================================================
// RANK BREAKPOINTS
// =============================================================================

/// Minimum aggregate percentage for the master tier.
pub const MASTER_THRESHOLD: u32 = 90;

/// Minimum aggregate percentage for the high tier.
pub const HIGH_THRESHOLD: u32 = 70;

/// Minimum aggregate percentage for the medium tier.
///
/// Anything below falls into the low tier.
pub const MEDIUM_THRESHOLD: u32 = 50;

// =============================================================================
// CATALOG LIMITS
// =============================================================================

/// Minimum number of options per question.
pub const MIN_OPTIONS: usize = 2;

/// Maximum number of options per question.
///
/// Options are lettered A..Z by the presentation layer.
pub const MAX_OPTIONS: usize = 26;

/// Maximum accepted size of a serialized catalog (4 MB).
///
/// Validated BEFORE parsing so an oversized document never reaches serde.
pub const MAX_CATALOG_BYTES: usize = 4 * 1024 * 1024;

/// Letter shown for an option index (`0 -> 'A'`).
///
/// Returns `None` past `MAX_OPTIONS`.
#[must_use]
pub fn option_letter(index: usize) -> Option<char> {
    if index < MAX_OPTIONS {
        char::from_u32(u32::from(b'A') + index as u32)
    } else {
        None
    }
}

/// Option index for a letter, case-insensitive (`'b' -> 1`).
#[must_use]
pub fn option_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}
