//! Validated entities - objects with identity and enforced field rules
//!
//! Entities are valid by construction: every field arrives as a validated
//! value object, and cross-field invariants are checked in `new()` and
//! re-checked by any mutator that could break them.

pub mod employment;
pub mod opening;
pub mod wall;

pub use employment::Employment;
pub use opening::Opening;
pub use wall::Wall;

use crate::error::ParseError;

/// Converts one trimmed CSV segment to an integer, reporting the segment
/// verbatim on failure.
pub(crate) fn int_field(field: &'static str, segment: &str) -> Result<i64, ParseError> {
    let segment = segment.trim();
    segment
        .parse::<i64>()
        .map_err(|_| ParseError::malformed(field, segment))
}
