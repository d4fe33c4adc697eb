//! Opening - a validated cutout in a wall (door, window, closet, pass)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::entities::int_field;
use crate::error::ParseError;
use crate::value_objects::{Edging, OpeningHeight, OpeningKind, OpeningWidth};

/// Number of comma-separated fields in an opening's serialized form
pub(crate) const OPENING_FIELDS: usize = 4;

/// A cutout in a wall
///
/// Openings are immutable: every field is a validated value object, so an
/// `Opening` cannot exist with an out-of-range dimension. Whether an
/// opening *fits* its wall (the 90% area rule) is the owning wall's
/// invariant, not the opening's.
///
/// # Example
///
/// ```
/// use renoplan_domain::entities::Opening;
/// use renoplan_domain::value_objects::{Edging, OpeningHeight, OpeningKind, OpeningWidth};
///
/// let opening = Opening::new(
///     OpeningKind::Window,
///     OpeningWidth::new(50).unwrap(),
///     OpeningHeight::new(120).unwrap(),
///     Edging::new(10).unwrap(),
/// );
/// assert_eq!(opening.area(), 6_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    kind: OpeningKind,
    width: OpeningWidth,
    height: OpeningHeight,
    edging: Edging,
}

impl Opening {
    /// Create a new opening from pre-validated parts.
    pub fn new(kind: OpeningKind, width: OpeningWidth, height: OpeningHeight, edging: Edging) -> Self {
        Self {
            kind,
            width,
            height,
            edging,
        }
    }

    /// Returns the opening's kind.
    #[inline]
    pub fn kind(&self) -> OpeningKind {
        self.kind
    }

    /// Returns the opening's width in centimetres.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width.value()
    }

    /// Returns the opening's height in centimetres.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height.value()
    }

    /// Returns the edging allowance in centimetres (0 when absent).
    #[inline]
    pub fn edging(&self) -> u32 {
        self.edging.value()
    }

    /// Returns the opening's area in square centimetres.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Returns the opening's perimeter in centimetres.
    #[inline]
    pub fn perimeter(&self) -> u64 {
        (u64::from(self.width()) + u64::from(self.height())) * 2
    }

    // =========================================================================
    // Delimited-text round-trip
    // =========================================================================

    /// Serializes the opening to its comma-separated form:
    /// `kind,width,height,edging`.
    pub fn to_csv_line(&self) -> String {
        format!("{},{},{},{}", self.kind, self.width, self.height, self.edging)
    }

    /// Parses an opening from its comma-separated form.
    ///
    /// Requires exactly 4 fields. Segments are trimmed, converted, and
    /// passed through the same value-object validation as direct
    /// construction.
    pub fn parse_csv_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != OPENING_FIELDS {
            return Err(ParseError::FieldCount {
                expected: "4",
                actual: fields.len(),
            });
        }
        Self::from_fields(&fields)
    }

    /// Parses an opening out of already-split segments. Shared with the
    /// wall parser, which carries an opening as its trailing segments.
    pub(crate) fn from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        let kind = OpeningKind::from_str(fields[0])
            .map_err(|_| ParseError::malformed("opening kind", fields[0].trim()))?;
        let width = OpeningWidth::new(int_field("opening width", fields[1])?)?;
        let height = OpeningHeight::new(int_field("opening height", fields[2])?)?;
        let edging = Edging::new(int_field("edging", fields[3])?)?;
        Ok(Self::new(kind, width, height, edging))
    }
}
