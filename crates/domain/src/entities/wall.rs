//! Wall - a validated entity identified by its plan id
//!
//! # Invariants
//!
//! - `plan_id` is non-blank, trimmed, and immutable after construction
//! - `width` >= 26 cm and `height` >= 100 cm (enforced by the dimension
//!   newtypes)
//! - an attached opening's area stays strictly below 90% of the wall's
//!   own area; the check re-runs whenever a dimension changes, because a
//!   shrinking wall can invalidate a previously acceptable opening
//!
//! A failed mutation returns the error before any field is assigned, so
//! the wall is never observable in an invalid state.

use serde::{Deserialize, Serialize};

use crate::entities::opening::OPENING_FIELDS;
use crate::entities::Opening;
use crate::error::{DomainError, ParseError};
use crate::value_objects::{Color, PlanId, WallHeight, WallWidth};

/// Field counts for a wall's serialized form: bare, or with an opening's
/// four fields appended.
const WALL_FIELDS: usize = 4;
const WALL_FIELDS_WITH_OPENING: usize = WALL_FIELDS + OPENING_FIELDS;

/// A wall within a renovation plan
///
/// # Example
///
/// ```
/// use renoplan_domain::entities::Wall;
/// use renoplan_domain::value_objects::{Color, PlanId, WallHeight, WallWidth};
///
/// let wall = Wall::new(
///     PlanId::new("Plan123").unwrap(),
///     WallWidth::new(200).unwrap(),
///     WallHeight::new(250).unwrap(),
///     Color::new("Blue").unwrap(),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(wall.surface_area(), 50_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WallWire", into = "WallWire")]
pub struct Wall {
    plan_id: PlanId,
    width: WallWidth,
    height: WallHeight,
    color: Color,
    opening: Option<Opening>,
}

impl Wall {
    /// Fraction of the wall's area an opening must stay strictly below.
    pub const MAX_OPENING_RATIO: f64 = 0.90;

    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new wall from pre-validated parts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` with an "Opening limit
    /// exceeded" message when the supplied opening's area is 90% or more
    /// of the wall's own area (the boundary itself fails).
    pub fn new(
        plan_id: PlanId,
        width: WallWidth,
        height: WallHeight,
        color: Color,
        opening: Option<Opening>,
    ) -> Result<Self, DomainError> {
        if let Some(opening) = &opening {
            check_opening_ratio(width, height, opening)?;
        }
        Ok(Self {
            plan_id,
            width,
            height,
            color,
            opening,
        })
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the wall's plan id.
    #[inline]
    pub fn plan_id(&self) -> &PlanId {
        &self.plan_id
    }

    /// Returns the wall's width in centimetres.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width.value()
    }

    /// Returns the wall's height in centimetres.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height.value()
    }

    /// Returns the wall's color.
    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the wall's opening, if any.
    #[inline]
    pub fn opening(&self) -> Option<&Opening> {
        self.opening.as_ref()
    }

    /// Returns the wall's gross area (width x height) in square
    /// centimetres.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Returns the paintable surface area: gross area minus the
    /// opening's area (0 subtracted when no opening is present).
    pub fn surface_area(&self) -> u64 {
        let opening_area = self.opening.as_ref().map_or(0, Opening::area);
        self.area() - opening_area
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Change the wall's width.
    ///
    /// Re-validates the positive/minimum rules and, when an opening is
    /// attached, the 90% area rule against the prospective area. On
    /// failure the previous width is retained.
    pub fn change_width(&mut self, value: i64) -> Result<(), DomainError> {
        let width = WallWidth::new(value)?;
        if let Some(opening) = &self.opening {
            check_opening_ratio(width, self.height, opening)?;
        }
        self.width = width;
        Ok(())
    }

    /// Change the wall's height.
    ///
    /// Same re-validation as [`Wall::change_width`].
    pub fn change_height(&mut self, value: i64) -> Result<(), DomainError> {
        let height = WallHeight::new(value)?;
        if let Some(opening) = &self.opening {
            check_opening_ratio(self.width, height, opening)?;
        }
        self.height = height;
        Ok(())
    }

    /// Change the wall's color. The same non-blank/trim validation as
    /// construction applies.
    pub fn change_color(&mut self, value: impl Into<String>) -> Result<(), DomainError> {
        self.color = Color::new(value)?;
        Ok(())
    }

    /// Attach, replace, or clear the wall's opening, re-checking the 90%
    /// area rule when one is supplied.
    pub fn set_opening(&mut self, opening: Option<Opening>) -> Result<(), DomainError> {
        if let Some(opening) = &opening {
            check_opening_ratio(self.width, self.height, opening)?;
        }
        self.opening = opening;
        Ok(())
    }

    // =========================================================================
    // Delimited-text round-trip
    // =========================================================================

    /// Serializes the wall to its comma-separated form:
    /// `plan_id,width,height,color` with the opening's own form appended
    /// when present. An absent opening leaves a 4-field line, not a
    /// placeholder.
    pub fn to_csv_line(&self) -> String {
        let mut line = format!(
            "{},{},{},{}",
            self.plan_id, self.width, self.height, self.color
        );
        if let Some(opening) = &self.opening {
            line.push(',');
            line.push_str(&opening.to_csv_line());
        }
        line
    }

    /// Parses a wall from its comma-separated form.
    ///
    /// A line must carry exactly 4 fields (no opening) or 8 fields (with
    /// opening). Segments are trimmed and converted before running
    /// through ordinary construction, so parsed data faces the same
    /// validation as directly constructed data.
    pub fn parse_csv_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != WALL_FIELDS && fields.len() != WALL_FIELDS_WITH_OPENING {
            return Err(ParseError::FieldCount {
                expected: "4 or 8",
                actual: fields.len(),
            });
        }

        let plan_id = PlanId::new(fields[0])?;
        let width = WallWidth::new(super::int_field("width", fields[1])?)?;
        let height = WallHeight::new(super::int_field("height", fields[2])?)?;
        let color = Color::new(fields[3])?;
        let opening = if fields.len() == WALL_FIELDS_WITH_OPENING {
            Some(Opening::from_fields(&fields[WALL_FIELDS..])?)
        } else {
            None
        };

        Ok(Self::new(plan_id, width, height, color, opening)?)
    }
}

/// Rejects an opening whose area reaches 90% of the prospective wall
/// area. Integer arithmetic keeps the boundary exact: `10 * opening >=
/// 9 * wall` is the failing condition. The comparison runs in `u128`
/// because a u32 x u32 area scaled by 10 can exceed `u64`.
fn check_opening_ratio(
    width: WallWidth,
    height: WallHeight,
    opening: &Opening,
) -> Result<(), DomainError> {
    let wall_area = u64::from(width.value()) * u64::from(height.value());
    let opening_area = opening.area();
    if u128::from(opening_area) * 10 >= u128::from(wall_area) * 9 {
        return Err(DomainError::invalid(
            "opening",
            opening_area,
            format!(
                "Opening limit exceeded: opening area must stay below 90% of the wall area {wall_area}"
            ),
        ));
    }
    Ok(())
}

// ============================================================================
// Serde wire format
// ============================================================================

/// Intermediate format so deserialized walls re-run the opening-ratio
/// invariant.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WallWire {
    plan_id: PlanId,
    width: WallWidth,
    height: WallHeight,
    color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opening: Option<Opening>,
}

impl TryFrom<WallWire> for Wall {
    type Error = DomainError;

    fn try_from(wire: WallWire) -> Result<Self, Self::Error> {
        Wall::new(wire.plan_id, wire.width, wire.height, wire.color, wire.opening)
    }
}

impl From<Wall> for WallWire {
    fn from(wall: Wall) -> Self {
        Self {
            plan_id: wall.plan_id,
            width: wall.width,
            height: wall.height,
            color: wall.color,
            opening: wall.opening,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Edging, OpeningHeight, OpeningKind, OpeningWidth};

    fn wall(plan_id: &str, width: i64, height: i64, color: &str, opening: Option<Opening>) -> Result<Wall, DomainError> {
        Wall::new(
            PlanId::new(plan_id)?,
            WallWidth::new(width)?,
            WallHeight::new(height)?,
            Color::new(color)?,
            opening,
        )
    }

    fn opening(width: i64, height: i64) -> Opening {
        Opening::new(
            OpeningKind::Window,
            OpeningWidth::new(width).unwrap(),
            OpeningHeight::new(height).unwrap(),
            Edging::new(10).unwrap(),
        )
    }

    mod constructor {
        use super::*;

        #[test]
        fn valid_values_read_back_trimmed() {
            let sut = wall("  Plan123  ", 200, 250, "  Blue ", None).unwrap();
            assert_eq!(sut.plan_id().as_str(), "Plan123");
            assert_eq!(sut.width(), 200);
            assert_eq!(sut.height(), 250);
            assert_eq!(sut.color().as_str(), "Blue");
            assert!(sut.opening().is_none());
        }

        #[test]
        fn valid_values_with_opening() {
            let op = opening(50, 120);
            let sut = wall("Plan456", 300, 250, "White", Some(op)).unwrap();
            assert_eq!(sut.opening(), Some(&op));
        }

        #[test]
        fn blank_plan_id_is_missing_value() {
            for bad in ["", "    "] {
                let err = wall(bad, 200, 250, "Blue", None).unwrap_err();
                assert!(matches!(err, DomainError::MissingValue { .. }));
                assert!(err.to_string().contains("plan id"));
            }
        }

        #[test]
        fn blank_color_is_missing_value() {
            let err = wall("Plan123", 200, 250, "   ", None).unwrap_err();
            assert!(err.to_string().contains("color"));
        }

        #[test]
        fn opening_at_ninety_percent_boundary_fails() {
            // Wall 200 x 250 = 50,000; opening 200 x 225 = 45,000 (exactly 90%)
            let err = wall("Plan123", 200, 250, "Blue", Some(opening(200, 225))).unwrap_err();
            assert!(err.to_string().contains("Opening limit exceeded"));
        }

        #[test]
        fn opening_just_under_ninety_percent_succeeds() {
            // Opening 200 x 220 = 44,000 (88%)
            let sut = wall("Plan123", 200, 250, "Blue", Some(opening(200, 220))).unwrap();
            assert_eq!(sut.surface_area(), 6_000);
        }

        #[test]
        fn enormous_opening_is_rejected_not_wrapped() {
            // 3e9 x 3e9 puts the scaled opening area past u64::MAX; the
            // ratio check must still return an error, not overflow.
            let err = wall(
                "Plan123",
                200,
                250,
                "Blue",
                Some(opening(3_000_000_000, 3_000_000_000)),
            )
            .unwrap_err();
            assert!(err.to_string().contains("Opening limit exceeded"));
        }
    }

    mod derived {
        use super::*;

        #[test]
        fn surface_area_without_opening_is_gross_area() {
            let sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            assert_eq!(sut.surface_area(), 50_000);
        }

        #[test]
        fn surface_area_subtracts_opening() {
            let sut = wall("Plan123", 200, 250, "Blue", Some(opening(50, 120))).unwrap();
            assert_eq!(sut.surface_area(), 50_000 - 6_000);
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn change_width_succeeds() {
            let mut sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            sut.change_width(300).unwrap();
            assert_eq!(sut.width(), 300);
        }

        #[test]
        fn change_width_below_minimum_leaves_state_untouched() {
            let mut sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            let err = sut.change_width(25).unwrap_err();
            assert!(err.to_string().contains("width"));
            assert_eq!(sut.width(), 200);
        }

        #[test]
        fn change_width_rechecks_opening_ratio() {
            // 300 x 250 wall with a 44,000 opening; shrinking to 195 puts
            // the limit at 43,875 < 44,000.
            let mut sut = wall("Plan123", 300, 250, "Blue", Some(opening(200, 220))).unwrap();
            let err = sut.change_width(195).unwrap_err();
            assert!(err.to_string().contains("Opening limit exceeded"));
            assert_eq!(sut.width(), 300);
        }

        #[test]
        fn change_height_succeeds() {
            let mut sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            sut.change_height(300).unwrap();
            assert_eq!(sut.height(), 300);
        }

        #[test]
        fn change_height_below_minimum_fails() {
            let mut sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            let err = sut.change_height(99).unwrap_err();
            assert!(err.to_string().contains("height"));
            assert_eq!(sut.height(), 250);
        }

        #[test]
        fn change_height_rechecks_opening_ratio() {
            // 200 x 300 wall; shrinking height to 240 puts the limit at
            // 43,200 < 44,000.
            let mut sut = wall("Plan123", 200, 300, "Blue", Some(opening(200, 220))).unwrap();
            let err = sut.change_height(240).unwrap_err();
            assert!(err.to_string().contains("Opening limit exceeded"));
            assert_eq!(sut.height(), 300);
        }

        #[test]
        fn change_color_succeeds_and_trims() {
            let mut sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            sut.change_color(" Red ").unwrap();
            assert_eq!(sut.color().as_str(), "Red");
        }

        #[test]
        fn change_color_rejects_blank() {
            let mut sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            for bad in ["", "   "] {
                let err = sut.change_color(bad).unwrap_err();
                assert!(err.to_string().contains("color"));
            }
            assert_eq!(sut.color().as_str(), "Blue");
        }

        #[test]
        fn set_opening_checks_ratio() {
            let mut sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            let err = sut.set_opening(Some(opening(200, 225))).unwrap_err();
            assert!(err.to_string().contains("Opening limit exceeded"));
            assert!(sut.opening().is_none());

            sut.set_opening(Some(opening(50, 120))).unwrap();
            assert!(sut.opening().is_some());

            sut.set_opening(None).unwrap();
            assert!(sut.opening().is_none());
        }
    }

    mod csv {
        use super::*;

        #[test]
        fn serializes_without_opening_as_four_fields() {
            let sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            assert_eq!(sut.to_csv_line(), "Plan123,200,250,Blue");
        }

        #[test]
        fn serializes_with_opening_appended() {
            let op = opening(50, 120);
            let sut = wall("Plan123", 200, 250, "Blue", Some(op)).unwrap();
            assert_eq!(
                sut.to_csv_line(),
                format!("Plan123,200,250,Blue,{}", op.to_csv_line())
            );
        }

        #[test]
        fn round_trip_without_opening() {
            let sut = wall("Plan123", 200, 250, "Blue", None).unwrap();
            let parsed = Wall::parse_csv_line(&sut.to_csv_line()).unwrap();
            assert_eq!(parsed, sut);
        }

        #[test]
        fn round_trip_with_opening() {
            let sut = wall("Plan456", 300, 250, "White", Some(opening(50, 120))).unwrap();
            let parsed = Wall::parse_csv_line(&sut.to_csv_line()).unwrap();
            assert_eq!(parsed, sut);
        }

        #[test]
        fn parse_trims_padded_segments() {
            let parsed = Wall::parse_csv_line(" Plan123 , 200 , 250 , Blue ").unwrap();
            assert_eq!(parsed.plan_id().as_str(), "Plan123");
            assert_eq!(parsed.color().as_str(), "Blue");
        }

        #[test]
        fn parse_rejects_wrong_field_count() {
            for line in ["Plan123,200,250", "Plan123,200,250,Blue,Window,50,120"] {
                let err = Wall::parse_csv_line(line).unwrap_err();
                assert!(err.is_format_error());
                assert!(err.to_string().contains("4 or 8"));
            }
        }

        #[test]
        fn parse_rejects_non_numeric_width_as_format_error() {
            let err = Wall::parse_csv_line("Plan123,two hundred,250,Blue").unwrap_err();
            assert!(err.is_format_error());
        }

        #[test]
        fn parse_surfaces_ratio_violation_as_value_error() {
            let err = Wall::parse_csv_line("Plan123,200,250,Blue,Window,200,225,0").unwrap_err();
            assert!(!err.is_format_error());
            assert!(err.to_string().contains("Opening limit exceeded"));
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn json_round_trip() {
            let sut = wall("Plan123", 200, 250, "Blue", Some(opening(50, 120))).unwrap();
            let json = serde_json::to_string(&sut).unwrap();
            let back: Wall = serde_json::from_str(&json).unwrap();
            assert_eq!(back, sut);
        }

        #[test]
        fn json_violating_ratio_invariant_is_rejected() {
            let json = r#"{
                "planId": "Plan123",
                "width": 200,
                "height": 250,
                "color": "Blue",
                "opening": {"kind": "Window", "width": 200, "height": 225, "edging": 0}
            }"#;
            let result: Result<Wall, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }
    }
}
