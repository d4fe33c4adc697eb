//! Employment - a validated employment record on a person's history
//!
//! Dates serialize as `%b %d %Y` (e.g. `Jan 05 2025`) so the delimited
//! form never contains an embedded comma.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::common::validate;
use crate::error::{DomainError, ParseError};
use crate::value_objects::SupervisoryLevel;

/// Number of comma-separated fields in an employment's serialized form
const EMPLOYMENT_FIELDS: usize = 4;

/// Date format used in the delimited form (comma-free by construction)
const DATE_FORMAT: &str = "%b %d %Y";

/// Average days per year used when deriving tenure from a start date
const DAYS_PER_YEAR: f64 = 365.2;

/// One employment position in a person's history
///
/// # Invariants
///
/// - `title` is non-blank and trimmed
/// - `start_date` is never in the future
/// - `years` is never negative; when supplied as zero with a start date
///   in the past, it is derived from the elapsed days instead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EmploymentWire", into = "EmploymentWire")]
pub struct Employment {
    title: String,
    level: SupervisoryLevel,
    start_date: NaiveDate,
    years: f64,
}

impl Employment {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new employment record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` for a blank title and
    /// `DomainError::InvalidValue` for a future start date or negative
    /// years.
    pub fn new(
        title: impl Into<String>,
        level: SupervisoryLevel,
        start_date: NaiveDate,
        years: f64,
    ) -> Result<Self, DomainError> {
        let title = validate::non_blank("title", title)?;
        check_start_date(start_date)?;
        let years = validate::zero_or_positive("years", years)?;
        let years = if years == 0.0 {
            derive_years(start_date)
        } else {
            years
        };
        Ok(Self {
            title,
            level,
            start_date,
            years,
        })
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the position title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the supervisory level.
    #[inline]
    pub fn level(&self) -> SupervisoryLevel {
        self.level
    }

    /// Returns the start date.
    #[inline]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the years spent in the position, to one decimal place.
    #[inline]
    pub fn years(&self) -> f64 {
        self.years
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Change the supervisory level.
    pub fn set_level(&mut self, level: SupervisoryLevel) {
        self.level = level;
    }

    /// Correct the start date, recomputing the years in position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` for a future date; the
    /// existing date and years are retained.
    pub fn correct_start_date(&mut self, start_date: NaiveDate) -> Result<(), DomainError> {
        check_start_date(start_date)?;
        self.start_date = start_date;
        self.years = derive_years(start_date);
        Ok(())
    }

    // =========================================================================
    // Delimited-text round-trip
    // =========================================================================

    /// Serializes the record to its comma-separated form:
    /// `title,level,start date,years`.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.title,
            self.level,
            self.start_date.format(DATE_FORMAT),
            self.years
        )
    }

    /// Parses an employment record from its comma-separated form.
    ///
    /// Requires exactly 4 fields; segments are trimmed and converted
    /// before passing through ordinary construction.
    pub fn parse_csv_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != EMPLOYMENT_FIELDS {
            return Err(ParseError::FieldCount {
                expected: "4",
                actual: fields.len(),
            });
        }

        let title = fields[0].trim();
        let level = SupervisoryLevel::from_str(fields[1])
            .map_err(|_| ParseError::malformed("level", fields[1].trim()))?;
        let start_date = NaiveDate::parse_from_str(fields[2].trim(), DATE_FORMAT)
            .map_err(|_| ParseError::malformed("start date", fields[2].trim()))?;
        let years = parse_years(fields[3])?;

        Ok(Self::new(title, level, start_date, years)?)
    }
}

fn parse_years(segment: &str) -> Result<f64, ParseError> {
    let segment = segment.trim();
    segment
        .parse::<f64>()
        .map_err(|_| ParseError::malformed("years", segment))
}

fn check_start_date(start_date: NaiveDate) -> Result<(), DomainError> {
    let today = Utc::now().date_naive();
    if start_date > today {
        return Err(DomainError::invalid(
            "start date",
            start_date,
            "cannot be in the future",
        ));
    }
    Ok(())
}

/// Tenure derived from elapsed calendar days, rounded to one decimal.
fn derive_years(start_date: NaiveDate) -> f64 {
    let today = Utc::now().date_naive();
    let days = (today - start_date).num_days();
    if days <= 0 {
        return 0.0;
    }
    ((days as f64 / DAYS_PER_YEAR) * 10.0).round() / 10.0
}

// ============================================================================
// Serde wire format
// ============================================================================

/// Intermediate format so deserialized records re-run validation.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmploymentWire {
    title: String,
    level: SupervisoryLevel,
    start_date: NaiveDate,
    years: f64,
}

impl TryFrom<EmploymentWire> for Employment {
    type Error = DomainError;

    fn try_from(wire: EmploymentWire) -> Result<Self, Self::Error> {
        Employment::new(wire.title, wire.level, wire.start_date, wire.years)
    }
}

impl From<Employment> for EmploymentWire {
    fn from(employment: Employment) -> Self {
        Self {
            title: employment.title,
            level: employment.level,
            start_date: employment.start_date,
            years: employment.years,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
