//! Person aggregate - owns an ordered employment history
//!
//! The employment history's natural key is the (title, start date) pair:
//! two positions with the same title may coexist as long as they began on
//! different dates.

use serde::{Deserialize, Serialize};

use crate::common::validate;
use crate::entities::Employment;
use crate::error::DomainError;

/// A person with an employment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PersonWire", into = "PersonWire")]
pub struct Person {
    first_name: String,
    last_name: String,
    positions: Vec<Employment>,
}

impl Person {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new person with zero or more initial positions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` for a blank name and
    /// `DomainError::DuplicateKey` when two supplied positions share a
    /// title and start date.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        positions: Vec<Employment>,
    ) -> Result<Self, DomainError> {
        let first_name = validate::non_blank("first name", first_name)?;
        let last_name = validate::non_blank("last name", last_name)?;
        for (index, position) in positions.iter().enumerate() {
            if positions[..index].iter().any(|seen| is_same_position(seen, position)) {
                return Err(DomainError::duplicate_key(position_key(position)));
            }
        }
        Ok(Self {
            first_name,
            last_name,
            positions,
        })
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the person's first name.
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the person's last name.
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the display name, "Last, First".
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Returns the employment history in insertion order.
    #[inline]
    pub fn positions(&self) -> &[Employment] {
        &self.positions
    }

    /// Returns the current number of positions.
    #[inline]
    pub fn total_positions(&self) -> usize {
        self.positions.len()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Change both names at once. Both are validated before either is
    /// assigned, so a failure leaves the previous names in place.
    pub fn change_full_name(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<(), DomainError> {
        let first_name = validate::non_blank("first name", first_name)?;
        let last_name = validate::non_blank("last name", last_name)?;
        self.first_name = first_name;
        self.last_name = last_name;
        Ok(())
    }

    /// Append a position to the history.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateKey` (message names the title and
    /// start date) when an identical title/start-date pair is already
    /// present.
    pub fn add_employment(&mut self, employment: Employment) -> Result<(), DomainError> {
        if self
            .positions
            .iter()
            .any(|existing| is_same_position(existing, &employment))
        {
            return Err(DomainError::duplicate_key(position_key(&employment)));
        }
        self.positions.push(employment);
        Ok(())
    }

    /// Remove the first position with the given title, returning it.
    ///
    /// The title is trimmed before matching (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` for a blank title and
    /// `DomainError::NotFound` (message includes the searched title)
    /// when no position matches.
    pub fn remove_employment(&mut self, title: &str) -> Result<Employment, DomainError> {
        let title = validate::non_blank("title", title)?;
        let position = self
            .positions
            .iter()
            .position(|p| p.title() == title)
            .ok_or_else(|| DomainError::not_found(&title))?;
        Ok(self.positions.remove(position))
    }
}

fn is_same_position(a: &Employment, b: &Employment) -> bool {
    a.title() == b.title() && a.start_date() == b.start_date()
}

fn position_key(position: &Employment) -> String {
    format!("{} on {}", position.title(), position.start_date())
}

// ============================================================================
// Serde wire format
// ============================================================================

/// Intermediate format so deserialized persons re-run validation.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonWire {
    first_name: String,
    last_name: String,
    #[serde(default)]
    positions: Vec<Employment>,
}

impl TryFrom<PersonWire> for Person {
    type Error = DomainError;

    fn try_from(wire: PersonWire) -> Result<Self, Self::Error> {
        Person::new(wire.first_name, wire.last_name, wire.positions)
    }
}

impl From<Person> for PersonWire {
    fn from(person: Person) -> Self {
        Self {
            first_name: person.first_name,
            last_name: person.last_name,
            positions: person.positions,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
