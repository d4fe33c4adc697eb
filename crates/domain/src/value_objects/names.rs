//! Validated string newtypes for domain entities
//!
//! These newtypes ensure that string fields are valid by construction:
//! - Non-empty after trimming
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::validate;
use crate::error::DomainError;

// ============================================================================
// PlanId
// ============================================================================

/// A validated wall plan identifier (non-empty, trimmed)
///
/// The plan id is the natural key distinguishing a wall within its room;
/// comparisons are case-sensitive and exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlanId(String);

impl PlanId {
    /// Create a new validated plan id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` if the id is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self(validate::non_blank("plan id", value)?))
    }

    /// Returns the plan id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlanId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlanId> for String {
    fn from(id: PlanId) -> String {
        id.0
    }
}

// ============================================================================
// Color
// ============================================================================

/// A validated wall color (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Create a new validated color.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` if the color is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self(validate::non_blank("color", value)?))
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.0
    }
}

// ============================================================================
// RoomName
// ============================================================================

/// A validated room name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomName(String);

impl RoomName {
    /// Create a new validated room name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` if the name is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self(validate::non_blank("room name", value)?))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RoomName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RoomName> for String {
    fn from(name: RoomName) -> String {
        name.0
    }
}

// ============================================================================
// ProjectName
// ============================================================================

/// A validated renovation project name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a new validated project name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` if the name is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self(validate::non_blank("project", value)?))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> String {
        name.0
    }
}

// ============================================================================
// Flooring
// ============================================================================

/// A validated flooring description (non-empty, trimmed)
///
/// Flooring is optional on a room, so this type appears as
/// `Option<Flooring>` there. Absence is modeled by `None`; a blank or
/// whitespace-only value is never representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Flooring(String);

impl Flooring {
    /// Create a new validated flooring description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` if the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self(validate::non_blank("flooring", value)?))
    }

    /// Returns the flooring description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Flooring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Flooring {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Flooring> for String {
    fn from(flooring: Flooring) -> String {
        flooring.0
    }
}
