//! Validated dimension newtypes (centimetres)
//!
//! Each dimension wraps a `u32` and is valid by construction: strictly
//! positive and at or above its minimum business threshold. Constructors
//! take `i64` so out-of-range caller input (including negatives) is
//! reported verbatim instead of being rejected at the type boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::validate;
use crate::error::DomainError;

// ============================================================================
// WallWidth
// ============================================================================

/// A validated wall width in centimetres (positive, >= 26)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct WallWidth(u32);

impl WallWidth {
    /// Minimum valid wall width: 26 cm
    pub const MINIMUM: u32 = 26;

    /// Create a new validated wall width.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is zero, negative,
    /// or below 26 cm.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        let value = validate::non_zero_positive("width", value)?;
        validate::meets_minimum("width", value, Self::MINIMUM)?;
        Ok(Self(value))
    }

    /// Returns the width in centimetres.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WallWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for WallWidth {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WallWidth> for i64 {
    fn from(width: WallWidth) -> i64 {
        i64::from(width.0)
    }
}

// ============================================================================
// WallHeight
// ============================================================================

/// A validated wall height in centimetres (positive, >= 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct WallHeight(u32);

impl WallHeight {
    /// Minimum valid wall height: 100 cm
    pub const MINIMUM: u32 = 100;

    /// Create a new validated wall height.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is zero, negative,
    /// or below 100 cm.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        let value = validate::non_zero_positive("height", value)?;
        validate::meets_minimum("height", value, Self::MINIMUM)?;
        Ok(Self(value))
    }

    /// Returns the height in centimetres.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WallHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for WallHeight {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WallHeight> for i64 {
    fn from(height: WallHeight) -> i64 {
        i64::from(height.0)
    }
}

// ============================================================================
// OpeningWidth
// ============================================================================

/// A validated opening width in centimetres (positive, >= 50)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct OpeningWidth(u32);

impl OpeningWidth {
    /// Minimum valid opening width: 50 cm
    pub const MINIMUM: u32 = 50;

    /// Create a new validated opening width.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is zero, negative,
    /// or below 50 cm.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        let value = validate::non_zero_positive("opening width", value)?;
        validate::meets_minimum("opening width", value, Self::MINIMUM)?;
        Ok(Self(value))
    }

    /// Returns the width in centimetres.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OpeningWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for OpeningWidth {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OpeningWidth> for i64 {
    fn from(width: OpeningWidth) -> i64 {
        i64::from(width.0)
    }
}

// ============================================================================
// OpeningHeight
// ============================================================================

/// A validated opening height in centimetres (positive, >= 120)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct OpeningHeight(u32);

impl OpeningHeight {
    /// Minimum valid opening height: 120 cm
    pub const MINIMUM: u32 = 120;

    /// Create a new validated opening height.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is zero, negative,
    /// or below 120 cm.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        let value = validate::non_zero_positive("opening height", value)?;
        validate::meets_minimum("opening height", value, Self::MINIMUM)?;
        Ok(Self(value))
    }

    /// Returns the height in centimetres.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OpeningHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for OpeningHeight {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OpeningHeight> for i64 {
    fn from(height: OpeningHeight) -> i64 {
        i64::from(height.0)
    }
}

// ============================================================================
// Edging
// ============================================================================

/// A validated edging allowance in centimetres
///
/// Zero means no edging. If edging is present at all it must be at
/// least 10 cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Edging(u32);

impl Edging {
    /// Minimum valid non-zero edging: 10 cm
    pub const MINIMUM: u32 = 10;

    /// Create a new validated edging allowance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is negative, or
    /// non-zero but below 10 cm.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::invalid(
                "edging",
                value,
                "must be zero or a positive value",
            ));
        }
        let value = u32::try_from(value)
            .map_err(|_| DomainError::invalid("edging", value, "exceeds the supported range"))?;
        if value > 0 {
            validate::meets_minimum("edging", value, Self::MINIMUM)?;
        }
        Ok(Self(value))
    }

    /// An edging of zero (none present).
    pub const fn none() -> Self {
        Self(0)
    }

    /// Returns the edging in centimetres.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for Edging {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for Edging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Edging {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Edging> for i64 {
    fn from(edging: Edging) -> i64 {
        i64::from(edging.0)
    }
}
