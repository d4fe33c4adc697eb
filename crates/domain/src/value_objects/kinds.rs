//! Closed enumerations used by the validated entities
//!
//! Both enums round-trip through their `Display`/`FromStr` forms, which is
//! what the CSV line format embeds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The kind of cutout a wall opening represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpeningKind {
    Door,
    Window,
    Closet,
    Pass,
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Door => "Door",
            Self::Window => "Window",
            Self::Closet => "Closet",
            Self::Pass => "Pass",
        };
        write!(f, "{label}")
    }
}

impl FromStr for OpeningKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Door" => Ok(Self::Door),
            "Window" => Ok(Self::Window),
            "Closet" => Ok(Self::Closet),
            "Pass" => Ok(Self::Pass),
            other => Err(DomainError::invalid(
                "opening kind",
                other,
                "is not a known opening kind",
            )),
        }
    }
}

/// Supervisory level attached to an employment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupervisoryLevel {
    Entry,
    TeamMember,
    TeamLeader,
    Supervisor,
    DepartmentHead,
    Owner,
}

impl fmt::Display for SupervisoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Entry => "Entry",
            Self::TeamMember => "TeamMember",
            Self::TeamLeader => "TeamLeader",
            Self::Supervisor => "Supervisor",
            Self::DepartmentHead => "DepartmentHead",
            Self::Owner => "Owner",
        };
        write!(f, "{label}")
    }
}

impl FromStr for SupervisoryLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Entry" => Ok(Self::Entry),
            "TeamMember" => Ok(Self::TeamMember),
            "TeamLeader" => Ok(Self::TeamLeader),
            "Supervisor" => Ok(Self::Supervisor),
            "DepartmentHead" => Ok(Self::DepartmentHead),
            "Owner" => Ok(Self::Owner),
            other => Err(DomainError::invalid(
                "supervisory level",
                other,
                "is not a known supervisory level",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_kind_display_from_str_round_trip() {
        for kind in [
            OpeningKind::Door,
            OpeningKind::Window,
            OpeningKind::Closet,
            OpeningKind::Pass,
        ] {
            let text = kind.to_string();
            assert_eq!(text.parse::<OpeningKind>().unwrap(), kind);
        }
    }

    #[test]
    fn opening_kind_trims_before_matching() {
        assert_eq!(" Window ".parse::<OpeningKind>().unwrap(), OpeningKind::Window);
    }

    #[test]
    fn opening_kind_rejects_unknown_label() {
        let err = "Skylight".parse::<OpeningKind>().unwrap_err();
        assert!(err.to_string().contains("Skylight"));
    }

    #[test]
    fn supervisory_level_display_from_str_round_trip() {
        for level in [
            SupervisoryLevel::Entry,
            SupervisoryLevel::TeamMember,
            SupervisoryLevel::TeamLeader,
            SupervisoryLevel::Supervisor,
            SupervisoryLevel::DepartmentHead,
            SupervisoryLevel::Owner,
        ] {
            let text = level.to_string();
            assert_eq!(text.parse::<SupervisoryLevel>().unwrap(), level);
        }
    }

    #[test]
    fn supervisory_level_rejects_unknown_label() {
        assert!("Boss".parse::<SupervisoryLevel>().is_err());
    }
}
