//! Room aggregate - owns an ordered, uniquely-keyed collection of walls
//!
//! # Invariants
//!
//! - `project` and `name` are non-blank and trimmed (enforced by newtypes)
//! - `flooring` is optional; absence is permitted, a blank value is not
//! - no two walls share a plan id (case-sensitive, exact match)
//! - wall order is insertion order; removal preserves the relative order
//!   of the remaining walls

use serde::{Deserialize, Serialize};

use crate::common::validate;
use crate::entities::Wall;
use crate::error::DomainError;
use crate::value_objects::{Flooring, ProjectName, RoomName};

/// A room within a renovation project
///
/// # Example
///
/// ```
/// use renoplan_domain::aggregates::Room;
/// use renoplan_domain::value_objects::{ProjectName, RoomName};
///
/// let room = Room::new(
///     ProjectName::new("ProjectA").unwrap(),
///     RoomName::new("Kitchen").unwrap(),
///     None,
///     Vec::new(),
/// )
/// .unwrap();
///
/// assert_eq!(room.total_walls(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomWire", into = "RoomWire")]
pub struct Room {
    project: ProjectName,
    name: RoomName,
    flooring: Option<Flooring>,
    walls: Vec<Wall>,
}

impl Room {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new room with zero or more initial walls.
    ///
    /// Callers with no walls pass `Vec::new()`; there is no separate
    /// "absent list" state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateKey` naming the first plan id that
    /// appears more than once in the supplied walls.
    pub fn new(
        project: ProjectName,
        name: RoomName,
        flooring: Option<Flooring>,
        walls: Vec<Wall>,
    ) -> Result<Self, DomainError> {
        for (index, wall) in walls.iter().enumerate() {
            if walls[..index]
                .iter()
                .any(|seen| seen.plan_id() == wall.plan_id())
            {
                return Err(DomainError::duplicate_key(wall.plan_id().as_str()));
            }
        }
        Ok(Self {
            project,
            name,
            flooring,
            walls,
        })
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the project this room belongs to.
    #[inline]
    pub fn project(&self) -> &ProjectName {
        &self.project
    }

    /// Returns the room's name.
    #[inline]
    pub fn name(&self) -> &RoomName {
        &self.name
    }

    /// Returns the room's flooring, if one has been chosen.
    #[inline]
    pub fn flooring(&self) -> Option<&Flooring> {
        self.flooring.as_ref()
    }

    /// Returns the walls in insertion order.
    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Returns the current number of walls. Always reflects the live
    /// collection; nothing is cached.
    #[inline]
    pub fn total_walls(&self) -> usize {
        self.walls.len()
    }

    /// Looks up a wall by plan id (trimmed, case-sensitive).
    pub fn wall(&self, plan_id: &str) -> Option<&Wall> {
        let plan_id = plan_id.trim();
        self.walls.iter().find(|w| w.plan_id().as_str() == plan_id)
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Rename the room.
    pub fn set_name(&mut self, name: RoomName) {
        self.name = name;
    }

    /// Reassign the room to a different project.
    pub fn set_project(&mut self, project: ProjectName) {
        self.project = project;
    }

    /// Choose or clear the room's flooring.
    pub fn set_flooring(&mut self, flooring: Option<Flooring>) {
        self.flooring = flooring;
    }

    /// Append a wall to the room.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateKey` (message includes the plan
    /// id) when a wall with the same plan id is already present.
    pub fn add_wall(&mut self, wall: Wall) -> Result<(), DomainError> {
        if self
            .walls
            .iter()
            .any(|existing| existing.plan_id() == wall.plan_id())
        {
            return Err(DomainError::duplicate_key(wall.plan_id().as_str()));
        }
        self.walls.push(wall);
        Ok(())
    }

    /// Remove the wall with the given plan id, returning it.
    ///
    /// The key is trimmed before matching. Relative order of the
    /// remaining walls is preserved.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingValue` for a blank key and
    /// `DomainError::NotFound` (message includes the searched key) when
    /// no wall matches.
    pub fn remove_wall(&mut self, plan_id: &str) -> Result<Wall, DomainError> {
        let plan_id = validate::non_blank("plan id", plan_id)?;
        let position = self
            .walls
            .iter()
            .position(|wall| wall.plan_id().as_str() == plan_id)
            .ok_or_else(|| DomainError::not_found(&plan_id))?;
        Ok(self.walls.remove(position))
    }
}

// ============================================================================
// Serde wire format
// ============================================================================

/// Intermediate format so deserialized rooms re-run the duplicate-key
/// invariant.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoomWire {
    project: ProjectName,
    name: RoomName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flooring: Option<Flooring>,
    #[serde(default)]
    walls: Vec<Wall>,
}

impl TryFrom<RoomWire> for Room {
    type Error = DomainError;

    fn try_from(wire: RoomWire) -> Result<Self, Self::Error> {
        Room::new(wire.project, wire.name, wire.flooring, wire.walls)
    }
}

impl From<Room> for RoomWire {
    fn from(room: Room) -> Self {
        Self {
            project: room.project,
            name: room.name,
            flooring: room.flooring,
            walls: room.walls,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
