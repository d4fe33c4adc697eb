//! RenoPlan domain layer
//!
//! Validated entities and aggregate containers for renovation planning,
//! plus the comma-delimited line round-trip used for flat-file
//! persistence. Everything here is in-memory, synchronous, and valid by
//! construction: a value that breaks a rule is rejected at the point of
//! assignment, and no constructor or mutator leaves an object partially
//! updated.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use aggregates::{Person, Room};
pub use entities::{Employment, Opening, Wall};
pub use error::{DomainError, ParseError};
pub use value_objects::{
    Color, Edging, Flooring, OpeningHeight, OpeningKind, OpeningWidth, PlanId, ProjectName,
    RoomName, SupervisoryLevel, WallHeight, WallWidth,
};
