//! Aggregate containers - domain objects that own their child entities
//!
//! Each aggregate:
//! - Owns its child collection exclusively (children hold no back-reference)
//! - Preserves insertion order; additions always append
//! - Enforces uniqueness of the children's natural key with a linear scan
//!   (dozens of children at most, no index needed)
//! - Exposes behavior through methods, never public fields

pub mod person;
pub mod room;

pub use person::Person;
pub use room::Room;
