//! Value objects - Immutable objects defined by their attributes

mod dimensions;
mod kinds;
mod names;

pub use dimensions::{Edging, OpeningHeight, OpeningWidth, WallHeight, WallWidth};
pub use kinds::{OpeningKind, SupervisoryLevel};
pub use names::{Color, Flooring, PlanId, ProjectName, RoomName};
