mod location;
mod waypoint;

pub use location::Location;
pub use waypoint::{Waypoint, WaypointId};
