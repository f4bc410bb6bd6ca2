pub mod common;
pub mod config;
pub mod error;
pub mod map;
pub mod search;
pub mod stat;
pub mod state;

pub use common::{Location, Waypoint, WaypointId};
pub use config::{Config, TieBreak};
pub use error::StateError;
pub use map::Map;
pub use search::a_star_search;
pub use stat::Stats;
pub use state::SearchState;
