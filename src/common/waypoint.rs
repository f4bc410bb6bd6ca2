use super::Location;

/// Index of a waypoint inside the arena owned by a `SearchState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaypointId(pub(crate) usize);

impl WaypointId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One discovered point on a candidate path.
///
/// The total cost is never stored: it is recomputed from the previous and
/// heuristic costs on every call, so it cannot drift out of sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    location: Location,
    previous_cost: f64,
    heuristic_cost: f64,
    predecessor: Option<WaypointId>,
}

impl Waypoint {
    pub fn new(location: Location, previous_cost: f64, heuristic_cost: f64) -> Self {
        Waypoint {
            location,
            previous_cost,
            heuristic_cost,
            predecessor: None,
        }
    }

    pub fn with_predecessor(mut self, predecessor: WaypointId) -> Self {
        self.predecessor = Some(predecessor);
        self
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Accumulated real cost from the start along the path that produced this waypoint.
    pub fn previous_cost(&self) -> f64 {
        self.previous_cost
    }

    /// Estimated remaining cost to the goal, as supplied by the map.
    pub fn heuristic_cost(&self) -> f64 {
        self.heuristic_cost
    }

    pub fn total_cost(&self) -> f64 {
        self.previous_cost + self.heuristic_cost
    }

    pub fn predecessor(&self) -> Option<WaypointId> {
        self.predecessor
    }
}
