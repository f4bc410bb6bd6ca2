use crate::common::Location;

/// The map an A* search navigates.
///
/// Implementations own topology, edge costs and the heuristic; the search state
/// only ever reads through this trait.
pub trait Map {
    /// Locations reachable in one step from `location`, paired with the edge cost.
    /// Costs must be non-negative.
    fn neighbors(&self, location: Location) -> Vec<(Location, f64)>;

    /// Estimated cost from `from` to `goal`. Must never overestimate the true cost.
    fn estimate(&self, from: Location, goal: Location) -> f64;
}
