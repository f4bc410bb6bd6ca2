use std::time::Instant;
use tracing::{debug, instrument, trace};

use crate::common::{Location, Waypoint, WaypointId};
use crate::map::Map;
use crate::stat::Stats;
use crate::state::SearchState;

/// Drive `state` until `goal` is closed.
///
/// Returns the id of the closed goal waypoint; following its predecessors
/// through `SearchState::waypoint` yields the path back to `start`. Returns
/// `None` when the open set runs dry or the state's expansion limit is hit.
#[instrument(skip_all, name = "a_star", fields(start = %start, goal = %goal), level = "debug")]
pub fn a_star_search<M: Map + ?Sized>(
    state: &mut SearchState<'_, M>,
    start: Location,
    goal: Location,
    stats: &mut Stats,
) -> Option<WaypointId> {
    let search_start_time = Instant::now();
    let map = state.map();

    if state.add_open_waypoint(Waypoint::new(start, 0.0, map.estimate(start, goal))) {
        stats.generated += 1;
    }

    let found = loop {
        if state
            .max_expansions()
            .is_some_and(|limit| stats.expanded >= limit)
        {
            debug!("expansion limit {:?} reached", state.max_expansions());
            break None;
        }

        let Some((current_id, current)) = state.close_min_open_waypoint() else {
            debug!("open set exhausted");
            break None;
        };
        stats.expanded += 1;
        trace!("expand waypoint: {current:?}");

        if current.location() == goal {
            debug!("goal reached with cost {}", current.previous_cost());
            break Some(current_id);
        }

        for (neighbor, edge_cost) in map.neighbors(current.location()) {
            if state.is_location_closed(neighbor) {
                continue;
            }

            let candidate = Waypoint::new(
                neighbor,
                current.previous_cost() + edge_cost,
                map.estimate(neighbor, goal),
            )
            .with_predecessor(current_id);

            if state.add_open_waypoint(candidate) {
                stats.generated += 1;
            } else {
                stats.rejected += 1;
            }
        }
    };

    stats.time_us += search_start_time.elapsed().as_micros() as usize;
    found
}
