mod open;

use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace};

use self::open::OpenKey;
use crate::common::{Location, Waypoint, WaypointId};
use crate::config::{Config, TieBreak};
use crate::error::StateError;
use crate::map::Map;

/// Open and closed bookkeeping for one A* run over one map.
///
/// Every waypoint ever accepted lives in an append-only arena, so a
/// `WaypointId` handed out by this state stays valid for its whole lifetime.
/// `open` and `closed` map locations to arena entries and never share a key.
#[derive(Debug)]
pub struct SearchState<'m, M: ?Sized> {
    map: &'m M,
    tie_break: TieBreak,
    max_expansions: Option<usize>,
    waypoints: Vec<Waypoint>,
    open: HashMap<Location, OpenKey>,
    open_order: BTreeSet<OpenKey>,
    closed: HashMap<Location, WaypointId>,
}

impl<'m, M: Map + ?Sized> SearchState<'m, M> {
    pub fn new(map: Option<&'m M>) -> Result<Self, StateError> {
        Self::with_config(map, &Config::default())
    }

    pub fn with_config(map: Option<&'m M>, config: &Config) -> Result<Self, StateError> {
        let map = map.ok_or(StateError::InvalidArgument("map cannot be absent"))?;
        Ok(SearchState {
            map,
            tie_break: config.tie_break,
            max_expansions: config.max_expansions,
            waypoints: Vec::new(),
            open: HashMap::new(),
            open_order: BTreeSet::new(),
            closed: HashMap::new(),
        })
    }

    /// The map this search is navigating.
    pub fn map(&self) -> &'m M {
        self.map
    }

    /// Expansion limit the search driver honours, from the construction config.
    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Open waypoint with the lowest total cost, or `None` once the open set is exhausted.
    pub fn min_open_waypoint(&self) -> Option<&Waypoint> {
        self.open_order
            .first()
            .map(|key| &self.waypoints[key.id.0])
    }

    /// Offer a candidate for its location.
    ///
    /// An unseen location is inserted. An open location is replaced only if the
    /// candidate's previous cost is strictly lower. Closed locations are never
    /// reopened. Returns whether the candidate was stored.
    pub fn add_open_waypoint(&mut self, candidate: Waypoint) -> bool {
        let location = candidate.location();

        if self.closed.contains_key(&location) {
            debug!("refuse candidate for closed location {location}");
            return false;
        }

        if let Some(current) = self.open.get(&location).copied() {
            let current_cost = self.waypoints[current.id.0].previous_cost();
            let improves = candidate.previous_cost() < current_cost;
            if !improves {
                trace!(
                    "discard candidate at {location}: cost {} not below {current_cost}",
                    candidate.previous_cost()
                );
                return false;
            }
            self.open_order.remove(&current);
            trace!(
                "replace waypoint at {location}: cost {current_cost} -> {}",
                candidate.previous_cost()
            );
        } else {
            trace!("open waypoint at {location}: total cost {}", candidate.total_cost());
        }

        let key = OpenKey {
            total_cost: candidate.total_cost(),
            rank: self.tie_break.rank(&candidate),
            id: WaypointId(self.waypoints.len()),
        };
        self.waypoints.push(candidate);
        self.open_order.insert(key);
        self.open.insert(location, key);
        true
    }

    pub fn num_open_waypoints(&self) -> usize {
        self.open.len()
    }

    pub fn num_closed_waypoints(&self) -> usize {
        self.closed.len()
    }

    /// Move the waypoint at `location` from open to closed.
    ///
    /// Does nothing and returns `None` if the location is not open.
    pub fn close_waypoint(&mut self, location: Location) -> Option<WaypointId> {
        let key = self.open.remove(&location)?;
        self.open_order.remove(&key);
        self.closed.insert(location, key.id);
        trace!("close waypoint at {location}");
        Some(key.id)
    }

    /// Close the open waypoint with the lowest total cost in one step.
    pub fn close_min_open_waypoint(&mut self) -> Option<(WaypointId, Waypoint)> {
        let key = self.open_order.pop_first()?;
        let waypoint = self.waypoints[key.id.0];
        self.open.remove(&waypoint.location());
        self.closed.insert(waypoint.location(), key.id);
        trace!("close min waypoint at {}", waypoint.location());
        Some((key.id, waypoint))
    }

    pub fn is_location_closed(&self, location: Location) -> bool {
        self.closed.contains_key(&location)
    }

    pub fn is_location_open(&self, location: Location) -> bool {
        self.open.contains_key(&location)
    }

    pub fn open_waypoint(&self, location: Location) -> Option<&Waypoint> {
        self.open
            .get(&location)
            .map(|key| &self.waypoints[key.id.0])
    }

    pub fn open_waypoints(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.open_order.iter().map(|key| &self.waypoints[key.id.0])
    }

    pub fn closed_waypoint_id(&self, location: Location) -> Option<WaypointId> {
        self.closed.get(&location).copied()
    }

    /// Look up any waypoint this state has accepted, e.g. to follow predecessors.
    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(id.0)
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.open.len(), self.open_order.len());
        for (location, key) in &self.open {
            assert!(!self.closed.contains_key(location));
            assert!(self.open_order.contains(key));
            assert_eq!(self.waypoints[key.id.0].location(), *location);
        }
        for (location, id) in &self.closed {
            assert_eq!(self.waypoints[id.0].location(), *location);
        }
    }
}
