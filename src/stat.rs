use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Waypoints promoted from open to closed.
    pub expanded: usize,
    /// Candidates accepted into the open set.
    pub generated: usize,
    /// Candidates discarded because the open set already held a cheaper route.
    pub rejected: usize,
    pub time_us: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Time(microseconds) {:?} Expanded waypoints: {:?} Generated waypoints: {:?} Rejected waypoints: {:?}",
            self.time_us, self.expanded, self.generated, self.rejected
        );
    }
}
