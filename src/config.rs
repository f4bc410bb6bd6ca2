use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

use crate::common::Waypoint;

/// How open waypoints with equal total cost are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The waypoint inserted first wins.
    #[default]
    FirstInserted,
    /// Higher previous cost wins, then insertion order.
    DeeperFirst,
}

impl TieBreak {
    /// Secondary sort key; lower ranks are selected first.
    pub(crate) fn rank(self, waypoint: &Waypoint) -> f64 {
        match self {
            TieBreak::FirstInserted => 0.0,
            TieBreak::DeeperFirst => -waypoint.previous_cost(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tie_break: TieBreak,
    pub max_expansions: Option<usize>,
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {path}"))?;
        Self::from_yaml_str(&yaml).with_context(|| format!("error with config file: {path}"))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_expansions == Some(0) {
            return Err(anyhow!(
                "Expansion limit must be greater than 0, got {:?}",
                self.max_expansions
            ));
        }
        Ok(())
    }
}
