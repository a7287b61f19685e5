//! Configuration loading for the delivery agent.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::grid::Timestep;
use crate::replanner::HillClimbConfig;
use crate::search::{Algorithm, DEFAULT_PLANNING_HORIZON};

/// Settings for a `DeliveryAgent` run.
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// algorithm = "astar"
/// planning_horizon = 200
/// max_steps = 1000
/// seed = 0
///
/// [replanner]
/// max_restarts = 10
/// max_steps = 500
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AgentConfig {
    /// Time-aware planner used for every non-local plan (default: astar).
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Timesteps a planner looks ahead before pruning (default: 200).
    #[serde(default = "default_planning_horizon")]
    pub planning_horizon: Timestep,

    /// Execution step budget for `follow_and_replan` (default: 1000).
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Bounds for the greedy local replanner.
    #[serde(default)]
    pub replanner: HillClimbConfig,

    /// Seed for the local replanner's tie-breaking (default: 0).
    #[serde(default)]
    pub seed: u64,
}

fn default_planning_horizon() -> Timestep {
    DEFAULT_PLANNING_HORIZON
}

fn default_max_steps() -> usize {
    1000
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            planning_horizon: default_planning_horizon(),
            max_steps: default_max_steps(),
            replanner: HillClimbConfig::default(),
            seed: 0,
        }
    }
}

impl AgentConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
