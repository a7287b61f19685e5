//! # Delivery Planner Library
//!
//! This library provides time-aware path planning for a single agent moving
//! across a weighted grid that is shared with moving obstacles.
//!
//! Search runs over (position, timestep) states, so a plan can wait out or
//! step around an obstacle whose schedule is known. When an obstacle turns up
//! that nobody scheduled, a greedy local replanner offers a quick repair.
//!
//! It is used by two binaries:
//! - `plan_route`: Loads a map (and optionally an obstacle schedule), runs the
//!   agent from start to goal with replanning, and prints a summary.
//! - `compare_algorithms`: Runs every planner over seeded random grids and
//!   reports nodes expanded, planning time and path cost.
//!
//! ## Modules
//! - `grid`: Positions, terrain (`Grid`), moving obstacles (`DynamicObstacle`)
//!   and the queryable `GridWorld`.
//! - `search`: The `Planner` interface and the breadth-first, uniform-cost and
//!   A* planners over the time-expanded state space.
//! - `replanner`: Greedy hill-climbing used as a local fallback.
//! - `agent`: `DeliveryAgent`, which follows a plan and replans, producing an
//!   `ExecutionLog`.
//! - `config`: `AgentConfig`, loadable from TOML.
//! - `error`: `PlannerError` and the crate `Result` alias.
//! - `utils`: Map and obstacle schedule parsing.

pub mod agent;
pub mod config;
pub mod error;
pub mod grid;
pub mod replanner;
pub mod search;
pub mod utils;

pub use agent::{DeliveryAgent, ExecutionLog, PlanRecord, ReplanTrigger};
pub use error::{PlannerError, Result};
pub use grid::{DynamicObstacle, Grid, GridWorld, Position, Timestep};
pub use search::{Algorithm, Planner, SearchStats};
