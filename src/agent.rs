//! Plan execution with replanning.
//!
//! `DeliveryAgent` follows a time-aware plan one timestep at a time. Before
//! each move it checks whether the next cell will be occupied on arrival and,
//! if so, replans: with the greedy local replanner first when running in
//! unpredictable mode, otherwise (or if that fails) with the time-aware
//! planner. Every planning episode is recorded in the `ExecutionLog`.
use serde::Serialize;
use std::mem;

use crate::config::AgentConfig;
use crate::error::{PlannerError, Result};
use crate::grid::{DynamicObstacle, GridWorld, Position, Timestep};
use crate::replanner::LocalReplanner;
use crate::search::{Algorithm, Planner, SearchStats};

/// Why a planning episode happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplanTrigger {
    /// The first plan of a run.
    Initial,
    /// The agent reached the end of its plan without reaching the goal.
    PlanExhausted,
    /// Greedy local repair after a surprise obstacle.
    LocalRepair,
    /// Time-aware fallback after local repair failed.
    SurpriseObstacle,
    /// The next planned cell is occupied according to the known schedule.
    ScheduleConflict,
}

/// One planning episode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanRecord {
    /// Timestep at which the plan was computed.
    pub timestep: Timestep,
    pub trigger: ReplanTrigger,
    /// The resulting plan; empty if planning failed.
    pub path: Vec<Position>,
    pub nodes_expanded: usize,
    pub time_taken: f64,
}

/// Everything that happened during one `follow_and_replan` run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionLog {
    pub success: bool,
    pub plans: Vec<PlanRecord>,
    pub total_nodes_expanded: usize,
    pub total_plan_time: f64,
    /// Cells the agent moved into, in order. The start cell is not included.
    pub final_path: Vec<Position>,
}

impl ExecutionLog {
    fn record(&mut self, timestep: Timestep, trigger: ReplanTrigger, path: &[Position], stats: &SearchStats) {
        tracing::info!(
            timestep,
            ?trigger,
            path_len = path.len(),
            nodes_expanded = stats.nodes_expanded,
            "planning episode"
        );
        self.total_nodes_expanded += stats.nodes_expanded;
        self.total_plan_time += stats.time_taken;
        self.plans.push(PlanRecord {
            timestep,
            trigger,
            path: path.to_vec(),
            nodes_expanded: stats.nodes_expanded,
            time_taken: stats.time_taken,
        });
    }

    fn finish(mut self, success: bool, history: Vec<Position>) -> Self {
        self.success = success;
        self.final_path = history;
        self
    }

    /// Number of planning episodes after the initial plan.
    pub fn replan_count(&self) -> usize {
        self.plans.len().saturating_sub(1)
    }
}

/// A single agent that plans, moves, and replans through a `GridWorld`.
///
/// The agent owns its world. Obstacles whose schedule is known in advance
/// belong in the world itself; obstacles the agent should only discover while
/// moving are registered with `add_surprise_obstacle`. Surprises are invisible
/// to every planner until the agent, running in unpredictable mode, finds one
/// blocking its next cell; from then on it is part of the world.
///
/// # Examples
/// ```
/// use delivery_planner::agent::DeliveryAgent;
/// use delivery_planner::config::AgentConfig;
/// use delivery_planner::grid::{Grid, GridWorld, Position};
///
/// let world = GridWorld::new(Grid::uniform(4, 4, 1), vec![]);
/// let mut agent = DeliveryAgent::new(world, &AgentConfig::default());
/// let log = agent
///     .follow_and_replan(Position::new(0, 0), Position::new(3, 3), false, 100)
///     .unwrap();
/// assert!(log.success);
/// assert_eq!(log.plans.len(), 1);
/// assert_eq!(log.final_path.len(), 6);
/// ```
pub struct DeliveryAgent {
    world: GridWorld,
    planner: Box<dyn Planner>,
    replanner: LocalReplanner,
    pending_surprises: Vec<DynamicObstacle>,
}

impl DeliveryAgent {
    /// Creates an agent using the algorithm, horizon and replanner settings of `config`.
    pub fn new(world: GridWorld, config: &AgentConfig) -> Self {
        Self::with_planner(
            world,
            config.algorithm.planner(config.planning_horizon),
            LocalReplanner::new(config.replanner, config.seed),
        )
    }

    /// Creates an agent, selecting the planner by name.
    ///
    /// # Returns
    /// * `Err(PlannerError::UnknownAlgorithm)` if `algorithm` is not one of
    ///   `bfs`, `ucs` or `astar`; `config.algorithm` is ignored.
    pub fn with_algorithm_name(world: GridWorld, algorithm: &str, config: &AgentConfig) -> Result<Self> {
        let algorithm: Algorithm = algorithm.parse()?;
        Ok(Self::new(
            world,
            &AgentConfig {
                algorithm,
                ..config.clone()
            },
        ))
    }

    pub fn with_planner(world: GridWorld, planner: Box<dyn Planner>, replanner: LocalReplanner) -> Self {
        DeliveryAgent {
            world,
            planner,
            replanner,
            pending_surprises: Vec::new(),
        }
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    /// Mutable access to the world, e.g. to add scheduled obstacles between runs.
    pub fn world_mut(&mut self) -> &mut GridWorld {
        &mut self.world
    }

    pub fn planner_name(&self) -> &'static str {
        self.planner.name()
    }

    /// Registers an obstacle the agent does not know about in advance.
    pub fn add_surprise_obstacle(&mut self, obstacle: DynamicObstacle) {
        self.pending_surprises.push(obstacle);
    }

    /// Surprise obstacles not yet discovered.
    pub fn pending_surprises(&self) -> &[DynamicObstacle] {
        &self.pending_surprises
    }

    /// Plans with the configured time-aware planner.
    pub fn plan(&self, start: Position, goal: Position, start_time: Timestep) -> (Vec<Position>, SearchStats) {
        self.planner.plan(&self.world, start, goal, start_time)
    }

    /// Moves every undiscovered surprise that holds `pos` at time `t` into the world.
    fn reveal_surprises(&mut self, pos: Position, t: Timestep) {
        let (found, pending): (Vec<_>, Vec<_>) = mem::take(&mut self.pending_surprises)
            .into_iter()
            .partition(|obs| obs.position_at(t) == Some(pos));
        self.pending_surprises = pending;
        for obstacle in found {
            tracing::info!(id = %obstacle.id, %pos, t, "surprise obstacle discovered");
            self.world.add_dynamic_obstacle(obstacle);
        }
    }

    fn replan(
        &self,
        log: &mut ExecutionLog,
        current: Position,
        goal: Position,
        t: Timestep,
        trigger: ReplanTrigger,
    ) -> Vec<Position> {
        let (path, stats) = self.plan(current, goal, t);
        log.record(t, trigger, &path, &stats);
        path
    }

    /// Executes a plan from `start` to `goal`, replanning whenever the next
    /// cell is occupied on arrival.
    ///
    /// # Arguments
    /// * `start`, `goal`: Endpoints; both must lie inside the grid.
    /// * `unpredictable`: If `true`, the agent checks for surprise obstacles
    ///   before each move and tries the greedy local replanner first.
    /// * `max_steps`: Iteration budget. A replan that does not move the agent
    ///   also consumes one iteration. Capped at `Timestep::MAX`.
    ///
    /// # Returns
    /// * `Ok(ExecutionLog)` for every run, successful or not.
    /// * `Err(PlannerError::OutOfBounds)` if `start` or `goal` is outside the grid.
    pub fn follow_and_replan(
        &mut self,
        start: Position,
        goal: Position,
        unpredictable: bool,
        max_steps: usize,
    ) -> Result<ExecutionLog> {
        for pos in [start, goal] {
            if !self.world.in_bounds(pos) {
                return Err(PlannerError::OutOfBounds {
                    pos,
                    rows: self.world.rows(),
                    cols: self.world.cols(),
                });
            }
        }

        let mut log = ExecutionLog::default();
        let mut history = Vec::new();
        let mut current = start;
        let mut t: Timestep = 0;

        let mut plan = self.replan(&mut log, current, goal, t, ReplanTrigger::Initial);
        if plan.is_empty() {
            return Ok(log.finish(false, history));
        }
        // Index of the next cell to move into. Plans computed while the agent
        // is not at the goal always hold at least two cells.
        let mut next_idx = 1;

        // Time advances at most once per iteration, so `t + 1` cannot overflow.
        let budget = max_steps.min(Timestep::MAX as usize);
        for _ in 0..budget {
            if current == goal {
                return Ok(log.finish(true, history));
            }

            if next_idx >= plan.len() {
                plan = self.replan(&mut log, current, goal, t, ReplanTrigger::PlanExhausted);
                next_idx = 1;
                if plan.is_empty() {
                    return Ok(log.finish(false, history));
                }
            }

            if unpredictable {
                self.reveal_surprises(plan[next_idx], t + 1);
                if self.world.occupied_at(plan[next_idx], t + 1) {
                    let (local, stats) = self.replanner.replan(&self.world, current, goal);
                    log.record(t, ReplanTrigger::LocalRepair, &local, &stats);
                    plan = if local.is_empty() {
                        self.replan(&mut log, current, goal, t, ReplanTrigger::SurpriseObstacle)
                    } else {
                        local
                    };
                    next_idx = 1;
                    if plan.is_empty() {
                        return Ok(log.finish(false, history));
                    }
                }
            }

            let next = plan[next_idx];
            if self.world.occupied_at(next, t + 1) {
                plan = self.replan(&mut log, current, goal, t, ReplanTrigger::ScheduleConflict);
                next_idx = 1;
                if plan.is_empty() {
                    return Ok(log.finish(false, history));
                }
                continue;
            }

            current = next;
            history.push(current);
            t += 1;
            next_idx += 1;
        }

        let success = current == goal;
        if !success {
            tracing::warn!(max_steps, %current, %goal, "step budget exhausted before reaching goal");
        }
        Ok(log.finish(success, history))
    }
}
