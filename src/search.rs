//! Time-aware search over the (position, time) state space.
//!
//! The same cell at two different times is two different states, which lets
//! a plan step around a moving obstacle instead of treating its whole
//! schedule as a wall. Every move advances time by one; a move into a cell
//! that an obstacle holds at the arrival time is rejected.
//!
//! Three planners share the `Planner` interface:
//! - `BreadthFirst`: fewest moves, ignores cell cost.
//! - `UniformCost`: cheapest path by summed entry cost.
//! - `AStar`: uniform-cost guided by the Manhattan distance to the goal.
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::error::PlannerError;
use crate::grid::{GridWorld, Position, Timestep};

/// Default number of timesteps a planner looks ahead before pruning.
pub const DEFAULT_PLANNING_HORIZON: Timestep = 200;

/// Performance counters for one planning call. Never affects control flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// States taken off the frontier, including the goal state.
    pub nodes_expanded: usize,
    /// Wall-clock planning time in seconds.
    pub time_taken: f64,
    /// States popped but not expanded because they lay beyond the horizon
    /// or at the last representable timestep.
    pub horizon_pruned: usize,
}

impl SearchStats {
    /// Returns `true` if the planning horizon cut off part of the search.
    ///
    /// When a search returns an empty path this tells "beyond the horizon"
    /// apart from "unreachable".
    pub fn hit_horizon(&self) -> bool {
        self.horizon_pruned > 0
    }
}

/// A node of the time-expanded search space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchState {
    pub pos: Position,
    pub time: Timestep,
}

impl SearchState {
    pub fn new(pos: Position, time: Timestep) -> Self {
        SearchState { pos, time }
    }
}

/// A time-aware path planner.
pub trait Planner {
    /// Short algorithm name, as accepted by `Algorithm::from_str`.
    fn name(&self) -> &'static str;

    /// Plans a path from `start` (occupied at `start_time`) to `goal`.
    ///
    /// # Returns
    /// The path, one position per timestep beginning with `start`, and the
    /// search statistics. The path is empty when no path was found.
    fn plan(
        &self,
        world: &GridWorld,
        start: Position,
        goal: Position,
        start_time: Timestep,
    ) -> (Vec<Position>, SearchStats);
}

/// The selectable planning algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    Bfs,
    Ucs,
    #[default]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Ucs, Algorithm::AStar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Ucs => "ucs",
            Algorithm::AStar => "astar",
        }
    }

    /// Builds the planner for this algorithm.
    ///
    /// # Examples
    /// ```
    /// use delivery_planner::search::Algorithm;
    ///
    /// let planner = "astar".parse::<Algorithm>().unwrap().planner(50);
    /// assert_eq!(planner.name(), "astar");
    /// assert!("dijkstra".parse::<Algorithm>().is_err());
    /// ```
    pub fn planner(self, horizon: Timestep) -> Box<dyn Planner> {
        match self {
            Algorithm::Bfs => Box::new(BreadthFirst::new(horizon)),
            Algorithm::Ucs => Box::new(UniformCost::new(horizon)),
            Algorithm::AStar => Box::new(AStar::new(horizon)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "ucs" => Ok(Algorithm::Ucs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(PlannerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algo: Algorithm) -> Self {
        algo.as_str().to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Breadth-first search: fewest moves, cell costs ignored.
#[derive(Clone, Copy, Debug)]
pub struct BreadthFirst {
    pub horizon: Timestep,
}

impl BreadthFirst {
    pub fn new(horizon: Timestep) -> Self {
        BreadthFirst { horizon }
    }
}

impl Planner for BreadthFirst {
    fn name(&self) -> &'static str {
        Algorithm::Bfs.as_str()
    }

    fn plan(
        &self,
        world: &GridWorld,
        start: Position,
        goal: Position,
        start_time: Timestep,
    ) -> (Vec<Position>, SearchStats) {
        let started = Instant::now();
        let mut stats = SearchStats::default();
        if !world.in_bounds(start) {
            tracing::warn!("bfs: start {} is outside the grid", start);
            return (Vec::new(), stats);
        }

        let start_state = SearchState::new(start, start_time);
        let mut frontier = VecDeque::from([start_state]);
        let mut visited = HashSet::from([start_state]);
        let mut came_from: HashMap<SearchState, SearchState> = HashMap::new();

        while let Some(current) = frontier.pop_front() {
            stats.nodes_expanded += 1;
            if current.pos == goal {
                let path = reconstruct_path(&came_from, start_state, current);
                return finish(self.name(), path, stats, started);
            }
            if current.time - start_time > self.horizon {
                stats.horizon_pruned += 1;
                continue;
            }

            let Some(arrival) = current.time.checked_add(1) else {
                stats.horizon_pruned += 1;
                continue;
            };
            for next_pos in world.neighbors(current.pos) {
                if world.occupied_at(next_pos, arrival) {
                    continue;
                }
                let next = SearchState::new(next_pos, arrival);
                if visited.insert(next) {
                    came_from.insert(next, current);
                    frontier.push_back(next);
                }
            }
        }

        finish(self.name(), Vec::new(), stats, started)
    }
}

/// Uniform-cost search: cheapest path by summed entry cost.
#[derive(Clone, Copy, Debug)]
pub struct UniformCost {
    pub horizon: Timestep,
}

impl UniformCost {
    pub fn new(horizon: Timestep) -> Self {
        UniformCost { horizon }
    }
}

impl Planner for UniformCost {
    fn name(&self) -> &'static str {
        Algorithm::Ucs.as_str()
    }

    fn plan(
        &self,
        world: &GridWorld,
        start: Position,
        goal: Position,
        start_time: Timestep,
    ) -> (Vec<Position>, SearchStats) {
        best_first(self.name(), world, start, goal, start_time, self.horizon, |_| 0)
    }
}

/// A* search with the Manhattan distance heuristic.
///
/// The heuristic ignores time and never overestimates, since every cell costs
/// at least 1 to enter.
#[derive(Clone, Copy, Debug)]
pub struct AStar {
    pub horizon: Timestep,
}

impl AStar {
    pub fn new(horizon: Timestep) -> Self {
        AStar { horizon }
    }
}

impl Planner for AStar {
    fn name(&self) -> &'static str {
        Algorithm::AStar.as_str()
    }

    fn plan(
        &self,
        world: &GridWorld,
        start: Position,
        goal: Position,
        start_time: Timestep,
    ) -> (Vec<Position>, SearchStats) {
        best_first(self.name(), world, start, goal, start_time, self.horizon, |pos| {
            pos.manhattan(&goal)
        })
    }
}

/// Shared best-first loop for uniform-cost and A*.
///
/// Frontier entries are `(cost + heuristic, cost, state)` in a min-heap, so
/// equal priorities fall back to the raw cost and then to the state itself.
/// A state is pushed again whenever it is reached more cheaply; there is no
/// closed set.
fn best_first(
    name: &'static str,
    world: &GridWorld,
    start: Position,
    goal: Position,
    start_time: Timestep,
    horizon: Timestep,
    heuristic: impl Fn(Position) -> u32,
) -> (Vec<Position>, SearchStats) {
    let started = Instant::now();
    let mut stats = SearchStats::default();
    if !world.in_bounds(start) {
        tracing::warn!("{}: start {} is outside the grid", name, start);
        return (Vec::new(), stats);
    }

    let start_state = SearchState::new(start, start_time);
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((u64::from(heuristic(start)), 0u64, start_state)));
    let mut came_from: HashMap<SearchState, SearchState> = HashMap::new();
    let mut cost_so_far: HashMap<SearchState, u64> = HashMap::from([(start_state, 0)]);

    while let Some(Reverse((_, cost, current))) = frontier.pop() {
        stats.nodes_expanded += 1;
        if current.pos == goal {
            let path = reconstruct_path(&came_from, start_state, current);
            return finish(name, path, stats, started);
        }
        if current.time - start_time > horizon {
            stats.horizon_pruned += 1;
            continue;
        }

        let Some(arrival) = current.time.checked_add(1) else {
            stats.horizon_pruned += 1;
            continue;
        };
        for next_pos in world.neighbors(current.pos) {
            if world.occupied_at(next_pos, arrival) {
                continue;
            }
            let next = SearchState::new(next_pos, arrival);
            let new_cost = cost + u64::from(world.cost(next_pos));
            let improved = cost_so_far.get(&next).map_or(true, |&known| new_cost < known);
            if improved {
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, current);
                frontier.push(Reverse((new_cost + u64::from(heuristic(next_pos)), new_cost, next)));
            }
        }
    }

    finish(name, Vec::new(), stats, started)
}

fn finish(
    name: &'static str,
    path: Vec<Position>,
    mut stats: SearchStats,
    started: Instant,
) -> (Vec<Position>, SearchStats) {
    stats.time_taken = started.elapsed().as_secs_f64();
    tracing::debug!(
        algorithm = name,
        path_len = path.len(),
        nodes_expanded = stats.nodes_expanded,
        horizon_pruned = stats.horizon_pruned,
        "search finished"
    );
    (path, stats)
}

/// Walks the predecessor map from `goal_state` back to `start_state`.
///
/// Both ends are included and the result runs start to goal.
fn reconstruct_path(
    came_from: &HashMap<SearchState, SearchState>,
    start_state: SearchState,
    goal_state: SearchState,
) -> Vec<Position> {
    let mut path = vec![goal_state.pos];
    let mut current = goal_state;
    while current != start_state {
        match came_from.get(&current) {
            Some(&prev) => {
                path.push(prev.pos);
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Sum of the entry costs of every cell after the first.
///
/// Summed in `u64`: a single cell may cost up to `i32::MAX`.
///
/// # Examples
/// ```
/// use delivery_planner::grid::{Grid, GridWorld, Position};
/// use delivery_planner::search::path_cost;
///
/// let world = GridWorld::new(Grid::uniform(2, 2, 3), vec![]);
/// let path = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)];
/// assert_eq!(path_cost(&world, &path), 6);
/// assert_eq!(path_cost(&world, &[]), 0);
/// ```
pub fn path_cost(world: &GridWorld, path: &[Position]) -> u64 {
    path.iter().skip(1).map(|&pos| u64::from(world.cost(pos))).sum()
}

/// Returns `true` if `path` is a valid walk: every cell passable and each
/// consecutive pair one axis-aligned step apart.
pub fn is_valid_path(world: &GridWorld, path: &[Position]) -> bool {
    path.iter().all(|&pos| world.passable(pos))
        && path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{DynamicObstacle, Grid};
    use crate::utils::grid_from_str_array;

    const HORIZON: Timestep = DEFAULT_PLANNING_HORIZON;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn world_from(rows: &[&str]) -> GridWorld {
        GridWorld::new(grid_from_str_array(rows).unwrap(), vec![])
    }

    fn all_planners() -> Vec<Box<dyn Planner>> {
        Algorithm::ALL.iter().map(|algo| algo.planner(HORIZON)).collect()
    }

    #[test]
    fn test_astar_center_blocked() {
        let world = world_from(&[
            "1 1 1",
            "1 -1 1",
            "1 1 1",
        ]);
        let (path, stats) = AStar::new(HORIZON).plan(&world, p(0, 0), p(2, 2), 0);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], p(0, 0));
        assert_eq!(path[4], p(2, 2));
        assert_eq!(path_cost(&world, &path), 4);
        assert!(is_valid_path(&world, &path));
        assert!(stats.nodes_expanded > 0);
        assert!(stats.time_taken >= 0.0);
    }

    #[test]
    fn test_astar_avoids_scheduled_obstacle() {
        let obstacle = DynamicObstacle::new("o1", vec![p(1, 0), p(1, 1), p(1, 2)], 0);
        let world = GridWorld::new(Grid::uniform(5, 5, 1), vec![obstacle]);
        let (path, _) = AStar::new(HORIZON).plan(&world, p(0, 0), p(2, 2), 0);

        assert!(!path.is_empty());
        assert!(path.len() >= 5);
        assert_eq!(path[0], p(0, 0));
        assert_eq!(*path.last().unwrap(), p(2, 2));
        assert!(is_valid_path(&world, &path));
        for (t, &pos) in path.iter().enumerate() {
            assert!(
                !world.occupied_at(pos, t as Timestep),
                "agent collides with obstacle at {} t={}",
                pos,
                t
            );
        }
        assert_ne!(path.get(1), Some(&p(1, 1)));
        assert_ne!(path.get(2), Some(&p(1, 2)));
    }

    #[test]
    fn test_start_equals_goal_returns_single_position() {
        let world = GridWorld::new(Grid::uniform(3, 3, 1), vec![]);
        for planner in all_planners() {
            let (path, stats) = planner.plan(&world, p(1, 1), p(1, 1), 7);
            assert_eq!(path, vec![p(1, 1)], "{}", planner.name());
            assert_eq!(stats.nodes_expanded, 1);
        }
    }

    #[test]
    fn test_unreachable_goal_returns_empty() {
        let world = world_from(&[
            "1 1 -1 1",
            "1 1 -1 1",
        ]);
        for planner in all_planners() {
            let (path, stats) = planner.plan(&world, p(0, 0), p(0, 3), 0);
            assert!(path.is_empty(), "{}", planner.name());
            assert!(stats.nodes_expanded > 0);
        }
    }

    #[test]
    fn test_goal_is_wall_returns_empty() {
        let world = world_from(&["1 1 -1"]);
        for planner in all_planners() {
            let (path, _) = planner.plan(&world, p(0, 0), p(0, 2), 0);
            assert!(path.is_empty(), "{}", planner.name());
        }
    }

    #[test]
    fn test_boxed_in_by_obstacles_returns_empty() {
        // The only neighbors of (0,0) are (1,0) and (0,1); both are held at t=1,
        // and there is no waiting move, so no plan exists.
        let obstacles = vec![
            DynamicObstacle::new("down", vec![p(1, 0)], 1),
            DynamicObstacle::new("right", vec![p(0, 1)], 1),
        ];
        let world = GridWorld::new(Grid::uniform(3, 3, 1), obstacles);
        for planner in all_planners() {
            let (path, stats) = planner.plan(&world, p(0, 0), p(2, 2), 0);
            assert!(path.is_empty(), "{}", planner.name());
            assert_eq!(stats.nodes_expanded, 1);
            assert!(!stats.hit_horizon());
        }
    }

    #[test]
    fn test_bfs_fewest_moves_ignores_cost() {
        // Direct route along row 0 is expensive; BFS still takes it.
        let world = world_from(&[
            "1 9 9 1",
            "1 1 1 1",
        ]);
        let (path, _) = BreadthFirst::new(HORIZON).plan(&world, p(0, 0), p(0, 3), 0);
        assert_eq!(path.len(), 4);
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3)]);
    }

    #[test]
    fn test_bfs_tie_break_follows_neighbor_order() {
        let world = GridWorld::new(Grid::uniform(2, 2, 1), vec![]);
        let (path, _) = BreadthFirst::new(HORIZON).plan(&world, p(0, 0), p(1, 1), 0);
        // Down is enumerated before right.
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(1, 1)]);
    }

    #[test]
    fn test_ucs_and_astar_find_cheapest_path() {
        let world = world_from(&[
            "1 9 9 1",
            "1 1 1 1",
        ]);
        let planners: [Box<dyn Planner>; 2] = [Box::new(UniformCost::new(HORIZON)), Box::new(AStar::new(HORIZON))];
        for planner in planners {
            let (path, _) = planner.plan(&world, p(0, 0), p(0, 3), 0);
            assert_eq!(path, vec![p(0, 0), p(1, 0), p(1, 1), p(1, 2), p(1, 3), p(0, 3)]);
            assert_eq!(path_cost(&world, &path), 5);
        }
    }

    #[test]
    fn test_astar_matches_ucs_cost_on_random_grids() {
        for seed in 0..20 {
            let world = GridWorld::new(Grid::random_with_seed(8, 8, 0.2, 5, seed), vec![]);
            let (ucs_path, _) = UniformCost::new(HORIZON).plan(&world, p(0, 0), p(7, 7), 0);
            let (astar_path, _) = AStar::new(HORIZON).plan(&world, p(0, 0), p(7, 7), 0);
            let (bfs_path, _) = BreadthFirst::new(HORIZON).plan(&world, p(0, 0), p(7, 7), 0);

            assert_eq!(ucs_path.is_empty(), astar_path.is_empty(), "seed {}", seed);
            assert_eq!(ucs_path.is_empty(), bfs_path.is_empty(), "seed {}", seed);
            if ucs_path.is_empty() {
                continue;
            }
            assert_eq!(path_cost(&world, &ucs_path), path_cost(&world, &astar_path), "seed {}", seed);
            assert!(path_cost(&world, &ucs_path) <= path_cost(&world, &bfs_path));
            assert!(bfs_path.len() <= ucs_path.len());
            for path in [&ucs_path, &astar_path, &bfs_path] {
                assert!(is_valid_path(&world, path));
                assert_eq!(path[0], p(0, 0));
                assert_eq!(*path.last().unwrap(), p(7, 7));
            }
        }
    }

    #[test]
    fn test_astar_expands_no_more_than_ucs() {
        let world = world_from(&[
            "1 1 1 1 1 1",
            "1 1 1 -1 1 1",
            "1 1 1 -1 1 1",
            "1 1 1 -1 1 1",
            "1 1 1 1 1 1",
        ]);
        let (_, ucs) = UniformCost::new(HORIZON).plan(&world, p(0, 0), p(4, 5), 0);
        let (_, astar) = AStar::new(HORIZON).plan(&world, p(0, 0), p(4, 5), 0);
        assert!(astar.nodes_expanded <= ucs.nodes_expanded);
    }

    #[test]
    fn test_plan_is_idempotent() {
        let obstacle = DynamicObstacle::new("o1", vec![p(2, 0), p(2, 1), p(2, 2), p(2, 3)], 1);
        let world = GridWorld::new(Grid::random_with_seed(6, 6, 0.15, 3, 9), vec![obstacle]);
        for planner in all_planners() {
            let (first, first_stats) = planner.plan(&world, p(0, 0), p(5, 5), 0);
            let (second, second_stats) = planner.plan(&world, p(0, 0), p(5, 5), 0);
            assert_eq!(first, second, "{}", planner.name());
            assert_eq!(first_stats.nodes_expanded, second_stats.nodes_expanded);
        }
    }

    #[test]
    fn test_horizon_prunes_and_is_reported() {
        let world = GridWorld::new(Grid::uniform(1, 6, 1), vec![]);
        for algo in Algorithm::ALL {
            let (path, stats) = algo.planner(2).plan(&world, p(0, 0), p(0, 5), 0);
            assert!(path.is_empty(), "{}", algo);
            assert!(stats.hit_horizon(), "{}", algo);

            let (path, stats) = algo.planner(10).plan(&world, p(0, 0), p(0, 5), 0);
            assert_eq!(path.len(), 6, "{}", algo);
            assert!(!stats.hit_horizon());
        }
    }

    #[test]
    fn test_horizon_is_relative_to_start_time() {
        let world = GridWorld::new(Grid::uniform(1, 4, 1), vec![]);
        let (path, _) = AStar::new(3).plan(&world, p(0, 0), p(0, 3), 100);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_obstacle_schedule_uses_absolute_time() {
        // A single corridor; an obstacle sits on (0,2) at t=12 only.
        let obstacle = DynamicObstacle::new("o1", vec![p(0, 2)], 12);
        let world = GridWorld::new(Grid::uniform(1, 4, 1), vec![obstacle]);

        let (clear, _) = AStar::new(HORIZON).plan(&world, p(0, 0), p(0, 3), 0);
        assert_eq!(clear.len(), 4);

        // Starting at t=10 the direct route meets the obstacle, so the agent
        // steps back once to let it pass.
        let (detour, _) = AStar::new(HORIZON).plan(&world, p(0, 0), p(0, 3), 10);
        assert_eq!(detour.len(), 6);
        assert_ne!(detour[2], p(0, 2));
        assert!(is_valid_path(&world, &detour));
    }

    #[test]
    fn test_out_of_bounds_start_returns_empty() {
        let world = GridWorld::new(Grid::uniform(2, 2, 1), vec![]);
        for planner in all_planners() {
            let (path, stats) = planner.plan(&world, p(-1, 0), p(1, 1), 0);
            assert!(path.is_empty());
            assert_eq!(stats.nodes_expanded, 0);
        }
    }

    #[test]
    fn test_costs_near_i32_max_do_not_overflow() {
        let world = GridWorld::new(Grid::uniform(1, 4, i32::MAX), vec![]);
        let expensive = world_from(&["1 2147483647 1", "1 1 1"]);
        let planners: [Box<dyn Planner>; 2] = [Box::new(UniformCost::new(50)), Box::new(AStar::new(50))];
        for planner in planners {
            let (path, _) = planner.plan(&world, p(0, 0), p(0, 3), 0);
            assert_eq!(path.len(), 4, "{}", planner.name());
            assert_eq!(path_cost(&world, &path), 3 * i32::MAX as u64);

            let (path, _) = planner.plan(&expensive, p(0, 0), p(0, 2), 0);
            assert_eq!(path, vec![p(0, 0), p(1, 0), p(1, 1), p(1, 2), p(0, 2)]);
            assert_eq!(path_cost(&expensive, &path), 4);
        }
    }

    #[test]
    fn test_last_timestep_is_pruned_not_overflowed() {
        let world = GridWorld::new(Grid::uniform(1, 4, 1), vec![]);
        let start_time = Timestep::MAX - 1;
        for planner in all_planners() {
            let (path, _) = planner.plan(&world, p(0, 0), p(0, 1), start_time);
            assert_eq!(path, vec![p(0, 0), p(0, 1)], "{}", planner.name());

            let (path, stats) = planner.plan(&world, p(0, 0), p(0, 3), start_time);
            assert!(path.is_empty(), "{}", planner.name());
            assert!(stats.hit_horizon());
        }
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!("UCS".parse::<Algorithm>().unwrap(), Algorithm::Ucs);
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        let err = "greedy".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, PlannerError::UnknownAlgorithm(ref name) if name == "greedy"));
    }

    #[test]
    fn test_planner_names() {
        let names: Vec<&str> = all_planners().iter().map(|planner| planner.name()).collect();
        assert_eq!(names, vec!["bfs", "ucs", "astar"]);
    }
}
