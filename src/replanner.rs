use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::time::Instant;

use crate::grid::{GridWorld, Position};
use crate::search::SearchStats;

/// Bounds for the greedy local replanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct HillClimbConfig {
    /// Number of independent greedy rollouts from the start.
    #[serde(default = "default_max_restarts")]
    pub max_restarts: usize,
    /// Maximum number of moves per rollout.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_max_restarts() -> usize {
    10
}

fn default_max_steps() -> usize {
    500
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_restarts: default_max_restarts(),
            max_steps: default_max_steps(),
        }
    }
}

/// Result of a single greedy rollout.
struct Rollout {
    path: Vec<Position>,
    reached_goal: bool,
}

/// Walks greedily from `start` towards `goal`.
///
/// At each step the agent moves to the neighbor closest to `goal` by Manhattan
/// distance; equally close neighbors are chosen between at random. The walk
/// ends at the goal, at a dead end, or after `max_steps` moves.
fn greedy_rollout<R: Rng + ?Sized>(
    world: &GridWorld,
    start: Position,
    goal: Position,
    max_steps: usize,
    rng: &mut R,
) -> Rollout {
    let mut current = start;
    let mut path = vec![current];

    for _ in 0..max_steps {
        if current == goal {
            break;
        }
        let neighbors = world.neighbors(current);
        let Some(best_distance) = neighbors.iter().map(|n| n.manhattan(&goal)).min() else {
            break; // Dead end
        };
        let closest: Vec<Position> = neighbors
            .into_iter()
            .filter(|n| n.manhattan(&goal) == best_distance)
            .collect();
        match closest.choose(rng) {
            Some(&next) => current = next,
            None => break,
        }
        path.push(current);
    }

    Rollout {
        reached_goal: current == goal,
        path,
    }
}

/// Time-oblivious greedy hill-climbing with random restarts.
///
/// Runs up to `max_restarts` independent rollouts from `start` and keeps the
/// shortest one that reaches `goal`. Restarts differ only through the random
/// tie-breaking drawn from `rng`. Dynamic obstacles are ignored.
///
/// This is an emergency fallback, not a planner: it can stall in local minima
/// and makes no optimality or completeness guarantee.
///
/// # Arguments
/// * `world`: The world to walk through.
/// * `start`: Rollout origin, included as the first path element.
/// * `goal`: Target cell.
/// * `max_restarts`: Number of rollouts.
/// * `max_steps`: Move limit per rollout.
/// * `rng`: Source of tie-breaking randomness.
///
/// # Returns
/// The best path found, or an empty vector if no rollout reached `goal`.
///
/// # Examples
/// ```
/// use delivery_planner::grid::{Grid, GridWorld, Position};
/// use delivery_planner::replanner::greedy_hill_climb;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let world = GridWorld::new(Grid::uniform(4, 4, 1), vec![]);
/// let mut rng = SmallRng::seed_from_u64(7);
/// let path = greedy_hill_climb(&world, Position::new(0, 0), Position::new(3, 3), 5, 100, &mut rng);
/// assert_eq!(path.len(), 7);
/// ```
pub fn greedy_hill_climb<R: Rng + ?Sized>(
    world: &GridWorld,
    start: Position,
    goal: Position,
    max_restarts: usize,
    max_steps: usize,
    rng: &mut R,
) -> Vec<Position> {
    hill_climb_counted(world, start, goal, max_restarts, max_steps, rng).0
}

/// As `greedy_hill_climb`, also returning the total number of rollout moves.
fn hill_climb_counted<R: Rng + ?Sized>(
    world: &GridWorld,
    start: Position,
    goal: Position,
    max_restarts: usize,
    max_steps: usize,
    rng: &mut R,
) -> (Vec<Position>, usize) {
    let mut best_path: Option<Vec<Position>> = None;
    let mut moves = 0;

    for _ in 0..max_restarts {
        let rollout = greedy_rollout(world, start, goal, max_steps, rng);
        moves += rollout.path.len() - 1;
        if !rollout.reached_goal {
            continue;
        }
        let is_better = best_path
            .as_ref()
            .map_or(true, |best| rollout.path.len() < best.len());
        if is_better {
            best_path = Some(rollout.path);
        }
    }

    (best_path.unwrap_or_default(), moves)
}

/// The greedy replanner with its bounds and its own seeded generator.
///
/// Owning the generator keeps a whole execution run reproducible from a
/// single seed.
#[derive(Clone, Debug)]
pub struct LocalReplanner {
    config: HillClimbConfig,
    rng: SmallRng,
}

impl LocalReplanner {
    pub fn new(config: HillClimbConfig, seed: u64) -> Self {
        LocalReplanner {
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> HillClimbConfig {
        self.config
    }

    /// Runs `greedy_hill_climb` from `start` to `goal`.
    ///
    /// `nodes_expanded` in the returned stats counts rollout moves.
    pub fn replan(
        &mut self,
        world: &GridWorld,
        start: Position,
        goal: Position,
    ) -> (Vec<Position>, SearchStats) {
        let started = Instant::now();
        let (path, moves) = hill_climb_counted(
            world,
            start,
            goal,
            self.config.max_restarts,
            self.config.max_steps,
            &mut self.rng,
        );
        let stats = SearchStats {
            nodes_expanded: moves,
            time_taken: started.elapsed().as_secs_f64(),
            horizon_pruned: 0,
        };
        tracing::debug!(
            path_len = path.len(),
            moves,
            "greedy hill-climb finished"
        );
        (path, stats)
    }
}
