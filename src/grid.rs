//! Grid model for the delivery planner.
//!
//! This module defines the world the agent moves through:
//! - `Position`: A (row, column) grid cell.
//! - `Grid`: Static terrain, a fixed-size array of per-cell entry costs where
//!   `IMPASSABLE` marks a wall.
//! - `DynamicObstacle`: A moving obstacle with a deterministic schedule.
//! - `GridWorld`: Terrain plus obstacles; answers bounds, passability, cost,
//!   neighbor and time-indexed occupancy queries.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlannerError, Result};

/// Absolute timestep. Every move advances time by exactly one.
pub type Timestep = u32;

/// Cell value marking a static obstacle.
pub const IMPASSABLE: i32 = -1;

/// A grid cell identified by its row and column.
///
/// Positions are ordered by row, then column. In JSON a position is written as
/// a two-element array `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` if `other` is one axis-aligned step away.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position { row, col }
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Static terrain: a rectangular array of cell costs.
///
/// Every cell is either `IMPASSABLE` or a cost `>= 1` paid when the agent
/// enters it. Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Creates a grid from row-major cell values.
    ///
    /// # Arguments
    /// * `rows`: One `Vec<i32>` per grid row, all of equal length.
    ///
    /// # Returns
    /// * `Ok(Grid)` if the rows form a non-empty rectangle and every value is
    ///   either `IMPASSABLE` or at least 1.
    /// * `Err(PlannerError::InvalidGrid)` otherwise.
    ///
    /// # Examples
    /// ```
    /// use delivery_planner::grid::{Grid, Position, IMPASSABLE};
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec![1, 1, 1],
    ///     vec![1, IMPASSABLE, 1],
    ///     vec![1, 1, 3],
    /// ]).unwrap();
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.cell(Position::new(2, 2)), Some(3));
    /// assert!(Grid::from_rows(vec![vec![1, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(PlannerError::InvalidGrid("grid has no cells".to_string()));
        }

        let mut cells = Vec::with_capacity(row_count * col_count);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(PlannerError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    col_count
                )));
            }
            for (c, value) in row.into_iter().enumerate() {
                if value != IMPASSABLE && value < 1 {
                    return Err(PlannerError::InvalidGrid(format!(
                        "cell ({}, {}) has cost {}; costs must be >= 1 or {} for a wall",
                        r, c, value, IMPASSABLE
                    )));
                }
                cells.push(value);
            }
        }

        Ok(Grid {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    /// Creates a `rows` x `cols` grid where every cell costs `cost`.
    ///
    /// # Panics
    /// Panics if `rows` or `cols` is zero, or if `cost < 1`.
    pub fn uniform(rows: usize, cols: usize, cost: i32) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        assert!(cost >= 1, "uniform cost must be >= 1");
        Grid {
            rows,
            cols,
            cells: vec![cost; rows * cols],
        }
    }

    /// Creates a random grid from a seed.
    ///
    /// Each cell is a wall with probability `wall_ratio`, otherwise a cost drawn
    /// uniformly from `1..=max_cost`. The top-left and bottom-right corners are
    /// always passable so they can serve as start and goal. The same seed always
    /// produces the same grid.
    ///
    /// # Panics
    /// Panics if `rows` or `cols` is zero or `max_cost < 1`.
    pub fn random_with_seed(
        rows: usize,
        cols: usize,
        wall_ratio: f64,
        max_cost: i32,
        seed: u64,
    ) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        assert!(max_cost >= 1, "max_cost must be >= 1");
        let mut rng = SmallRng::seed_from_u64(seed);
        let last = rows * cols - 1;

        let cells = (0..rows * cols)
            .map(|idx| {
                let is_corner = idx == 0 || idx == last;
                if !is_corner && rng.gen_bool(wall_ratio.clamp(0.0, 1.0)) {
                    IMPASSABLE
                } else {
                    rng.gen_range(1..=max_cost)
                }
            })
            .collect();

        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `pos` lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    /// Returns the raw cell value at `pos`, or `None` when out of bounds.
    pub fn cell(&self, pos: Position) -> Option<i32> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.row as usize * self.cols + pos.col as usize])
        } else {
            None
        }
    }
}

/// A moving obstacle following a fixed schedule.
///
/// The obstacle is at `path[t - start_time]` at time `t` while that index is in
/// range, and absent otherwise (not yet spawned, or already gone).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicObstacle {
    pub id: String,
    pub path: Vec<Position>,
    #[serde(default)]
    pub start_time: Timestep,
}

impl DynamicObstacle {
    pub fn new(id: impl Into<String>, path: Vec<Position>, start_time: Timestep) -> Self {
        DynamicObstacle {
            id: id.into(),
            path,
            start_time,
        }
    }

    /// Returns where the obstacle is at time `t`, if it is present at all.
    ///
    /// # Examples
    /// ```
    /// use delivery_planner::grid::{DynamicObstacle, Position};
    ///
    /// let obs = DynamicObstacle::new("o1", vec![Position::new(1, 0), Position::new(1, 1)], 2);
    /// assert_eq!(obs.position_at(1), None);
    /// assert_eq!(obs.position_at(2), Some(Position::new(1, 0)));
    /// assert_eq!(obs.position_at(3), Some(Position::new(1, 1)));
    /// assert_eq!(obs.position_at(4), None);
    /// ```
    pub fn position_at(&self, t: Timestep) -> Option<Position> {
        let idx = t.checked_sub(self.start_time)?;
        self.path.get(idx as usize).copied()
    }
}

/// Moves in neighbor enumeration order: down, up, right, left.
const MOVES: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The static grid together with every known dynamic obstacle.
#[derive(Clone, Debug)]
pub struct GridWorld {
    grid: Grid,
    dynamic_obstacles: Vec<DynamicObstacle>,
}

impl GridWorld {
    pub fn new(grid: Grid, dynamic_obstacles: Vec<DynamicObstacle>) -> Self {
        GridWorld {
            grid,
            dynamic_obstacles,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn dynamic_obstacles(&self) -> &[DynamicObstacle] {
        &self.dynamic_obstacles
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.grid.in_bounds(pos)
    }

    /// Returns `true` if `pos` is not a wall. Out-of-bounds cells are never passable.
    pub fn passable(&self, pos: Position) -> bool {
        self.grid.cell(pos).map_or(false, |value| value != IMPASSABLE)
    }

    /// Cost of entering `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds or impassable; callers check
    /// `passable` first.
    pub fn cost(&self, pos: Position) -> u32 {
        match self.grid.cell(pos) {
            Some(value) if value != IMPASSABLE => value as u32,
            _ => panic!("cost queried for non-passable cell {}", pos),
        }
    }

    /// Returns the in-bounds, passable cells adjacent to `pos`.
    ///
    /// The order is always down, up, right, left; downstream searches rely on
    /// it for deterministic tie-breaking.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        MOVES
            .iter()
            .map(|&(dr, dc)| Position::new(pos.row + dr, pos.col + dc))
            .filter(|&next| self.passable(next))
            .collect()
    }

    /// Returns `true` if any dynamic obstacle is at `pos` at time `t`.
    pub fn occupied_at(&self, pos: Position, t: Timestep) -> bool {
        self.dynamic_obstacles
            .iter()
            .any(|obs| obs.position_at(t) == Some(pos))
    }

    /// Returns the cells held by dynamic obstacles at time `t`, in obstacle order.
    pub fn occupied_cells_at(&self, t: Timestep) -> Vec<Position> {
        self.dynamic_obstacles
            .iter()
            .filter_map(|obs| obs.position_at(t))
            .collect()
    }

    /// Appends an obstacle. No validation: it may overlap plans already computed.
    pub fn add_dynamic_obstacle(&mut self, obstacle: DynamicObstacle) {
        self.dynamic_obstacles.push(obstacle);
    }

    /// Renders the world as ASCII art.
    ///
    /// Symbols: `A` agent, `G` goal, `#` wall, `X` dynamic obstacle at `time`,
    /// `.` cost-1 cell, and the cost itself for any other cell.
    /// Cells are separated by a space, one line per row, so rows with
    /// multi-digit costs do not line up.
    ///
    /// # Arguments
    /// * `agent`: Optional agent position to mark.
    /// * `goal`: Optional goal position to mark.
    /// * `time`: If `Some(t)`, obstacles present at `t` are drawn.
    pub fn render(&self, agent: Option<Position>, goal: Option<Position>, time: Option<Timestep>) -> String {
        let occupied = time.map(|t| self.occupied_cells_at(t)).unwrap_or_default();
        let mut output = String::new();

        for r in 0..self.rows() {
            let line: Vec<String> = (0..self.cols())
                .map(|c| {
                    let pos = Position::new(r as i32, c as i32);
                    if agent == Some(pos) {
                        "A".to_string()
                    } else if goal == Some(pos) {
                        "G".to_string()
                    } else if !self.passable(pos) {
                        "#".to_string()
                    } else if occupied.contains(&pos) {
                        "X".to_string()
                    } else {
                        match self.cost(pos) {
                            1 => ".".to_string(),
                            cost => cost.to_string(),
                        }
                    }
                })
                .collect();
            output.push_str(&line.join(" "));
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for GridWorld {
    /// Formats the bare terrain using `render(None, None, None)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(None, None, None))
    }
}
