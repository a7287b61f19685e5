use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::grid::{DynamicObstacle, Grid, IMPASSABLE};

/// Parses an array of string slices into a `Grid`.
///
/// Each string slice is one grid row, starting from row 0. Cells are separated
/// by whitespace. Valid tokens are:
/// - an integer: `-1` for a wall, otherwise the entry cost (must be `>= 1`)
/// - `#`: a wall
/// - `.`: a cell with cost 1
///
/// Blank rows are skipped so map files may contain trailing newlines.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of the grid.
///
/// # Returns
/// * `Ok(Grid)` if parsing is successful.
/// * `Err(PlannerError::InvalidGrid)` if a token is not recognised, the rows
///   have different lengths, a cost is below 1, or no rows are given.
///
/// # Examples
/// ```
/// use delivery_planner::utils::grid_from_str_array;
/// use delivery_planner::grid::{Position, IMPASSABLE};
///
/// let grid = grid_from_str_array(&[
///     "1 1 2",
///     ". # 3",
/// ]).unwrap();
/// assert_eq!(grid.cell(Position::new(0, 2)), Some(2));
/// assert_eq!(grid.cell(Position::new(1, 0)), Some(1));
/// assert_eq!(grid.cell(Position::new(1, 1)), Some(IMPASSABLE));
///
/// assert!(grid_from_str_array(&["1 x 1"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid> {
    let mut rows = Vec::new();

    for (r, row_str) in s.iter().filter(|line| !line.trim().is_empty()).enumerate() {
        let row = row_str
            .split_whitespace()
            .enumerate()
            .map(|(c, token)| match token {
                "#" => Ok(IMPASSABLE),
                "." => Ok(1),
                _ => token.parse::<i32>().map_err(|_| {
                    PlannerError::InvalidGrid(format!(
                        "Unrecognized token '{}' in row {} col {}",
                        token, r, c
                    ))
                }),
            })
            .collect::<Result<Vec<i32>>>()?;
        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Reads a map file (see `grid_from_str_array` for the format).
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    grid_from_str_array(&lines)
}

#[derive(Debug, Deserialize)]
struct ScheduleFile {
    #[serde(default)]
    moving_obstacles: Vec<DynamicObstacle>,
}

/// Parses an obstacle schedule document.
///
/// The expected shape is
/// `{"moving_obstacles": [{"id": "o1", "path": [[1, 0], [1, 1]], "start_time": 0}]}`.
/// `start_time` defaults to 0 and a missing `moving_obstacles` key means no obstacles.
pub fn schedule_from_str(json: &str) -> Result<Vec<DynamicObstacle>> {
    let schedule: ScheduleFile = serde_json::from_str(json)?;
    Ok(schedule.moving_obstacles)
}

/// Reads an obstacle schedule file (see `schedule_from_str` for the format).
pub fn load_schedule(path: impl AsRef<Path>) -> Result<Vec<DynamicObstacle>> {
    let content = fs::read_to_string(path)?;
    schedule_from_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn test_grid_from_str_array_valid() {
        let grid = grid_from_str_array(&[
            "1 1 1 1",
            "1 -1 -1 1",
            "1 1 5 1",
        ])
        .unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.cell(Position::new(1, 1)), Some(IMPASSABLE));
        assert_eq!(grid.cell(Position::new(2, 2)), Some(5));
    }

    #[test]
    fn test_grid_from_str_array_skips_blank_lines() {
        let grid = grid_from_str_array(&["", "1 1", "  ", "1 1", ""]).unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_grid_from_str_array_invalid_token() {
        let result = grid_from_str_array(&["1 1", "1 X"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unrecognized token 'X'"));
    }

    #[test]
    fn test_grid_from_str_array_ragged() {
        let result = grid_from_str_array(&["1 1 1", "1 1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_from_str_array_zero_cost() {
        let result = grid_from_str_array(&["1 0"]);
        assert!(matches!(result, Err(PlannerError::InvalidGrid(_))));
    }

    #[test]
    fn test_grid_from_str_array_empty_input() {
        let empty: [&str; 0] = [];
        assert!(grid_from_str_array(&empty).is_err());
    }

    #[test]
    fn test_schedule_from_str() {
        let json = r#"{
            "moving_obstacles": [
                {"id": "o1", "path": [[1, 0], [1, 1], [1, 2]], "start_time": 0},
                {"id": "o2", "path": [[3, 3]]}
            ]
        }"#;
        let obstacles = schedule_from_str(json).unwrap();
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].id, "o1");
        assert_eq!(obstacles[0].path[2], Position::new(1, 2));
        assert_eq!(obstacles[1].start_time, 0);
    }

    #[test]
    fn test_schedule_from_str_missing_key_is_empty() {
        assert!(schedule_from_str("{}").unwrap().is_empty());
    }

    #[test]
    fn test_schedule_from_str_malformed() {
        let result = schedule_from_str(r#"{"moving_obstacles": [{"id": "o1", "path": [[1]]}]}"#);
        assert!(matches!(result, Err(PlannerError::Json(_))));
    }
}
