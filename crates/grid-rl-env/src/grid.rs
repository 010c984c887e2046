//! Grid description and validation

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use grid_rl_core::{GridError, Position};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Open, traversable space
    #[default]
    Empty,
    /// Obstacle the agent cannot enter
    Wall,
    /// Where every episode begins
    Start,
    /// Terminal cell
    Goal,
}

impl Cell {
    /// Classify a token. `S`, `G` and `1` are start, goal and wall; anything
    /// else is open space.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "S" => Cell::Start,
            "G" => Cell::Goal,
            "1" => Cell::Wall,
            _ => Cell::Empty,
        }
    }

    /// Canonical token for the cell
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Cell::Empty => "0",
            Cell::Wall => "1",
            Cell::Start => "S",
            Cell::Goal => "G",
        }
    }
}

/// Immutable, validated grid with exactly one start and one goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    labels: Array2<String>,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Validate rows of cells and build a grid
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| (cell, cell.token().to_owned())).collect())
            .collect();
        Self::labelled(rows)
    }

    /// Build a grid from pre-split tokens. Tokens are kept as written for
    /// display.
    pub fn from_tokens<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, GridError> {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|t| (Cell::from_token(t.as_ref()), t.as_ref().to_owned()))
                    .collect()
            })
            .collect();
        Self::labelled(rows)
    }

    fn labelled(rows: Vec<Vec<(Cell, String)>>) -> Result<Self, GridError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_cols == 0 {
            return Err(GridError::Empty);
        }

        let mut start = None;
        let mut goal = None;

        for (r, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: n_cols,
                    actual: row.len(),
                });
            }

            for (c, (cell, _)) in row.iter().enumerate() {
                let here = Position::new(r, c);
                match (cell, start, goal) {
                    (Cell::Start, Some(first), _) => {
                        return Err(GridError::DuplicateStart { first, second: here });
                    }
                    (Cell::Start, None, _) => start = Some(here),
                    (Cell::Goal, _, Some(first)) => {
                        return Err(GridError::DuplicateGoal { first, second: here });
                    }
                    (Cell::Goal, _, None) => goal = Some(here),
                    _ => {}
                }
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;
        let shape = (rows.len(), n_cols);
        let cells = Array2::from_shape_fn(shape, |(r, c)| rows[r][c].0);
        let labels = Array2::from_shape_fn(shape, |(r, c)| rows[r][c].1.clone());

        tracing::debug!(
            rows = cells.nrows(),
            cols = cells.ncols(),
            %start,
            %goal,
            "grid constructed"
        );

        Ok(Self {
            cells,
            labels,
            start,
            goal,
        })
    }

    /// Parse a grid from text: one row per non-blank line, cells separated
    /// by whitespace
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<&str>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().collect())
            .collect();
        Self::from_tokens(&rows)
    }

    /// Number of rows
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Start position
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Goal position
    #[must_use]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Whether `pos` lies inside the grid
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.n_rows() && pos.col < self.n_cols()
    }

    /// Cell at `pos`, or `None` outside the grid
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get((pos.row, pos.col)).copied()
    }

    /// Whether `pos` is a wall. Positions outside the grid are not walls.
    #[must_use]
    pub fn is_wall(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Wall)
    }

    /// All cells in row-major order with their positions
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((r, c), cell)| (Position::new(r, c), *cell))
    }

    /// Display token of every cell in row-major order, as it was written
    pub fn labels(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        self.labels
            .indexed_iter()
            .map(|((r, c), label)| (Position::new(r, c), label.as_str()))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.labels.rows().into_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let tokens: Vec<&str> = row.iter().map(String::as_str).collect();
            f.write_str(&tokens.join(" "))?;
        }
        Ok(())
    }
}
