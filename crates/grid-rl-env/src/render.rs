//! Text rendering

use grid_rl_core::Position;

use crate::Grid;

/// Render `grid` as text with the agent drawn as `A` at `agent`.
///
/// One line per row, cells separated by a single space. Cells other than the
/// agent's keep the token they were parsed from.
#[must_use]
pub fn render_with_agent(grid: &Grid, agent: Position) -> String {
    let mut lines = Vec::with_capacity(grid.n_rows());
    let mut line = Vec::with_capacity(grid.n_cols());

    for (pos, label) in grid.labels() {
        line.push(if pos == agent { "A" } else { label });
        if pos.col + 1 == grid.n_cols() {
            lines.push(line.join(" "));
            line.clear();
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_overlays_cell() {
        let grid = Grid::parse("S 0 1\n0 0 G").unwrap();
        assert_eq!(render_with_agent(&grid, grid.start()), "A 0 1\n0 0 G");
        assert_eq!(render_with_agent(&grid, grid.goal()), "S 0 1\n0 0 A");
    }

    #[test]
    fn test_unknown_tokens_render_as_written() {
        let grid = Grid::parse("S x\n. G").unwrap();
        assert_eq!(render_with_agent(&grid, grid.start()), "A x\n. G");
        assert_eq!(render_with_agent(&grid, Position::new(0, 1)), "S A\n. G");
    }

    #[test]
    fn test_agent_off_grid_is_not_drawn() {
        let grid = Grid::parse("S G").unwrap();
        assert_eq!(render_with_agent(&grid, Position::new(4, 4)), "S G");
    }
}
