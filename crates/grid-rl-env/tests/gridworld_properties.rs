//! Property tests for the grid-world transition function

use grid_rl_env::{
    Cell, DiscreteAction, Environment, Grid, GridWorldEnv, Move, Position, Reward, GOAL_REWARD,
    STEP_REWARD,
};
use proptest::prelude::*;

/// Random valid grid: walls scattered at random, start and goal on distinct cells
fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..7, 2usize..7)
        .prop_flat_map(|(rows, cols)| {
            let n = rows * cols;
            (
                Just((rows, cols)),
                prop::collection::vec(prop::bool::weighted(0.3), n),
                0..n,
                0..n - 1,
            )
        })
        .prop_map(|((rows, cols), walls, start, goal)| {
            // Skip over the start index so start and goal never coincide
            let goal = if goal >= start { goal + 1 } else { goal };
            let cells = (0..rows)
                .map(|r| {
                    (0..cols)
                        .map(|c| {
                            let i = r * cols + c;
                            if i == start {
                                Cell::Start
                            } else if i == goal {
                                Cell::Goal
                            } else if walls[i] {
                                Cell::Wall
                            } else {
                                Cell::Empty
                            }
                        })
                        .collect()
                })
                .collect();
            Grid::new(cells).expect("generated grid is valid")
        })
}

proptest! {
    #[test]
    fn reset_always_returns_start(
        grid in arb_grid(),
        actions in prop::collection::vec(0usize..6, 0..20),
    ) {
        let start = grid.start();
        let mut env = GridWorldEnv::new(grid);
        prop_assert_eq!(env.reset(), start);

        for a in actions {
            env.step(DiscreteAction(a));
        }
        prop_assert_eq!(env.reset(), start);
    }

    #[test]
    fn blocked_moves_stay_in_place(
        grid in arb_grid(),
        row in 0usize..7,
        col in 0usize..7,
        code in 0usize..4,
    ) {
        let here = Position::new(row % grid.n_rows(), col % grid.n_cols());
        let mv = Move::ALL[code];
        let blocked = match here.neighbor(mv, grid.n_rows(), grid.n_cols()) {
            None => true,
            Some(next) => grid.is_wall(next),
        };

        if blocked && !grid.is_wall(here) && here != grid.goal() {
            let env = GridWorldEnv::new(grid);
            prop_assert_eq!(env.transition(here, mv.into()), here);
        }
    }

    #[test]
    fn rewards_follow_goal(grid in arb_grid(), actions in prop::collection::vec(0usize..5, 1..40)) {
        let goal = grid.goal();
        let mut env = GridWorldEnv::new(grid);
        env.reset();

        for a in actions {
            let step = env.step(DiscreteAction(a));
            prop_assert!(!env.grid().is_wall(step.observation));
            prop_assert!(env.grid().contains(step.observation));
            if step.observation == goal {
                prop_assert!(step.done);
                prop_assert_eq!(step.reward, Reward(GOAL_REWARD));
                break;
            }
            prop_assert!(!step.done);
            prop_assert_eq!(step.reward, Reward(STEP_REWARD));
        }
    }
}
