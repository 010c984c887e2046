//! Action representations and action spaces

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for defining action spaces
pub trait ActionSpace: Send + Sync {
    /// The type of actions in this space
    type Action;

    /// Sample an action uniformly at random from the space
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Action;

    /// Check if an action is valid within this space
    fn contains(&self, action: &Self::Action) -> bool;

    /// Number of actions in the space
    fn len(&self) -> usize;

    /// Whether the space has no actions at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Discrete action, identified by its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscreteAction(pub usize);

impl DiscreteAction {
    /// The action index
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<Move> for DiscreteAction {
    fn from(mv: Move) -> Self {
        Self(mv as usize)
    }
}

/// Discrete action space `0..n`
#[derive(Debug, Clone, Copy)]
pub struct DiscreteSpace {
    /// Number of discrete actions
    pub n: usize,
}

impl DiscreteSpace {
    /// Create a new discrete action space
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl ActionSpace for DiscreteSpace {
    type Action = DiscreteAction;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Action {
        DiscreteAction(rng.gen_range(0..self.n))
    }

    fn contains(&self, action: &Self::Action) -> bool {
        action.0 < self.n
    }

    fn len(&self) -> usize {
        self.n
    }
}

/// A one-cell move on a grid. Discriminants are the action codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Row - 1
    Up = 0,
    /// Row + 1
    Down = 1,
    /// Column - 1
    Left = 2,
    /// Column + 1
    Right = 3,
}

impl Move {
    /// All moves in action-code order
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Number of moves
    pub const COUNT: usize = Self::ALL.len();

    /// Decode an action code. Codes outside `0..4` have no move.
    #[must_use]
    pub fn from_action(action: DiscreteAction) -> Option<Self> {
        Self::ALL.get(action.0).copied()
    }

    /// `(row, col)` offset of the move
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_move_codes() {
        for (code, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(Move::from_action(DiscreteAction(code)), Some(*mv));
            assert_eq!(DiscreteAction::from(*mv), DiscreteAction(code));
        }
        assert_eq!(Move::from_action(DiscreteAction(4)), None);
        assert_eq!(Move::from_action(DiscreteAction(usize::MAX)), None);
    }

    #[test]
    fn test_discrete_space_sampling() {
        let space = DiscreteSpace::new(Move::COUNT);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let action = space.sample(&mut rng);
            assert!(space.contains(&action));
            seen[action.0] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert!(!space.contains(&DiscreteAction(4)));
    }
}
