use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static contents of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Start, // Sheep starts here
    Home,  // Target cell
    Tiger, // Blocks movement
    Coin,  // Collectible
}

impl CellKind {
    /// Token used in grid text
    pub fn symbol(&self) -> &'static str {
        match self {
            CellKind::Empty => ".",
            CellKind::Start => "S",
            CellKind::Home => "H",
            CellKind::Tiger => "T",
            CellKind::Coin => "C",
        }
    }

    /// Recognised tokens only; anything else is left to the parser's policy
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "." => Some(CellKind::Empty),
            "S" => Some(CellKind::Start),
            "H" => Some(CellKind::Home),
            "T" => Some(CellKind::Tiger),
            "C" => Some(CellKind::Coin),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Empty => "Empty",
            CellKind::Start => "Start",
            CellKind::Home => "Home",
            CellKind::Tiger => "Tiger",
            CellKind::Coin => "Coin",
        };
        write!(f, "{} ('{}')", name, self.symbol())
    }
}

/// Grid coordinate, `row` first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One gene: a single step in one of the four grid directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Uniform over the four directions
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
