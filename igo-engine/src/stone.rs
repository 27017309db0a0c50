use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// Colour of a physical stone. There is no "empty" colour; see [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}

impl std::str::FromStr for Stone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" | "B" => Ok(Stone::Black),
            "white" | "W" => Ok(Stone::White),
            _ => Err(format!("invalid stone: {s}")),
        }
    }
}

/// Occupancy of one vertex.
///
/// `Ko` marks a vertex captured on the previous ply that may not be
/// played on this ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "stone")]
pub enum Cell {
    #[default]
    Empty,
    Stone(Stone),
    Ko,
}

impl Cell {
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Stone(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character used by the text rendering of a board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '+',
            Cell::Stone(s) => s.letter(),
            Cell::Ko => 'K',
        }
    }
}

impl From<Stone> for Cell {
    fn from(stone: Stone) -> Self {
        Cell::Stone(stone)
    }
}
