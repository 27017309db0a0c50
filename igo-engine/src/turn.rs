use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stone::Stone;
use crate::vertex::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play,
    Pass,
    Resign,
}

/// One entry of a game's move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub kind: Move,
    pub stone: Stone,
    pub pos: Option<Vertex>,
    /// Stones lifted by this move.
    pub captured: u32,
}

impl Turn {
    pub fn play(stone: Stone, vertex: Vertex, captured: u32) -> Self {
        Turn {
            kind: Move::Play,
            stone,
            pos: Some(vertex),
            captured,
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            kind: Move::Pass,
            stone,
            pos: None,
            captured: 0,
        }
    }

    pub fn resign(stone: Stone) -> Self {
        Turn {
            kind: Move::Resign,
            stone,
            pos: None,
            captured: 0,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.kind == Move::Pass
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.pos) {
            (Move::Play, Some(v)) => write!(f, "{} {v}", self.stone),
            (Move::Play, None) | (Move::Pass, _) => write!(f, "{} pass", self.stone),
            (Move::Resign, _) => write!(f, "{} resign", self.stone),
        }
    }
}
