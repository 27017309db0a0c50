use serde::{Deserialize, Serialize};

use crate::error::GoError;
use crate::handicap::{self, Handicap};
use crate::vertex::BoardSize;

/// Settings a [`Game`](crate::Game) is created from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: BoardSize,
    pub komi: f32,
    pub handicap: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: BoardSize::NINE,
            komi: 6.5,
            handicap: 0,
        }
    }
}

impl GameConfig {
    pub fn new(size: BoardSize) -> Self {
        GameConfig {
            size,
            ..Default::default()
        }
    }

    /// A count of 0 or 1 means an even game; anything else needs a hoshi layout.
    pub fn validate(&self) -> Result<(), GoError> {
        let max = handicap::max_handicap(self.size);
        if self.handicap >= 2 && self.handicap > max {
            return Err(GoError::InvalidHandicap {
                count: self.handicap,
                max,
            });
        }
        Ok(())
    }

    pub fn handicap(&self) -> Handicap {
        Handicap::new(self.komi, self.handicap)
    }
}
