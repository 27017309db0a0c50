use serde::{Deserialize, Serialize};

use crate::stone::Stone;

/// A participant of a [`Game`](crate::Game), identified by colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub stone: Stone,
    /// Enemy stones this player has captured.
    pub agehamas: u32,
    /// Reserved for scoring; never computed here.
    pub territories: u32,
    pub is_winner: bool,
}

impl Player {
    pub fn new(stone: Stone) -> Self {
        Player {
            stone,
            agehamas: 0,
            territories: 0,
            is_winner: false,
        }
    }
}
