use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Board, Placement};
use crate::config::GameConfig;
use crate::error::GoError;
use crate::handicap::{self, Handicap};
use crate::player::Player;
use crate::stone::{Cell, Stone};
use crate::turn::Turn;
use crate::vertex::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    NotStarted,
    Playing,
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::NotStarted => write!(f, "not started"),
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Finished => write!(f, "finished"),
        }
    }
}

/// Turn sequencer around a [`Board`]: enforces alternation, handles passes,
/// resignation and player registration.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    status: GameStatus,
    players: ArrayVec<Player, 2>,
    turn: Stone,
    moves: Vec<Turn>,
    winner: Option<Stone>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GoError> {
        config.validate()?;

        let mut board = Board::new(config.size);
        let mut turn = Stone::Black;
        if let Some(points) = handicap::handicap_points(config.size, config.handicap) {
            for v in points {
                board.play(v, Stone::Black)?;
            }
            turn = Stone::White;
        }

        Ok(Game {
            config,
            board,
            status: GameStatus::NotStarted,
            players: ArrayVec::new(),
            turn,
            moves: Vec::new(),
            winner: None,
        })
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn handicap(&self) -> Handicap {
        self.config.handicap()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The colour expected to move next.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, stone: Stone) -> Option<&Player> {
        self.players.iter().find(|p| p.stone == stone)
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn read(&self, vertex: Vertex) -> Result<Cell, GoError> {
        self.board.read(vertex)
    }

    pub fn current_board(&self) -> impl Iterator<Item = (Vertex, Cell)> + '_ {
        self.board.current_board()
    }

    // -- Game actions --

    pub fn add_player(&mut self, player: Player) -> Result<(), GoError> {
        if self.players.is_full() {
            return Err(GoError::TooManyPlayers);
        }
        if self.player(player.stone).is_some() {
            return Err(GoError::PlayerAlreadyExists);
        }

        info!(stone = %player.stone, "player registered");
        self.players.push(player);
        Ok(())
    }

    pub fn play(&mut self, vertex: Vertex, stone: Stone) -> Result<Placement, GoError> {
        self.check_turn(stone)?;

        let placement = self.board.play(vertex, stone)?;
        let captured = placement.captured.len() as u32;
        if let Some(p) = self.players.iter_mut().find(|p| p.stone == stone) {
            p.agehamas += captured;
        }

        self.moves.push(Turn::play(stone, placement.vertex, captured));
        self.advance();
        Ok(placement)
    }

    /// Give up the move. Stones stay put; the ko marker expires.
    pub fn pass(&mut self, stone: Stone) -> Result<GameStatus, GoError> {
        self.check_turn(stone)?;

        self.board.pass();
        self.moves.push(Turn::pass(stone));
        self.advance();
        if matches!(self.moves.as_slice(), [.., a, b] if a.is_pass() && b.is_pass()) {
            self.status = GameStatus::Finished;
            info!(moves = self.moves.len(), "game finished after two passes");
        }
        Ok(self.status)
    }

    pub fn resign(&mut self, stone: Stone) -> Result<GameStatus, GoError> {
        if self.status == GameStatus::Finished {
            return Err(GoError::GameFinished);
        }

        let winner = stone.opp();
        self.moves.push(Turn::resign(stone));
        self.winner = Some(winner);
        if let Some(p) = self.players.iter_mut().find(|p| p.stone == winner) {
            p.is_winner = true;
        }
        self.status = GameStatus::Finished;
        info!(%winner, "game finished by resignation");
        Ok(self.status)
    }

    // -- Internal helpers --

    fn check_turn(&self, stone: Stone) -> Result<(), GoError> {
        if self.status == GameStatus::Finished {
            return Err(GoError::GameFinished);
        }
        if stone != self.turn {
            return Err(GoError::OutOfTurn);
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.turn = self.turn.opp();
        self.status = GameStatus::Playing;
    }
}
