pub mod board;
pub mod chain;
pub mod config;
pub mod error;
pub mod game;
pub mod handicap;
pub mod player;
pub mod stone;
pub mod turn;
pub mod vertex;

pub use board::{Board, Placement};
pub use chain::{Chain, ChainId};
pub use config::GameConfig;
pub use error::{ChainError, GoError};
pub use game::{Game, GameStatus};
pub use handicap::Handicap;
pub use player::Player;
pub use stone::{Cell, Stone};
pub use turn::{Move, Turn};
pub use vertex::{BoardSize, Vertex};
