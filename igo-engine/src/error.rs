use std::fmt;

/// Rule violations reported by [`Board`](crate::Board) and [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    EmptyStoneRejected,
    OccupiedVertex,
    KoForbidden,
    NoLiberty,
    OutOfBoard,
    OutOfTurn,
    PlayerAlreadyExists,
    TooManyPlayers,
    GameFinished,
    UnsupportedSize(u8),
    InvalidHandicap { count: u8, max: u8 },
    Chain(ChainError),
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::EmptyStoneRejected => write!(f, "empty stone is not allowed to play"),
            GoError::OccupiedVertex => write!(f, "vertex is occupied"),
            GoError::KoForbidden => write!(f, "ko forbids playing here this turn"),
            GoError::NoLiberty => write!(f, "vertex has no liberty"),
            GoError::OutOfBoard => write!(f, "vertex is out of the board"),
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::PlayerAlreadyExists => write!(f, "player already exists"),
            GoError::TooManyPlayers => write!(f, "game already has two players"),
            GoError::GameFinished => write!(f, "game is finished"),
            GoError::UnsupportedSize(n) => write!(f, "unsupported board size: {n}"),
            GoError::InvalidHandicap { count, max } => {
                write!(f, "invalid handicap {count} (max {max})")
            }
            GoError::Chain(e) => write!(f, "chain error: {e}"),
        }
    }
}

impl std::error::Error for GoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GoError::Chain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChainError> for GoError {
    fn from(e: ChainError) -> Self {
        GoError::Chain(e)
    }
}

/// Violations of the [`Chain`](crate::Chain) contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    DuplicateStone,
    InvalidOperation,
    NoStones,
    ColorMismatch,
    SameChain,
    NotAdjacent,
    DuplicateChainId,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::DuplicateStone => write!(f, "stone already exists in chain"),
            ChainError::InvalidOperation => write!(f, "operation not allowed on a dissolved chain"),
            ChainError::NoStones => write!(f, "chain has no stones"),
            ChainError::ColorMismatch => write!(f, "chain colors do not allow this operation"),
            ChainError::SameChain => write!(f, "cannot merge a chain with itself"),
            ChainError::NotAdjacent => write!(f, "chains are not adjacent"),
            ChainError::DuplicateChainId => write!(f, "chain id already registered"),
        }
    }
}

impl std::error::Error for ChainError {}
