use std::collections::{BTreeMap, BTreeSet};

use crate::error::ChainError;
use crate::stone::Stone;
use crate::vertex::{BoardSize, Vertex};

pub type ChainId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Live(Stone),
    Dissolved,
}

/// A set of connected same-coloured stones and the empty vertices next to them.
///
/// A chain is captured or merged away exactly once; after that it is
/// dissolved and every operation except [`Chain::stones`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    id: ChainId,
    status: Status,
    size: BoardSize,
    stones: BTreeSet<Vertex>,
    liberties: BTreeSet<Vertex>,
}

impl Chain {
    pub fn new(id: ChainId, stone: Stone, size: BoardSize) -> Self {
        Chain {
            id,
            status: Status::Live(stone),
            size,
            stones: BTreeSet::new(),
            liberties: BTreeSet::new(),
        }
    }

    // -- Accessors --

    /// `None` once the chain is dissolved.
    pub fn id(&self) -> Option<ChainId> {
        match self.status {
            Status::Live(_) => Some(self.id),
            Status::Dissolved => None,
        }
    }

    pub fn color(&self) -> Option<Stone> {
        match self.status {
            Status::Live(stone) => Some(stone),
            Status::Dissolved => None,
        }
    }

    pub fn is_dissolved(&self) -> bool {
        self.status == Status::Dissolved
    }

    pub fn stones(&self) -> Result<&BTreeSet<Vertex>, ChainError> {
        if self.stones.is_empty() {
            return Err(ChainError::NoStones);
        }
        Ok(&self.stones)
    }

    pub fn liberties(&self) -> Result<&BTreeSet<Vertex>, ChainError> {
        self.live_color()?;
        Ok(&self.liberties)
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.stones.contains(&v)
    }

    // -- Mutation --

    /// Add a stone and the neighbours of that stone as liberties.
    pub fn add_stone(&mut self, v: Vertex) -> Result<(), ChainError> {
        self.live_color()?;
        if !self.stones.insert(v) {
            return Err(ChainError::DuplicateStone);
        }

        self.liberties.remove(&v);
        for n in self.size.neighbors(v) {
            if !self.contains(n) {
                self.liberties.insert(n);
            }
        }
        Ok(())
    }

    /// Drop every liberty occupied by one of `enemy`'s stones.
    ///
    /// Returns `true` if this chain ran out of liberties, in which case it
    /// is now dissolved.
    pub fn resolve_against(&mut self, enemy: &Chain) -> Result<bool, ChainError> {
        let color = self.live_color()?;
        if enemy.live_color()? == color {
            return Err(ChainError::ColorMismatch);
        }

        for v in &enemy.stones {
            self.liberties.remove(v);
        }

        if self.liberties.is_empty() {
            self.dissolve();
            return Ok(true);
        }
        Ok(false)
    }

    /// Absorb `other` into this chain, leaving `other` dissolved.
    pub fn merge_into(&mut self, other: &mut Chain) -> Result<(), ChainError> {
        let color = self.live_color()?;
        let other_color = other.live_color()?;
        if self.id == other.id {
            return Err(ChainError::SameChain);
        }
        if color != other_color {
            return Err(ChainError::ColorMismatch);
        }
        if !self.is_adjacent(other) {
            return Err(ChainError::NotAdjacent);
        }
        if !self.stones.is_disjoint(&other.stones) {
            return Err(ChainError::DuplicateStone);
        }

        for &v in &other.stones {
            self.add_stone(v)?;
        }
        self.liberties.extend(other.liberties.iter().copied());
        for v in &self.stones {
            self.liberties.remove(v);
        }

        other.dissolve();
        Ok(())
    }

    /// Insert `chain` into `chains` unless its id is already taken.
    pub fn register_unique(
        chains: &mut BTreeMap<ChainId, Chain>,
        chain: Chain,
    ) -> Result<(), ChainError> {
        let id = chain.id().ok_or(ChainError::InvalidOperation)?;
        if chains.contains_key(&id) {
            return Err(ChainError::DuplicateChainId);
        }
        chains.insert(id, chain);
        Ok(())
    }

    /// A captured neighbour freed `v`.
    pub(crate) fn add_liberty(&mut self, v: Vertex) {
        if !self.is_dissolved() && !self.contains(v) {
            self.liberties.insert(v);
        }
    }

    // -- Internal helpers --

    fn live_color(&self) -> Result<Stone, ChainError> {
        self.color().ok_or(ChainError::InvalidOperation)
    }

    fn is_adjacent(&self, other: &Chain) -> bool {
        self.stones.iter().any(|v| other.liberties.contains(v))
            || other.stones.iter().any(|v| self.liberties.contains(v))
    }

    fn dissolve(&mut self) {
        self.status = Status::Dissolved;
        self.stones.clear();
        self.liberties.clear();
    }
}
