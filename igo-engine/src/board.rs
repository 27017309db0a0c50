use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use crate::chain::{Chain, ChainId};
use crate::error::{ChainError, GoError};
use crate::stone::{Cell, Stone};
use crate::vertex::{BoardSize, Vertex};

/// Outcome of a successful [`Board::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub vertex: Vertex,
    pub stone: Stone,
    pub captured: Vec<Vertex>,
    pub ko: Option<Vertex>,
}

/// The Go board, stored as an arena of chains keyed by id plus a
/// vertex-to-chain index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    chains: BTreeMap<ChainId, Chain>,
    owner: Vec<Option<ChainId>>,
    ko: Option<Vertex>,
    next_id: ChainId,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Board {
            size,
            chains: BTreeMap::new(),
            owner: vec![None; size.area()],
            ko: None,
            next_id: 0,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The vertex that may not be played on this ply, if any.
    pub fn ko(&self) -> Option<Vertex> {
        self.ko
    }

    /// Live chains in id order.
    pub fn chains(&self) -> impl Iterator<Item = &Chain> {
        self.chains.values()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn read(&self, vertex: Vertex) -> Result<Cell, GoError> {
        if !self.size.contains(vertex) {
            return Err(GoError::OutOfBoard);
        }
        Ok(self.cell(self.size.index_of(vertex)))
    }

    pub fn stone_at(&self, vertex: Vertex) -> Option<Stone> {
        self.read(vertex).ok().and_then(Cell::stone)
    }

    /// The chain owning `vertex`, or `None` for an empty, ko or off-board vertex.
    pub fn chain_at(&self, vertex: Vertex) -> Option<&Chain> {
        if !self.size.contains(vertex) {
            return None;
        }
        self.owner[self.size.index_of(vertex)].and_then(|id| self.chains.get(&id))
    }

    /// Every vertex with its cell, in index order. Recomputed on each call.
    pub fn current_board(&self) -> impl Iterator<Item = (Vertex, Cell)> + '_ {
        self.size.vertices().map(move |v| (v, self.cell(v.index)))
    }

    pub fn is_legal(&self, vertex: Vertex, stone: Stone) -> bool {
        self.clone().play(vertex, stone).is_ok()
    }

    // -- Game actions --

    /// Place a stone, merge friendly chains, capture enemy chains and
    /// update the ko marker. On error the board is left untouched.
    pub fn play(
        &mut self,
        vertex: Vertex,
        stone: impl Into<Option<Stone>>,
    ) -> Result<Placement, GoError> {
        let stone = stone.into().ok_or(GoError::EmptyStoneRejected)?;
        match self.read(vertex)? {
            Cell::Ko => return Err(GoError::KoForbidden),
            Cell::Stone(_) => return Err(GoError::OccupiedVertex),
            Cell::Empty => {}
        }

        let mut next = self.clone();
        let placement = next.place(vertex, stone).inspect_err(|e| {
            debug!(%vertex, %stone, error = %e, "placement rejected");
        })?;
        *self = next;

        debug!(
            %vertex,
            %stone,
            captured = placement.captured.len(),
            ko = ?placement.ko,
            "stone placed"
        );
        Ok(placement)
    }

    /// A pass lifts the ko marker.
    pub fn pass(&mut self) {
        self.ko = None;
    }

    /// Apply a placement to this board in place. Callers run it on a copy.
    fn place(&mut self, vertex: Vertex, stone: Stone) -> Result<Placement, GoError> {
        let vertex = self.size.vertex(vertex.x, vertex.y);

        let id = self.next_id;
        self.next_id += 1;
        let mut single = Chain::new(id, stone, self.size);
        single.add_stone(vertex)?;
        Chain::register_unique(&mut self.chains, single)?;
        self.owner[vertex.index] = Some(id);

        let (placing, merged) = self.merge_around(vertex, id, stone)?;
        let captured = self.capture_around(placing, stone)?;

        let mut chain = self.take(placing)?;
        for enemy in self.chains.values() {
            if enemy.color() != Some(stone.opp()) {
                continue;
            }
            if chain.resolve_against(enemy)? {
                return Err(GoError::NoLiberty);
            }
        }
        let liberties = chain.liberties()?.len();
        if liberties == 0 {
            return Err(GoError::NoLiberty);
        }
        self.chains.insert(placing, chain);

        self.ko = None;
        if !merged && captured.len() == 1 && liberties == 1 {
            self.ko = Some(captured[0]);
        }

        self.chains.retain(|_, c| !c.is_dissolved());

        Ok(Placement {
            vertex,
            stone,
            captured,
            ko: self.ko,
        })
    }

    /// Merge every friendly chain touching `vertex` into the one with the
    /// lowest id. Returns that id and whether any merge happened.
    fn merge_around(
        &mut self,
        vertex: Vertex,
        id: ChainId,
        stone: Stone,
    ) -> Result<(ChainId, bool), GoError> {
        let mut involved: BTreeSet<ChainId> = self
            .size
            .neighbors(vertex)
            .iter()
            .filter_map(|n| self.owner[n.index])
            .filter(|cid| self.chains.get(cid).and_then(Chain::color) == Some(stone))
            .collect();
        if involved.is_empty() {
            return Ok((id, false));
        }
        involved.insert(id);

        let survivor = involved.first().copied().unwrap_or(id);

        // The new stone goes first: it is the only link between the others.
        let order = std::iter::once(id).chain(
            involved
                .iter()
                .copied()
                .filter(|&cid| cid != survivor && cid != id),
        );
        for cid in order {
            let mut absorbed = self.take(cid)?;
            let stones: Vec<Vertex> = absorbed.stones()?.iter().copied().collect();
            self.chains
                .get_mut(&survivor)
                .ok_or(ChainError::InvalidOperation)?
                .merge_into(&mut absorbed)?;
            for v in stones {
                self.owner[v.index] = Some(survivor);
            }
            self.chains.insert(cid, absorbed);
        }

        Ok((survivor, true))
    }

    /// Resolve every enemy chain against the placing chain and lift the
    /// captured stones, returning their vertices.
    fn capture_around(
        &mut self,
        placing: ChainId,
        stone: Stone,
    ) -> Result<Vec<Vertex>, GoError> {
        let chain = self.take(placing)?;
        let mut captured = Vec::new();
        for enemy in self.chains.values_mut() {
            if enemy.color() != Some(stone.opp()) {
                continue;
            }
            let stones: Vec<Vertex> = enemy.stones()?.iter().copied().collect();
            if enemy.resolve_against(&chain)? {
                captured.extend(stones);
            }
        }
        self.chains.insert(placing, chain);

        for v in &captured {
            self.owner[v.index] = None;
        }
        for &v in &captured {
            for n in self.size.neighbors(v) {
                let owner = self.owner[n.index];
                if let Some(chain) = owner.and_then(|cid| self.chains.get_mut(&cid)) {
                    chain.add_liberty(v);
                }
            }
        }

        captured.sort();
        Ok(captured)
    }

    // -- Internal helpers --

    fn take(&mut self, id: ChainId) -> Result<Chain, ChainError> {
        self.chains.remove(&id).ok_or(ChainError::InvalidOperation)
    }

    fn cell(&self, index: usize) -> Cell {
        if self.ko.is_some_and(|k| k.index == index) {
            return Cell::Ko;
        }
        self.owner[index]
            .and_then(|id| self.chains.get(&id))
            .and_then(Chain::color)
            .map_or(Cell::Empty, Cell::Stone)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.get() as usize;
        for (v, cell) in self.current_board() {
            write!(f, "{}", cell.symbol())?;
            if v.index % n == n - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
