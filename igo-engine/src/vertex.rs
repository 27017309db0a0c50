use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::GoError;

pub const MAX_SIZE: u8 = 25;

/// Side length of a square board. Every [`Vertex`] is built through one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BoardSize(u8);

impl BoardSize {
    pub const NINE: BoardSize = BoardSize(9);
    pub const THIRTEEN: BoardSize = BoardSize(13);
    pub const NINETEEN: BoardSize = BoardSize(19);

    pub fn new(n: u8) -> Result<Self, GoError> {
        if n == 0 || n > MAX_SIZE {
            return Err(GoError::UnsupportedSize(n));
        }
        Ok(BoardSize(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of intersections.
    pub fn area(self) -> usize {
        self.0 as usize * self.0 as usize
    }

    /// Build a vertex from board coordinates. No range check is made here;
    /// see [`BoardSize::contains`].
    pub fn vertex(self, x: u8, y: u8) -> Vertex {
        Vertex {
            x,
            y,
            index: y as usize * self.0 as usize + x as usize,
        }
    }

    /// Build a vertex from its linear index.
    pub fn vertex_at(self, index: usize) -> Vertex {
        let n = self.0 as usize;
        Vertex {
            x: (index % n) as u8,
            y: (index / n) as u8,
            index,
        }
    }

    pub fn contains(self, v: Vertex) -> bool {
        v.x < self.0 && v.y < self.0
    }

    /// Index of `v` on this board, recomputed from its coordinates.
    pub fn index_of(self, v: Vertex) -> usize {
        v.y as usize * self.0 as usize + v.x as usize
    }

    /// Orthogonal neighbours, clipped at the edges.
    pub fn neighbors(self, v: Vertex) -> ArrayVec<Vertex, 4> {
        let mut result = ArrayVec::new();
        if v.x > 0 {
            result.push(self.vertex(v.x - 1, v.y));
        }
        if v.x + 1 < self.0 {
            result.push(self.vertex(v.x + 1, v.y));
        }
        if v.y > 0 {
            result.push(self.vertex(v.x, v.y - 1));
        }
        if v.y + 1 < self.0 {
            result.push(self.vertex(v.x, v.y + 1));
        }
        result
    }

    /// Every vertex of the board in index order.
    pub fn vertices(self) -> impl Iterator<Item = Vertex> {
        (0..self.area()).map(move |i| self.vertex_at(i))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::NINE
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = GoError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        BoardSize::new(n)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> u8 {
        size.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// A board intersection. The top-left vertex is `(0, 0)` with index 0.
///
/// Equality, hashing and ordering only look at `x` and `y`; ordering is
/// row-major so it agrees with the index on any one board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub x: u8,
    pub y: u8,
    pub index: usize,
}

impl Vertex {
    /// Whether `v` is one of `vertices`.
    pub fn includes(vertices: &[Vertex], v: Vertex) -> bool {
        vertices.contains(&v)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: BoardSize = BoardSize::NINE;

    #[test]
    fn vertex_from_coordinates() {
        let v = V.vertex(1, 2);
        assert_eq!((v.x, v.y, v.index), (1, 2, 19));
    }

    #[test]
    fn vertex_from_index() {
        let v = V.vertex_at(19);
        assert_eq!((v.x, v.y), (1, 2));
        assert_eq!(BoardSize::THIRTEEN.vertex_at(14), BoardSize::THIRTEEN.vertex(1, 1));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(V.vertex(1, 2), V.vertex(1, 2));
        assert_ne!(V.vertex(1, 2), V.vertex(2, 3));
        // index disagrees, coordinates agree
        assert_eq!(V.vertex(1, 2), BoardSize::NINETEEN.vertex(1, 2));
    }

    #[test]
    fn includes() {
        let vs = [V.vertex(0, 1), V.vertex(1, 2)];
        assert!(Vertex::includes(&vs, V.vertex(1, 2)));
        assert!(!Vertex::includes(&vs, V.vertex(2, 1)));
    }

    #[test]
    fn ordering_follows_index() {
        let mut vs = vec![V.vertex(0, 3), V.vertex(8, 0), V.vertex(1, 2)];
        vs.sort();
        let idx: Vec<usize> = vs.iter().map(|v| v.index).collect();
        assert_eq!(idx, vec![8, 19, 27]);
    }

    #[test]
    fn neighbor_counts() {
        assert_eq!(V.neighbors(V.vertex(4, 4)).len(), 4);
        assert_eq!(V.neighbors(V.vertex(0, 4)).len(), 3);
        assert_eq!(V.neighbors(V.vertex(8, 8)).len(), 2);
    }

    #[test]
    fn neighbors_use_board_size() {
        let size = BoardSize::NINETEEN;
        let ns = size.neighbors(size.vertex(18, 5));
        assert!(ns.iter().all(|n| n.index == size.index_of(*n)));
        assert!(ns.iter().any(|n| n.index == 5 * 19 + 17));
    }

    #[test]
    fn contains_checks_both_axes() {
        assert!(V.contains(V.vertex(8, 8)));
        assert!(!V.contains(V.vertex(9, 0)));
        assert!(!V.contains(V.vertex(0, 9)));
    }

    #[test]
    fn rejects_bad_sizes() {
        assert_eq!(BoardSize::new(0), Err(GoError::UnsupportedSize(0)));
        assert_eq!(BoardSize::new(26), Err(GoError::UnsupportedSize(26)));
        assert_eq!(BoardSize::new(13), Ok(BoardSize::THIRTEEN));
    }

    #[test]
    fn size_serializes_as_integer() {
        assert_eq!(serde_json::to_value(BoardSize::NINETEEN).unwrap(), 19);
        let size: BoardSize = serde_json::from_str("13").unwrap();
        assert_eq!(size, BoardSize::THIRTEEN);
        assert!(serde_json::from_str::<BoardSize>("40").is_err());
    }
}
