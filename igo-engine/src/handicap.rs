use serde::{Deserialize, Serialize};

use crate::vertex::{BoardSize, Vertex};

/// Compensation agreed before the game: komi for White, free stones for Black.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handicap {
    pub komi: f32,
    pub stones: u8,
}

impl Handicap {
    pub fn new(komi: f32, stones: u8) -> Self {
        Handicap { komi, stones }
    }
}

impl Default for Handicap {
    fn default() -> Self {
        Handicap::new(6.5, 0)
    }
}

/// Maximum number of handicap stones for a board size.
pub fn max_handicap(size: BoardSize) -> u8 {
    let n = size.get();
    if n < 7 || n.is_multiple_of(2) {
        return 0;
    }
    // no side hoshi below 13x13
    if n >= 13 { 9 } else { 5 }
}

/// Hoshi points for `count` handicap stones in row-major order, or `None`
/// if the board has no hoshi layout or the count is out of range.
pub fn handicap_points(size: BoardSize, count: u8) -> Option<Vec<Vertex>> {
    if count < 2 || count > max_handicap(size) {
        return None;
    }

    let n = size.get();
    let edge = if n >= 13 { 3 } else { 2 };
    let line = [edge, n / 2, n - 1 - edge];
    let (near, mid, far) = (0, 1, 2);

    // Diagonal corners first; the upper-left one is filled last.
    let corners = [(far, near), (near, far), (far, far), (near, near)];
    let sides = [(near, mid), (far, mid), (mid, near), (mid, far)];
    let side_count = if count >= 6 { (count - 4) / 2 * 2 } else { 0 };

    let mut picks: Vec<(usize, usize)> = corners
        .into_iter()
        .take(count.min(4) as usize)
        .chain(sides.into_iter().take(side_count as usize))
        .collect();
    if count >= 5 && !count.is_multiple_of(2) {
        picks.push((mid, mid));
    }

    let mut points: Vec<Vertex> = picks
        .into_iter()
        .map(|(col, row)| size.vertex(line[col], line[row]))
        .collect();
    points.sort();
    Some(points)
}
