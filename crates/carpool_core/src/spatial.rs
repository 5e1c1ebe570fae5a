//! Grid coordinates and the Manhattan metric used for ranking.

use serde::{Deserialize, Serialize};

/// Integer identifying a rider or driver, unique within a grid.
pub type EntityId = i64;

/// Zero-based grid position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Sum of absolute coordinate differences between two points.
pub fn manhattan_distance(a: Coord, b: Coord) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
