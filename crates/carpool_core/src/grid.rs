//! Entity extraction from 2D occupancy grids.

use std::collections::HashMap;

use crate::spatial::{Coord, EntityId};

/// Sentinel cell value marking an unoccupied grid position.
pub const EMPTY_CELL: i64 = -1;

/// Scan a square occupancy grid and map every entity id to its (column, row)
/// position.
///
/// Any cell holding a value other than [`EMPTY_CELL`] is treated as an entity
/// id. Ids are expected to be unique within a grid; if an id does appear
/// twice, the later (row-major) occurrence wins silently.
pub fn locate_entities(grid: &[Vec<i64>]) -> HashMap<EntityId, Coord> {
    let mut coords = HashMap::new();
    for (row, cells) in grid.iter().enumerate() {
        for (column, &cell) in cells.iter().enumerate() {
            if cell != EMPTY_CELL {
                coords.insert(cell, Coord::new(column as i64, row as i64));
            }
        }
    }
    coords
}
