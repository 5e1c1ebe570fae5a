//! Per-driver statistics entries and their ranking score.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LocationKind, StatsError};
use crate::spatial::{manhattan_distance, Coord, EntityId};

/// An averaged position with nullable components.
///
/// Both components are `null` only in the degenerate case where the whole
/// average-location mapping was empty; a full pipeline run never produces a
/// half-populated point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AveragePoint {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl AveragePoint {
    pub fn empty() -> Self {
        Self { x: None, y: None }
    }

    pub fn coord(&self) -> Option<Coord> {
        Some(Coord::new(self.x?, self.y?))
    }
}

impl From<Coord> for AveragePoint {
    fn from(coord: Coord) -> Self {
        Self {
            x: Some(coord.x),
            y: Some(coord.y),
        }
    }
}

/// One ranked record: a driver, its riders, and its average trip endpoints.
///
/// Field order matters: it is the canonical serialization order for the
/// posted ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsEntry {
    #[serde(rename = "driverId")]
    pub driver_id: EntityId,
    #[serde(rename = "riderIds")]
    pub rider_ids: Vec<EntityId>,
    #[serde(rename = "averagePickup")]
    pub average_pickup: AveragePoint,
    #[serde(rename = "averageDropoff")]
    pub average_dropoff: AveragePoint,
}

impl StatsEntry {
    /// Manhattan distance between the average pickup and dropoff points.
    ///
    /// Entries with a null side score zero; such entries only arise from
    /// direct builder calls against empty mappings, never from a full run.
    pub fn ranking_score(&self) -> i64 {
        match (self.average_pickup.coord(), self.average_dropoff.coord()) {
            (Some(pickup), Some(dropoff)) => manhattan_distance(pickup, dropoff),
            _ => 0,
        }
    }
}

fn average_side(
    averages: &HashMap<EntityId, Coord>,
    driver: EntityId,
    kind: LocationKind,
) -> Result<AveragePoint, StatsError> {
    // Contract: null coordinates iff the mapping has zero entries overall.
    // A driver absent from a non-empty mapping is a data-integrity fault,
    // never a silent null.
    if averages.is_empty() {
        return Ok(AveragePoint::empty());
    }
    averages
        .get(&driver)
        .copied()
        .map(AveragePoint::from)
        .ok_or(StatsError::MissingAverage { kind, driver })
}

/// Assemble the statistics entry for one driver group.
pub fn build_entry(
    driver: EntityId,
    riders: &[EntityId],
    avg_pickup: &HashMap<EntityId, Coord>,
    avg_dropoff: &HashMap<EntityId, Coord>,
) -> Result<StatsEntry, StatsError> {
    Ok(StatsEntry {
        driver_id: driver,
        rider_ids: riders.to_vec(),
        average_pickup: average_side(avg_pickup, driver, LocationKind::Pickup)?,
        average_dropoff: average_side(avg_dropoff, driver, LocationKind::Dropoff)?,
    })
}
