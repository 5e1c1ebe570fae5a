//! Centroid calculation for driver groups.

use std::collections::HashMap;

use crate::error::{LocationKind, StatsError};
use crate::grouping::DriverGroup;
use crate::spatial::{Coord, EntityId};

/// Sum the x and y components of a rider coordinate list.
///
/// Returns `(sum_x, sum_y, n)` where `n` is the list length plus one, the
/// extra slot reserved for the driver's own position.
pub fn coord_totals(pairs: &[Coord]) -> (i64, i64, i64) {
    let sum_x = pairs.iter().map(|pair| pair.x).sum();
    let sum_y = pairs.iter().map(|pair| pair.y).sum();
    (sum_x, sum_y, pairs.len() as i64 + 1)
}

fn lookup(
    coords: &HashMap<EntityId, Coord>,
    id: EntityId,
    kind: LocationKind,
) -> Result<Coord, StatsError> {
    coords
        .get(&id)
        .copied()
        .ok_or(StatsError::MissingCoordinate { kind, id })
}

fn group_average(
    group: &DriverGroup,
    coords: &HashMap<EntityId, Coord>,
    kind: LocationKind,
) -> Result<Coord, StatsError> {
    let pairs = group
        .riders
        .iter()
        .map(|&rider| lookup(coords, rider, kind))
        .collect::<Result<Vec<_>, _>>()?;

    let (mut sum_x, mut sum_y, n) = coord_totals(&pairs);
    let own = lookup(coords, group.driver, kind)?;
    sum_x += own.x;
    sum_y += own.y;

    // Floor division, matching the source data's convention for negative
    // sums (rounds toward negative infinity, not toward zero).
    Ok(Coord::new(sum_x.div_euclid(n), sum_y.div_euclid(n)))
}

/// Compute the average pickup and dropoff location per driver group.
///
/// The average includes the driver's own position, so the denominator is
/// `rider_count + 1`. Groups with an empty rider list produce no entry in
/// either output map; a rider or driver missing from a coordinate map aborts
/// the whole calculation with [`StatsError::MissingCoordinate`].
#[allow(clippy::type_complexity)]
pub fn average_locations(
    groups: &[DriverGroup],
    pickup_coords: &HashMap<EntityId, Coord>,
    dropoff_coords: &HashMap<EntityId, Coord>,
) -> Result<(HashMap<EntityId, Coord>, HashMap<EntityId, Coord>), StatsError> {
    let mut avg_pickup = HashMap::new();
    let mut avg_dropoff = HashMap::new();

    for group in groups {
        if group.riders.is_empty() {
            continue;
        }
        avg_pickup.insert(
            group.driver,
            group_average(group, pickup_coords, LocationKind::Pickup)?,
        );
        avg_dropoff.insert(
            group.driver,
            group_average(group, dropoff_coords, LocationKind::Dropoff)?,
        );
    }

    Ok((avg_pickup, avg_dropoff))
}
