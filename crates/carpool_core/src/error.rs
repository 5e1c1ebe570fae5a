use std::fmt;

use crate::spatial::EntityId;

/// Which side of a trip a coordinate or average belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Pickup,
    Dropoff,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Pickup => write!(f, "pickup"),
            LocationKind::Dropoff => write!(f, "dropoff"),
        }
    }
}

/// Failures a pipeline run can surface to its caller.
///
/// Transport-level problems never appear here directly: the fetch boundary
/// folds them into [`StatsError::FetchFailed`] and the post boundary only
/// logs them. The remaining variants are data-integrity violations, which
/// abort the run rather than produce misleading statistics.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The contract failure value for any unsuccessful fetch: transport
    /// error, non-success status, or an empty body.
    #[error("Fail to GET data")]
    FetchFailed,
    /// The fetched body parsed as JSON but is missing a required key or has
    /// the wrong shape.
    #[error("malformed dataset: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    /// A rider or driver id from a group has no position in the grid.
    #[error("no {kind} coordinate recorded for entity {id}")]
    MissingCoordinate { kind: LocationKind, id: EntityId },
    /// A driver key is absent from a non-empty average-location mapping.
    #[error("no average {kind} location recorded for driver {driver}")]
    MissingAverage {
        kind: LocationKind,
        driver: EntityId,
    },
    /// The ranked list could not be serialized for posting.
    #[error("failed to serialize ranking: {0}")]
    Serialize(#[source] serde_json::Error),
}
