//! Fetch, transform, rank, and post carpool statistics.
//!
//! The pipeline runs as a single synchronous pass: fetch the dataset, derive
//! per-driver statistics, sort them by Manhattan distance between average
//! pickup and dropoff, post the ranking back, and return it. The post step
//! is fire-and-log; only the fetch can fail the run from the network side.

use serde::Deserialize;
use serde_json::Value;

use crate::averages::average_locations;
use crate::error::StatsError;
use crate::grid::locate_entities;
use crate::grouping::{group_accepted_requests, RideRequest};
use crate::stats::{build_entry, StatsEntry};
use crate::transport::Transport;

const SUCCESS_STATUS: u16 = 200;

/// The dataset shape served by the read endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CarpoolDataset {
    pub requests: Vec<RideRequest>,
    #[serde(rename = "pickupLocations")]
    pub pickup_locations: Vec<Vec<i64>>,
    #[serde(rename = "dropoffLocations")]
    pub dropoff_locations: Vec<Vec<i64>>,
}

/// Single-shot ranking job bound to one endpoint and one transport.
#[derive(Debug, Clone)]
pub struct RankingPipeline<T: Transport> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> RankingPipeline<T> {
    pub fn new(transport: T, endpoint: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.to_string(),
        }
    }

    /// Run the full pipeline and return the ranked statistics.
    ///
    /// Any fetch problem yields [`StatsError::FetchFailed`], whose display
    /// text is the contract failure value `Fail to GET data`; no post is
    /// attempted in that case. The post outcome itself is logged and never
    /// changes the returned ranking.
    pub fn run(&self) -> Result<Vec<StatsEntry>, StatsError> {
        let body = self.fetch_body().ok_or(StatsError::FetchFailed)?;
        let dataset: CarpoolDataset =
            serde_json::from_value(body).map_err(StatsError::MalformedPayload)?;

        let groups = group_accepted_requests(&dataset.requests);
        let pickup_coords = locate_entities(&dataset.pickup_locations);
        let dropoff_coords = locate_entities(&dataset.dropoff_locations);
        let (avg_pickup, avg_dropoff) =
            average_locations(&groups, &pickup_coords, &dropoff_coords)?;

        let mut stats = groups
            .iter()
            .map(|group| build_entry(group.driver, &group.riders, &avg_pickup, &avg_dropoff))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable sort keeps request order among equal scores.
        stats.sort_by_key(StatsEntry::ranking_score);

        self.post_ranking(&stats)?;
        Ok(stats)
    }

    fn fetch_body(&self) -> Option<Value> {
        let response = match self.transport.get(&self.endpoint) {
            Ok(response) => response,
            Err(err) => {
                eprintln!("error fetching data from {}: {}", self.endpoint, err);
                return None;
            }
        };
        if response.status != SUCCESS_STATUS {
            eprintln!("unexpected status code on fetch: {}", response.status);
            return None;
        }
        if is_empty_body(&response.body) {
            eprintln!("fetch returned an empty body from {}", self.endpoint);
            return None;
        }
        Some(response.body)
    }

    fn post_ranking(&self, stats: &[StatsEntry]) -> Result<(), StatsError> {
        let payload = serde_json::to_string_pretty(stats).map_err(StatsError::Serialize)?;
        match self.transport.post(&self.endpoint, &payload) {
            Ok(response) if response.status == SUCCESS_STATUS => {
                eprintln!("posted ranking: {}", response.body);
            }
            Ok(response) => {
                eprintln!(
                    "post rejected with status {}: {}",
                    response.status, response.body
                );
            }
            Err(err) => {
                eprintln!("error posting ranking to {}: {}", self.endpoint, err);
            }
        }
        Ok(())
    }
}

/// Whether a fetched body counts as empty despite a success status.
///
/// Mirrors the endpoint contract that a "falsy" document (null, `false`,
/// zero, empty string, empty array, empty object) means no data.
fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
