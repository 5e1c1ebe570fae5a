//! Grouping of accepted ride requests by driver.

use std::collections::HashMap;

use serde::Deserialize;

use crate::spatial::EntityId;

/// A single ride request as delivered by the data endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RideRequest {
    pub driver: EntityId,
    pub rider: EntityId,
    pub accepted: bool,
}

/// A driver together with the riders whose requests it accepted, in request
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverGroup {
    pub driver: EntityId,
    pub riders: Vec<EntityId>,
}

/// Group rider ids by driver, keeping only accepted requests.
///
/// Groups appear in first-seen driver order and riders in request order, so
/// downstream ranking stays stable for equal scores. Drivers without any
/// accepted request are absent rather than present with an empty rider list.
pub fn group_accepted_requests(requests: &[RideRequest]) -> Vec<DriverGroup> {
    let mut groups: Vec<DriverGroup> = Vec::new();
    let mut index: HashMap<EntityId, usize> = HashMap::new();

    for request in requests {
        if !request.accepted {
            continue;
        }
        match index.get(&request.driver) {
            Some(&slot) => groups[slot].riders.push(request.rider),
            None => {
                index.insert(request.driver, groups.len());
                groups.push(DriverGroup {
                    driver: request.driver,
                    riders: vec![request.rider],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(driver: EntityId, rider: EntityId, accepted: bool) -> RideRequest {
        RideRequest {
            driver,
            rider,
            accepted,
        }
    }

    #[test]
    fn groups_accepted_riders_in_request_order() {
        let requests = vec![
            request(5, 3, true),
            request(5, 4, true),
            request(6, 7, true),
            request(6, 10, true),
            request(1, 2, true),
            request(1, 8, true),
            request(1, 9, true),
            request(3, 9, false),
        ];

        let groups = group_accepted_requests(&requests);
        assert_eq!(
            groups,
            vec![
                DriverGroup {
                    driver: 5,
                    riders: vec![3, 4]
                },
                DriverGroup {
                    driver: 6,
                    riders: vec![7, 10]
                },
                DriverGroup {
                    driver: 1,
                    riders: vec![2, 8, 9]
                },
            ]
        );
    }

    #[test]
    fn empty_requests_yield_no_groups() {
        assert!(group_accepted_requests(&[]).is_empty());
    }

    #[test]
    fn fully_rejected_drivers_are_absent() {
        let requests = vec![
            request(1, 4, false),
            request(6, 4, false),
            request(1, 7, false),
        ];
        assert!(group_accepted_requests(&requests).is_empty());
    }

    #[test]
    fn interleaved_requests_stay_with_their_driver() {
        let requests = vec![
            request(2, 11, true),
            request(9, 12, true),
            request(2, 13, true),
        ];
        let groups = group_accepted_requests(&requests);
        assert_eq!(groups[0].driver, 2);
        assert_eq!(groups[0].riders, vec![11, 13]);
        assert_eq!(groups[1].driver, 9);
        assert_eq!(groups[1].riders, vec![12]);
    }
}
