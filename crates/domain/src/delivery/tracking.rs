//! Tracking history for delivery orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::DeliveryStatus;
use super::value_objects::{PickupPointId, SortingCenterId};

/// One entry in a delivery order's append-only tracking history.
///
/// Every applied event appends exactly one record, so the history is a
/// faithful, ordered account of the parcel's journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    status: DeliveryStatus,
    occurred_at: DateTime<Utc>,
    /// Free-text location reserved for carrier feeds. Routing transitions
    /// record structured references instead, leaving this unset.
    location: Option<String>,
    sorting_center: Option<SortingCenterId>,
    pickup_point: Option<PickupPointId>,
}

impl TrackingRecord {
    pub(crate) fn new(
        status: DeliveryStatus,
        occurred_at: DateTime<Utc>,
        sorting_center: Option<SortingCenterId>,
        pickup_point: Option<PickupPointId>,
    ) -> Self {
        Self {
            status,
            occurred_at,
            location: None,
            sorting_center,
            pickup_point,
        }
    }

    /// The status the order entered.
    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// When the transition happened.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Free-text location, when a carrier feed supplied one.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// The sorting center involved in the transition, if any.
    pub fn sorting_center(&self) -> Option<SortingCenterId> {
        self.sorting_center
    }

    /// The pickup point involved in the transition, if any.
    pub fn pickup_point(&self) -> Option<PickupPointId> {
        self.pickup_point
    }
}
