//! Delivery order routing states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Routing state of a delivery order.
///
/// The intended route is Placed, AssemblingBySeller, EnRouteToSortingCenter,
/// ArrivedAtSortingCenter, Sorted, EnRouteToPickupPoint, AwaitingPickup,
/// Delivered, with Returned as the reverse-logistics exit and IsDeleted as
/// the terminal soft-delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// Created, waiting for the seller to start assembly.
    #[default]
    Placed,

    /// Seller is packing the parcel.
    AssemblingBySeller,

    /// Parcel is on its way to a sorting center.
    EnRouteToSortingCenter,

    /// Parcel arrived at its destination sorting center.
    ArrivedAtSortingCenter,

    /// Parcel was sorted and is ready to leave the center.
    Sorted,

    /// Parcel is on its way to a pickup point.
    EnRouteToPickupPoint,

    /// Parcel is at the pickup point, waiting for the buyer.
    AwaitingPickup,

    /// Buyer collected the parcel.
    Delivered,

    /// Parcel was sent back.
    Returned,

    /// Soft-deleted. Terminal: no command may touch the order again.
    IsDeleted,
}

impl DeliveryStatus {
    /// True when the seller may start assembling.
    pub fn can_start_assembly(&self) -> bool {
        matches!(self, DeliveryStatus::Placed)
    }

    /// True when a sorting-center arrival may be recorded.
    pub fn can_arrive_at_sorting_center(&self) -> bool {
        matches!(self, DeliveryStatus::EnRouteToSortingCenter)
    }

    /// True when the parcel may be sorted.
    pub fn can_sort(&self) -> bool {
        matches!(self, DeliveryStatus::ArrivedAtSortingCenter)
    }

    /// True when the parcel may leave for a pickup point.
    pub fn can_ship_to_pickup_point(&self) -> bool {
        matches!(self, DeliveryStatus::Sorted)
    }

    /// True when a pickup-point arrival may be recorded.
    pub fn can_await_pickup(&self) -> bool {
        matches!(self, DeliveryStatus::EnRouteToPickupPoint)
    }

    /// True when the handover to the buyer may be recorded.
    pub fn can_complete(&self) -> bool {
        matches!(self, DeliveryStatus::AwaitingPickup)
    }

    /// True once the order has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeliveryStatus::IsDeleted)
    }

    /// Returns the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Placed => "Placed",
            DeliveryStatus::AssemblingBySeller => "AssemblingBySeller",
            DeliveryStatus::EnRouteToSortingCenter => "EnRouteToSortingCenter",
            DeliveryStatus::ArrivedAtSortingCenter => "ArrivedAtSortingCenter",
            DeliveryStatus::Sorted => "Sorted",
            DeliveryStatus::EnRouteToPickupPoint => "EnRouteToPickupPoint",
            DeliveryStatus::AwaitingPickup => "AwaitingPickup",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Returned => "Returned",
            DeliveryStatus::IsDeleted => "IsDeleted",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
