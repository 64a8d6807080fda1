//! Delivery order domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use event_core::DomainEvent;

use super::value_objects::{DeliveryOrderId, OrderId, PickupPointId, SortingCenterId, TariffId};

/// Events that can occur on a delivery order aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DeliveryEvent {
    /// Delivery order was created for a checkout order.
    DeliveryOrderCreated(DeliveryOrderCreatedData),

    /// Seller started assembling the parcel.
    AssemblyStarted(AssemblyStartedData),

    /// Parcel left towards a sorting center.
    ShippedToSortingCenter(ShippedToSortingCenterData),

    /// Parcel arrived at its destination sorting center.
    ArrivedAtSortingCenter(ArrivedAtSortingCenterData),

    /// Parcel was sorted at the center it sits in.
    SortedAtSortingCenter(SortedAtSortingCenterData),

    /// Parcel left towards a pickup point.
    ShippedToPickupPoint(ShippedToPickupPointData),

    /// Parcel arrived at the pickup point.
    ArrivedAtPickupPoint(ArrivedAtPickupPointData),

    /// Buyer collected the parcel.
    DeliveryCompleted(DeliveryCompletedData),

    /// Parcel was sent back.
    DeliveryReturned(DeliveryReturnedData),

    /// Delivery order was soft-deleted.
    DeliveryOrderDeleted(DeliveryOrderDeletedData),
}

impl DomainEvent for DeliveryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DeliveryEvent::DeliveryOrderCreated(_) => "DeliveryOrderCreated",
            DeliveryEvent::AssemblyStarted(_) => "AssemblyStarted",
            DeliveryEvent::ShippedToSortingCenter(_) => "ShippedToSortingCenter",
            DeliveryEvent::ArrivedAtSortingCenter(_) => "ArrivedAtSortingCenter",
            DeliveryEvent::SortedAtSortingCenter(_) => "SortedAtSortingCenter",
            DeliveryEvent::ShippedToPickupPoint(_) => "ShippedToPickupPoint",
            DeliveryEvent::ArrivedAtPickupPoint(_) => "ArrivedAtPickupPoint",
            DeliveryEvent::DeliveryCompleted(_) => "DeliveryCompleted",
            DeliveryEvent::DeliveryReturned(_) => "DeliveryReturned",
            DeliveryEvent::DeliveryOrderDeleted(_) => "DeliveryOrderDeleted",
        }
    }
}

/// Data for DeliveryOrderCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOrderCreatedData {
    /// The minted delivery order id.
    pub delivery_order_id: DeliveryOrderId,

    /// The checkout order being fulfilled.
    pub order_id: OrderId,

    /// The shipping tariff the buyer picked.
    pub tariff_id: TariffId,

    /// When the delivery order was placed.
    pub created_at: DateTime<Utc>,
}

/// Data for AssemblyStarted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyStartedData {
    /// When assembly started.
    pub started_at: DateTime<Utc>,
}

/// Data for ShippedToSortingCenter event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippedToSortingCenterData {
    /// The sorting center the parcel is heading to.
    pub sorting_center: SortingCenterId,

    /// When the parcel left.
    pub shipped_at: DateTime<Utc>,
}

/// Data for ArrivedAtSortingCenter event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivedAtSortingCenterData {
    /// The sorting center the parcel arrived at.
    pub sorting_center: SortingCenterId,

    /// When the parcel arrived.
    pub arrived_at: DateTime<Utc>,
}

/// Data for SortedAtSortingCenter event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortedAtSortingCenterData {
    /// The sorting center that sorted the parcel.
    pub sorting_center: SortingCenterId,

    /// When sorting finished.
    pub sorted_at: DateTime<Utc>,
}

/// Data for ShippedToPickupPoint event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippedToPickupPointData {
    /// The pickup point the parcel is heading to.
    pub pickup_point: PickupPointId,

    /// When the parcel left.
    pub shipped_at: DateTime<Utc>,
}

/// Data for ArrivedAtPickupPoint event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivedAtPickupPointData {
    /// When the parcel reached the pickup point.
    pub arrived_at: DateTime<Utc>,
}

/// Data for DeliveryCompleted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryCompletedData {
    /// When the buyer collected the parcel.
    pub delivered_at: DateTime<Utc>,
}

/// Data for DeliveryReturned event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReturnedData {
    /// When the return was recorded.
    pub returned_at: DateTime<Utc>,
}

/// Data for DeliveryOrderDeleted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOrderDeletedData {
    /// When the order was soft-deleted.
    pub deleted_at: DateTime<Utc>,
}

// Convenience constructors for events
impl DeliveryEvent {
    /// Creates a DeliveryOrderCreated event.
    pub fn delivery_order_created(
        delivery_order_id: DeliveryOrderId,
        order_id: OrderId,
        tariff_id: TariffId,
        now: DateTime<Utc>,
    ) -> Self {
        DeliveryEvent::DeliveryOrderCreated(DeliveryOrderCreatedData {
            delivery_order_id,
            order_id,
            tariff_id,
            created_at: now,
        })
    }

    /// Creates an AssemblyStarted event.
    pub fn assembly_started(now: DateTime<Utc>) -> Self {
        DeliveryEvent::AssemblyStarted(AssemblyStartedData { started_at: now })
    }

    /// Creates a ShippedToSortingCenter event.
    pub fn shipped_to_sorting_center(sorting_center: SortingCenterId, now: DateTime<Utc>) -> Self {
        DeliveryEvent::ShippedToSortingCenter(ShippedToSortingCenterData {
            sorting_center,
            shipped_at: now,
        })
    }

    /// Creates an ArrivedAtSortingCenter event.
    pub fn arrived_at_sorting_center(sorting_center: SortingCenterId, now: DateTime<Utc>) -> Self {
        DeliveryEvent::ArrivedAtSortingCenter(ArrivedAtSortingCenterData {
            sorting_center,
            arrived_at: now,
        })
    }

    /// Creates a SortedAtSortingCenter event.
    pub fn sorted_at_sorting_center(sorting_center: SortingCenterId, now: DateTime<Utc>) -> Self {
        DeliveryEvent::SortedAtSortingCenter(SortedAtSortingCenterData {
            sorting_center,
            sorted_at: now,
        })
    }

    /// Creates a ShippedToPickupPoint event.
    pub fn shipped_to_pickup_point(pickup_point: PickupPointId, now: DateTime<Utc>) -> Self {
        DeliveryEvent::ShippedToPickupPoint(ShippedToPickupPointData {
            pickup_point,
            shipped_at: now,
        })
    }

    /// Creates an ArrivedAtPickupPoint event.
    pub fn arrived_at_pickup_point(now: DateTime<Utc>) -> Self {
        DeliveryEvent::ArrivedAtPickupPoint(ArrivedAtPickupPointData { arrived_at: now })
    }

    /// Creates a DeliveryCompleted event.
    pub fn delivery_completed(now: DateTime<Utc>) -> Self {
        DeliveryEvent::DeliveryCompleted(DeliveryCompletedData { delivered_at: now })
    }

    /// Creates a DeliveryReturned event.
    pub fn delivery_returned(now: DateTime<Utc>) -> Self {
        DeliveryEvent::DeliveryReturned(DeliveryReturnedData { returned_at: now })
    }

    /// Creates a DeliveryOrderDeleted event.
    pub fn delivery_order_deleted(now: DateTime<Utc>) -> Self {
        DeliveryEvent::DeliveryOrderDeleted(DeliveryOrderDeletedData { deleted_at: now })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn ts() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_event_type() {
        let event = DeliveryEvent::delivery_order_created(
            DeliveryOrderId::from_uuid(Uuid::from_u128(1)),
            OrderId::from_uuid(Uuid::from_u128(2)),
            TariffId::from_uuid(Uuid::from_u128(3)),
            ts(),
        );
        assert_eq!(event.event_type(), "DeliveryOrderCreated");

        let event = DeliveryEvent::assembly_started(ts());
        assert_eq!(event.event_type(), "AssemblyStarted");

        let event = DeliveryEvent::shipped_to_sorting_center(SortingCenterId::new(42), ts());
        assert_eq!(event.event_type(), "ShippedToSortingCenter");

        let event = DeliveryEvent::arrived_at_sorting_center(SortingCenterId::new(42), ts());
        assert_eq!(event.event_type(), "ArrivedAtSortingCenter");

        let event = DeliveryEvent::sorted_at_sorting_center(SortingCenterId::new(42), ts());
        assert_eq!(event.event_type(), "SortedAtSortingCenter");

        let event = DeliveryEvent::shipped_to_pickup_point(PickupPointId::new(7), ts());
        assert_eq!(event.event_type(), "ShippedToPickupPoint");

        let event = DeliveryEvent::arrived_at_pickup_point(ts());
        assert_eq!(event.event_type(), "ArrivedAtPickupPoint");

        let event = DeliveryEvent::delivery_completed(ts());
        assert_eq!(event.event_type(), "DeliveryCompleted");

        let event = DeliveryEvent::delivery_returned(ts());
        assert_eq!(event.event_type(), "DeliveryReturned");

        let event = DeliveryEvent::delivery_order_deleted(ts());
        assert_eq!(event.event_type(), "DeliveryOrderDeleted");
    }

    #[test]
    fn test_event_serialization_uses_type_and_data_tags() {
        let event = DeliveryEvent::shipped_to_sorting_center(SortingCenterId::new(42), ts());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "ShippedToSortingCenter");
        assert_eq!(json["data"]["sorting_center"], 42);

        let back: DeliveryEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
