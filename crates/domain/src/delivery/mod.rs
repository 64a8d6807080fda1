//! Delivery order aggregate and related types.

mod aggregate;
mod events;
mod state;
mod tracking;
mod value_objects;

pub use aggregate::DeliveryOrder;
pub use events::{
    ArrivedAtPickupPointData, ArrivedAtSortingCenterData, AssemblyStartedData,
    DeliveryCompletedData, DeliveryEvent, DeliveryOrderCreatedData, DeliveryOrderDeletedData,
    DeliveryReturnedData, ShippedToPickupPointData, ShippedToSortingCenterData,
    SortedAtSortingCenterData,
};
pub use state::DeliveryStatus;
pub use tracking::TrackingRecord;
pub use value_objects::{DeliveryOrderId, OrderId, PickupPointId, SortingCenterId, TariffId};
