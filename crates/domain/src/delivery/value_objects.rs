//! Value objects for the delivery order aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use event_core::IdSource;

/// Unique identifier for a delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryOrderId(Uuid);

impl DeliveryOrderId {
    /// Mints a fresh id.
    pub fn mint(ids: &mut dyn IdSource) -> Self {
        Self(ids.next_id())
    }

    /// Creates an id from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for DeliveryOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DeliveryOrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<DeliveryOrderId> for Uuid {
    fn from(id: DeliveryOrderId) -> Self {
        id.0
    }
}

/// Reference to the checkout order the delivery fulfills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a reference from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// True for the nil UUID, which reference validation treats as absent.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<OrderId> for Uuid {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// Reference to the shipping tariff the buyer picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TariffId(Uuid);

impl TariffId {
    /// Creates a reference from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// True for the nil UUID, which reference validation treats as absent.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for TariffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TariffId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<TariffId> for Uuid {
    fn from(id: TariffId) -> Self {
        id.0
    }
}

/// Numeric id of a sorting center in the logistics network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortingCenterId(u64);

impl SortingCenterId {
    /// Creates a sorting center id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SortingCenterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SortingCenterId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Numeric id of a pickup point where the buyer collects the parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickupPointId(u64);

impl PickupPointId {
    /// Creates a pickup point id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PickupPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PickupPointId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
