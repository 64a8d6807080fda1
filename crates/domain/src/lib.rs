//! Marketplace write model.
//!
//! Two event-sourced aggregates built on the `event-core` engine:
//! - [`Variant`]: one sellable version of a product, with its images,
//!   attributes, detail record, stock counters and price history
//! - [`DeliveryOrder`]: the parcel's journey from placement through the
//!   sorting network to a pickup point
//!
//! Commands take the clock (`now`) and, where they mint sub-entity ids, an
//! [`IdSource`](event_core::IdSource) as explicit arguments; no code in this
//! crate reads the system clock or a random generator on its own, which is
//! what keeps replay deterministic.

pub mod delivery;
mod validate;
pub mod variant;

pub use delivery::{
    DeliveryEvent, DeliveryOrder, DeliveryOrderId, DeliveryStatus, OrderId, PickupPointId,
    SortingCenterId, TariffId, TrackingRecord,
};
pub use event_core::{Aggregate, DomainError, DomainEvent, DomainResult, IdSource};
pub use variant::{
    ArticleNumber, Attribute, AttributeId, ColorId, Detail, DetailId, Image, ImageId, Price,
    PriceRecord, PriceRecordId, ProductId, Rating, Variant, VariantEvent, VariantId, VariantStatus,
};
