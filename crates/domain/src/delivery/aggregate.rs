//! Delivery order aggregate implementation.

use chrono::{DateTime, Utc};

use event_core::{Aggregate, AggregateRoot, DomainError, DomainResult, IdSource};

use super::{
    events::{DeliveryEvent, DeliveryOrderCreatedData},
    state::DeliveryStatus,
    tracking::TrackingRecord,
    value_objects::{DeliveryOrderId, OrderId, PickupPointId, SortingCenterId, TariffId},
};

/// Delivery order aggregate root.
///
/// Walks a parcel from placement through seller assembly, the sorting
/// network and a pickup point into the buyer's hands, appending one
/// tracking record per applied event along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryOrder {
    root: AggregateRoot<DeliveryEvent>,

    /// Unique delivery order identifier, set by the creation event.
    id: Option<DeliveryOrderId>,

    /// The checkout order being fulfilled.
    order_id: Option<OrderId>,

    /// The shipping tariff the buyer picked.
    tariff_id: Option<TariffId>,

    /// Current routing state.
    status: DeliveryStatus,

    /// Where the parcel was last shipped to within the sorting network.
    destination_sorting_center: Option<SortingCenterId>,

    /// The sorting center the parcel last arrived at.
    current_sorting_center: Option<SortingCenterId>,

    /// The pickup point the parcel is bound for, once chosen.
    pickup_point: Option<PickupPointId>,

    /// When the buyer collected the parcel.
    delivered_at: Option<DateTime<Utc>>,

    /// When the order was soft-deleted.
    deleted_at: Option<DateTime<Utc>>,

    /// Append-only account of the parcel's journey.
    tracking: Vec<TrackingRecord>,
}

impl Aggregate for DeliveryOrder {
    type Event = DeliveryEvent;

    fn aggregate_type() -> &'static str {
        "DeliveryOrder"
    }

    fn root(&self) -> &AggregateRoot<DeliveryEvent> {
        &self.root
    }

    fn root_mut(&mut self) -> &mut AggregateRoot<DeliveryEvent> {
        &mut self.root
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            DeliveryEvent::DeliveryOrderCreated(data) => self.apply_created(data),
            DeliveryEvent::AssemblyStarted(data) => {
                self.status = DeliveryStatus::AssemblingBySeller;
                self.track(data.started_at, None, None);
            }
            DeliveryEvent::ShippedToSortingCenter(data) => {
                self.status = DeliveryStatus::EnRouteToSortingCenter;
                self.destination_sorting_center = Some(data.sorting_center);
                self.track(data.shipped_at, Some(data.sorting_center), None);
            }
            DeliveryEvent::ArrivedAtSortingCenter(data) => {
                self.status = DeliveryStatus::ArrivedAtSortingCenter;
                self.current_sorting_center = Some(data.sorting_center);
                self.track(data.arrived_at, Some(data.sorting_center), None);
            }
            DeliveryEvent::SortedAtSortingCenter(data) => {
                self.status = DeliveryStatus::Sorted;
                self.track(data.sorted_at, Some(data.sorting_center), None);
            }
            DeliveryEvent::ShippedToPickupPoint(data) => {
                self.status = DeliveryStatus::EnRouteToPickupPoint;
                self.pickup_point = Some(data.pickup_point);
                self.track(data.shipped_at, None, Some(data.pickup_point));
            }
            DeliveryEvent::ArrivedAtPickupPoint(data) => {
                self.status = DeliveryStatus::AwaitingPickup;
                self.track(data.arrived_at, None, self.pickup_point);
            }
            DeliveryEvent::DeliveryCompleted(data) => {
                self.status = DeliveryStatus::Delivered;
                self.delivered_at = Some(data.delivered_at);
                self.track(data.delivered_at, None, self.pickup_point);
            }
            DeliveryEvent::DeliveryReturned(data) => {
                self.status = DeliveryStatus::Returned;
                self.track(data.returned_at, None, None);
            }
            DeliveryEvent::DeliveryOrderDeleted(data) => {
                self.status = DeliveryStatus::IsDeleted;
                self.deleted_at = Some(data.deleted_at);
                self.track(data.deleted_at, None, None);
            }
        }
    }
}

// Query methods
impl DeliveryOrder {
    /// Returns the delivery order ID.
    pub fn id(&self) -> Option<DeliveryOrderId> {
        self.id
    }

    /// Returns the checkout order reference.
    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    /// Returns the tariff reference.
    pub fn tariff_id(&self) -> Option<TariffId> {
        self.tariff_id
    }

    /// Returns the current routing state.
    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Returns the sorting center the parcel was last shipped towards.
    pub fn destination_sorting_center(&self) -> Option<SortingCenterId> {
        self.destination_sorting_center
    }

    /// Returns the sorting center the parcel last arrived at.
    pub fn current_sorting_center(&self) -> Option<SortingCenterId> {
        self.current_sorting_center
    }

    /// Returns the pickup point the parcel is bound for.
    pub fn pickup_point(&self) -> Option<PickupPointId> {
        self.pickup_point
    }

    /// Returns when the buyer collected the parcel.
    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_at
    }

    /// Returns when the order was soft-deleted.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns the tracking history, oldest record first.
    pub fn tracking_history(&self) -> &[TrackingRecord] {
        &self.tracking
    }
}

// Command methods
impl DeliveryOrder {
    /// Creates a delivery order for a checkout order.
    ///
    /// The first tracking record (Placed) is appended by the creation
    /// event's fold, so even a freshly created order has a history.
    pub fn create(
        ids: &mut dyn IdSource,
        order_id: OrderId,
        tariff_id: TariffId,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if order_id.is_nil() {
            return Err(DomainError::new("delivery order requires an order reference"));
        }
        if tariff_id.is_nil() {
            return Err(DomainError::new("delivery order requires a tariff reference"));
        }

        let id = DeliveryOrderId::mint(ids);
        let mut order = Self::default();
        order.raise(DeliveryEvent::delivery_order_created(
            id, order_id, tariff_id, now,
        ));
        Ok(order)
    }

    /// Records that the seller started assembling the parcel.
    pub fn mark_as_assembling_by_seller(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("start assembly of")?;
        if !self.status.can_start_assembly() {
            return Err(self.transition_rejected("start assembly"));
        }

        self.raise(DeliveryEvent::assembly_started(now));
        Ok(())
    }

    /// Ships the parcel towards a sorting center.
    ///
    /// The routing rule here was written as `status != AssemblingBySeller ||
    /// status != Sorted`, which holds for every status, so shipping is
    /// accepted from any state short of deletion. TODO: confirm the intended
    /// predecessor set (assembling or sorted) before tightening this.
    pub fn ship_to_sorting_center(
        &mut self,
        sorting_center: SortingCenterId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("ship")?;

        self.raise(DeliveryEvent::shipped_to_sorting_center(sorting_center, now));
        Ok(())
    }

    /// Records the parcel's arrival at a sorting center.
    pub fn mark_as_arrived_at_sorting_center(
        &mut self,
        sorting_center: SortingCenterId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("record an arrival for")?;
        if !self.status.can_arrive_at_sorting_center() {
            return Err(self.transition_rejected("record a sorting-center arrival"));
        }
        if self.destination_sorting_center != Some(sorting_center) {
            return Err(DomainError::new(format!(
                "sorting center {sorting_center} is not where this parcel was shipped"
            )));
        }

        self.raise(DeliveryEvent::arrived_at_sorting_center(sorting_center, now));
        Ok(())
    }

    /// Records that the parcel was sorted at the center it sits in.
    pub fn sort_at_sorting_center(
        &mut self,
        sorting_center: SortingCenterId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("sort")?;
        if !self.status.can_sort() {
            return Err(self.transition_rejected("sort the parcel"));
        }
        if self.current_sorting_center != Some(sorting_center) {
            return Err(DomainError::new(format!(
                "sorting center {sorting_center} is not where this parcel arrived"
            )));
        }

        self.raise(DeliveryEvent::sorted_at_sorting_center(sorting_center, now));
        Ok(())
    }

    /// Ships the parcel towards a pickup point.
    pub fn ship_to_pickup_point(
        &mut self,
        pickup_point: PickupPointId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("ship")?;
        if !self.status.can_ship_to_pickup_point() {
            return Err(self.transition_rejected("ship to a pickup point"));
        }

        self.raise(DeliveryEvent::shipped_to_pickup_point(pickup_point, now));
        Ok(())
    }

    /// Records the parcel's arrival at the pickup point.
    pub fn mark_as_awaiting_pickup(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("record an arrival for")?;
        if !self.status.can_await_pickup() {
            return Err(self.transition_rejected("mark as awaiting pickup"));
        }

        self.raise(DeliveryEvent::arrived_at_pickup_point(now));
        Ok(())
    }

    /// Records the handover to the buyer.
    pub fn mark_as_delivered(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("complete")?;
        if !self.status.can_complete() {
            return Err(self.transition_rejected("mark as delivered"));
        }

        self.raise(DeliveryEvent::delivery_completed(now));
        Ok(())
    }

    /// Records that the parcel was sent back.
    ///
    /// No predecessor check: a return is accepted from any state short of
    /// deletion, including Delivered. Known gap in the routing rules.
    pub fn mark_as_returned(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("return")?;

        self.raise(DeliveryEvent::delivery_returned(now));
        Ok(())
    }

    /// Soft-deletes the delivery order. Terminal.
    pub fn delete(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status.is_deleted() {
            return Err(DomainError::new("delivery order is already deleted"));
        }

        self.raise(DeliveryEvent::delivery_order_deleted(now));
        Ok(())
    }

    fn ensure_not_deleted(&self, action: &str) -> DomainResult<()> {
        if self.status.is_deleted() {
            return Err(DomainError::new(format!(
                "cannot {action} a deleted delivery order"
            )));
        }
        Ok(())
    }

    fn transition_rejected(&self, action: &str) -> DomainError {
        DomainError::new(format!(
            "cannot {action} while the delivery order is {}",
            self.status
        ))
    }
}

// Apply helpers
impl DeliveryOrder {
    fn apply_created(&mut self, data: DeliveryOrderCreatedData) {
        self.id = Some(data.delivery_order_id);
        self.order_id = Some(data.order_id);
        self.tariff_id = Some(data.tariff_id);
        self.status = DeliveryStatus::Placed;
        self.track(data.created_at, None, None);
    }

    /// Appends a tracking record for the status just entered.
    fn track(
        &mut self,
        at: DateTime<Utc>,
        sorting_center: Option<SortingCenterId>,
        pickup_point: Option<PickupPointId>,
    ) {
        self.tracking
            .push(TrackingRecord::new(self.status, at, sorting_center, pickup_point));
    }
}
