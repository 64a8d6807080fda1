//! Integration tests for the DeliveryOrder aggregate.
//!
//! The routing flow is exercised leg by leg: which commands each state
//! accepts, what the tracking history records, and how the aggregate
//! behaves once deleted.

use chrono::{DateTime, TimeZone, Utc};
use domain::{Aggregate, DeliveryOrder, DeliveryStatus, OrderId, PickupPointId, SortingCenterId, TariffId};
use event_core::SequentialIds;
use uuid::Uuid;

fn center() -> SortingCenterId {
    SortingCenterId::new(42)
}

fn point() -> PickupPointId {
    PickupPointId::new(7)
}

fn ts(step: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 9, 0, 0).unwrap() + chrono::Duration::minutes(i64::from(step))
}

fn placed(ids: &mut SequentialIds) -> DeliveryOrder {
    DeliveryOrder::create(
        ids,
        OrderId::from_uuid(Uuid::from_u128(0xAA)),
        TariffId::from_uuid(Uuid::from_u128(0xBB)),
        ts(0),
    )
    .unwrap()
}

/// Runs the whole intended route, Placed through Delivered.
fn delivered(ids: &mut SequentialIds) -> DeliveryOrder {
    let mut order = placed(ids);
    order.mark_as_assembling_by_seller(ts(1)).unwrap();
    order.ship_to_sorting_center(center(), ts(2)).unwrap();
    order.mark_as_arrived_at_sorting_center(center(), ts(3)).unwrap();
    order.sort_at_sorting_center(center(), ts(4)).unwrap();
    order.ship_to_pickup_point(point(), ts(5)).unwrap();
    order.mark_as_awaiting_pickup(ts(6)).unwrap();
    order.mark_as_delivered(ts(7)).unwrap();
    order
}

fn tracked_statuses(order: &DeliveryOrder) -> Vec<DeliveryStatus> {
    order
        .tracking_history()
        .iter()
        .map(|record| record.status())
        .collect()
}

mod routing_happy_path {
    use super::*;

    #[test]
    fn full_route_tracks_every_leg() {
        let mut ids = SequentialIds::new();
        let order = delivered(&mut ids);

        assert_eq!(order.status(), DeliveryStatus::Delivered);
        assert_eq!(order.delivered_at(), Some(ts(7)));
        assert_eq!(order.version().as_i64(), 8);
        assert_eq!(
            tracked_statuses(&order),
            vec![
                DeliveryStatus::Placed,
                DeliveryStatus::AssemblingBySeller,
                DeliveryStatus::EnRouteToSortingCenter,
                DeliveryStatus::ArrivedAtSortingCenter,
                DeliveryStatus::Sorted,
                DeliveryStatus::EnRouteToPickupPoint,
                DeliveryStatus::AwaitingPickup,
                DeliveryStatus::Delivered,
            ]
        );
    }

    #[test]
    fn tracking_records_carry_the_leg_locations() {
        let mut ids = SequentialIds::new();
        let order = delivered(&mut ids);
        let history = order.tracking_history();

        // Placement knows no locations yet.
        assert_eq!(history[0].sorting_center(), None);
        assert_eq!(history[0].pickup_point(), None);
        assert_eq!(history[0].occurred_at(), ts(0));

        // Sorting network legs carry the center.
        assert_eq!(history[2].sorting_center(), Some(center()));
        assert_eq!(history[3].sorting_center(), Some(center()));
        assert_eq!(history[4].sorting_center(), Some(center()));

        // The last mile carries the pickup point, through to the handover.
        assert_eq!(history[5].pickup_point(), Some(point()));
        assert_eq!(history[6].pickup_point(), Some(point()));
        assert_eq!(history[7].pickup_point(), Some(point()));
        assert_eq!(history[7].occurred_at(), ts(7));
    }

    #[test]
    fn tracking_grows_once_per_applied_event() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);
        assert_eq!(order.tracking_history().len() as i64, order.version().as_i64());

        order.mark_as_assembling_by_seller(ts(1)).unwrap();
        assert_eq!(order.tracking_history().len() as i64, order.version().as_i64());

        order.ship_to_sorting_center(center(), ts(2)).unwrap();
        assert_eq!(order.tracking_history().len() as i64, order.version().as_i64());
    }

    #[test]
    fn references_follow_the_parcel() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);
        order.mark_as_assembling_by_seller(ts(1)).unwrap();

        order.ship_to_sorting_center(center(), ts(2)).unwrap();
        assert_eq!(order.destination_sorting_center(), Some(center()));
        assert_eq!(order.current_sorting_center(), None);

        order.mark_as_arrived_at_sorting_center(center(), ts(3)).unwrap();
        assert_eq!(order.current_sorting_center(), Some(center()));

        order.sort_at_sorting_center(center(), ts(4)).unwrap();
        order.ship_to_pickup_point(point(), ts(5)).unwrap();
        assert_eq!(order.pickup_point(), Some(point()));
    }
}

mod routing_guards {
    use super::*;

    #[test]
    fn pickup_arrival_straight_after_creation_is_rejected() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);

        let err = order.mark_as_awaiting_pickup(ts(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot mark as awaiting pickup while the delivery order is Placed"
        );
        assert_eq!(order.status(), DeliveryStatus::Placed);
        assert_eq!(order.version().as_i64(), 1);
        assert_eq!(order.tracking_history().len(), 1);
    }

    #[test]
    fn each_leg_requires_its_predecessor() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);

        assert!(order.mark_as_arrived_at_sorting_center(center(), ts(1)).is_err());
        assert!(order.sort_at_sorting_center(center(), ts(1)).is_err());
        assert!(order.ship_to_pickup_point(point(), ts(1)).is_err());
        assert!(order.mark_as_delivered(ts(1)).is_err());

        // Assembly may start exactly once.
        order.mark_as_assembling_by_seller(ts(2)).unwrap();
        let err = order.mark_as_assembling_by_seller(ts(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot start assembly while the delivery order is AssemblingBySeller"
        );
    }

    #[test]
    fn arrival_must_match_the_shipping_destination() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);
        order.mark_as_assembling_by_seller(ts(1)).unwrap();
        order.ship_to_sorting_center(center(), ts(2)).unwrap();

        let elsewhere = SortingCenterId::new(43);
        let err = order
            .mark_as_arrived_at_sorting_center(elsewhere, ts(3))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "sorting center 43 is not where this parcel was shipped"
        );

        order.mark_as_arrived_at_sorting_center(center(), ts(4)).unwrap();
        assert_eq!(order.status(), DeliveryStatus::ArrivedAtSortingCenter);
    }

    #[test]
    fn sorting_must_happen_where_the_parcel_sits() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);
        order.mark_as_assembling_by_seller(ts(1)).unwrap();
        order.ship_to_sorting_center(center(), ts(2)).unwrap();
        order.mark_as_arrived_at_sorting_center(center(), ts(3)).unwrap();

        let err = order
            .sort_at_sorting_center(SortingCenterId::new(43), ts(4))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "sorting center 43 is not where this parcel arrived"
        );
    }
}

mod shipping_rule_gap {
    use super::*;

    #[test]
    fn shipping_is_accepted_straight_from_placement() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);

        // No assembly step, yet the parcel ships.
        order.ship_to_sorting_center(center(), ts(1)).unwrap();
        assert_eq!(order.status(), DeliveryStatus::EnRouteToSortingCenter);
        assert_eq!(order.destination_sorting_center(), Some(center()));
    }

    #[test]
    fn shipping_is_accepted_even_after_delivery() {
        let mut ids = SequentialIds::new();
        let mut order = delivered(&mut ids);

        order.ship_to_sorting_center(SortingCenterId::new(99), ts(8)).unwrap();
        assert_eq!(order.status(), DeliveryStatus::EnRouteToSortingCenter);
        assert_eq!(
            order.destination_sorting_center(),
            Some(SortingCenterId::new(99))
        );
        // The handover stays on record.
        assert_eq!(order.delivered_at(), Some(ts(7)));
    }

    #[test]
    fn reshipping_overwrites_the_destination() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);

        order.ship_to_sorting_center(center(), ts(1)).unwrap();
        order.ship_to_sorting_center(SortingCenterId::new(43), ts(2)).unwrap();

        assert_eq!(
            order.destination_sorting_center(),
            Some(SortingCenterId::new(43))
        );
        assert_eq!(order.version().as_i64(), 3);
    }
}

mod returns {
    use super::*;

    #[test]
    fn return_is_accepted_even_after_delivery() {
        let mut ids = SequentialIds::new();
        let mut order = delivered(&mut ids);

        order.mark_as_returned(ts(8)).unwrap();
        assert_eq!(order.status(), DeliveryStatus::Returned);
        assert_eq!(order.delivered_at(), Some(ts(7)));
        assert_eq!(
            tracked_statuses(&order).last(),
            Some(&DeliveryStatus::Returned)
        );
    }

    #[test]
    fn return_is_accepted_from_the_road() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);
        order.ship_to_sorting_center(center(), ts(1)).unwrap();

        order.mark_as_returned(ts(2)).unwrap();
        assert_eq!(order.status(), DeliveryStatus::Returned);
    }
}

mod deletion {
    use super::*;

    #[test]
    fn deletion_freezes_the_order() {
        let mut ids = SequentialIds::new();
        let mut order = placed(&mut ids);
        order.delete(ts(1)).unwrap();

        assert_eq!(order.status(), DeliveryStatus::IsDeleted);
        assert_eq!(order.deleted_at(), Some(ts(1)));
        let version = order.version();

        assert!(order.mark_as_assembling_by_seller(ts(2)).is_err());
        assert!(order.ship_to_sorting_center(center(), ts(2)).is_err());
        assert!(order.mark_as_arrived_at_sorting_center(center(), ts(2)).is_err());
        assert!(order.sort_at_sorting_center(center(), ts(2)).is_err());
        assert!(order.ship_to_pickup_point(point(), ts(2)).is_err());
        assert!(order.mark_as_awaiting_pickup(ts(2)).is_err());
        assert!(order.mark_as_delivered(ts(2)).is_err());
        assert!(order.mark_as_returned(ts(2)).is_err());

        let err = order.delete(ts(2)).unwrap_err();
        assert_eq!(err.to_string(), "delivery order is already deleted");
        assert_eq!(order.version(), version);
    }

    #[test]
    fn deletion_is_reachable_from_any_state() {
        let mut ids = SequentialIds::new();
        let mut order = delivered(&mut ids);

        order.delete(ts(8)).unwrap();
        assert_eq!(order.status(), DeliveryStatus::IsDeleted);
        assert_eq!(order.version().as_i64(), 9);
    }
}

mod replay {
    use super::*;

    #[test]
    fn rebuild_matches_live_state() {
        let mut ids = SequentialIds::new();
        let mut live = delivered(&mut ids);
        live.mark_as_returned(ts(8)).unwrap();
        live.delete(ts(9)).unwrap();

        let history = live.take_uncommitted_events();
        let replayed = DeliveryOrder::replay(history.clone());

        assert_eq!(replayed, live);
        assert_eq!(replayed.version().as_i64(), history.len() as i64);
        assert!(replayed.uncommitted_events().is_empty());
        assert_eq!(replayed.tracking_history().len(), history.len());
    }

    #[test]
    fn the_same_history_always_yields_the_same_order() {
        let build = || {
            let mut ids = SequentialIds::new();
            delivered(&mut ids)
        };

        assert_eq!(build(), build());
    }
}
