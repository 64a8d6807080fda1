//! Property-based tests for the Variant aggregate.
//!
//! Arbitrary stock histories are run against a plain model of the expected
//! counters, and every accepted history is replayed to check that the fold
//! rebuilds the live state exactly.

use chrono::{DateTime, TimeZone, Utc};
use domain::{Aggregate, ColorId, ProductId, Rating, Variant};
use event_core::SequentialIds;
use proptest::prelude::*;
use uuid::Uuid;

const NAME: &str = "Linen summer dress, ankle length";
const INITIAL_STOCK: u32 = 10;

#[derive(Debug, Clone, Copy)]
enum StockOp {
    Add(u32),
    Remove(u32),
    Sell(u32),
    SetAvailability(bool),
}

fn stock_op() -> impl Strategy<Value = StockOp> {
    prop_oneof![
        (1u32..=25).prop_map(StockOp::Add),
        (1u32..=25).prop_map(StockOp::Remove),
        (1u32..=25).prop_map(StockOp::Sell),
        any::<bool>().prop_map(StockOp::SetAvailability),
    ]
}

fn ts(step: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() + chrono::Duration::seconds(i64::from(step))
}

fn fresh_variant(ids: &mut SequentialIds) -> Variant {
    Variant::create(
        ids,
        ProductId::from_uuid(Uuid::from_u128(0xAB)),
        ColorId::from_uuid(Uuid::from_u128(0xC0)),
        NAME,
        INITIAL_STOCK,
        "/linen-summer-dress-7",
        ts(0),
    )
    .unwrap()
}

/// Runs the ops against a live aggregate, returning it alongside how many
/// commands were accepted.
fn run_ops(variant: &mut Variant, ops: &[StockOp]) -> usize {
    let mut accepted = 0;
    for (step, op) in ops.iter().enumerate() {
        let now = ts(step as u32 + 1);
        let outcome = match *op {
            StockOp::Add(count) => variant.add_to_stock(count, now),
            StockOp::Remove(count) => variant.remove_from_stock(count, now),
            StockOp::Sell(count) => variant.sell(count, now),
            StockOp::SetAvailability(flag) => variant.set_availability(flag, now),
        };
        if outcome.is_ok() {
            accepted += 1;
        }
    }
    accepted
}

proptest! {
    /// Stock and sold counters track a plain model through any op sequence,
    /// and a drained stock always forces the variant off sale.
    #[test]
    fn stock_counters_match_the_model(ops in prop::collection::vec(stock_op(), 0..40)) {
        let mut ids = SequentialIds::new();
        let mut variant = fresh_variant(&mut ids);

        let mut stock = INITIAL_STOCK;
        let mut sold = 0u32;
        let mut available = false;

        for (step, op) in ops.iter().enumerate() {
            let now = ts(step as u32 + 1);
            match *op {
                StockOp::Add(count) => {
                    variant.add_to_stock(count, now).unwrap();
                    stock += count;
                }
                StockOp::Remove(count) => {
                    let accepted = variant.remove_from_stock(count, now).is_ok();
                    prop_assert_eq!(accepted, count <= stock);
                    if accepted {
                        stock -= count;
                        if stock == 0 {
                            available = false;
                        }
                    }
                }
                StockOp::Sell(count) => {
                    let accepted = variant.sell(count, now).is_ok();
                    prop_assert_eq!(accepted, count <= stock);
                    if accepted {
                        stock -= count;
                        sold += count;
                        if stock == 0 {
                            available = false;
                        }
                    }
                }
                StockOp::SetAvailability(flag) => {
                    variant.set_availability(flag, now).unwrap();
                    available = flag;
                }
            }

            prop_assert_eq!(variant.stock(), stock);
            prop_assert_eq!(variant.sold(), sold);
            prop_assert_eq!(variant.is_available(), available);
        }
    }

    /// The version is exactly the number of accepted commands (each raises
    /// one event here), the creation included. Rejected commands add nothing.
    #[test]
    fn version_counts_accepted_commands_only(ops in prop::collection::vec(stock_op(), 0..40)) {
        let mut ids = SequentialIds::new();
        let mut variant = fresh_variant(&mut ids);

        let accepted = run_ops(&mut variant, &ops);

        prop_assert_eq!(variant.version().as_i64(), accepted as i64 + 1);
        prop_assert_eq!(variant.uncommitted_events().len(), accepted + 1);
    }

    /// Replaying the recorded history rebuilds the live state, field for
    /// field, with nothing left uncommitted.
    #[test]
    fn replay_matches_live_after_any_stock_history(ops in prop::collection::vec(stock_op(), 0..40)) {
        let mut ids = SequentialIds::new();
        let mut live = fresh_variant(&mut ids);
        run_ops(&mut live, &ops);

        let history = live.take_uncommitted_events();
        let replayed = Variant::replay(history.clone());

        prop_assert_eq!(&replayed, &live);
        prop_assert_eq!(replayed.version().as_i64(), history.len() as i64);
        prop_assert!(replayed.uncommitted_events().is_empty());
    }

    /// The rating accumulator never leaves the score bounds and is
    /// insensitive to vote order.
    #[test]
    fn rating_average_stays_in_score_bounds(scores in prop::collection::vec(1u8..=5, 1..30)) {
        let mut rating = Rating::default();
        for &score in &scores {
            rating = rating.record(score);
        }

        let average = rating.average();
        prop_assert!(average >= f64::from(Rating::MIN_SCORE));
        prop_assert!(average <= f64::from(Rating::MAX_SCORE));
        prop_assert_eq!(rating.votes(), scores.len() as u64);

        let mut reversed = Rating::default();
        for &score in scores.iter().rev() {
            reversed = reversed.record(score);
        }
        prop_assert_eq!(reversed, rating);
    }
}
