use std::collections::BTreeMap;

use chrono::Days;
use tracing::debug;

use stockcast_core::ProductId;

use crate::order::OrderRecord;
use crate::series::{DemandSeries, week_ending};

/// Bucket order records into weeks ending Sunday.
///
/// All records are assumed to belong to one product. Quantities are summed per
/// week and every week between the first and last order is present, with 0
/// for weeks without orders. No records yields an empty series.
pub fn aggregate_weekly<'a, I>(records: I) -> DemandSeries
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    let mut buckets: BTreeMap<chrono::NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *buckets.entry(week_ending(record.order_date())).or_insert(0) += record.quantity;
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return DemandSeries::empty();
    };

    let mut quantities = Vec::new();
    let mut week = first;
    while week <= last {
        quantities.push(buckets.get(&week).copied().unwrap_or(0));
        week = week + Days::new(7);
    }

    DemandSeries::from_quantities(first, quantities)
}

/// Aggregate only the records of `product`.
pub fn aggregate_for(product: &ProductId, records: &[OrderRecord]) -> DemandSeries {
    let series = aggregate_weekly(records.iter().filter(|r| &r.product == product));
    debug!(product = %product, weeks = series.len(), "aggregated weekly demand");
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn product(name: &str) -> ProductId {
        name.parse().unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap()
    }

    fn order(name: &str, when: NaiveDateTime, qty: u64) -> OrderRecord {
        OrderRecord::new(product(name), when, qty)
    }

    #[test]
    fn empty_history_yields_empty_series() {
        let series = aggregate_weekly(std::iter::empty::<&OrderRecord>());
        assert!(series.is_empty());
    }

    #[test]
    fn sums_within_week_and_fills_gaps_with_zero() {
        let records = vec![
            // Week ending 2024-01-07.
            order("Deck", at(2024, 1, 2, 9), 3),
            order("Deck", at(2024, 1, 7, 23), 2),
            // Week ending 2024-01-14 has no orders.
            // Week ending 2024-01-21.
            order("Deck", at(2024, 1, 15, 8), 4),
        ];

        let series = aggregate_weekly(&records);
        let weeks: Vec<_> = series.weeks().iter().map(|w| (w.week.to_string(), w.quantity)).collect();
        assert_eq!(
            weeks,
            vec![
                ("2024-01-07".to_string(), 5),
                ("2024-01-14".to_string(), 0),
                ("2024-01-21".to_string(), 4),
            ]
        );
    }

    #[test]
    fn unsorted_input_is_sorted_by_week() {
        let records = vec![
            order("Deck", at(2024, 2, 1, 9), 1),
            order("Deck", at(2024, 1, 10, 9), 2),
        ];
        let series = aggregate_weekly(&records);
        assert_eq!(series.weeks().first().unwrap().quantity, 2);
        assert_eq!(series.weeks().last().unwrap().quantity, 1);
    }

    #[test]
    fn aggregate_for_ignores_other_products() {
        let records = vec![
            order("Deck", at(2024, 1, 2, 9), 3),
            order("Cleats", at(2024, 1, 3, 9), 50),
        ];
        let series = aggregate_for(&product("Deck"), &records);
        assert_eq!(series.total(), 3);
        assert!(aggregate_for(&product("Kayak"), &records).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: aggregation conserves total quantity and yields a gap-free series.
        #[test]
        fn conserves_quantity_and_has_no_gaps(
            orders in proptest::collection::vec((0i64..400, 0u64..50), 0..60)
        ) {
            let base = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
            let records: Vec<OrderRecord> = orders
                .iter()
                .map(|(offset, qty)| {
                    let day = base + chrono::TimeDelta::days(*offset);
                    order("Deck", day.and_hms_opt(12, 0, 0).unwrap(), *qty)
                })
                .collect();

            let series = aggregate_weekly(&records);
            let expected: u64 = orders.iter().map(|(_, q)| *q).sum();
            prop_assert_eq!(series.total(), expected);
            prop_assert_eq!(series.is_empty(), records.is_empty());
            prop_assert!(DemandSeries::try_from_weeks(series.weeks().to_vec()).is_ok());
        }
    }
}
