use stockcast_demand::{DemandSeries, WeekDemand};

/// Number of leading points assigned to the training segment.
///
/// `floor(ratio × len)`, computed in floating point.
pub fn train_len(len: usize, ratio: f64) -> usize {
    ((len as f64) * ratio).floor() as usize
}

/// Chronological prefix/suffix partition of a series. Never shuffled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TrainTestSplit<'a> {
    pub train: &'a [WeekDemand],
    pub test: &'a [WeekDemand],
}

impl<'a> TrainTestSplit<'a> {
    pub fn new(series: &'a DemandSeries, ratio: f64) -> Self {
        let (train, test) = series.split_at(train_len(series.len(), ratio));
        Self { train, test }
    }

    pub fn test_actuals(&self) -> Vec<f64> {
        self.test.iter().map(|w| w.quantity as f64).collect()
    }

    pub fn last_train(&self) -> Option<f64> {
        self.train.last().map(|w| w.quantity as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn series(quantities: Vec<u64>) -> DemandSeries {
        DemandSeries::from_quantities(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), quantities)
    }

    #[test]
    fn ten_weeks_split_eight_two() {
        let s = series(vec![10, 12, 11, 13, 14, 10, 9, 15, 16, 14]);
        let split = TrainTestSplit::new(&s, 0.8);
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.last_train(), Some(15.0));
        assert_eq!(split.test_actuals(), vec![16.0, 14.0]);
    }

    #[test]
    fn short_series_puts_everything_in_test() {
        let s = series(vec![7]);
        let split = TrainTestSplit::new(&s, 0.8);
        assert!(split.train.is_empty());
        assert_eq!(split.test.len(), 1);
        assert_eq!(split.last_train(), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the split is a prefix/suffix partition with floor(0.8 n) training points.
        #[test]
        fn split_is_prefix_suffix_partition(quantities in proptest::collection::vec(0u64..500, 1..200)) {
            let s = series(quantities);
            let split = TrainTestSplit::new(&s, 0.8);

            prop_assert_eq!(split.train.len() + split.test.len(), s.len());
            prop_assert_eq!(split.train.len(), ((s.len() as f64) * 0.8).floor() as usize);
            prop_assert_eq!(split.train, &s.weeks()[..split.train.len()]);
            prop_assert_eq!(split.test, &s.weeks()[split.train.len()..]);
        }
    }
}
