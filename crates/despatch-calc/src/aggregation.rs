//! 多產品到貨日彙總

use chrono::NaiveDateTime;

/// 彙總計算器
pub struct AggregationCalculator;

impl AggregationCalculator {
    /// 取最晚到貨日：出貨受最慢的產品限制
    ///
    /// 從下單日期起算，結果不會早於下單日期。
    pub fn latest_arrival<I>(order_date: NaiveDateTime, arrivals: I) -> NaiveDateTime
    where
        I: IntoIterator<Item = NaiveDateTime>,
    {
        arrivals.into_iter().fold(order_date, NaiveDateTime::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_latest_wins() {
        let order_date = midnight(2018, 1, 1);
        let arrivals = vec![
            midnight(2018, 1, 2),
            midnight(2018, 1, 4),
            midnight(2018, 1, 3),
        ];

        assert_eq!(
            AggregationCalculator::latest_arrival(order_date, arrivals),
            midnight(2018, 1, 4)
        );
    }

    #[test]
    fn test_never_before_order_date() {
        let order_date = midnight(2018, 1, 10);

        assert_eq!(
            AggregationCalculator::latest_arrival(order_date, vec![midnight(2018, 1, 8)]),
            order_date
        );
        assert_eq!(AggregationCalculator::latest_arrival(order_date, []), order_date);
    }

    proptest! {
        #[test]
        fn prop_is_max_of_inputs(offsets in proptest::collection::vec(0u64..400, 1..10)) {
            let order_date = midnight(2018, 1, 1);
            let arrivals: Vec<_> = offsets
                .iter()
                .map(|&days| order_date.checked_add_days(Days::new(days)).unwrap())
                .collect();

            let latest = AggregationCalculator::latest_arrival(order_date, arrivals.clone());

            prop_assert!(latest >= order_date);
            prop_assert!(arrivals.iter().all(|a| *a <= latest));
            prop_assert!(arrivals.contains(&latest));
        }
    }
}
