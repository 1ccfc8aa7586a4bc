//! 週末停業順延

use chrono::NaiveDateTime;
use despatch_core::{WorkCalendar};

/// 停業順延調整器
///
/// 只在彙總之後套用一次：週六順延到週一（+2），週日順延到週一（+1）。
pub struct ClosureAdjuster;

impl ClosureAdjuster {
    /// 調整出貨日，時間部分保持不變
    pub fn adjust(
        date: NaiveDateTime,
        calendar: &WorkCalendar,
    ) -> despatch_core::Result<NaiveDateTime> {
        let day = calendar.next_open_day(date.date())?;
        Ok(day.and_time(date.time()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[rstest]
    #[case::friday(at(2018, 1, 26, 15), at(2018, 1, 26, 15))]
    #[case::saturday(at(2018, 1, 27, 15), at(2018, 1, 29, 15))]
    #[case::sunday(at(2018, 1, 28, 15), at(2018, 1, 29, 15))]
    #[case::monday(at(2018, 1, 29, 15), at(2018, 1, 29, 15))]
    fn test_adjust(#[case] input: NaiveDateTime, #[case] expected: NaiveDateTime) {
        assert_eq!(ClosureAdjuster::adjust(input, &WorkCalendar::new()).unwrap(), expected);
    }

    proptest! {
        #[test]
        fn prop_adjust_is_idempotent(offset in 0u64..5_000) {
            let calendar = WorkCalendar::new();
            let date = at(2010, 1, 1, 8).checked_add_days(Days::new(offset)).unwrap();

            let once = ClosureAdjuster::adjust(date, &calendar).unwrap();
            let twice = ClosureAdjuster::adjust(once, &calendar).unwrap();

            prop_assert_eq!(once, twice);
            prop_assert!(calendar.is_working_day(once.date()));
            if calendar.is_working_day(date.date()) {
                prop_assert_eq!(once, date);
            }
        }
    }
}
