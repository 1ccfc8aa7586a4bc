//! 到貨日計算（工作日推算）

use chrono::NaiveDateTime;
use despatch_core::{ProjectionMethod, WorkCalendar};

/// 到貨日計算器
pub struct ArrivalCalculator;

impl ArrivalCalculator {
    /// 計算到貨日期（向前推算提前期）
    ///
    /// 只有下單日之後的日子會被檢查是否為工作日；提前期為 0 時
    /// 原樣返回下單日期（即使是週末）。時間部分保持不變。
    pub fn calculate_arrival_date(
        order_date: NaiveDateTime,
        lead_time: u32,
        method: ProjectionMethod,
        calendar: &WorkCalendar,
    ) -> despatch_core::Result<NaiveDateTime> {
        let day = match method {
            ProjectionMethod::DayStepping => {
                calendar.add_working_days(order_date.date(), lead_time)?
            }
            ProjectionMethod::WeekDecomposition => {
                calendar.add_working_days_by_weeks(order_date.date(), lead_time)?
            }
        };

        Ok(day.and_time(order_date.time()))
    }
}
