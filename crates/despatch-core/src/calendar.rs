//! 工作日曆模型
//!
//! 固定週一到週五為工作日，週六、週日休息（不含節假日）。

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::{DespatchError, Result};

/// 每週工作日數
pub const WORKING_DAYS_PER_WEEK: u32 = 5;

/// 工作日曆
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkCalendar;

impl WorkCalendar {
    /// 創建新的工作日曆
    pub fn new() -> Self {
        Self
    }

    /// 檢查是否為工作日
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// 計算工作日（逐日推算）
    ///
    /// 起始日本身不檢查；`days == 0` 時原樣返回。
    pub fn add_working_days(&self, start_date: NaiveDate, days: u32) -> Result<NaiveDate> {
        let mut current = start_date;
        let mut remaining = days;

        while remaining > 0 {
            current = current
                .succ_opt()
                .ok_or_else(|| overflow(start_date, days))?;
            if self.is_working_day(current) {
                remaining -= 1;
            }
        }

        Ok(current)
    }

    /// 計算工作日（整週分解）
    ///
    /// 先按整週（5 個工作日 = 7 天）直接跳躍，餘數再逐日推算。
    /// 結果與 [`add_working_days`](Self::add_working_days) 一致。
    pub fn add_working_days_by_weeks(&self, start_date: NaiveDate, days: u32) -> Result<NaiveDate> {
        if days == 0 {
            return Ok(start_date);
        }

        // 週末起算等同於從上週五起算
        let anchor = match start_date.weekday() {
            Weekday::Sat => start_date.checked_sub_days(Days::new(1)),
            Weekday::Sun => start_date.checked_sub_days(Days::new(2)),
            _ => Some(start_date),
        }
        .ok_or_else(|| overflow(start_date, days))?;

        let weeks = days / WORKING_DAYS_PER_WEEK;
        let remainder = days % WORKING_DAYS_PER_WEEK;

        let week_end = anchor
            .checked_add_days(Days::new(u64::from(weeks) * 7))
            .ok_or_else(|| overflow(start_date, days))?;

        self.add_working_days(week_end, remainder)
    }

    /// 獲取營業日：週六順延 2 天，週日順延 1 天，其餘不變
    pub fn next_open_day(&self, date: NaiveDate) -> Result<NaiveDate> {
        let shift = match date.weekday() {
            Weekday::Sat => 2,
            Weekday::Sun => 1,
            _ => return Ok(date),
        };

        date.checked_add_days(Days::new(shift))
            .ok_or_else(|| DespatchError::DateOutOfRange(format!("{date} 之後沒有營業日")))
    }

    /// 計算兩個日期之間的工作日數量（不含 start，含 end）
    pub fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= end)
            .filter(|d| self.is_working_day(*d))
            .count() as u32
    }
}

fn overflow(start_date: NaiveDate, days: u32) -> DespatchError {
    DespatchError::DateOutOfRange(format!("{start_date} 加 {days} 個工作日溢出"))
}
