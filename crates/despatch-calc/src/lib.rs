//! # Despatch Calculation Engine
//!
//! 出貨日計算引擎：提前期推算 → 取最晚到貨日 → 週末順延

pub mod aggregation;
pub mod arrival;
pub mod calculator;
pub mod closure;

// Re-export 主要類型
pub use aggregation::AggregationCalculator;
pub use arrival::ArrivalCalculator;
pub use calculator::DespatchCalculator;
pub use closure::ClosureAdjuster;

use chrono::NaiveDateTime;
use despatch_core::ProductId;

/// 出貨日計算結果（含每個產品的到貨明細）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DespatchResult {
    /// 下單日期（截斷後，如有配置）
    pub order_date: NaiveDateTime,

    /// 每個產品的到貨日，依請求順序
    pub arrivals: Vec<ProductArrival>,

    /// 最晚到貨日（週末順延前）
    pub latest_arrival: NaiveDateTime,

    /// 出貨日
    pub despatch_date: NaiveDateTime,
}

impl DespatchResult {
    /// 是否因週末而順延
    pub fn was_adjusted(&self) -> bool {
        self.despatch_date != self.latest_arrival
    }
}

/// 單一產品到貨明細
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductArrival {
    pub product_id: ProductId,
    pub lead_time: u32,
    pub arrival_date: NaiveDateTime,
}
