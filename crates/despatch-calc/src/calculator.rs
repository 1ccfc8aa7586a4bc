//! 出貨日主計算器

use chrono::{NaiveDateTime, NaiveTime};
use despatch_core::{
    DespatchConfig, DespatchDate, DespatchError, OrderRequest, ProductId, Result, SupplierLookup,
    WorkCalendar,
};

use crate::aggregation::AggregationCalculator;
use crate::arrival::ArrivalCalculator;
use crate::closure::ClosureAdjuster;
use crate::{DespatchResult, ProductArrival};

/// 出貨日計算器
///
/// 參考資料透過 [`SupplierLookup`] 注入，計算器本身無狀態，可在多個呼叫方之間共用。
pub struct DespatchCalculator<L> {
    /// 產品/供應商查詢
    lookup: L,

    /// 計算配置
    config: DespatchConfig,

    /// 工作日曆
    calendar: WorkCalendar,
}

impl<L: SupplierLookup> DespatchCalculator<L> {
    /// 創建新的出貨日計算器（預設配置）
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            config: DespatchConfig::default(),
            calendar: WorkCalendar::new(),
        }
    }

    /// 建構器模式：設置配置
    pub fn with_config(mut self, config: DespatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DespatchConfig {
        &self.config
    }

    /// 計算出貨日
    ///
    /// # 錯誤
    /// * [`DespatchError::InvalidRequest`] - 產品列表為空（在查詢之前檢查）
    /// * [`DespatchError::ProductNotFound`] / [`DespatchError::SupplierUnavailable`] -
    ///   第一個無法解析的產品
    pub fn calculate_despatch_date(
        &self,
        product_ids: &[ProductId],
        order_date: NaiveDateTime,
    ) -> Result<NaiveDateTime> {
        self.calculate_detailed(product_ids, order_date)
            .map(|result| result.despatch_date)
    }

    /// 處理傳輸層請求
    pub fn calculate(&self, request: &OrderRequest) -> Result<DespatchDate> {
        let product_ids = request.validated_product_ids()?;
        let date = self.calculate_despatch_date(product_ids, request.order_date)?;
        Ok(DespatchDate::new(date))
    }

    /// 計算出貨日，並返回每個產品的到貨明細
    pub fn calculate_detailed(
        &self,
        product_ids: &[ProductId],
        order_date: NaiveDateTime,
    ) -> Result<DespatchResult> {
        if product_ids.is_empty() {
            tracing::warn!("出貨日計算請求沒有產品");
            return Err(DespatchError::InvalidRequest);
        }

        let order_date = if self.config.truncate_time_of_day {
            order_date.date().and_time(NaiveTime::MIN)
        } else {
            order_date
        };

        tracing::info!(
            products = product_ids.len(),
            %order_date,
            "開始計算出貨日"
        );

        // Step 1: 逐產品查詢提前期並推算到貨日（遇到第一個錯誤即停止）
        let arrivals = product_ids
            .iter()
            .map(|&product_id| self.product_arrival(product_id, order_date))
            .collect::<Result<Vec<_>>>()?;

        // Step 2: 取最晚到貨日
        let latest_arrival = AggregationCalculator::latest_arrival(
            order_date,
            arrivals.iter().map(|a| a.arrival_date),
        );

        // Step 3: 週末順延
        let despatch_date = ClosureAdjuster::adjust(latest_arrival, &self.calendar)?;
        if despatch_date != latest_arrival {
            tracing::debug!(%latest_arrival, %despatch_date, "最晚到貨日落在週末，順延");
        }

        tracing::info!(%despatch_date, "出貨日計算完成");

        Ok(DespatchResult {
            order_date,
            arrivals,
            latest_arrival,
            despatch_date,
        })
    }

    fn product_arrival(
        &self,
        product_id: ProductId,
        order_date: NaiveDateTime,
    ) -> Result<ProductArrival> {
        let lead_time = self.lookup.lead_time(product_id).map_err(|err| {
            tracing::warn!(product_id, error = %err, "產品查詢失敗");
            err
        })?;

        let arrival_date = ArrivalCalculator::calculate_arrival_date(
            order_date,
            lead_time,
            self.config.projection,
            &self.calendar,
        )?;

        tracing::debug!(product_id, lead_time, %arrival_date, "產品到貨日");

        Ok(ProductArrival {
            product_id,
            lead_time,
            arrival_date,
        })
    }
}
