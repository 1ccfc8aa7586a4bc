//! 訂單請求與出貨日結果

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{DespatchError, ProductId, Result};

/// 訂單請求（傳輸層格式：`productIds`、`orderDate`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// 產品ID列表（可能缺少）
    #[serde(default)]
    pub product_ids: Option<Vec<ProductId>>,

    /// 下單日期
    pub order_date: NaiveDateTime,
}

impl OrderRequest {
    /// 創建新的訂單請求
    pub fn new(product_ids: Vec<ProductId>, order_date: NaiveDateTime) -> Self {
        Self {
            product_ids: Some(product_ids),
            order_date,
        }
    }

    /// 取得產品ID，缺少或為空時返回 [`DespatchError::InvalidRequest`]
    pub fn validated_product_ids(&self) -> Result<&[ProductId]> {
        match self.product_ids.as_deref() {
            Some(ids) if !ids.is_empty() => Ok(ids),
            _ => Err(DespatchError::InvalidRequest),
        }
    }
}

/// 出貨日結果（傳輸層格式：`{ "Date": ... }`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DespatchDate {
    #[serde(rename = "Date")]
    pub date: NaiveDateTime,
}

impl DespatchDate {
    pub fn new(date: NaiveDateTime) -> Self {
        Self { date }
    }
}
