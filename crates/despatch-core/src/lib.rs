//! # Despatch Core
//!
//! 出貨日計算的核心資料模型與類型定義

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod order;

// Re-export 主要類型
pub use calendar::WorkCalendar;
pub use catalog::{InMemoryCatalog, Product, ProductId, Supplier, SupplierId, SupplierLookup};
pub use config::{DespatchConfig, ProjectionMethod};
pub use order::{DespatchDate, OrderRequest};

/// 出貨日計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum DespatchError {
    #[error("At least one product must be specified")]
    InvalidRequest,

    #[error("Product with ID {0} is not available")]
    ProductNotFound(ProductId),

    #[error("Product with ID {0} is currently unavailable")]
    SupplierUnavailable(ProductId),

    #[error("日期超出範圍: {0}")]
    DateOutOfRange(String),

    #[error("參考資料無效: {0}")]
    InvalidCatalog(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DespatchError>;
