//! # Despatch
//!
//! 出貨日計算：依產品供應商提前期（工作日）推算最晚到貨日，並避開週末出貨。
//!
//! ```
//! use chrono::NaiveDate;
//! use despatch::{DespatchCalculator, InMemoryCatalog, Product, Supplier};
//!
//! let catalog = InMemoryCatalog::new(
//!     vec![Product::new(1, 1)],
//!     vec![Supplier::new(1, "Acme", 1)],
//! )
//! .unwrap();
//!
//! // 週五下單，提前期 1 個工作日 → 下週一出貨
//! let friday = NaiveDate::from_ymd_opt(2018, 1, 26).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let despatch = DespatchCalculator::new(catalog)
//!     .calculate_despatch_date(&[1], friday)
//!     .unwrap();
//!
//! assert_eq!(despatch.date(), NaiveDate::from_ymd_opt(2018, 1, 29).unwrap());
//! ```

pub use despatch_calc::{
    AggregationCalculator, ArrivalCalculator, ClosureAdjuster, DespatchCalculator, DespatchResult,
    ProductArrival,
};
pub use despatch_core::{
    DespatchConfig, DespatchDate, DespatchError, InMemoryCatalog, OrderRequest, Product,
    ProductId, ProjectionMethod, Result, Supplier, SupplierId, SupplierLookup, WorkCalendar,
};
