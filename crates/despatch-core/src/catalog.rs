//! 產品與供應商參考資料

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{DespatchError, Result};

pub type ProductId = i32;
pub type SupplierId = i32;

/// 產品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub product_id: ProductId,

    /// 供應商ID
    pub supplier_id: SupplierId,
}

impl Product {
    pub fn new(product_id: ProductId, supplier_id: SupplierId) -> Self {
        Self {
            product_id,
            supplier_id,
        }
    }
}

/// 供應商
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// 供應商ID
    pub supplier_id: SupplierId,

    /// 名稱
    pub name: String,

    /// 提前期（工作日）
    pub lead_time: u32,
}

impl Supplier {
    pub fn new(supplier_id: SupplierId, name: impl Into<String>, lead_time: u32) -> Self {
        Self {
            supplier_id,
            name: name.into(),
            lead_time,
        }
    }
}

/// 唯讀參考資料查詢
///
/// 計算器只透過此介面讀取產品與供應商，不做任何修改。
pub trait SupplierLookup {
    /// 查詢產品
    fn find_product(&self, product_id: ProductId) -> Option<&Product>;

    /// 查詢供應商
    fn find_supplier(&self, supplier_id: SupplierId) -> Option<&Supplier>;

    /// 查詢產品所屬供應商的提前期（工作日）
    ///
    /// # 錯誤
    /// * [`DespatchError::ProductNotFound`] - 產品不存在
    /// * [`DespatchError::SupplierUnavailable`] - 產品存在，但引用的供應商不存在
    fn lead_time(&self, product_id: ProductId) -> Result<u32> {
        let product = self
            .find_product(product_id)
            .ok_or(DespatchError::ProductNotFound(product_id))?;

        let supplier = self
            .find_supplier(product.supplier_id)
            .ok_or(DespatchError::SupplierUnavailable(product_id))?;

        Ok(supplier.lead_time)
    }
}

impl<T: SupplierLookup + ?Sized> SupplierLookup for &T {
    fn find_product(&self, product_id: ProductId) -> Option<&Product> {
        (**self).find_product(product_id)
    }

    fn find_supplier(&self, supplier_id: SupplierId) -> Option<&Supplier> {
        (**self).find_supplier(supplier_id)
    }
}

/// JSON 參考資料格式
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogData {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    suppliers: Vec<Supplier>,
}

/// 記憶體內參考資料
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<ProductId, Product>,
    suppliers: HashMap<SupplierId, Supplier>,
}

impl InMemoryCatalog {
    /// 從產品與供應商列表創建（ID 重複時返回錯誤）
    pub fn new(products: Vec<Product>, suppliers: Vec<Supplier>) -> Result<Self> {
        let mut catalog = Self::default();

        for product in products {
            let id = product.product_id;
            if catalog.products.insert(id, product).is_some() {
                return Err(DespatchError::InvalidCatalog(format!("產品ID重複: {id}")));
            }
        }

        for supplier in suppliers {
            let id = supplier.supplier_id;
            if catalog.suppliers.insert(id, supplier).is_some() {
                return Err(DespatchError::InvalidCatalog(format!("供應商ID重複: {id}")));
            }
        }

        Ok(catalog)
    }

    /// 從 JSON 載入
    ///
    /// ```
    /// use despatch_core::{InMemoryCatalog, SupplierLookup};
    ///
    /// let json = r#"{
    ///     "products": [{ "product_id": 1, "supplier_id": 1 }],
    ///     "suppliers": [{ "supplier_id": 1, "name": "Acme", "lead_time": 2 }]
    /// }"#;
    ///
    /// let catalog = InMemoryCatalog::from_json(json).unwrap();
    /// assert_eq!(catalog.lead_time(1).unwrap(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data.products, data.suppliers)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }
}

impl SupplierLookup for InMemoryCatalog {
    fn find_product(&self, product_id: ProductId) -> Option<&Product> {
        self.products.get(&product_id)
    }

    fn find_supplier(&self, supplier_id: SupplierId) -> Option<&Supplier> {
        self.suppliers.get(&supplier_id)
    }
}
