//! 出貨日計算示例
//!
//! 用法：`cargo run --example despatch_demo -- 2018-01-26T09:00:00 1 3 9`

use anyhow::Context;
use chrono::NaiveDateTime;
use despatch::{DespatchCalculator, InMemoryCatalog, OrderRequest, ProductId};
use tracing_subscriber::EnvFilter;

const CATALOG: &str = include_str!("../tests/fixtures/catalog.json");

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("despatch_calc=debug,info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let mut args = std::env::args().skip(1);

    let order_date = match args.next() {
        Some(raw) => raw
            .parse::<NaiveDateTime>()
            .with_context(|| format!("無效的下單日期: {raw}"))?,
        None => "2018-01-26T09:00:00".parse()?,
    };

    let product_ids = args
        .map(|raw| {
            raw.parse::<ProductId>()
                .with_context(|| format!("無效的產品ID: {raw}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let product_ids = if product_ids.is_empty() {
        vec![1, 2, 3]
    } else {
        product_ids
    };

    let catalog = InMemoryCatalog::from_json(CATALOG).context("載入參考資料失敗")?;
    tracing::info!(
        products = catalog.product_count(),
        suppliers = catalog.supplier_count(),
        "參考資料已載入"
    );

    let calculator = DespatchCalculator::new(catalog);
    let request = OrderRequest::new(product_ids, order_date);

    let detail = calculator.calculate_detailed(request.validated_product_ids()?, order_date)?;
    println!("=== 出貨日計算 ===\n");
    println!("下單日期: {}", detail.order_date);
    for arrival in &detail.arrivals {
        println!(
            "  - 產品 {}: 提前期 {} 個工作日, 到貨 {}",
            arrival.product_id, arrival.lead_time, arrival.arrival_date
        );
    }
    println!("最晚到貨: {}", detail.latest_arrival);

    let response = calculator.calculate(&request)?;
    println!("\n{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
