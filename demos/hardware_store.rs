//! 五金行補貨建議示例

use anyhow::Context;
use chrono::NaiveDate;
use replenish::{load_items_from_json, ReplenishmentPlanner, StockoutDate, StrategyPreset};

const SEED_DATA: &str = r#"[
    {
        "sku": "HW-1001", "name": "十字螺絲起子",
        "currentStock": 500, "incomingStock": 0, "committedStock": 0,
        "dailyVelocity": 120.0,
        "suppliers": [
            { "name": "永豐五金", "unitPrice": "45.50", "minimumOrderQuantity": 1000,
              "leadTimeDays": 5, "performanceScore": 92, "isRecommended": true },
            { "name": "新興工具", "unitPrice": "42.00", "minimumOrderQuantity": 2000,
              "leadTimeDays": 12, "performanceScore": 81 }
        ]
    },
    {
        "sku": "HW-2001", "name": "電鑽",
        "currentStock": 12, "incomingStock": 10, "committedStock": 0,
        "dailyVelocity": 5.0,
        "suppliers": [
            { "name": "大昌工具", "unitPrice": "1250", "minimumOrderQuantity": 20,
              "leadTimeDays": 7, "performanceScore": 88 }
        ]
    },
    {
        "sku": "HW-3001", "name": "油漆刷",
        "currentStock": 900, "incomingStock": 200, "committedStock": 150,
        "dailyVelocity": 18.0
    },
    {
        "sku": "HW-4001", "name": "訂製門把",
        "currentStock": 3, "incomingStock": 0, "committedStock": 5,
        "dailyVelocity": 0.0
    }
]"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let strategy = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<StrategyPreset>())
        .transpose()?
        .unwrap_or(StrategyPreset::Balanced);

    let today = NaiveDate::from_ymd_opt(2025, 11, 1).context("無效的計劃日期")?;
    let items = load_items_from_json(SEED_DATA)?;

    let planner = ReplenishmentPlanner::new(strategy.into())?;
    let plan = planner.plan(&items, today)?;

    println!("=== 補貨建議（策略: {}）===\n", strategy);
    for s in &plan.suggestions {
        let stockout = match s.coverage.stockout_date {
            StockoutDate::Date(date) => date.to_string(),
            StockoutDate::Sufficient => "充足".to_string(),
        };
        println!(
            "  - {} {}: 建議 {}，下單 {}，風險 {}，預計缺貨 {}，供應商 {}",
            s.sku,
            s.name,
            s.suggested_quantity,
            s.order_quantity,
            s.risk,
            stockout,
            s.supplier.as_deref().unwrap_or("未指定"),
        );
    }

    let summary = plan.summary();
    println!("\n需下單 {} / {} 項", summary.items_to_order, summary.total_items);
    println!("預估採購金額: {}", summary.total_estimated_cost);

    println!("\n{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
