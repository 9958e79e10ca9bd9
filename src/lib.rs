//! # Replenish
//!
//! 補貨建議引擎：依庫存、在途、已承諾數量與日均銷量，
//! 計算各物料的建議採購量、庫存覆蓋天數與風險等級。

pub use replenish_calc::{
    classify_risk, compute_stock_coverage, compute_suggested_quantity, PlanSummary,
    ReplenishmentPlan, ReplenishmentPlanner, ReplenishmentSuggestion,
};
pub use replenish_core::{
    load_items_from_json, ReplenishError, ReplenishmentConfig, ReplenishmentItem,
    ReplenishmentStrategy, RiskLevel, StockCoverage, StockoutDate, StrategyPreset,
    SupplierOption,
};
