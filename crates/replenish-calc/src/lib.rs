//! # Replenishment Calculation Engine
//!
//! 補貨建議計算引擎

pub mod calculator;
pub mod planner;
pub mod projection;
pub mod sourcing;

// Re-export 主要類型
pub use calculator::{
    classify_risk, classify_risk_with_config, compute_stock_coverage,
    compute_stock_coverage_with_config, compute_suggested_quantity,
};
pub use planner::{PlanSummary, ReplenishmentPlan, ReplenishmentPlanner, ReplenishmentSuggestion};
pub use projection::{project_depletion, project_with_receipt, ProjectionPoint};
pub use sourcing::{adjust_for_supplier, estimate_order_cost, expected_arrival, select_supplier};
