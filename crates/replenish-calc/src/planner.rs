//! 批次補貨計劃

use chrono::NaiveDate;
use rayon::prelude::*;
use replenish_core::{
    ReplenishmentConfig, ReplenishmentItem, ReplenishmentStrategy, RiskLevel, StockCoverage,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::{classify_risk_with_config, compute_stock_coverage_with_config, compute_suggested_quantity};
use crate::projection::{project_with_receipt, ProjectionPoint};
use crate::sourcing::{adjust_for_supplier, estimate_order_cost, expected_arrival, select_supplier};

/// 單一物料的補貨建議
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentSuggestion {
    /// 建議ID
    pub id: Uuid,

    pub sku: String,
    pub name: String,

    /// 建議採購量（未套用供應商最小訂購量）
    pub suggested_quantity: u64,

    /// 庫存覆蓋
    pub coverage: StockCoverage,

    /// 風險等級
    pub risk: RiskLevel,

    /// 選定的供應商
    pub supplier: Option<String>,

    /// 實際下單量（已套用最小訂購量）
    pub order_quantity: u64,

    /// 預估採購金額
    pub estimated_cost: Option<Decimal>,

    /// 預計到貨日期
    pub expected_arrival: Option<NaiveDate>,

    /// 含到貨的庫存推演
    pub projection: Vec<ProjectionPoint>,
}

impl ReplenishmentSuggestion {
    /// 是否需要下單
    pub fn needs_order(&self) -> bool {
        self.order_quantity > 0
    }
}

/// 補貨計劃彙總
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_items: usize,
    pub critical_items: usize,
    pub elevated_items: usize,
    pub normal_items: usize,
    pub items_to_order: usize,
    pub total_order_quantity: u64,
    pub total_estimated_cost: Decimal,
}

/// 補貨計劃（批次計算結果）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentPlan {
    /// 計劃基準日
    pub plan_date: NaiveDate,

    /// 使用的策略
    pub strategy: ReplenishmentStrategy,

    /// 補貨建議（與輸入順序相同）
    pub suggestions: Vec<ReplenishmentSuggestion>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ReplenishmentPlan {
    /// 依風險等級篩選
    pub fn by_risk(&self, level: RiskLevel) -> impl Iterator<Item = &ReplenishmentSuggestion> {
        self.suggestions.iter().filter(move |s| s.risk == level)
    }

    /// 需要下單的物料
    pub fn items_to_order(&self) -> impl Iterator<Item = &ReplenishmentSuggestion> {
        self.suggestions.iter().filter(|s| s.needs_order())
    }

    /// 依 SKU 查詢
    pub fn get(&self, sku: &str) -> Option<&ReplenishmentSuggestion> {
        self.suggestions.iter().find(|s| s.sku == sku)
    }

    /// 彙總統計
    pub fn summary(&self) -> PlanSummary {
        let mut summary = PlanSummary {
            total_items: self.suggestions.len(),
            ..PlanSummary::default()
        };

        for suggestion in &self.suggestions {
            match suggestion.risk {
                RiskLevel::Critical => summary.critical_items += 1,
                RiskLevel::Elevated => summary.elevated_items += 1,
                RiskLevel::Normal => summary.normal_items += 1,
            }

            if suggestion.needs_order() {
                summary.items_to_order += 1;
                summary.total_order_quantity =
                    summary.total_order_quantity.saturating_add(suggestion.order_quantity);
                summary.total_estimated_cost += suggestion.estimated_cost.unwrap_or(Decimal::ZERO);
            }
        }

        summary
    }
}

/// 補貨計劃器
///
/// 不保存任何跨呼叫狀態；選取中的物料與策略由呼叫端管理
#[derive(Debug, Clone)]
pub struct ReplenishmentPlanner {
    strategy: ReplenishmentStrategy,
    config: ReplenishmentConfig,
}

impl ReplenishmentPlanner {
    /// 創建新的計劃器
    pub fn new(strategy: ReplenishmentStrategy) -> replenish_core::Result<Self> {
        Self::with_config(strategy, ReplenishmentConfig::default())
    }

    /// 使用自訂配置創建計劃器
    pub fn with_config(
        strategy: ReplenishmentStrategy,
        config: ReplenishmentConfig,
    ) -> replenish_core::Result<Self> {
        strategy.validate()?;
        config.validate()?;
        Ok(Self { strategy, config })
    }

    pub fn strategy(&self) -> &ReplenishmentStrategy {
        &self.strategy
    }

    pub fn config(&self) -> &ReplenishmentConfig {
        &self.config
    }

    /// 計算單一物料的補貨建議
    pub fn suggest(
        &self,
        item: &ReplenishmentItem,
        today: NaiveDate,
    ) -> replenish_core::Result<ReplenishmentSuggestion> {
        let suggested_quantity = compute_suggested_quantity(item, &self.strategy)?;
        let coverage = compute_stock_coverage_with_config(item, today, &self.config)?;
        let risk = classify_risk_with_config(coverage.coverage_days, &self.config);
        let supplier = select_supplier(&item.sku, &item.suppliers)?;

        let order_quantity = match supplier {
            Some(s) => adjust_for_supplier(suggested_quantity, s),
            None => suggested_quantity,
        };

        // 無供應商時假設立即到貨
        let lead_time_days = supplier.map(|s| s.lead_time_days).unwrap_or(0);
        let projection = project_with_receipt(
            item,
            today,
            self.config.projection_days,
            order_quantity,
            lead_time_days,
        )?;

        if risk == RiskLevel::Critical {
            tracing::warn!(
                "物料 {} 庫存緊急：覆蓋 {:.1} 天，建議採購 {}",
                item.sku,
                coverage.coverage_days,
                order_quantity
            );
        }

        tracing::debug!(
            "物料 {} 建議量 {}，下單量 {}，風險 {}",
            item.sku,
            suggested_quantity,
            order_quantity,
            risk
        );

        Ok(ReplenishmentSuggestion {
            id: Uuid::new_v4(),
            sku: item.sku.clone(),
            name: item.name.clone(),
            suggested_quantity,
            coverage,
            risk,
            supplier: supplier.map(|s| s.name.clone()),
            order_quantity,
            estimated_cost: supplier.map(|s| estimate_order_cost(order_quantity, s)),
            expected_arrival: supplier.map(|s| expected_arrival(today, s)).transpose()?,
            projection,
        })
    }

    /// 為所有物料計算補貨建議
    ///
    /// 各物料獨立並行計算；任何一筆資料無效即整批失敗
    pub fn plan(
        &self,
        items: &[ReplenishmentItem],
        today: NaiveDate,
    ) -> replenish_core::Result<ReplenishmentPlan> {
        tracing::info!(
            "開始補貨計算：物料 {} 筆，目標 {} 天，安全係數 {}",
            items.len(),
            self.strategy.target_days,
            self.strategy.safety_factor
        );

        let start_time = std::time::Instant::now();

        let suggestions = items
            .par_iter()
            .map(|item| self.suggest(item, today))
            .collect::<replenish_core::Result<Vec<_>>>()?;

        let plan = ReplenishmentPlan {
            plan_date: today,
            strategy: self.strategy,
            suggestions,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!("補貨計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("需下單物料數量: {}", plan.items_to_order().count());

        Ok(plan)
    }
}
