//! 補貨數量、庫存覆蓋與風險分級

use chrono::{Duration, NaiveDate};
use replenish_core::{
    ReplenishError, ReplenishmentConfig, ReplenishmentItem, ReplenishmentStrategy, RiskLevel,
    StockCoverage, StockoutDate,
};

/// 計算建議採購數量
///
/// 目標庫存 = 日均銷量 × 目標天數 × 安全係數，
/// 建議量 = max(0, round(目標庫存 - 淨可用量))
pub fn compute_suggested_quantity(
    item: &ReplenishmentItem,
    strategy: &ReplenishmentStrategy,
) -> replenish_core::Result<u64> {
    item.validate()?;
    strategy.validate()?;

    let target_stock = item.daily_velocity * strategy.target_days as f64 * strategy.safety_factor;
    if !target_stock.is_finite() {
        return Err(ReplenishError::invalid_input(
            &item.sku,
            format!("目標庫存超出可表示範圍: {}", target_stock),
        ));
    }

    let net_available = item.net_available() as f64;
    let raw_suggestion = target_stock - net_available;

    let rounded = raw_suggestion.round();
    if rounded <= 0.0 {
        return Ok(0);
    }

    // u64::MAX as f64 == 2^64，不可表示
    if rounded >= u64::MAX as f64 {
        return Err(ReplenishError::invalid_input(
            &item.sku,
            format!("建議採購量超出可表示範圍: {}", rounded),
        ));
    }

    Ok(rounded as u64)
}

/// 日期加上天數，超出日期範圍時回傳錯誤
pub(crate) fn offset_date(today: NaiveDate, days: i64) -> replenish_core::Result<NaiveDate> {
    today
        .checked_add_signed(Duration::days(days))
        .ok_or_else(|| ReplenishError::InvalidDate(format!("{} 加 {} 天超出日期範圍", today, days)))
}

/// 計算庫存覆蓋天數與預計缺貨日期（使用預設計劃時界）
pub fn compute_stock_coverage(
    item: &ReplenishmentItem,
    today: NaiveDate,
) -> replenish_core::Result<StockCoverage> {
    compute_stock_coverage_with_config(item, today, &ReplenishmentConfig::default())
}

/// 計算庫存覆蓋天數與預計缺貨日期
pub fn compute_stock_coverage_with_config(
    item: &ReplenishmentItem,
    today: NaiveDate,
    config: &ReplenishmentConfig,
) -> replenish_core::Result<StockCoverage> {
    item.validate()?;

    let coverage_days = item.stock_coverage_days();

    let stockout_date = if coverage_days >= config.planning_horizon_days as f64 {
        // 無限大也落在此分支
        StockoutDate::Sufficient
    } else {
        StockoutDate::Date(offset_date(today, coverage_days.floor() as i64)?)
    };

    Ok(StockCoverage {
        coverage_days,
        stockout_date,
    })
}

/// 依覆蓋天數分級風險（使用預設門檻）
pub fn classify_risk(coverage_days: f64) -> RiskLevel {
    classify_risk_with_config(coverage_days, &ReplenishmentConfig::default())
}

/// 依覆蓋天數分級風險
pub fn classify_risk_with_config(coverage_days: f64, config: &ReplenishmentConfig) -> RiskLevel {
    if coverage_days < config.critical_threshold_days {
        RiskLevel::Critical
    } else if coverage_days < config.elevated_threshold_days {
        RiskLevel::Elevated
    } else {
        RiskLevel::Normal
    }
}
