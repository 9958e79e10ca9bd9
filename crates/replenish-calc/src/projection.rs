//! 庫存消耗推演

use chrono::NaiveDate;
use replenish_core::ReplenishmentItem;
use serde::{Deserialize, Serialize};

use crate::calculator::offset_date;

/// 推演時間點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// 距今天數
    pub day: u32,

    /// 日期
    pub date: NaiveDate,

    /// 預計庫存（不低於 0）
    pub projected_stock: f64,
}

/// 依日均銷量推演現有庫存的消耗曲線，共 `days + 1` 個點
pub fn project_depletion(
    item: &ReplenishmentItem,
    today: NaiveDate,
    days: u32,
) -> replenish_core::Result<Vec<ProjectionPoint>> {
    item.validate()?;

    build_timeline(today, days, |day| {
        item.current_stock as f64 - item.daily_velocity * day as f64
    })
}

/// 推演含到貨的消耗曲線
///
/// 在途數量與本次建議量於 `today + lead_time_days` 當天入庫
pub fn project_with_receipt(
    item: &ReplenishmentItem,
    today: NaiveDate,
    days: u32,
    quantity: u64,
    lead_time_days: u32,
) -> replenish_core::Result<Vec<ProjectionPoint>> {
    item.validate()?;

    let receipt = (item.incoming_stock as f64) + quantity as f64;

    // 缺貨期間的需求視為流失，到貨後不扣回
    let mut level = item.current_stock as f64;
    let mut levels = Vec::with_capacity(days as usize + 1);
    for day in 0..=days {
        if day > 0 {
            level = (level - item.daily_velocity).max(0.0);
        }
        if day == lead_time_days {
            level += receipt;
        }
        levels.push(level);
    }

    build_timeline(today, days, |day| levels[day as usize])
}

fn build_timeline(
    today: NaiveDate,
    days: u32,
    stock_at: impl Fn(u32) -> f64,
) -> replenish_core::Result<Vec<ProjectionPoint>> {
    (0..=days)
        .map(|day| -> replenish_core::Result<ProjectionPoint> {
            Ok(ProjectionPoint {
                day,
                date: offset_date(today, day as i64)?,
                projected_stock: stock_at(day).max(0.0),
            })
        })
        .collect()
}
