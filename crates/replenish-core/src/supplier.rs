//! 供應商選項模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReplenishError, Result};

/// 供應商報價選項
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOption {
    /// 供應商名稱
    pub name: String,

    /// 單價
    pub unit_price: Decimal,

    /// 最小訂購量
    pub minimum_order_quantity: i64,

    /// 交期（天）
    pub lead_time_days: u32,

    /// 績效分數（0-100）
    pub performance_score: u8,

    /// 是否為推薦供應商
    #[serde(default)]
    pub is_recommended: bool,
}

impl SupplierOption {
    /// 創建新的供應商選項
    pub fn new(name: impl Into<String>, unit_price: Decimal, lead_time_days: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            minimum_order_quantity: 0,
            lead_time_days,
            performance_score: 0,
            is_recommended: false,
        }
    }

    /// 建構器模式：設置最小訂購量
    pub fn with_minimum_order_quantity(mut self, quantity: i64) -> Self {
        self.minimum_order_quantity = quantity;
        self
    }

    /// 建構器模式：設置績效分數
    pub fn with_performance_score(mut self, score: u8) -> Self {
        self.performance_score = score;
        self
    }

    /// 建構器模式：設為推薦供應商
    pub fn as_recommended(mut self) -> Self {
        self.is_recommended = true;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.unit_price <= Decimal::ZERO {
            return Err(self.invalid(format!("單價必須大於 0: {}", self.unit_price)));
        }

        if self.minimum_order_quantity < 0 {
            return Err(self.invalid(format!(
                "最小訂購量不可為負數: {}",
                self.minimum_order_quantity
            )));
        }

        if self.performance_score > 100 {
            return Err(self.invalid(format!(
                "績效分數必須在 0-100 之間: {}",
                self.performance_score
            )));
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> ReplenishError {
        ReplenishError::InvalidSupplier {
            supplier: self.name.clone(),
            reason,
        }
    }
}
