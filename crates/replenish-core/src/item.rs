//! 補貨物料模型

use serde::{Deserialize, Serialize};

use crate::supplier::SupplierOption;
use crate::{ReplenishError, Result};

/// 單一 SKU 的補貨資料
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentItem {
    /// 物料編號
    pub sku: String,

    /// 物料名稱
    pub name: String,

    /// 現有庫存
    pub current_stock: i64,

    /// 在途數量（未到貨的採購訂單）
    pub incoming_stock: i64,

    /// 已承諾數量（未出貨的銷售訂單）
    pub committed_stock: i64,

    /// 日均銷量
    pub daily_velocity: f64,

    /// 可選供應商
    #[serde(default)]
    pub suppliers: Vec<SupplierOption>,
}

impl ReplenishmentItem {
    /// 創建新的補貨物料
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        current_stock: i64,
        incoming_stock: i64,
        committed_stock: i64,
        daily_velocity: f64,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            current_stock,
            incoming_stock,
            committed_stock,
            daily_velocity,
            suppliers: Vec::new(),
        }
    }

    /// 建構器模式：設置供應商
    pub fn with_suppliers(mut self, suppliers: Vec<SupplierOption>) -> Self {
        self.suppliers = suppliers;
        self
    }

    /// 添加供應商
    pub fn add_supplier(&mut self, supplier: SupplierOption) {
        self.suppliers.push(supplier);
    }

    /// 淨可用量（現有 + 在途 - 已承諾），可能為負
    ///
    /// 以 i128 計算，任意 i64 庫存值都不會溢位
    pub fn net_available(&self) -> i128 {
        self.current_stock as i128 + self.incoming_stock as i128 - self.committed_stock as i128
    }

    /// 可供應天數；日均銷量為 0 時為無限大
    pub fn stock_coverage_days(&self) -> f64 {
        if self.daily_velocity == 0.0 {
            f64::INFINITY
        } else {
            self.current_stock as f64 / self.daily_velocity
        }
    }

    /// 驗證數值欄位皆為非負
    pub fn validate(&self) -> Result<()> {
        let stock_fields = [
            ("currentStock", self.current_stock),
            ("incomingStock", self.incoming_stock),
            ("committedStock", self.committed_stock),
        ];

        for (field, value) in stock_fields {
            if value < 0 {
                return Err(ReplenishError::invalid_input(
                    &self.sku,
                    format!("{} 不可為負數: {}", field, value),
                ));
            }
        }

        if !self.daily_velocity.is_finite() || self.daily_velocity < 0.0 {
            return Err(ReplenishError::invalid_input(
                &self.sku,
                format!("dailyVelocity 必須為非負有限值: {}", self.daily_velocity),
            ));
        }

        Ok(())
    }
}
