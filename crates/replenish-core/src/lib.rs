//! # Replenish Core
//!
//! 補貨建議引擎的核心資料模型與類型定義

pub mod config;
pub mod coverage;
pub mod item;
pub mod seed;
pub mod strategy;
pub mod supplier;

// Re-export 主要類型
pub use config::ReplenishmentConfig;
pub use coverage::{RiskLevel, StockCoverage, StockoutDate};
pub use item::ReplenishmentItem;
pub use seed::load_items_from_json;
pub use strategy::{ReplenishmentStrategy, StrategyPreset};
pub use supplier::SupplierOption;

/// 補貨計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReplenishError {
    #[error("無效的輸入（{sku}）: {reason}")]
    InvalidInput { sku: String, reason: String },

    #[error("無效的補貨策略: {0}")]
    InvalidStrategy(String),

    #[error("無效的供應商資料（{supplier}）: {reason}")]
    InvalidSupplier { supplier: String, reason: String },

    #[error("物料 {sku} 有 {count} 個推薦供應商，最多只能有一個")]
    MultipleRecommended { sku: String, count: usize },

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("資料解析錯誤: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl ReplenishError {
    /// 建立輸入驗證錯誤
    pub fn invalid_input(sku: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            sku: sku.into(),
            reason: reason.into(),
        }
    }

    /// 是否為輸入驗證錯誤
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReplenishError>;
