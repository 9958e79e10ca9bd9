//! 補貨策略模型

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ReplenishError, Result};

/// 預設策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyPreset {
    /// 保守：60 天目標，安全係數 1.5
    Conservative,
    /// 平衡：45 天目標，安全係數 1.2
    Balanced,
    /// 積極：30 天目標，安全係數 1.0
    Aggressive,
}

impl StrategyPreset {
    /// 所有預設策略
    pub const ALL: [StrategyPreset; 3] = [
        StrategyPreset::Conservative,
        StrategyPreset::Balanced,
        StrategyPreset::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyPreset::Conservative => "conservative",
            StrategyPreset::Balanced => "balanced",
            StrategyPreset::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for StrategyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyPreset {
    type Err = ReplenishError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(StrategyPreset::Conservative),
            "balanced" => Ok(StrategyPreset::Balanced),
            "aggressive" => Ok(StrategyPreset::Aggressive),
            other => Err(ReplenishError::InvalidStrategy(format!(
                "未知的策略: {}，必須是 conservative、balanced 或 aggressive",
                other
            ))),
        }
    }
}

/// 補貨策略（目標天數與安全係數）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentStrategy {
    /// 目標備貨天數
    pub target_days: u32,

    /// 安全係數（>= 1.0）
    pub safety_factor: f64,
}

impl ReplenishmentStrategy {
    pub const fn conservative() -> Self {
        Self {
            target_days: 60,
            safety_factor: 1.5,
        }
    }

    pub const fn balanced() -> Self {
        Self {
            target_days: 45,
            safety_factor: 1.2,
        }
    }

    pub const fn aggressive() -> Self {
        Self {
            target_days: 30,
            safety_factor: 1.0,
        }
    }

    /// 自訂策略，須滿足與預設策略相同的約束
    pub fn custom(target_days: u32, safety_factor: f64) -> Result<Self> {
        let strategy = Self {
            target_days,
            safety_factor,
        };
        strategy.validate()?;
        Ok(strategy)
    }

    /// 檢查 target_days > 0 且 safety_factor >= 1.0
    pub fn validate(&self) -> Result<()> {
        if self.target_days == 0 {
            return Err(ReplenishError::InvalidStrategy(
                "targetDays 必須大於 0".to_string(),
            ));
        }

        if !self.safety_factor.is_finite() || self.safety_factor < 1.0 {
            return Err(ReplenishError::InvalidStrategy(format!(
                "safetyFactor 必須 >= 1.0: {}",
                self.safety_factor
            )));
        }

        Ok(())
    }
}

impl Default for ReplenishmentStrategy {
    fn default() -> Self {
        Self::balanced()
    }
}

impl From<StrategyPreset> for ReplenishmentStrategy {
    fn from(preset: StrategyPreset) -> Self {
        match preset {
            StrategyPreset::Conservative => Self::conservative(),
            StrategyPreset::Balanced => Self::balanced(),
            StrategyPreset::Aggressive => Self::aggressive(),
        }
    }
}
