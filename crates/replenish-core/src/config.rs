//! 補貨計算配置

use serde::{Deserialize, Serialize};

use crate::{ReplenishError, Result};

/// 補貨計算參數
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplenishmentConfig {
    /// 計劃時界（天），覆蓋天數達此值即視為庫存充足
    pub planning_horizon_days: u32,

    /// 緊急風險門檻（天）
    pub critical_threshold_days: f64,

    /// 偏高風險門檻（天）
    pub elevated_threshold_days: f64,

    /// 庫存消耗推演天數
    pub projection_days: u32,
}

impl ReplenishmentConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            planning_horizon_days: 30,
            critical_threshold_days: 7.0,
            elevated_threshold_days: 15.0,
            projection_days: 30,
        }
    }

    /// 建構器模式：設置計劃時界
    pub fn with_planning_horizon(mut self, days: u32) -> Self {
        self.planning_horizon_days = days;
        self
    }

    /// 建構器模式：設置風險門檻
    pub fn with_risk_thresholds(mut self, critical_days: f64, elevated_days: f64) -> Self {
        self.critical_threshold_days = critical_days;
        self.elevated_threshold_days = elevated_days;
        self
    }

    /// 建構器模式：設置推演天數
    pub fn with_projection_days(mut self, days: u32) -> Self {
        self.projection_days = days;
        self
    }

    /// 驗證配置
    ///
    /// 需滿足 `planning_horizon_days > 0` 以及 `0 < critical <= elevated`
    pub fn validate(&self) -> Result<()> {
        if self.planning_horizon_days == 0 {
            return Err(ReplenishError::InvalidConfig(
                "計劃時界必須大於 0".to_string(),
            ));
        }

        let critical = self.critical_threshold_days;
        let elevated = self.elevated_threshold_days;
        if !(critical.is_finite() && elevated.is_finite() && critical > 0.0 && critical <= elevated)
        {
            return Err(ReplenishError::InvalidConfig(format!(
                "風險門檻必須滿足 0 < 緊急 <= 偏高: 緊急 {}, 偏高 {}",
                critical, elevated
            )));
        }

        Ok(())
    }
}

impl Default for ReplenishmentConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReplenishmentConfig::default();

        assert_eq!(config.planning_horizon_days, 30);
        assert_eq!(config.critical_threshold_days, 7.0);
        assert_eq!(config.elevated_threshold_days, 15.0);
        assert_eq!(config.projection_days, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ReplenishmentConfig::new()
            .with_planning_horizon(45)
            .with_risk_thresholds(5.0, 10.0)
            .with_projection_days(60);

        assert_eq!(config.planning_horizon_days, 45);
        assert_eq!(config.critical_threshold_days, 5.0);
        assert_eq!(config.elevated_threshold_days, 10.0);
        assert_eq!(config.projection_days, 60);
    }

    #[test]
    fn test_invalid_config() {
        assert!(ReplenishmentConfig::new().with_planning_horizon(0).validate().is_err());
        assert!(ReplenishmentConfig::new().with_risk_thresholds(15.0, 7.0).validate().is_err());
        assert!(ReplenishmentConfig::new().with_risk_thresholds(0.0, 7.0).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ReplenishmentConfig =
            serde_json::from_str(r#"{ "planningHorizonDays": 14 }"#).unwrap();

        assert_eq!(config.planning_horizon_days, 14);
        assert_eq!(config.critical_threshold_days, 7.0);
    }
}
