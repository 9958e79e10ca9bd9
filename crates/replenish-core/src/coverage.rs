//! 庫存覆蓋與風險等級

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 預計缺貨日期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockoutDate {
    /// 預計在此日期缺貨
    Date(NaiveDate),
    /// 計劃時界內庫存充足
    Sufficient,
}

impl StockoutDate {
    pub fn is_sufficient(&self) -> bool {
        matches!(self, StockoutDate::Sufficient)
    }

    /// 取得缺貨日期（充足時為 None）
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            StockoutDate::Date(date) => Some(*date),
            StockoutDate::Sufficient => None,
        }
    }
}

impl fmt::Display for StockoutDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockoutDate::Date(date) => write!(f, "{}", date),
            StockoutDate::Sufficient => f.write_str("sufficient"),
        }
    }
}

/// 庫存覆蓋結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCoverage {
    /// 可供應天數（日均銷量為 0 時為無限大）
    pub coverage_days: f64,

    /// 預計缺貨日期
    pub stockout_date: StockoutDate,
}

/// 風險等級（由高至低排序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// 緊急：覆蓋天數 < 7
    Critical,
    /// 偏高：7 <= 覆蓋天數 < 15
    Elevated,
    /// 正常：覆蓋天數 >= 15
    Normal,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::Elevated => "elevated",
            RiskLevel::Normal => "normal",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stockout_date_accessors() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(StockoutDate::Date(date).date(), Some(date));
        assert!(StockoutDate::Sufficient.is_sufficient());
        assert_eq!(StockoutDate::Sufficient.to_string(), "sufficient");
    }

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::Critical < RiskLevel::Elevated);
        assert!(RiskLevel::Elevated < RiskLevel::Normal);
    }
}
