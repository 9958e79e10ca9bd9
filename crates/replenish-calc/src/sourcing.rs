//! 供應商選擇與訂購量調整

use chrono::NaiveDate;
use replenish_core::{ReplenishError, SupplierOption};
use rust_decimal::Decimal;

use crate::calculator::offset_date;

/// 選擇供應商
///
/// 規則：
/// - 每個選項都必須通過驗證
/// - 推薦供應商超過一個視為資料錯誤
/// - 有推薦供應商時直接採用
/// - 否則取績效最高者；同分比單價，再比交期
pub fn select_supplier<'a>(
    sku: &str,
    options: &'a [SupplierOption],
) -> replenish_core::Result<Option<&'a SupplierOption>> {
    for option in options {
        option.validate()?;
    }

    let recommended: Vec<_> = options.iter().filter(|o| o.is_recommended).collect();
    if recommended.len() > 1 {
        return Err(ReplenishError::MultipleRecommended {
            sku: sku.to_string(),
            count: recommended.len(),
        });
    }

    if let Some(supplier) = recommended.first() {
        return Ok(Some(*supplier));
    }

    let best = options.iter().min_by(|a, b| {
        b.performance_score
            .cmp(&a.performance_score)
            .then_with(|| a.unit_price.cmp(&b.unit_price))
            .then_with(|| a.lead_time_days.cmp(&b.lead_time_days))
    });

    Ok(best)
}

/// 依供應商最小訂購量調整數量；不需訂購時維持 0
pub fn adjust_for_supplier(quantity: u64, supplier: &SupplierOption) -> u64 {
    if quantity == 0 {
        return 0;
    }

    let minimum = supplier.minimum_order_quantity.max(0) as u64;
    quantity.max(minimum)
}

/// 預估採購金額
pub fn estimate_order_cost(quantity: u64, supplier: &SupplierOption) -> Decimal {
    supplier.unit_price * Decimal::from(quantity)
}

/// 預計到貨日期
pub fn expected_arrival(
    today: NaiveDate,
    supplier: &SupplierOption,
) -> replenish_core::Result<NaiveDate> {
    offset_date(today, supplier.lead_time_days as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str, price: i64, lead_time: u32, score: u8) -> SupplierOption {
        SupplierOption::new(name, Decimal::from(price), lead_time).with_performance_score(score)
    }

    #[test]
    fn test_recommended_supplier_wins() {
        let options = vec![
            supplier("高分商", 100, 3, 99),
            supplier("推薦商", 120, 7, 70).as_recommended(),
        ];

        let chosen = select_supplier("HW-1001", &options).unwrap().unwrap();
        assert_eq!(chosen.name, "推薦商");
    }

    #[test]
    fn test_best_score_then_price_then_lead_time() {
        let options = vec![
            supplier("甲", 100, 5, 80),
            supplier("乙", 90, 9, 90),
            supplier("丙", 90, 4, 90),
            supplier("丁", 95, 1, 90),
        ];

        let chosen = select_supplier("HW-1001", &options).unwrap().unwrap();
        assert_eq!(chosen.name, "丙");
    }

    #[test]
    fn test_multiple_recommended_rejected() {
        let options = vec![
            supplier("甲", 100, 5, 80).as_recommended(),
            supplier("乙", 90, 9, 90).as_recommended(),
        ];

        let err = select_supplier("HW-1001", &options).unwrap_err();
        assert!(matches!(
            err,
            ReplenishError::MultipleRecommended { count: 2, .. }
        ));
    }

    #[test]
    fn test_no_suppliers() {
        assert!(select_supplier("HW-1001", &[]).unwrap().is_none());
    }

    #[test]
    fn test_invalid_supplier_rejected() {
        let options = vec![supplier("零元商", 0, 5, 80)];
        assert!(matches!(
            select_supplier("HW-1001", &options),
            Err(ReplenishError::InvalidSupplier { .. })
        ));
    }

    #[test]
    fn test_adjust_for_minimum_order_quantity() {
        let s = supplier("甲", 10, 5, 80).with_minimum_order_quantity(200);

        assert_eq!(adjust_for_supplier(0, &s), 0);
        assert_eq!(adjust_for_supplier(128, &s), 200);
        assert_eq!(adjust_for_supplier(5980, &s), 5980);
    }

    #[test]
    fn test_cost_and_arrival() {
        let s = SupplierOption::new("甲", Decimal::new(1250, 2), 7);

        assert_eq!(estimate_order_cost(128, &s), Decimal::new(160000, 2));
        assert_eq!(
            expected_arrival(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(), &s).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 8).unwrap()
        );
    }

    #[test]
    fn test_arrival_past_max_date_errors() {
        let s = SupplierOption::new("甲", Decimal::ONE, 7);
        assert!(matches!(
            expected_arrival(NaiveDate::MAX, &s),
            Err(ReplenishError::InvalidDate(_))
        ));
    }
}
