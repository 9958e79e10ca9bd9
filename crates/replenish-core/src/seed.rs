//! 種子資料載入

use crate::item::ReplenishmentItem;
use crate::Result;

/// 從 JSON 陣列載入補貨物料，並逐筆驗證
///
/// # 範例
/// ```
/// use replenish_core::load_items_from_json;
///
/// let json = r#"[
///     { "sku": "HW-1001", "name": "十字螺絲起子", "currentStock": 500,
///       "incomingStock": 0, "committedStock": 0, "dailyVelocity": 120.0 }
/// ]"#;
///
/// let items = load_items_from_json(json).unwrap();
/// assert_eq!(items[0].net_available(), 500);
/// ```
pub fn load_items_from_json(json: &str) -> Result<Vec<ReplenishmentItem>> {
    let items: Vec<ReplenishmentItem> = serde_json::from_str(json)?;

    for item in &items {
        item.validate()?;
        for supplier in &item.suppliers {
            supplier.validate()?;
        }
    }

    Ok(items)
}
