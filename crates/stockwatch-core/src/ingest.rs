//! 外部記錄匯入
//!
//! 外部系統的訂單／預測／庫存記錄以文字欄位交換
//! （交期 `YYYY/MM/DD`、月度桶 `MM/01`、數量可能是數值或文字）。
//! 此層負責強制轉換：所有解析失敗都映射到既定預設值，絕不拋錯
//! （數量 → 0，日期 → 遠未來哨兵，無效預測 → 捨棄）。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::{far_future, ForecastEntry, GroupCatalog, Order};

/// 訂單原始記錄
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    /// 外部單據編號
    pub id: String,

    /// 圖號
    pub drawing_number: String,

    /// 訂購數量（數值或文字）
    #[serde(default)]
    pub quantity: Value,

    /// 交期文字（`YYYY/MM/DD`）
    #[serde(default)]
    pub delivery_date: String,

    /// 狀態備註
    #[serde(default)]
    pub status: String,
}

impl OrderRecord {
    /// 轉換為內部訂單模型（欄位逐一強制轉換）
    pub fn into_order(self) -> Order {
        Order {
            id: self.id,
            part_number: self.drawing_number,
            quantity: coerce_quantity(&self.quantity),
            delivery_date: parse_delivery_date(&self.delivery_date),
            status: self.status,
        }
    }
}

/// 預測原始記錄
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastRecord {
    /// 圖號
    pub drawing_number: String,

    /// 月度桶文字（`MM/01` 或類似的 `MM/DD`）
    #[serde(default)]
    pub month_date: String,

    /// 預測數量（數值或文字）
    #[serde(default)]
    pub quantity: Value,
}

impl ForecastRecord {
    /// 轉換為內部預測模型
    ///
    /// 月份無法解析、或強制轉換後的數量不是正數時，整筆捨棄
    /// （零與負值預測不構成需求）。
    pub fn into_forecast(self) -> Option<ForecastEntry> {
        let month = parse_month(&self.month_date)?;
        let quantity = coerce_quantity(&self.quantity);
        if quantity <= Decimal::ZERO {
            return None;
        }

        Some(ForecastEntry::new(self.drawing_number, month, quantity))
    }
}

/// 庫存原始記錄
#[derive(Debug, Clone, Deserialize)]
pub struct StockRecord {
    /// 群組鍵
    pub group_key: String,

    /// 群組顯示名稱
    #[serde(default)]
    pub group_name: String,

    /// 現有庫存數量（數值或文字）
    #[serde(default)]
    pub quantity: Value,
}

impl StockRecord {
    /// 套用庫存數量到群組目錄
    ///
    /// 群組鍵未配置時返回 false（不是錯誤，見目錄的 `set_stock`）。
    pub fn apply_to(&self, catalog: &mut GroupCatalog) -> bool {
        catalog.set_stock(&self.group_key, coerce_quantity(&self.quantity))
    }
}

/// 將數值或文字欄位強制轉換為 Decimal；無法解析 → 0
pub fn coerce_quantity(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Value::String(s) => s.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// 解析交期文字（`YYYY/MM/DD`）；失敗 → 遠未來哨兵
pub fn parse_delivery_date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text.trim(), "%Y/%m/%d").unwrap_or_else(|_| far_future())
}

/// 解析月度桶文字（`MM/01` 等），取斜線前的月份（1-12）
pub fn parse_month(text: &str) -> Option<u32> {
    text.trim()
        .split('/')
        .next()?
        .parse()
        .ok()
        .filter(|m| (1..=12).contains(m))
}

/// 以外部單據編號去重（保留首見記錄）
pub fn dedup_orders(records: Vec<OrderRecord>) -> Vec<OrderRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_order_record_conversion() {
        let record: OrderRecord = serde_json::from_value(json!({
            "id": "EDI-0001",
            "drawing_number": "PN-100",
            "quantity": "40",
            "delivery_date": "2025/03/15",
            "status": "pending"
        }))
        .unwrap();

        let order = record.into_order();
        assert_eq!(order.part_number, "PN-100");
        assert_eq!(order.quantity, Decimal::from(40));
        assert_eq!(
            order.delivery_date,
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_malformed_fields_coerce_to_defaults() {
        let record: OrderRecord = serde_json::from_value(json!({
            "id": "EDI-0002",
            "drawing_number": "PN-100",
            "quantity": "abc",
            "delivery_date": "not-a-date"
        }))
        .unwrap();

        let order = record.into_order();
        // 數量 → 0、日期 → 哨兵，絕不拋錯
        assert_eq!(order.quantity, Decimal::ZERO);
        assert_eq!(order.delivery_date, far_future());
    }

    #[rstest]
    #[case(json!(25), Decimal::from(25))]
    #[case(json!("25"), Decimal::from(25))]
    #[case(json!(" 12.5 "), Decimal::new(125, 1))]
    #[case(json!("abc"), Decimal::ZERO)]
    #[case(json!(null), Decimal::ZERO)]
    fn test_coerce_quantity(#[case] value: Value, #[case] expected: Decimal) {
        assert_eq!(coerce_quantity(&value), expected);
    }

    #[rstest]
    #[case("04/01", Some(4))]
    #[case("12/01", Some(12))]
    #[case(" 07/15 ", Some(7))]
    #[case("13/01", None)]
    #[case("00/01", None)]
    #[case("garbage", None)]
    fn test_parse_month(#[case] text: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_month(text), expected);
    }

    #[test]
    fn test_forecast_zero_and_negative_dropped() {
        let zero = ForecastRecord {
            drawing_number: "PN-100".to_string(),
            month_date: "04/01".to_string(),
            quantity: json!(0),
        };
        let negative = ForecastRecord {
            drawing_number: "PN-100".to_string(),
            month_date: "04/01".to_string(),
            quantity: json!("-5"),
        };
        let valid = ForecastRecord {
            drawing_number: "PN-100".to_string(),
            month_date: "04/01".to_string(),
            quantity: json!("30"),
        };

        assert!(zero.into_forecast().is_none());
        assert!(negative.into_forecast().is_none());

        let forecast = valid.into_forecast().unwrap();
        assert_eq!(forecast.month, 4);
        assert_eq!(forecast.quantity, Decimal::from(30));
    }

    #[test]
    fn test_dedup_orders_keeps_first() {
        let records = vec![
            OrderRecord {
                id: "EDI-1".to_string(),
                drawing_number: "PN-100".to_string(),
                quantity: json!(10),
                delivery_date: "2025/01/10".to_string(),
                status: String::new(),
            },
            OrderRecord {
                id: "EDI-1".to_string(),
                drawing_number: "PN-100".to_string(),
                quantity: json!(99),
                delivery_date: "2025/01/11".to_string(),
                status: String::new(),
            },
            OrderRecord {
                id: "EDI-2".to_string(),
                drawing_number: "PN-101".to_string(),
                quantity: json!(20),
                delivery_date: "2025/01/12".to_string(),
                status: String::new(),
            },
        ];

        let deduped = dedup_orders(records);
        assert_eq!(deduped.len(), 2);
        assert_eq!(coerce_quantity(&deduped[0].quantity), Decimal::from(10));
    }
}
