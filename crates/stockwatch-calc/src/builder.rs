//! 需求項建構

use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use stockwatch_core::{DemandItem, ForecastEntry, MaterialGroup, Order};

/// 需求項建構器
///
/// 將群組成員圖號的訂單與預測彙整為需求項列表。
/// 輸出不排序；排序屬於投影引擎的責任。
pub struct DemandBuilder;

impl DemandBuilder {
    /// 以當前年度為預測年份建構需求項
    pub fn build(
        group: &MaterialGroup,
        orders: &[Order],
        forecasts: &[ForecastEntry],
    ) -> Vec<DemandItem> {
        Self::build_for_year(group, orders, forecasts, Local::now().year())
    }

    /// 以指定年度建構需求項
    ///
    /// # 參數
    /// * `year` - 預測月初日期的合成年度（上游慣例：一律用當前年度；
    ///   測試時固定傳入以保持可重現）
    pub fn build_for_year(
        group: &MaterialGroup,
        orders: &[Order],
        forecasts: &[ForecastEntry],
        year: i32,
    ) -> Vec<DemandItem> {
        let mut items = Vec::new();

        for order in orders {
            if !group.is_member(&order.part_number) {
                continue;
            }
            // "ok" 訂單代表已實現的消耗，不再佔用庫存
            if order.is_fulfilled() {
                continue;
            }
            items.push(DemandItem::from_order(order));
        }

        for forecast in forecasts {
            if !group.is_member(&forecast.part_number) {
                continue;
            }
            // 零或負數量的預測不構成需求，直接捨棄
            if forecast.quantity <= Decimal::ZERO {
                continue;
            }
            items.push(DemandItem::from_forecast(forecast, year));
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockwatch_core::{DemandItemKey, DemandKind};

    fn sample_group() -> MaterialGroup {
        MaterialGroup::new(
            "G-ALU".to_string(),
            "鋁材池".to_string(),
            vec!["PN-100".to_string(), "PN-101".to_string()],
        )
        .with_stock(Decimal::from(100))
    }

    fn order(id: &str, part: &str, qty: i64, date: (i32, u32, u32), status: &str) -> Order {
        Order::new(
            id.to_string(),
            part.to_string(),
            Decimal::from(qty),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
        .with_status(status.to_string())
    }

    #[test]
    fn test_fulfilled_orders_excluded() {
        let group = sample_group();
        let orders = vec![
            order("EDI-1", "PN-100", 10, (2025, 1, 10), "OK"),
            order("EDI-2", "PN-100", 20, (2025, 1, 11), " ok "),
            order("EDI-3", "PN-100", 30, (2025, 1, 12), ""),
            order("EDI-4", "PN-100", 40, (2025, 1, 13), "pending"),
            order("EDI-5", "PN-100", 50, (2025, 1, 14), "ok2"),
        ];

        let items = DemandBuilder::build_for_year(&group, &orders, &[], 2025);

        let ids: Vec<String> = items.iter().map(|i| i.key.to_string()).collect();
        assert_eq!(ids, vec!["order-EDI-3", "order-EDI-4", "order-EDI-5"]);
    }

    #[test]
    fn test_non_member_orders_excluded() {
        let group = sample_group();
        let orders = vec![
            order("EDI-1", "PN-100", 10, (2025, 1, 10), ""),
            order("EDI-2", "PN-999", 20, (2025, 1, 11), ""),
        ];

        let items = DemandBuilder::build_for_year(&group, &orders, &[], 2025);
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].key,
            DemandItemKey::Order {
                order_id: "EDI-1".to_string()
            }
        );
    }

    #[test]
    fn test_forecast_items_use_given_year() {
        let group = sample_group();
        let forecasts = vec![
            ForecastEntry::new("PN-101".to_string(), 4, Decimal::from(80)),
            ForecastEntry::new("PN-101".to_string(), 5, Decimal::ZERO),
            ForecastEntry::new("PN-101".to_string(), 6, Decimal::from(-3)),
            ForecastEntry::new("PN-999".to_string(), 7, Decimal::from(10)),
        ];

        let items = DemandBuilder::build_for_year(&group, &[], &forecasts, 2026);

        // 零、負數量與非成員預測皆被捨棄
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, DemandKind::Forecast);
        assert_eq!(items[0].date, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
    }

    #[test]
    fn test_output_preserves_source_order() {
        // 輸出不排序：訂單在前（來源順序），預測在後
        let group = sample_group();
        let orders = vec![
            order("EDI-2", "PN-100", 10, (2025, 3, 1), ""),
            order("EDI-1", "PN-100", 10, (2025, 1, 1), ""),
        ];
        let forecasts = vec![ForecastEntry::new("PN-101".to_string(), 2, Decimal::from(5))];

        let items = DemandBuilder::build_for_year(&group, &orders, &forecasts, 2025);

        let keys: Vec<String> = items.iter().map(|i| i.key.to_string()).collect();
        assert_eq!(
            keys,
            vec!["order-EDI-2", "order-EDI-1", "forecast-PN-101-02/01"]
        );
    }
}
