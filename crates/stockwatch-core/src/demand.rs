//! 需求項模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ForecastEntry, Order};

/// 需求類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandKind {
    /// 確認訂單
    Order,
    /// 月度預測
    Forecast,
}

/// 需求項識別鍵
///
/// 結構化的標籤聯合，取代上游的字串鍵（`order-<id>` /
/// `forecast-<part>-<MM/01>`），以結構相等避免字串格式漂移；
/// `Display` 仍輸出舊字串形式供匯出層互通。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandItemKey {
    /// 訂單需求（以外部單據編號識別）
    Order { order_id: String },
    /// 預測需求（以圖號 + 月份識別）
    Forecast { part_number: String, month: u32 },
}

impl fmt::Display for DemandItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order { order_id } => write!(f, "order-{order_id}"),
            Self::Forecast { part_number, month } => {
                write!(f, "forecast-{part_number}-{month:02}/01")
            }
        }
    }
}

/// 需求項（投影引擎的工作單位）
///
/// 由訂單或預測推導而來；`priority` 僅供呈現層堆疊排序使用，
/// 投影引擎不參考。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandItem {
    /// 需求類型
    pub kind: DemandKind,

    /// 排序日期（訂單交期或預測月初）
    pub date: NaiveDate,

    /// 需求數量
    pub quantity: Decimal,

    /// 識別鍵
    pub key: DemandItemKey,

    /// 呈現層優先級
    pub priority: u8,
}

impl DemandItem {
    /// 由訂單創建需求項
    pub fn from_order(order: &Order) -> Self {
        Self {
            kind: DemandKind::Order,
            date: order.delivery_date,
            quantity: order.quantity,
            key: DemandItemKey::Order {
                order_id: order.id.clone(),
            },
            priority: 5,
        }
    }

    /// 由預測創建需求項（月初日期以指定年度合成）
    pub fn from_forecast(forecast: &ForecastEntry, year: i32) -> Self {
        Self {
            kind: DemandKind::Forecast,
            date: forecast.bucket_date(year),
            quantity: forecast.quantity,
            key: DemandItemKey::Forecast {
                part_number: forecast.part_number.clone(),
                month: forecast.month,
            },
            priority: 1,
        }
    }
}
