//! 月度預測模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 月度預測
///
/// 以（圖號, 月份）為鍵；由外部建立與更新，對投影核心唯讀。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// 圖號
    pub part_number: String,

    /// 月份（1-12）
    pub month: u32,

    /// 預測數量
    pub quantity: Decimal,
}

impl ForecastEntry {
    /// 創建新的預測
    pub fn new(part_number: String, month: u32, quantity: Decimal) -> Self {
        Self {
            part_number,
            month,
            quantity,
        }
    }

    /// 預測的月初日期（指定年份的該月 1 日）
    ///
    /// 需求建構時傳入「當前」年度；上游系統不論預測本身的年份欄位，
    /// 一律以當前年度合成日期（跨年滾動策略未定，保留上游慣例）。
    /// 月份超出 1-12 時退化為遠未來哨兵值。
    pub fn bucket_date(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, 1).unwrap_or_else(crate::far_future)
    }

    /// 月度桶的文字鍵（`MM/01`，沿用外部資料的格式慣例）
    pub fn month_key(&self) -> String {
        format!("{:02}/01", self.month)
    }
}
