//! 訂單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// EDI 訂單
///
/// 匯入後除狀態備註外不可變；本子系統不會刪除訂單。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID（外部 EDI 單據編號，匯入時以此去重）
    pub id: String,

    /// 圖號
    pub part_number: String,

    /// 訂購數量
    pub quantity: Decimal,

    /// 交期（僅日期，無時間成分）
    pub delivery_date: NaiveDate,

    /// 狀態備註（自由文字：空白 | "ok" | 其他註記）
    pub status: String,
}

impl Order {
    /// 創建新的訂單
    pub fn new(
        id: String,
        part_number: String,
        quantity: Decimal,
        delivery_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            part_number,
            quantity,
            delivery_date,
            status: String::new(),
        }
    }

    /// 建構器模式：設置狀態備註
    pub fn with_status(mut self, status: String) -> Self {
        self.status = status;
        self
    }

    /// 檢查訂單是否已完結
    ///
    /// 狀態正規化（去除前後空白、不分大小寫）後等於 "ok" 即視為已完結；
    /// 已完結的訂單代表已實現的消耗，不再佔用投影中的庫存。
    pub fn is_fulfilled(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("ok")
    }
}
