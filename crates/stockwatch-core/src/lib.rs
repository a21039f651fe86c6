//! # Stockwatch Core
//!
//! 核心資料模型與類型定義

pub mod demand;
pub mod forecast;
pub mod group;
pub mod ingest;
pub mod order;

// Re-export 主要類型
pub use demand::{DemandItem, DemandItemKey, DemandKind};
pub use forecast::ForecastEntry;
pub use group::{GroupCatalog, MaterialGroup};
pub use ingest::{ForecastRecord, OrderRecord, StockRecord};
pub use order::Order;

use chrono::NaiveDate;

/// 日期解析失敗時使用的「遠未來」哨兵值
///
/// 帶此日期的需求項在排序時固定落在最後，不會被誤判為最早的需求。
pub fn far_future() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// 庫存追蹤錯誤類型
///
/// 投影核心本身不產生錯誤（所有異常輸入都映射到既定預設值）；
/// 錯誤僅出現在群組配置驗證這類真正的配置問題上。
#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("圖號 {part_number} 同時屬於群組 {first} 與 {second}")]
    DuplicateMember {
        part_number: String,
        first: String,
        second: String,
    },

    #[error("群組 {0} 沒有任何成員圖號")]
    EmptyGroup(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
