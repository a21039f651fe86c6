//! # Stockwatch
//!
//! 庫存充足性投影引擎：將 EDI 訂單與月度預測對上共用原料庫存池，
//! 以日期順序模擬庫存遞減，逐項裁決「屆時庫存是否足以覆蓋」。

pub use stockwatch_cache::{ProjectionStore, RefreshGuard};
pub use stockwatch_calc::{
    DemandBuilder, FallbackPolicy, ItemAvailability, ProjectionCalculator, ProjectionResult,
    SufficiencyQuery,
};
pub use stockwatch_core::{
    far_future, DemandItem, DemandItemKey, DemandKind, ForecastEntry, ForecastRecord,
    GroupCatalog, MaterialGroup, Order, OrderRecord, StockError, StockRecord,
};
