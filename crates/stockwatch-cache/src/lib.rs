//! # Stockwatch Cache
//!
//! 世代標記的投影結果儲存與更新週期防護

pub mod refresh_guard;
pub mod store;

// Re-export 主要類型
pub use refresh_guard::RefreshGuard;
pub use store::ProjectionStore;
