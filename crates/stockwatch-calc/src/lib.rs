//! # Stockwatch Calculation Engine
//!
//! 庫存充足性投影引擎：需求建構、逐項遞減模擬、查詢門面

pub mod builder;
pub mod projection;
pub mod query;

// Re-export 主要類型
pub use builder::DemandBuilder;
pub use projection::{ItemAvailability, ProjectionCalculator, ProjectionResult};
pub use query::{FallbackPolicy, SufficiencyQuery};
