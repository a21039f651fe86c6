//! 充足性查詢門面

use std::collections::HashMap;
use stockwatch_core::{DemandItemKey, GroupCatalog};

use crate::projection::ProjectionResult;

/// 資料缺漏時的具名預設裁決
///
/// 集中定義散落在各查找路徑上的預設值，讓測試能逐一鎖定每個策略。
/// 不對稱是刻意的設計：只有庫存確定為零時 fail-closed，
/// 其餘曖昧情況一律 fail-open（寧可漏報短缺，不誤報短缺）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// 圖號未配置任何群組 → 視為充足（fail-open）
    UnknownProduct,
    /// 群組尚無投影結果（引擎未跑過）→ 視為充足（fail-open）
    StaleResult,
    /// 鍵在結果中查無對應（資料已重建的過期查詢）→ 視為充足（fail-open）
    MissingItem,
    /// 起始庫存為零 → 一律不足（fail-closed）
    ZeroStock,
}

impl FallbackPolicy {
    /// 該策略的預設裁決
    pub fn verdict(self) -> bool {
        !matches!(self, Self::ZeroStock)
    }
}

/// 充足性查詢門面
///
/// 給定圖號與需求項鍵，查找所屬群組的投影結果並返回裁決。
pub struct SufficiencyQuery<'a> {
    catalog: &'a GroupCatalog,
    results: &'a HashMap<String, ProjectionResult>,
}

impl<'a> SufficiencyQuery<'a> {
    /// 創建查詢門面
    pub fn new(
        catalog: &'a GroupCatalog,
        results: &'a HashMap<String, ProjectionResult>,
    ) -> Self {
        Self { catalog, results }
    }

    /// 查詢指定需求項是否充足
    pub fn is_sufficient(&self, part_number: &str, key: &DemandItemKey) -> bool {
        let Some(group) = self.catalog.group_for(part_number) else {
            return FallbackPolicy::UnknownProduct.verdict();
        };

        let Some(result) = self.results.get(&group.key) else {
            return FallbackPolicy::StaleResult.verdict();
        };

        if result.all_insufficient {
            return FallbackPolicy::ZeroStock.verdict();
        }

        match result.availability(key) {
            Some(avail) => avail.sufficient,
            None => FallbackPolicy::MissingItem.verdict(),
        }
    }
}
