//! 材料群組模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Result, StockError};

/// 材料群組
///
/// 一個群組對應一個實體原料庫存池，由 1 到多個相關圖號共用；
/// 成員表屬於部署配置，不是推導資料。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialGroup {
    /// 群組鍵
    pub key: String,

    /// 顯示名稱
    pub display_name: String,

    /// 成員圖號（至少 1 個）
    pub members: Vec<String>,

    /// 現有庫存（未知時為 0）
    pub current_stock: Decimal,
}

impl MaterialGroup {
    /// 創建新的群組（庫存預設 0，待庫存記錄套用後更新）
    pub fn new(key: String, display_name: String, members: Vec<String>) -> Self {
        Self {
            key,
            display_name,
            members,
            current_stock: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置現有庫存
    pub fn with_stock(mut self, quantity: Decimal) -> Self {
        self.current_stock = quantity;
        self
    }

    /// 檢查圖號是否為本群組成員
    pub fn is_member(&self, part_number: &str) -> bool {
        self.members.iter().any(|m| m == part_number)
    }
}

/// 群組目錄（圖號 → 群組的靜態對應表）
///
/// 不變量：每個圖號至多屬於一個群組。不在任何群組中的圖號
/// 由查詢門面視為「恆充足」（fail-open），目錄本身不記錄它們。
#[derive(Debug, Clone)]
pub struct GroupCatalog {
    groups: Vec<MaterialGroup>,
    member_index: HashMap<String, usize>,
}

impl GroupCatalog {
    /// 創建並驗證群組目錄
    ///
    /// 驗證每個群組至少有一個成員、且沒有圖號同時屬於兩個群組。
    pub fn new(groups: Vec<MaterialGroup>) -> Result<Self> {
        let mut member_index: HashMap<String, usize> = HashMap::new();

        for (idx, group) in groups.iter().enumerate() {
            if group.members.is_empty() {
                return Err(StockError::EmptyGroup(group.key.clone()));
            }

            for part_number in &group.members {
                if let Some(&first_idx) = member_index.get(part_number) {
                    return Err(StockError::DuplicateMember {
                        part_number: part_number.clone(),
                        first: groups[first_idx].key.clone(),
                        second: group.key.clone(),
                    });
                }
                member_index.insert(part_number.clone(), idx);
            }
        }

        Ok(Self {
            groups,
            member_index,
        })
    }

    /// 查找圖號所屬的群組
    pub fn group_for(&self, part_number: &str) -> Option<&MaterialGroup> {
        self.member_index
            .get(part_number)
            .and_then(|&idx| self.groups.get(idx))
    }

    /// 依鍵查找群組
    pub fn group_by_key(&self, key: &str) -> Option<&MaterialGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// 所有群組（保持配置順序）
    pub fn groups(&self) -> &[MaterialGroup] {
        &self.groups
    }

    /// 套用庫存數量到指定群組
    ///
    /// 群組鍵不存在時返回 false（缺少庫存配置不是錯誤；
    /// 該群組維持庫存 0，投影時自然走最保守的全數不足路徑）。
    pub fn set_stock(&mut self, key: &str, quantity: Decimal) -> bool {
        match self.groups.iter_mut().find(|g| g.key == key) {
            Some(group) => {
                group.current_stock = quantity;
                true
            }
            None => false,
        }
    }
}
