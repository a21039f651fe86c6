//! 投影結果儲存

use std::collections::HashMap;
use stockwatch_calc::ProjectionResult;

/// 世代標記的投影結果儲存
///
/// 每次更新週期重算出的結果整批換入，世代號遞增；
/// 不做逐群組的增量修補。持有舊世代號的呼叫端可據此
/// 判斷手上的結果是否已過期。
#[derive(Debug, Default)]
pub struct ProjectionStore {
    results: HashMap<String, ProjectionResult>,
    generation: u64,
}

impl ProjectionStore {
    /// 創建空的儲存（世代 0，尚無任何結果）
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            generation: 0,
        }
    }

    /// 整批換入新一輪投影結果，返回新世代號
    pub fn swap(&mut self, results: HashMap<String, ProjectionResult>) -> u64 {
        self.results = results;
        self.generation += 1;
        self.generation
    }

    /// 當前世代號（0 表示引擎從未跑過）
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 檢查指定世代號是否已過期
    pub fn is_stale(&self, generation: u64) -> bool {
        generation < self.generation
    }

    /// 查找指定群組的投影結果
    pub fn get(&self, group_key: &str) -> Option<&ProjectionResult> {
        self.results.get(group_key)
    }

    /// 所有群組的投影結果（供查詢門面使用）
    pub fn results(&self) -> &HashMap<String, ProjectionResult> {
        &self.results
    }
}
