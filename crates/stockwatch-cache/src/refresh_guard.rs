//! 更新週期防護

/// 更新週期的進行中旗標
///
/// 一次更新週期涵蓋「取得訂單／預測／庫存快照 → 投影 → 換入結果」，
/// 必須整段完成後才能開始下一輪；對部分更新的狀態執行投影
/// （例如舊庫存配新訂單）是正確性風險。
///
/// 契約：`begin()` 成功後呼叫端負責在週期結束（含失敗路徑）時呼叫
/// `finish()`；`begin()` 與 `finish()` 之間若 panic 未被處理，
/// 旗標會維持進行中，後續更新將一直被擋下。
#[derive(Debug, Default)]
pub struct RefreshGuard {
    in_flight: bool,
}

impl RefreshGuard {
    /// 創建新的防護
    pub fn new() -> Self {
        Self { in_flight: false }
    }

    /// 嘗試開始一輪更新；已有更新進行中時返回 false
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// 結束當前更新
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// 檢查是否有更新進行中
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
