//! 庫存充足性投影

use chrono::{Datelike, Local};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use stockwatch_core::{DemandItemKey, ForecastEntry, GroupCatalog, MaterialGroup, Order};

use crate::builder::DemandBuilder;

/// 單一需求項的充足性裁決
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAvailability {
    /// 消耗前庫存
    pub before_stock: Decimal,

    /// 消耗後庫存（顯示值，下限為 0）
    pub after_stock: Decimal,

    /// 是否充足（消耗前庫存 >= 需求數量；逐項二值判定，不分比例）
    pub sufficient: bool,

    /// 短缺量（充足時為 0）
    pub shortfall: Decimal,
}

/// 群組投影結果
///
/// 每次資料更新都從最新快照整組重算、整個替換；
/// 不做增量修補（群組規模下重算成本可忽略）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionResult {
    /// 投影起始庫存
    pub current_stock: Decimal,

    /// 各需求項的裁決（依消耗順序）
    pub item_availability: Vec<(DemandItemKey, ItemAvailability)>,

    /// 模擬結束後的剩餘庫存（下限為 0）
    pub final_stock: Decimal,

    /// 起始庫存為零或負時為 true：全數需求項一律不足
    pub all_insufficient: bool,
}

impl ProjectionResult {
    /// 創建「全數不足」結果（起始庫存 <= 0 時的短路路徑）
    pub fn zero_stock() -> Self {
        Self {
            current_stock: Decimal::ZERO,
            item_availability: Vec::new(),
            final_stock: Decimal::ZERO,
            all_insufficient: true,
        }
    }

    /// 查找指定需求項的裁決
    pub fn availability(&self, key: &DemandItemKey) -> Option<&ItemAvailability> {
        self.item_availability
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, avail)| avail)
    }
}

/// 投影計算器
///
/// 純函數：同樣的（庫存、訂單、預測）輸入永遠產生同樣的結果，
/// 不攜帶呼叫間的隱藏狀態。
pub struct ProjectionCalculator;

impl ProjectionCalculator {
    /// 對單一群組執行投影（預測年份取當前年度）
    pub fn project(
        group: &MaterialGroup,
        orders: &[Order],
        forecasts: &[ForecastEntry],
    ) -> ProjectionResult {
        Self::project_for_year(group, orders, forecasts, Local::now().year())
    }

    /// 對單一群組執行投影（指定預測年份）
    ///
    /// 消耗以「每個庫存池一條時間佇列」模擬，不分圖號：
    /// 共用同一原料批的多個圖號中，日期較早的需求先消耗庫存，
    /// 之後才評估其他圖號較晚的需求。排序鍵只有交期；
    /// 同日需求維持來源順序（穩定排序，無次要排序鍵）。
    pub fn project_for_year(
        group: &MaterialGroup,
        orders: &[Order],
        forecasts: &[ForecastEntry],
        year: i32,
    ) -> ProjectionResult {
        if group.current_stock <= Decimal::ZERO {
            tracing::debug!(group = %group.key, "起始庫存為零，全數需求視為不足");
            return ProjectionResult::zero_stock();
        }

        let mut items = DemandBuilder::build_for_year(group, orders, forecasts, year);
        items.sort_by_key(|item| item.date);

        let mut running_stock = group.current_stock;
        let mut item_availability = Vec::with_capacity(items.len());

        for item in items {
            let before_stock = running_stock;
            running_stock -= item.quantity;

            let sufficient = before_stock >= item.quantity;
            let shortfall = if sufficient {
                Decimal::ZERO
            } else {
                item.quantity - before_stock
            };

            // 內部累計值可為負（後續需求仍須據此判定），
            // 顯示用的消耗後庫存下限為 0
            item_availability.push((
                item.key,
                ItemAvailability {
                    before_stock,
                    after_stock: running_stock.max(Decimal::ZERO),
                    sufficient,
                    shortfall,
                },
            ));
        }

        ProjectionResult {
            current_stock: group.current_stock,
            item_availability,
            final_stock: running_stock.max(Decimal::ZERO),
            all_insufficient: false,
        }
    }

    /// 對目錄中所有群組執行投影（一次更新週期的入口）
    ///
    /// 訂單、預測、庫存三項輸入須同屬一個快照；
    /// 呼叫端以整個返回值替換舊結果。
    pub fn project_all(
        catalog: &GroupCatalog,
        orders: &[Order],
        forecasts: &[ForecastEntry],
    ) -> HashMap<String, ProjectionResult> {
        Self::project_all_for_year(catalog, orders, forecasts, Local::now().year())
    }

    /// 對目錄中所有群組執行投影（指定預測年份）
    pub fn project_all_for_year(
        catalog: &GroupCatalog,
        orders: &[Order],
        forecasts: &[ForecastEntry],
        year: i32,
    ) -> HashMap<String, ProjectionResult> {
        tracing::info!(
            "開始投影計算：群組 {} 個，訂單 {} 筆，預測 {} 筆",
            catalog.groups().len(),
            orders.len(),
            forecasts.len()
        );

        let start_time = std::time::Instant::now();

        let results: HashMap<String, ProjectionResult> = catalog
            .groups()
            .par_iter()
            .map(|group| {
                (
                    group.key.clone(),
                    Self::project_for_year(group, orders, forecasts, year),
                )
            })
            .collect();

        tracing::info!("投影計算完成，耗時 {:?}", start_time.elapsed());

        results
    }
}
