//! 耗盡比計算與排程選擇

use std::cmp::Ordering;

use rayon::prelude::*;
use runout_core::Product;
use rust_decimal::Decimal;

/// 耗盡比 = 現有庫存 / 前瞻窗口需求合計
///
/// 窗口需求為 0 時視為永不耗盡（`Unbounded`），大於任何有限值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunoutRatio {
    Finite(Decimal),
    Unbounded,
}

impl RunoutRatio {
    /// 計算耗盡比
    pub fn compute(inventory: Decimal, look_ahead_demand: Decimal) -> Self {
        if look_ahead_demand <= Decimal::ZERO {
            return RunoutRatio::Unbounded;
        }
        // 除法溢位代表比值極大，與永不耗盡等價
        inventory
            .checked_div(look_ahead_demand)
            .map(RunoutRatio::Finite)
            .unwrap_or(RunoutRatio::Unbounded)
    }

    /// 現有庫存是否已涵蓋整個前瞻窗口
    pub fn is_covered(&self) -> bool {
        match self {
            RunoutRatio::Finite(ratio) => *ratio >= Decimal::ONE,
            RunoutRatio::Unbounded => true,
        }
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            RunoutRatio::Finite(ratio) => Some(*ratio),
            RunoutRatio::Unbounded => None,
        }
    }
}

impl Ord for RunoutRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RunoutRatio::Finite(a), RunoutRatio::Finite(b)) => a.cmp(b),
            (RunoutRatio::Finite(_), RunoutRatio::Unbounded) => Ordering::Less,
            (RunoutRatio::Unbounded, RunoutRatio::Finite(_)) => Ordering::Greater,
            (RunoutRatio::Unbounded, RunoutRatio::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for RunoutRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 耗盡比計算器
pub struct RunoutCalculator;

impl RunoutCalculator {
    /// 計算各產品在指定期別的耗盡比
    ///
    /// # 參數
    /// * `inventories` - 各產品目前庫存，順序與 `products` 一致
    /// * `period` - 目前期別（0 起算）
    /// * `look_ahead_periods` - 前瞻期數，超出預測範圍的部分截斷
    pub fn ratios(
        products: &[Product],
        inventories: &[Decimal],
        period: usize,
        look_ahead_periods: usize,
    ) -> Vec<RunoutRatio> {
        // 產品之間互不相依；有序 collect 保留標準順序
        products
            .par_iter()
            .zip(inventories.par_iter())
            .map(|(product, &inventory)| {
                let demand = product.look_ahead_demand(period, look_ahead_periods);
                RunoutRatio::compute(inventory, demand)
            })
            .collect()
    }

    /// 選出本期要生產的產品索引
    ///
    /// 取耗盡比嚴格最小者，平手取順序在前者；最小值已涵蓋前瞻窗口時回傳 `None`（停機）。
    pub fn select(ratios: &[RunoutRatio]) -> Option<usize> {
        let mut best: Option<(usize, RunoutRatio)> = None;
        for (index, &ratio) in ratios.iter().enumerate() {
            match best {
                Some((_, current)) if ratio >= current => {}
                _ => best = Some((index, ratio)),
            }
        }

        best.filter(|(_, ratio)| !ratio.is_covered())
            .map(|(index, _)| index)
    }
}
