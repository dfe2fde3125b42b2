//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 產品（共用同一條產線）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: String,

    /// 期初庫存
    pub initial_inventory: Decimal,

    /// 產率（被排程時每期產出量）
    pub production_rate: Decimal,

    /// 需求預測（依期別排序，每期一筆）
    pub demand_forecast: Vec<Decimal>,
}

impl Product {
    /// 創建新的產品
    pub fn new(
        id: impl Into<String>,
        initial_inventory: Decimal,
        production_rate: Decimal,
        demand_forecast: Vec<Decimal>,
    ) -> Self {
        Self {
            id: id.into(),
            initial_inventory,
            production_rate,
            demand_forecast,
        }
    }

    /// 預測期數
    pub fn horizon(&self) -> usize {
        self.demand_forecast.len()
    }

    /// 指定期別的需求（0 起算，超出範圍視為 0）
    pub fn demand_at(&self, period: usize) -> Decimal {
        self.demand_forecast
            .get(period)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 前瞻窗口需求合計：`[start, start + length)`，超出預測範圍的部分截斷
    ///
    /// 合計超出 `Decimal::MAX` 時以 `Decimal::MAX` 計。
    pub fn look_ahead_demand(&self, start: usize, length: usize) -> Decimal {
        let end = start.saturating_add(length).min(self.horizon());
        if start >= end {
            return Decimal::ZERO;
        }
        saturating_sum(&self.demand_forecast[start..end])
    }

    /// 預測總需求
    pub fn total_demand(&self) -> Decimal {
        saturating_sum(&self.demand_forecast)
    }
}

fn saturating_sum(values: &[Decimal]) -> Decimal {
    values
        .iter()
        .fold(Decimal::ZERO, |total, &value| total.saturating_add(value))
}
