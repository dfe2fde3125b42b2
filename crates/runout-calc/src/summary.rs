//! 需求滿足率彙總

use runout_core::{ProductSatisfaction, ProductionPlan, SatisfactionSummary};
use rust_decimal::Decimal;

/// 彙總計算器
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// 各產品需求滿足率的算術平均（含第 0 期的 1）
    pub fn demand_satisfaction(plan: &ProductionPlan) -> SatisfactionSummary {
        let entries = plan
            .products()
            .iter()
            .map(|product_id| {
                let values: Vec<Decimal> = plan
                    .satisfaction_series(product_id)
                    .into_iter()
                    .map(|(_, value)| value)
                    .collect();

                ProductSatisfaction {
                    product_id: product_id.clone(),
                    demand_satisfaction: Self::mean(&values),
                }
            })
            .collect();

        SatisfactionSummary::new(entries)
    }

    /// 空序列的平均值視為 1（沒有任何未滿足的需求）
    fn mean(values: &[Decimal]) -> Decimal {
        if values.is_empty() {
            return Decimal::ONE;
        }
        let total: Decimal = values.iter().copied().sum();
        total / Decimal::from(values.len())
    }
}
