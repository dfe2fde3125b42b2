//! 排程主計算器

use runout_core::{InputRecord, Product, ProductionPlan, SchedulerConfig};
use rust_decimal::Decimal;

use crate::extraction::{ExtractedInput, InputExtractor};
use crate::simulation::PeriodSimulator;
use crate::summary::SummaryCalculator;
use crate::{ScheduleResult, ScheduleWarning};

/// 耗盡時間排程器
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// 創建新的排程器（配置無效時回傳錯誤）
    pub fn new(config: SchedulerConfig) -> runout_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 獲取配置引用
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// 主排程入口：拆解輸入表 → 逐期模擬 → 彙總
    pub fn schedule(&self, records: &[InputRecord]) -> runout_core::Result<ScheduleResult> {
        tracing::info!("開始排程：輸入 {} 筆", records.len());

        // Step 1: 拆解輸入表（資料錯誤在此中止，不產生部分計劃）
        tracing::debug!("Step 1: 拆解輸入表");
        let input = InputExtractor::extract(records)?;

        Ok(self.run(&input))
    }

    /// 對已拆解的輸入執行排程
    pub fn run(&self, input: &ExtractedInput) -> ScheduleResult {
        let start_time = std::time::Instant::now();
        let products = input.products();

        tracing::info!(
            "產品 {} 個，預測期數 {}，前瞻期數 {}",
            products.len(),
            input.horizon(),
            self.config.look_ahead_periods
        );

        // Step 2: 逐期模擬
        tracing::debug!("Step 2: 逐期模擬");
        let plan = PeriodSimulator::simulate(products, self.config.look_ahead_periods);

        // Step 3: 需求滿足率彙總
        tracing::debug!("Step 3: 需求滿足率彙總");
        let summary = SummaryCalculator::demand_satisfaction(&plan);

        let mut result = ScheduleResult::new(plan, summary);
        for warning in Self::collect_warnings(products, &result.plan) {
            result.add_warning(warning);
        }
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("排程完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "停機期數: {}，警告: {} 筆",
            result.plan.idle_periods().len(),
            result.warnings.len()
        );

        result
    }

    /// 缺貨與零產率排程警告
    fn collect_warnings(products: &[Product], plan: &ProductionPlan) -> Vec<ScheduleWarning> {
        let mut warnings = Vec::new();

        for period in plan.periods().iter().skip(1) {
            for state in &period.states {
                if !state.is_fully_satisfied() {
                    warnings.push(ScheduleWarning::warning(
                        state.product_id.clone(),
                        Some(period.period),
                        format!(
                            "第 {} 期缺貨：需求 {}，滿足率 {}",
                            period.period,
                            state.demand,
                            state.demand_satisfaction.round_dp(4)
                        ),
                    ));
                }
            }

            if let Some(product_id) = period.production.product_id() {
                let zero_rate = products
                    .iter()
                    .any(|p| p.id == product_id && p.production_rate == Decimal::ZERO);
                if zero_rate {
                    warnings.push(ScheduleWarning::info(
                        product_id.to_string(),
                        Some(period.period),
                        format!("第 {} 期排程了產率為 0 的產品", period.period),
                    ));
                }
            }
        }

        warnings
    }
}
