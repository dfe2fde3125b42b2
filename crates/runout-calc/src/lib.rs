//! # Runout Scheduling Engine
//!
//! 單一產線多產品的耗盡時間（runout-time）排程引擎

pub mod extraction;
pub mod runout;
pub mod scheduler;
pub mod simulation;
pub mod summary;

// Re-export 主要類型
pub use extraction::{ExtractedInput, InputExtractor};
pub use runout::{RunoutCalculator, RunoutRatio};
pub use scheduler::Scheduler;
pub use simulation::{PeriodSimulator, Projection};
pub use summary::SummaryCalculator;

use runout_core::{ProductionPlan, SatisfactionSummary};
use serde::Serialize;

/// 排程計算結果
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResult {
    /// 生產計劃
    pub plan: ProductionPlan,

    /// 需求滿足率彙總
    pub summary: SatisfactionSummary,

    /// 警告信息
    pub warnings: Vec<ScheduleWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ScheduleResult {
    /// 創建不含警告的計算結果
    pub fn new(plan: ProductionPlan, summary: SatisfactionSummary) -> Self {
        Self {
            plan,
            summary,
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: ScheduleWarning) {
        self.warnings.push(warning);
    }

    /// 指定產品的警告
    pub fn warnings_for(&self, product_id: &str) -> Vec<&ScheduleWarning> {
        self.warnings
            .iter()
            .filter(|w| w.product_id == product_id)
            .collect()
    }
}

/// 排程警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleWarning {
    pub product_id: String,
    pub period: Option<usize>,
    pub message: String,
    pub severity: WarningSeverity,
}

impl ScheduleWarning {
    pub fn new(
        product_id: String,
        period: Option<usize>,
        message: String,
        severity: WarningSeverity,
    ) -> Self {
        Self {
            product_id,
            period,
            message,
            severity,
        }
    }

    pub fn info(product_id: String, period: Option<usize>, message: String) -> Self {
        Self::new(product_id, period, message, WarningSeverity::Info)
    }

    pub fn warning(product_id: String, period: Option<usize>, message: String) -> Self {
        Self::new(product_id, period, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
