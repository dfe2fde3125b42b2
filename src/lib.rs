//! # Runout
//!
//! 單一產線多產品生產排程：以耗盡比（庫存 / 前瞻需求）逐期決定生產哪一個產品。
//!
//! ```
//! use runout::{schedule, Decimal, InputRecord, SchedulerConfig};
//!
//! let records = vec![
//!     InputRecord::inventory("A", Decimal::from(2)),
//!     InputRecord::production_rate("A", Decimal::from(3)),
//!     InputRecord::demand("A", 1, Decimal::from(4)),
//! ];
//!
//! let result = schedule(&records, SchedulerConfig::default()).unwrap();
//! assert_eq!(result.plan.len(), 2);
//! ```

pub mod logging;

pub use rust_decimal::Decimal;

pub use runout_calc::{
    ExtractedInput, InputExtractor, RunoutRatio, ScheduleResult, ScheduleWarning, Scheduler,
    WarningSeverity,
};
pub use runout_core::{
    InputRecord, ItemKind, PeriodPlan, Product, ProductSatisfaction, ProductState, Production,
    ProductionPlan, Result, SatisfactionSummary, ScheduleError, SchedulerConfig,
    DEFAULT_LOOK_AHEAD_PERIODS, IDLE_LABEL,
};

/// 一次完成拆解、模擬與彙總
pub fn schedule(records: &[InputRecord], config: SchedulerConfig) -> Result<ScheduleResult> {
    Scheduler::new(config)?.schedule(records)
}
