//! # Runout Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod plan;
pub mod product;
pub mod record;

// Re-export 主要類型
pub use config::{SchedulerConfig, DEFAULT_LOOK_AHEAD_PERIODS};
pub use plan::{
    PeriodPlan, ProductSatisfaction, ProductState, Production, ProductionPlan,
    SatisfactionSummary, IDLE_LABEL,
};
pub use product::Product;
pub use record::{InputRecord, ItemKind, ITEM_INVENTORY, ITEM_PRODUCTION_RATE};

use rust_decimal::Decimal;

/// 排程錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("輸入資料為空")]
    EmptyInput,

    #[error("產品ID {0} 與停機標記相同，不可使用")]
    ReservedProductId(String),

    #[error("產品 {0} 缺少期初庫存（Inventory）")]
    MissingInventory(String),

    #[error("產品 {0} 缺少產率（Production Rate）")]
    MissingProductionRate(String),

    #[error("產品 {product} 的項目 {item} 重複出現")]
    DuplicateItem { product: String, item: String },

    #[error("產品 {product} 的項目 {item} 不可為負值: {value}")]
    NegativeValue {
        product: String,
        item: String,
        value: Decimal,
    },

    #[error("產品 {product} 的需求期別不連續：期望 {expected}，實際 {actual}")]
    DemandPeriodOutOfOrder {
        product: String,
        expected: u32,
        actual: u32,
    },

    #[error("產品 {0} 的需求列部分有期別、部分沒有")]
    InconsistentPeriods(String),

    #[error("產品 {product} 的預測期數 {actual} 與其他產品的 {expected} 不一致")]
    HorizonMismatch {
        product: String,
        expected: usize,
        actual: usize,
    },

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
