//! 輸入資料列模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, ScheduleError};

/// 保留項目：期初庫存
pub const ITEM_INVENTORY: &str = "Inventory";

/// 保留項目：產率
pub const ITEM_PRODUCTION_RATE: &str = "Production Rate";

/// 資料列項目類型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// 期初庫存
    Inventory,
    /// 每期產率
    ProductionRate,
    /// 需求預測（保留原始期別標記）
    Demand(String),
}

impl ItemKind {
    /// 由項目標籤判斷類型，非保留標籤一律視為需求預測
    pub fn classify(item: &str) -> Self {
        match item {
            ITEM_INVENTORY => ItemKind::Inventory,
            ITEM_PRODUCTION_RATE => ItemKind::ProductionRate,
            other => ItemKind::Demand(other.to_string()),
        }
    }

    /// 檢查是否為需求預測
    pub fn is_demand(&self) -> bool {
        matches!(self, ItemKind::Demand(_))
    }
}

/// 輸入資料列（Product, Item, Value, Period）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    /// 產品ID
    #[serde(rename = "Product")]
    pub product: String,

    /// 項目標籤
    #[serde(rename = "Item")]
    pub item: String,

    /// 數值
    #[serde(rename = "Value")]
    pub value: Decimal,

    /// 期別（僅需求列使用，可省略）
    #[serde(rename = "Period", default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

impl InputRecord {
    /// 創建新的資料列
    pub fn new(product: impl Into<String>, item: impl Into<String>, value: Decimal) -> Self {
        Self {
            product: product.into(),
            item: item.into(),
            value,
            period: None,
        }
    }

    /// 創建期初庫存列
    pub fn inventory(product: impl Into<String>, value: Decimal) -> Self {
        Self::new(product, ITEM_INVENTORY, value)
    }

    /// 創建產率列
    pub fn production_rate(product: impl Into<String>, value: Decimal) -> Self {
        Self::new(product, ITEM_PRODUCTION_RATE, value)
    }

    /// 創建帶期別的需求預測列
    pub fn demand(product: impl Into<String>, period: u32, value: Decimal) -> Self {
        Self::new(product, format!("Demand {}", period), value).with_period(period)
    }

    /// 建構器模式：設置期別
    pub fn with_period(mut self, period: u32) -> Self {
        self.period = Some(period);
        self
    }

    /// 項目類型
    pub fn kind(&self) -> ItemKind {
        ItemKind::classify(&self.item)
    }

    /// 從 JSON 陣列解析輸入表
    pub fn from_json_array(json: &str) -> Result<Vec<InputRecord>> {
        serde_json::from_str(json).map_err(|e| ScheduleError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_items() {
        assert_eq!(ItemKind::classify("Inventory"), ItemKind::Inventory);
        assert_eq!(ItemKind::classify("Production Rate"), ItemKind::ProductionRate);
        assert!(ItemKind::classify("Week 3").is_demand());

        // 大小寫不同即視為需求列
        assert!(ItemKind::classify("inventory").is_demand());
    }

    #[test]
    fn test_record_builders() {
        let record = InputRecord::demand("A", 2, Decimal::from(4));
        assert_eq!(record.period, Some(2));
        assert!(record.kind().is_demand());

        let record = InputRecord::production_rate("A", Decimal::from(5));
        assert_eq!(record.kind(), ItemKind::ProductionRate);
        assert_eq!(record.period, None);
    }

    #[test]
    fn test_from_json_array() {
        let json = r#"[
            {"Product": "A", "Item": "Inventory", "Value": 10},
            {"Product": "A", "Item": "Production Rate", "Value": "5"},
            {"Product": "A", "Item": "Demand 1", "Value": 4.5, "Period": 1}
        ]"#;

        let records = InputRecord::from_json_array(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].value, Decimal::from(10));
        assert_eq!(records[1].value, Decimal::from(5));
        assert_eq!(records[2].value, Decimal::new(45, 1));
        assert_eq!(records[2].period, Some(1));
    }

    #[test]
    fn test_from_json_array_invalid() {
        let result = InputRecord::from_json_array(r#"[{"Product": "A"}]"#);
        assert!(matches!(result, Err(ScheduleError::Serialization(_))));
    }
}
