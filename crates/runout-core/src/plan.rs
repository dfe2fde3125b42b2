//! 生產計劃模型（排程結果）

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, ScheduleError};

/// 停機（不生產）標記
///
/// 計劃表的 Production 欄以此字串表示停機，因此不可作為產品ID。
pub const IDLE_LABEL: &str = "None";

/// 單期排程決策
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Production {
    /// 產線閒置
    Idle,
    /// 生產指定產品
    Product(String),
}

impl Production {
    /// 檢查是否閒置
    pub fn is_idle(&self) -> bool {
        matches!(self, Production::Idle)
    }

    /// 被排程的產品ID
    pub fn product_id(&self) -> Option<&str> {
        match self {
            Production::Idle => None,
            Production::Product(id) => Some(id),
        }
    }

    /// 檢查是否排程指定產品
    pub fn is_product(&self, product_id: &str) -> bool {
        self.product_id() == Some(product_id)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Production::Idle => f.write_str(IDLE_LABEL),
            Production::Product(id) => f.write_str(id),
        }
    }
}

impl From<Production> for String {
    fn from(production: Production) -> Self {
        production.to_string()
    }
}

impl From<String> for Production {
    fn from(label: String) -> Self {
        if label == IDLE_LABEL {
            Production::Idle
        } else {
            Production::Product(label)
        }
    }
}

/// 單一產品在某期的狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductState {
    /// 產品ID
    pub product_id: String,

    /// 本期需求
    pub demand: Decimal,

    /// 期末預計庫存（不低於 0）
    pub inventory: Decimal,

    /// 需求滿足率（0 ~ 1）
    pub demand_satisfaction: Decimal,
}

impl ProductState {
    /// 創建新的產品狀態
    pub fn new(
        product_id: impl Into<String>,
        demand: Decimal,
        inventory: Decimal,
        demand_satisfaction: Decimal,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            demand,
            inventory,
            demand_satisfaction,
        }
    }

    /// 期初狀態：需求 0、滿足率 1
    pub fn initial(product_id: impl Into<String>, inventory: Decimal) -> Self {
        Self::new(product_id, Decimal::ZERO, inventory, Decimal::ONE)
    }

    /// 檢查本期需求是否完全滿足
    pub fn is_fully_satisfied(&self) -> bool {
        self.demand_satisfaction >= Decimal::ONE
    }
}

/// 單期計劃列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPlan {
    /// 期別（0 = 期初狀態）
    pub period: usize,

    /// 排程決策
    pub production: Production,

    /// 各產品狀態（依產品標準順序）
    pub states: Vec<ProductState>,
}

impl PeriodPlan {
    /// 創建新的計劃列
    pub fn new(period: usize, production: Production, states: Vec<ProductState>) -> Self {
        Self {
            period,
            production,
            states,
        }
    }

    /// 獲取指定產品的狀態
    pub fn state(&self, product_id: &str) -> Option<&ProductState> {
        self.states.iter().find(|s| s.product_id == product_id)
    }
}

/// 生產計劃（第 0 期到第 H 期，只允許追加）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    products: Vec<String>,
    periods: Vec<PeriodPlan>,
}

impl ProductionPlan {
    /// 創建空的生產計劃
    pub fn new(products: Vec<String>) -> Self {
        Self {
            products,
            periods: Vec::new(),
        }
    }

    /// 追加一期，回傳新追加的列
    pub fn push(&mut self, period: PeriodPlan) -> &PeriodPlan {
        let index = self.periods.len();
        self.periods.push(period);
        &self.periods[index]
    }

    /// 產品標準順序
    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// 所有計劃列
    pub fn periods(&self) -> &[PeriodPlan] {
        &self.periods
    }

    /// 計劃列數（H + 1）
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// 預測期數 H
    pub fn horizon(&self) -> usize {
        self.periods.len().saturating_sub(1)
    }

    /// 獲取指定期別
    pub fn period(&self, period: usize) -> Option<&PeriodPlan> {
        self.periods.get(period)
    }

    /// 最後一期
    pub fn last(&self) -> Option<&PeriodPlan> {
        self.periods.last()
    }

    /// 庫存趨勢（期別, 庫存），供折線圖使用
    pub fn inventory_series(&self, product_id: &str) -> Vec<(usize, Decimal)> {
        self.series(product_id, |s| s.inventory)
    }

    /// 需求滿足率趨勢（期別, 滿足率），供長條圖使用
    pub fn satisfaction_series(&self, product_id: &str) -> Vec<(usize, Decimal)> {
        self.series(product_id, |s| s.demand_satisfaction)
    }

    /// 需求趨勢（期別, 需求）
    pub fn demand_series(&self, product_id: &str) -> Vec<(usize, Decimal)> {
        self.series(product_id, |s| s.demand)
    }

    fn series<F>(&self, product_id: &str, value: F) -> Vec<(usize, Decimal)>
    where
        F: Fn(&ProductState) -> Decimal,
    {
        self.periods
            .iter()
            .filter_map(|p| p.state(product_id).map(|s| (p.period, value(s))))
            .collect()
    }

    /// 排程序列（期別, 排程標籤）
    pub fn production_series(&self) -> Vec<(usize, String)> {
        self.periods
            .iter()
            .map(|p| (p.period, p.production.to_string()))
            .collect()
    }

    /// 指定產品被排程的期數
    pub fn scheduled_count(&self, product_id: &str) -> usize {
        self.periods
            .iter()
            .filter(|p| p.production.is_product(product_id))
            .count()
    }

    /// 產線閒置的期別（不含第 0 期）
    pub fn idle_periods(&self) -> Vec<usize> {
        self.periods
            .iter()
            .skip(1)
            .filter(|p| p.production.is_idle())
            .map(|p| p.period)
            .collect()
    }

    /// 平面表欄位名稱
    pub fn column_names(&self) -> Vec<String> {
        let mut columns = vec!["Period".to_string(), "Production".to_string()];
        for product in &self.products {
            columns.push(format!("{}: Demand", product));
            columns.push(format!("{}: Inventory", product));
            columns.push(format!("{}: Demand Satisfaction", product));
        }
        columns
    }

    /// 平面表資料列（與 `column_names` 對應）
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.periods
            .iter()
            .map(|p| {
                let mut row = vec![p.period.to_string(), p.production.to_string()];
                for state in &p.states {
                    row.push(state.demand.normalize().to_string());
                    row.push(state.inventory.normalize().to_string());
                    row.push(state.demand_satisfaction.normalize().to_string());
                }
                row
            })
            .collect()
    }

    /// 序列化為 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ScheduleError::Serialization(e.to_string()))
    }
}

/// 單一產品的平均需求滿足率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSatisfaction {
    /// 產品ID
    pub product_id: String,

    /// 平均需求滿足率
    pub demand_satisfaction: Decimal,
}

/// 需求滿足率彙總表
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SatisfactionSummary {
    entries: Vec<ProductSatisfaction>,
}

impl SatisfactionSummary {
    /// 創建彙總表
    pub fn new(entries: Vec<ProductSatisfaction>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ProductSatisfaction] {
        &self.entries
    }

    /// 獲取指定產品的平均滿足率
    pub fn get(&self, product_id: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.product_id == product_id)
            .map(|e| e.demand_satisfaction)
    }

    /// 平面表欄位名稱
    pub fn column_names(&self) -> Vec<String> {
        vec!["Product".to_string(), "Demand Satisfaction".to_string()]
    }

    /// 平面表資料列
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.entries
            .iter()
            .map(|e| {
                vec![
                    e.product_id.clone(),
                    e.demand_satisfaction.normalize().to_string(),
                ]
            })
            .collect()
    }

    /// 序列化為 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ScheduleError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_period_plan() -> ProductionPlan {
        let mut plan = ProductionPlan::new(vec!["A".to_string(), "B".to_string()]);
        plan.push(PeriodPlan::new(
            0,
            Production::Idle,
            vec![
                ProductState::initial("A", Decimal::from(10)),
                ProductState::initial("B", Decimal::from(2)),
            ],
        ));
        plan.push(PeriodPlan::new(
            1,
            Production::Product("B".to_string()),
            vec![
                ProductState::new("A", Decimal::from(4), Decimal::from(6), Decimal::ONE),
                ProductState::new("B", Decimal::from(4), Decimal::from(1), Decimal::ONE),
            ],
        ));
        plan.push(PeriodPlan::new(
            2,
            Production::Idle,
            vec![
                ProductState::new("A", Decimal::from(4), Decimal::from(2), Decimal::ONE),
                ProductState::new("B", Decimal::from(4), Decimal::ZERO, Decimal::new(25, 2)),
            ],
        ));
        plan
    }

    #[test]
    fn test_production_label() {
        assert_eq!(Production::Idle.to_string(), "None");
        assert_eq!(Production::Product("A".to_string()).to_string(), "A");
        assert_eq!(Production::from("None".to_string()), Production::Idle);
        assert!(Production::Product("A".to_string()).is_product("A"));
        assert!(!Production::Idle.is_product("A"));
    }

    #[test]
    fn test_push_returns_new_row() {
        let mut plan = two_period_plan();
        let row = plan.push(PeriodPlan::new(2, Production::Idle, Vec::new()));
        assert_eq!(row.period, 2);
        assert!(row.production.is_idle());
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn test_plan_queries() {
        let plan = two_period_plan();

        assert_eq!(plan.len(), 3);
        assert_eq!(plan.horizon(), 2);
        assert_eq!(plan.scheduled_count("B"), 1);
        assert_eq!(plan.scheduled_count("A"), 0);
        assert_eq!(plan.idle_periods(), vec![2]);
        assert_eq!(
            plan.period(1).and_then(|p| p.state("A")).map(|s| s.inventory),
            Some(Decimal::from(6))
        );
        assert!(!plan.period(2).unwrap().state("B").unwrap().is_fully_satisfied());
    }

    #[test]
    fn test_series() {
        let plan = two_period_plan();

        assert_eq!(
            plan.inventory_series("A"),
            vec![
                (0, Decimal::from(10)),
                (1, Decimal::from(6)),
                (2, Decimal::from(2)),
            ]
        );
        assert_eq!(plan.satisfaction_series("B")[2], (2, Decimal::new(25, 2)));
        assert_eq!(plan.demand_series("A")[0], (0, Decimal::ZERO));
        assert_eq!(
            plan.production_series(),
            vec![
                (0, "None".to_string()),
                (1, "B".to_string()),
                (2, "None".to_string()),
            ]
        );
        assert!(plan.inventory_series("UNKNOWN").is_empty());
    }

    #[test]
    fn test_flat_table() {
        let plan = two_period_plan();

        let columns = plan.column_names();
        assert_eq!(columns.len(), 2 + 2 * 3);
        assert_eq!(columns[2], "A: Demand");
        assert_eq!(columns[7], "B: Demand Satisfaction");

        let rows = plan.to_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[1],
            vec!["1", "B", "4", "6", "1", "4", "1", "1"]
        );
        assert_eq!(rows[2][7], "0.25");
    }

    #[test]
    fn test_plan_json() {
        let plan = two_period_plan();
        let json = plan.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["periods"][1]["production"], "B");
        assert_eq!(value["periods"][0]["production"], "None");
    }

    #[test]
    fn test_summary_table() {
        let summary = SatisfactionSummary::new(vec![
            ProductSatisfaction {
                product_id: "A".to_string(),
                demand_satisfaction: Decimal::new(875, 3),
            },
            ProductSatisfaction {
                product_id: "B".to_string(),
                demand_satisfaction: Decimal::ONE,
            },
        ]);

        assert_eq!(summary.get("A"), Some(Decimal::new(875, 3)));
        assert_eq!(summary.get("C"), None);
        assert_eq!(summary.column_names(), vec!["Product", "Demand Satisfaction"]);
        assert_eq!(summary.to_rows()[0], vec!["A", "0.875"]);
    }
}
