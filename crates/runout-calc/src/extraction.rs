//! 輸入表拆解

use std::collections::HashMap;

use runout_core::{InputRecord, ItemKind, Product, ScheduleError, IDLE_LABEL};
use rust_decimal::Decimal;

/// 單一產品的拆解暫存
#[derive(Debug, Default)]
struct ProductRows {
    inventory: Option<Decimal>,
    production_rate: Option<Decimal>,
    demands: Vec<Decimal>,
    /// 需求列是否帶期別（以第一筆需求列為準）
    has_periods: Option<bool>,
    last_period: Option<u32>,
}

/// 拆解結果：產品順序、期初庫存、產率、需求預測
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedInput {
    products: Vec<Product>,
}

impl ExtractedInput {
    /// 依標準順序排列的產品
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// 產品ID（首次出現順序）
    pub fn product_ids(&self) -> Vec<String> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }

    /// 產品 → 期初庫存
    pub fn initial_inventory(&self) -> HashMap<String, Decimal> {
        self.products
            .iter()
            .map(|p| (p.id.clone(), p.initial_inventory))
            .collect()
    }

    /// 產品 → 產率
    pub fn production_rate(&self) -> HashMap<String, Decimal> {
        self.products
            .iter()
            .map(|p| (p.id.clone(), p.production_rate))
            .collect()
    }

    /// 產品 → 需求預測
    pub fn demand_forecast(&self) -> HashMap<String, Vec<Decimal>> {
        self.products
            .iter()
            .map(|p| (p.id.clone(), p.demand_forecast.clone()))
            .collect()
    }

    /// 預測期數 H（所有產品一致）
    pub fn horizon(&self) -> usize {
        self.products.first().map(|p| p.horizon()).unwrap_or(0)
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

/// 輸入表拆解器
pub struct InputExtractor;

impl InputExtractor {
    /// 拆解輸入表
    ///
    /// 產品順序以首次出現為準，這個順序同時決定排程時的平手規則。
    pub fn extract(records: &[InputRecord]) -> runout_core::Result<ExtractedInput> {
        if records.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }

        let mut order: Vec<String> = Vec::new();
        let mut grouped: HashMap<String, ProductRows> = HashMap::new();

        for record in records {
            if record.product == IDLE_LABEL {
                return Err(ScheduleError::ReservedProductId(record.product.clone()));
            }

            let rows = grouped.entry(record.product.clone()).or_insert_with(|| {
                order.push(record.product.clone());
                ProductRows::default()
            });

            if record.value < Decimal::ZERO {
                return Err(ScheduleError::NegativeValue {
                    product: record.product.clone(),
                    item: record.item.clone(),
                    value: record.value,
                });
            }

            match record.kind() {
                ItemKind::Inventory => {
                    Self::set_once(&mut rows.inventory, record)?;
                }
                ItemKind::ProductionRate => {
                    Self::set_once(&mut rows.production_rate, record)?;
                }
                ItemKind::Demand(_) => {
                    Self::push_demand(rows, record)?;
                }
            }
        }

        let mut products = Vec::with_capacity(order.len());
        for product_id in order {
            let rows = grouped.remove(&product_id).unwrap_or_default();

            let initial_inventory = rows
                .inventory
                .ok_or_else(|| ScheduleError::MissingInventory(product_id.clone()))?;
            let production_rate = rows
                .production_rate
                .ok_or_else(|| ScheduleError::MissingProductionRate(product_id.clone()))?;

            products.push(Product::new(
                product_id,
                initial_inventory,
                production_rate,
                rows.demands,
            ));
        }

        Self::check_horizon(&products)?;

        tracing::debug!(
            "輸入拆解完成：產品 {} 個，預測期數 {}",
            products.len(),
            products.first().map(|p| p.horizon()).unwrap_or(0)
        );

        Ok(ExtractedInput { products })
    }

    fn set_once(slot: &mut Option<Decimal>, record: &InputRecord) -> runout_core::Result<()> {
        if slot.is_some() {
            return Err(ScheduleError::DuplicateItem {
                product: record.product.clone(),
                item: record.item.clone(),
            });
        }
        *slot = Some(record.value);
        Ok(())
    }

    /// 追加需求列；帶期別的需求列必須連續遞增
    fn push_demand(rows: &mut ProductRows, record: &InputRecord) -> runout_core::Result<()> {
        let tagged = record.period.is_some();
        match rows.has_periods {
            None => rows.has_periods = Some(tagged),
            Some(expected) if expected != tagged => {
                return Err(ScheduleError::InconsistentPeriods(record.product.clone()));
            }
            Some(_) => {}
        }

        if let Some(period) = record.period {
            if let Some(last) = rows.last_period {
                let expected = last.saturating_add(1);
                if period != expected {
                    return Err(ScheduleError::DemandPeriodOutOfOrder {
                        product: record.product.clone(),
                        expected,
                        actual: period,
                    });
                }
            }
            rows.last_period = Some(period);
        }

        rows.demands.push(record.value);
        Ok(())
    }

    /// 所有產品的預測期數必須一致
    fn check_horizon(products: &[Product]) -> runout_core::Result<()> {
        let Some(first) = products.first() else {
            return Ok(());
        };
        let expected = first.horizon();

        for product in products.iter().skip(1) {
            if product.horizon() != expected {
                return Err(ScheduleError::HorizonMismatch {
                    product: product.id.clone(),
                    expected,
                    actual: product.horizon(),
                });
            }
        }
        Ok(())
    }
}
