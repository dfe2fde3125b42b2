//! 逐期生產模擬

use runout_core::{PeriodPlan, Product, ProductState, Production, ProductionPlan};
use rust_decimal::Decimal;

use crate::runout::RunoutCalculator;

/// 單一產品單期的推算結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// 期末庫存
    pub inventory: Decimal,
    /// 需求滿足率
    pub demand_satisfaction: Decimal,
}

impl Projection {
    /// 推算期末庫存與需求滿足率
    ///
    /// 可用量 = 本期產出 + 上期庫存；庫存不低於 0，
    /// 滿足率上限為 1，需求為 0 時滿足率固定為 1。
    /// 可用量超出 `Decimal::MAX` 時以 `Decimal::MAX` 計。
    pub fn project(previous_inventory: Decimal, produced: Decimal, demand: Decimal) -> Self {
        let available = produced.saturating_add(previous_inventory);
        let inventory = (available - demand).max(Decimal::ZERO);

        let demand_satisfaction = if demand > Decimal::ZERO {
            // 溢位表示可用量遠大於需求
            available
                .checked_div(demand)
                .map_or(Decimal::ONE, |ratio| ratio.min(Decimal::ONE))
        } else {
            Decimal::ONE
        };

        Self {
            inventory,
            demand_satisfaction,
        }
    }
}

/// 逐期模擬器
///
/// 期與期之間只透過 `inventories` 傳遞狀態；計劃表只追加、不回頭讀取。
pub struct PeriodSimulator<'a> {
    products: &'a [Product],
    look_ahead_periods: usize,
    inventories: Vec<Decimal>,
    plan: ProductionPlan,
}

impl<'a> PeriodSimulator<'a> {
    /// 以期初庫存建立模擬器，並寫入第 0 期
    pub fn new(products: &'a [Product], look_ahead_periods: usize) -> Self {
        let inventories: Vec<Decimal> = products.iter().map(|p| p.initial_inventory).collect();

        let mut plan = ProductionPlan::new(products.iter().map(|p| p.id.clone()).collect());
        plan.push(PeriodPlan::new(
            0,
            Production::Idle,
            products
                .iter()
                .map(|p| ProductState::initial(p.id.clone(), p.initial_inventory))
                .collect(),
        ));

        Self {
            products,
            look_ahead_periods,
            inventories,
            plan,
        }
    }

    /// 目前各產品庫存
    pub fn inventories(&self) -> &[Decimal] {
        &self.inventories
    }

    /// 模擬第 `index + 1` 期（`index` 為 0 起算的預測索引）
    pub fn step(&mut self, index: usize) -> &PeriodPlan {
        let ratios = RunoutCalculator::ratios(
            self.products,
            &self.inventories,
            index,
            self.look_ahead_periods,
        );
        let scheduled = RunoutCalculator::select(&ratios);

        tracing::debug!(
            "第 {} 期耗盡比: {:?}，排程: {:?}",
            index + 1,
            ratios,
            scheduled.map(|i| self.products[i].id.as_str())
        );

        let mut states = Vec::with_capacity(self.products.len());
        for (i, product) in self.products.iter().enumerate() {
            let demand = product.demand_at(index);
            let produced = if scheduled == Some(i) {
                product.production_rate
            } else {
                Decimal::ZERO
            };

            let projection = Projection::project(self.inventories[i], produced, demand);
            self.inventories[i] = projection.inventory;

            states.push(ProductState::new(
                product.id.clone(),
                demand,
                projection.inventory,
                projection.demand_satisfaction,
            ));
        }

        let production = match scheduled {
            Some(i) => Production::Product(self.products[i].id.clone()),
            None => Production::Idle,
        };

        self.plan.push(PeriodPlan::new(index + 1, production, states))
    }

    /// 模擬到預測期末並回傳完整計劃
    pub fn run(mut self, horizon: usize) -> ProductionPlan {
        for index in 0..horizon {
            self.step(index);
        }
        self.plan
    }

    /// 一次完成整段模擬
    pub fn simulate(products: &'a [Product], look_ahead_periods: usize) -> ProductionPlan {
        let horizon = products.first().map(|p| p.horizon()).unwrap_or(0);
        Self::new(products, look_ahead_periods).run(horizon)
    }
}
