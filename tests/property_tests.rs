//! 排程不變量的性質測試

use proptest::prelude::*;
use runout::*;

/// (期初庫存, 產率, 需求預測)，所有產品共用同一個預測期數
fn products_strategy() -> impl Strategy<Value = Vec<(u32, u32, Vec<u32>)>> {
    (1usize..5, 0usize..12).prop_flat_map(|(count, horizon)| {
        prop::collection::vec(
            (
                0u32..60,
                0u32..20,
                prop::collection::vec(0u32..15, horizon),
            ),
            count,
        )
    })
}

fn to_records(products: &[(u32, u32, Vec<u32>)]) -> Vec<InputRecord> {
    let mut records = Vec::new();
    for (i, (inventory, rate, demands)) in products.iter().enumerate() {
        let id = format!("P{}", i);
        records.push(InputRecord::inventory(id.as_str(), Decimal::from(*inventory)));
        records.push(InputRecord::production_rate(id.as_str(), Decimal::from(*rate)));
        for (period, demand) in demands.iter().enumerate() {
            records.push(InputRecord::demand(
                id.as_str(),
                period as u32 + 1,
                Decimal::from(*demand),
            ));
        }
    }
    records
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn plan_covers_every_period(products in products_strategy(), look_ahead in 1usize..8) {
        let horizon = products[0].2.len();
        let result = schedule(&to_records(&products), SchedulerConfig::new(look_ahead)).unwrap();

        prop_assert_eq!(result.plan.len(), horizon + 1);
        for (i, period) in result.plan.periods().iter().enumerate() {
            prop_assert_eq!(period.period, i);
            prop_assert_eq!(period.states.len(), products.len());
        }
    }

    #[test]
    fn inventory_and_satisfaction_stay_in_range(products in products_strategy(), look_ahead in 1usize..8) {
        let result = schedule(&to_records(&products), SchedulerConfig::new(look_ahead)).unwrap();

        for period in result.plan.periods() {
            for state in &period.states {
                prop_assert!(state.inventory >= Decimal::ZERO);
                prop_assert!(state.demand_satisfaction >= Decimal::ZERO);
                prop_assert!(state.demand_satisfaction <= Decimal::ONE);
                if state.demand == Decimal::ZERO {
                    prop_assert_eq!(state.demand_satisfaction, Decimal::ONE);
                }
            }
        }
        for entry in result.summary.entries() {
            prop_assert!(entry.demand_satisfaction >= Decimal::ZERO);
            prop_assert!(entry.demand_satisfaction <= Decimal::ONE);
        }
    }

    #[test]
    fn covered_product_is_never_scheduled(products in products_strategy(), look_ahead in 1usize..8) {
        let result = schedule(&to_records(&products), SchedulerConfig::new(look_ahead)).unwrap();
        let periods = result.plan.periods();

        for index in 0..result.plan.horizon() {
            let Some(product_id) = periods[index + 1].production.product_id() else {
                continue;
            };
            let position = result.plan.products().iter().position(|p| p == product_id).unwrap();
            let previous = periods[index].states[position].inventory;
            let window: Decimal = products[position].2[index..(index + look_ahead).min(products[position].2.len())]
                .iter()
                .map(|&v| Decimal::from(v))
                .sum();

            // 被排程者的庫存必定不足以涵蓋前瞻窗口
            prop_assert!(window > Decimal::ZERO);
            prop_assert!(previous < window);
        }
    }

    #[test]
    fn summary_is_mean_of_satisfaction(products in products_strategy()) {
        let result = schedule(&to_records(&products), SchedulerConfig::default()).unwrap();

        for product_id in result.plan.products() {
            let series = result.plan.satisfaction_series(product_id);
            prop_assert_eq!(series[0].1, Decimal::ONE);

            let total: Decimal = series.iter().map(|(_, v)| *v).sum();
            let mean = total / Decimal::from(series.len());
            prop_assert_eq!(result.summary.get(product_id), Some(mean));
        }
    }

    #[test]
    fn rerun_is_identical(products in products_strategy()) {
        let records = to_records(&products);
        let first = schedule(&records, SchedulerConfig::default()).unwrap();
        let second = schedule(&records, SchedulerConfig::default()).unwrap();

        prop_assert_eq!(first.plan, second.plan);
        prop_assert_eq!(first.summary, second.summary);
    }
}
