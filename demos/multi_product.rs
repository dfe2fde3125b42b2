//! 多產品排程示例：JSON 輸入、自訂前瞻期數、警告與圖表序列

use runout::{Scheduler, SchedulerConfig, WarningSeverity};

const INPUT: &str = r#"[
    {"Product": "Widget", "Item": "Inventory", "Value": 30},
    {"Product": "Widget", "Item": "Production Rate", "Value": 25},
    {"Product": "Gadget", "Item": "Inventory", "Value": 12},
    {"Product": "Gadget", "Item": "Production Rate", "Value": 18},
    {"Product": "Gizmo", "Item": "Inventory", "Value": 0},
    {"Product": "Gizmo", "Item": "Production Rate", "Value": 10},
    {"Product": "Widget", "Item": "Week 1", "Value": 8},
    {"Product": "Widget", "Item": "Week 2", "Value": 9},
    {"Product": "Widget", "Item": "Week 3", "Value": 10},
    {"Product": "Widget", "Item": "Week 4", "Value": 12},
    {"Product": "Widget", "Item": "Week 5", "Value": 12},
    {"Product": "Widget", "Item": "Week 6", "Value": 11},
    {"Product": "Gadget", "Item": "Week 1", "Value": 6},
    {"Product": "Gadget", "Item": "Week 2", "Value": 6},
    {"Product": "Gadget", "Item": "Week 3", "Value": 7},
    {"Product": "Gadget", "Item": "Week 4", "Value": 0},
    {"Product": "Gadget", "Item": "Week 5", "Value": 5},
    {"Product": "Gadget", "Item": "Week 6", "Value": 5},
    {"Product": "Gizmo", "Item": "Week 1", "Value": 3},
    {"Product": "Gizmo", "Item": "Week 2", "Value": 3},
    {"Product": "Gizmo", "Item": "Week 3", "Value": 3},
    {"Product": "Gizmo", "Item": "Week 4", "Value": 4},
    {"Product": "Gizmo", "Item": "Week 5", "Value": 4},
    {"Product": "Gizmo", "Item": "Week 6", "Value": 4}
]"#;

fn main() -> anyhow::Result<()> {
    runout::logging::init();

    println!("=== 多產品排程示例 ===\n");

    let records = runout::InputRecord::from_json_array(INPUT)?;
    let config = SchedulerConfig::from_json(r#"{"look_ahead_periods": 3}"#)?;
    let scheduler = Scheduler::new(config)?;
    let result = scheduler.schedule(&records)?;

    println!("排程序列:");
    for (period, production) in result.plan.production_series() {
        println!("  第 {} 期: {}", period, production);
    }

    for product in result.plan.products() {
        println!("\n{} 庫存趨勢:", product);
        for (period, inventory) in result.plan.inventory_series(product) {
            println!("  第 {} 期: {}", period, inventory);
        }
    }

    let stockouts = result
        .warnings
        .iter()
        .filter(|w| w.severity == WarningSeverity::Warning)
        .count();
    println!("\n缺貨警告: {} 筆", stockouts);
    println!("閒置期別: {:?}", result.plan.idle_periods());

    println!("\n彙總 (JSON):\n{}", result.summary.to_json()?);

    Ok(())
}
