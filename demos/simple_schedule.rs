//! 簡單排程示例：兩個產品共用一條產線

use runout::{schedule, Decimal, InputRecord, SchedulerConfig};

fn main() -> anyhow::Result<()> {
    runout::logging::init();

    println!("=== 簡單排程示例 ===\n");

    let mut records = vec![
        InputRecord::inventory("A", Decimal::from(10)),
        InputRecord::production_rate("A", Decimal::from(5)),
        InputRecord::inventory("B", Decimal::from(2)),
        InputRecord::production_rate("B", Decimal::from(3)),
    ];
    for period in 1..=3 {
        records.push(InputRecord::demand("A", period, Decimal::from(4)));
        records.push(InputRecord::demand("B", period, Decimal::from(4)));
    }

    let result = schedule(&records, SchedulerConfig::default())?;

    println!("{}", result.plan.column_names().join(" | "));
    for row in result.plan.to_rows() {
        println!("{}", row.join(" | "));
    }

    println!("\n平均需求滿足率:");
    for row in result.summary.to_rows() {
        println!("  - {}: {}", row[0], row[1]);
    }

    Ok(())
}
