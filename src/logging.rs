//! 日誌初始化
//!
//! 排程過程透過 `tracing` 輸出：`info` 為每次排程的摘要（產品數、期數、
//! 停機期數、耗時），`debug` 為逐期的耗盡比與排程決策。
//!
//! # 範例
//! ```no_run
//! use runout::logging;
//!
//! // RUST_LOG=runout_calc=debug cargo run --example simple_schedule
//! logging::init();
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// 排程摘要的預設級別
const DEFAULT_FILTER: &str = "info";

/// 初始化全域日誌
///
/// 級別由 `RUST_LOG` 決定，未設定或無法解析時使用 `info`。
/// 只能在程式啟動時呼叫一次。
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 測試用：輸出逐期決策，重複呼叫不報錯
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("runout_calc=debug"))
        .with_test_writer()
        .try_init();
}
