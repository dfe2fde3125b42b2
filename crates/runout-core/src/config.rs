//! 排程配置模型

use serde::{Deserialize, Serialize};

use crate::{Result, ScheduleError};

/// 預設前瞻期數
pub const DEFAULT_LOOK_AHEAD_PERIODS: usize = 5;

/// 排程器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// 前瞻期數（計算耗盡比時納入的未來需求期數）
    pub look_ahead_periods: usize,
}

impl SchedulerConfig {
    /// 創建新的排程配置
    pub fn new(look_ahead_periods: usize) -> Self {
        Self { look_ahead_periods }
    }

    /// 建構器模式：設置前瞻期數
    pub fn with_look_ahead_periods(mut self, periods: usize) -> Self {
        self.look_ahead_periods = periods;
        self
    }

    /// 驗證配置
    ///
    /// 前瞻期數為 0 時窗口恆為空，所有產品都不會被排程，視為無效配置。
    pub fn validate(&self) -> Result<()> {
        if self.look_ahead_periods == 0 {
            return Err(ScheduleError::InvalidConfig(
                "前瞻期數必須大於 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 從 JSON 解析配置，缺少的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use runout_core::SchedulerConfig;
    /// let config = SchedulerConfig::from_json(r#"{"look_ahead_periods": 3}"#).unwrap();
    /// assert_eq!(config.look_ahead_periods, 3);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScheduleError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOOK_AHEAD_PERIODS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SchedulerConfig::default();
        assert_eq!(config.look_ahead_periods, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SchedulerConfig::default().with_look_ahead_periods(8);
        assert_eq!(config.look_ahead_periods, 8);
    }

    #[test]
    fn test_zero_look_ahead_rejected() {
        let config = SchedulerConfig::new(0);
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json_defaults() {
        let config = SchedulerConfig::from_json("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());

        assert!(SchedulerConfig::from_json(r#"{"look_ahead_periods": 0}"#).is_err());
        assert!(SchedulerConfig::from_json("not json").is_err());
    }
}
