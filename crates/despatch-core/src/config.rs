//! 出貨日計算配置

use serde::{Deserialize, Serialize};

use crate::Result;

/// 提前期推算方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMethod {
    /// 逐日推算
    #[default]
    DayStepping,

    /// 整週分解 + 餘數逐日推算
    WeekDecomposition,
}

/// 出貨日計算配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DespatchConfig {
    /// 提前期推算方式（兩種方式結果一致）
    pub projection: ProjectionMethod,

    /// 是否在計算前將下單時間截斷為當日零點
    /// - false: 保留時間部分，結果帶相同時間（預設）
    /// - true: 結果為純日期（00:00:00）
    pub truncate_time_of_day: bool,
}

impl DespatchConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置推算方式
    pub fn with_projection(mut self, projection: ProjectionMethod) -> Self {
        self.projection = projection;
        self
    }

    /// 建構器模式：設置是否截斷時間
    pub fn with_truncate_time_of_day(mut self, truncate: bool) -> Self {
        self.truncate_time_of_day = truncate;
        self
    }

    /// 從 JSON 載入，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DespatchConfig::new();

        assert_eq!(config.projection, ProjectionMethod::DayStepping);
        assert!(!config.truncate_time_of_day);
    }

    #[test]
    fn test_config_builder() {
        let config = DespatchConfig::new()
            .with_projection(ProjectionMethod::WeekDecomposition)
            .with_truncate_time_of_day(true);

        assert_eq!(config.projection, ProjectionMethod::WeekDecomposition);
        assert!(config.truncate_time_of_day);
    }

    #[test]
    fn test_config_from_json() {
        let config = DespatchConfig::from_json(r#"{ "projection": "WeekDecomposition" }"#).unwrap();
        assert_eq!(config.projection, ProjectionMethod::WeekDecomposition);
        assert!(!config.truncate_time_of_day);

        let config = DespatchConfig::from_json("{}").unwrap();
        assert_eq!(config, DespatchConfig::default());

        assert!(DespatchConfig::from_json(r#"{ "projection": "Calendar" }"#).is_err());
    }
}
