// ==========================================
// 考勤违规日报生成器 - 配置管理 API
// ==========================================
// 职责: 班次与列名配置的查询、校验、更新
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ColumnConfig, ConfigManager, ReportConfig, ShiftConfig};
use crate::domain::shift::ShiftWindow;

// ==========================================
// ConfigApi - 配置管理 API
// ==========================================

/// 配置管理API
///
/// 职责：
/// 1. 班次时间查询与更新（时间格式校验）
/// 2. 列名映射查询与更新
/// 3. 为报表运行生成配置快照
pub struct ConfigApi {
    config_manager: ConfigManager,
}

impl ConfigApi {
    pub fn new(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    pub fn config_manager(&self) -> &ConfigManager {
        &self.config_manager
    }

    pub fn shift_config(&self) -> &ShiftConfig {
        self.config_manager.shift_config()
    }

    pub fn column_config(&self) -> &ColumnConfig {
        self.config_manager.column_config()
    }

    /// 更新班次时间
    ///
    /// 空条目被丢弃;非空但无法解析的时间拒绝整批更新
    pub fn update_shift_config(&mut self, shifts: ShiftConfig) -> ApiResult<()> {
        for (code, (start, end)) in &shifts {
            let blank = code.trim().is_empty() || start.trim().is_empty() || end.trim().is_empty();
            if blank {
                continue;
            }
            if ShiftWindow::parse(start, end).is_none() {
                return Err(ApiError::InvalidInput(format!(
                    "班次 {} 时间格式错误: {} - {}",
                    code, start, end
                )));
            }
        }

        self.config_manager.update_shift(shifts)?;
        Ok(())
    }

    /// 更新列名映射（空列名回退默认值）
    pub fn update_column_config(&mut self, columns: ColumnConfig) -> ApiResult<()> {
        self.config_manager.update_columns(columns)?;
        Ok(())
    }

    pub fn snapshot(&self) -> ReportConfig {
        self.config_manager.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn api(dir: &TempDir) -> ConfigApi {
        ConfigApi::new(ConfigManager::load(dir.path().join("user_config.json")))
    }

    #[test]
    fn test_invalid_shift_time_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        let mut shifts = ShiftConfig::new();
        shifts.insert("A".to_string(), ("25:00:00".to_string(), "15:00:00".to_string()));

        let result = api.update_shift_config(shifts);
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
        assert_eq!(api.shift_config().len(), 12);
    }

    #[test]
    fn test_update_shift_config_persists() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        let mut shifts = ShiftConfig::new();
        shifts.insert("N".to_string(), ("22:00:00".to_string(), "02:00:00".to_string()));
        shifts.insert("X".to_string(), ("".to_string(), "02:00:00".to_string()));
        api.update_shift_config(shifts).unwrap();

        let reloaded = ConfigManager::load(dir.path().join("user_config.json"));
        assert_eq!(reloaded.shift_config().len(), 1);
        assert!(api.snapshot().shifts.get("N").unwrap().crosses_midnight());
    }
}
