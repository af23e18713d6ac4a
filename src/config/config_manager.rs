// ==========================================
// 考勤违规日报生成器 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、更新与持久化
// 存储: JSON 文档（默认 ~/.daily_report_config/user_config.json）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::report_config::ReportConfig;
use crate::config::user_config::{
    normalize_shift_config, ColumnConfig, ShiftConfig, UserConfig,
};
use std::fs;
use std::path::{Path, PathBuf};

/// 配置目录名（位于用户主目录下）
pub const CONFIG_DIR_NAME: &str = ".daily_report_config";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "user_config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    config: UserConfig,
}

impl ConfigManager {
    /// 默认配置文件路径
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 从默认路径加载
    pub fn load_default() -> ConfigResult<Self> {
        Ok(Self::load(Self::default_config_path()?))
    }

    /// 加载配置文件
    ///
    /// - 文件不存在: 写入默认配置并返回
    /// - 文件无法读取或格式错误: 记录警告，使用默认配置（不覆盖原文件）
    pub fn load(config_path: impl Into<PathBuf>) -> Self {
        let config_path = config_path.into();

        if !config_path.exists() {
            let manager = Self {
                config_path,
                config: UserConfig::default(),
            };
            if let Err(e) = manager.save() {
                tracing::warn!("默认配置写入失败: {}", e);
            } else {
                tracing::info!("已创建默认配置: {}", manager.config_path.display());
            }
            return manager;
        }

        let config = match read_config(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("配置加载失败，使用默认配置: {}", e);
                UserConfig::default()
            }
        };

        Self {
            config_path,
            config,
        }
    }

    /// 保存当前配置
    pub fn save(&self) -> ConfigResult<()> {
        let path_str = self.config_path.display().to_string();
        let write_err = |message: String| ConfigError::ConfigWriteError {
            path: path_str.clone(),
            message,
        };

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }

        // serde_json 默认保留非 ASCII 字符
        let json = serde_json::to_string_pretty(&self.config)
            .map_err(|e| write_err(e.to_string()))?;
        fs::write(&self.config_path, json).map_err(|e| write_err(e.to_string()))?;

        tracing::debug!("配置已保存: {}", path_str);
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    pub fn shift_config(&self) -> &ShiftConfig {
        &self.config.shift_config
    }

    pub fn column_config(&self) -> &ColumnConfig {
        &self.config.column_config
    }

    /// 更新班次时间（空条目被丢弃）并保存
    pub fn update_shift(&mut self, shifts: ShiftConfig) -> ConfigResult<()> {
        let shifts = normalize_shift_config(shifts);
        tracing::info!("更新班次配置: {} 个班次", shifts.len());
        self.config.shift_config = shifts;
        self.save()
    }

    /// 更新列名映射（空列名回退默认值）并保存
    pub fn update_columns(&mut self, columns: ColumnConfig) -> ConfigResult<()> {
        let columns = columns.normalized();
        tracing::info!("更新列名配置: {:?}", columns);
        self.config.column_config = columns;
        self.save()
    }

    /// 生成本次运行使用的配置快照
    pub fn snapshot(&self) -> ReportConfig {
        ReportConfig::from_user_config(&self.config)
    }
}

fn read_config(path: &Path) -> ConfigResult<UserConfig> {
    let path_str = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::ConfigReadError {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| ConfigError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let manager = ConfigManager::load(&path);
        assert!(path.exists());
        assert_eq!(manager.shift_config().len(), 12);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("持续时长min"));
    }

    #[test]
    fn test_load_invalid_json_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let manager = ConfigManager::load(&path);
        assert_eq!(manager.config(), &UserConfig::default());

        // 原文件保持不变
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_update_shift_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut manager = ConfigManager::load(&path);

        let mut shifts = ShiftConfig::new();
        shifts.insert("N".to_string(), ("22:00:00".to_string(), "06:00:00".to_string()));
        manager.update_shift(shifts).unwrap();

        let reloaded = ConfigManager::load(&path);
        assert_eq!(reloaded.shift_config().len(), 1);
        assert_eq!(
            reloaded.shift_config().get("N"),
            Some(&("22:00:00".to_string(), "06:00:00".to_string()))
        );
    }

    #[test]
    fn test_update_columns_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut manager = ConfigManager::load(&path);

        let columns = ColumnConfig {
            employee: "员工姓名".to_string(),
            ..ColumnConfig::default()
        };
        manager.update_columns(columns).unwrap();

        let reloaded = ConfigManager::load(&path);
        assert_eq!(reloaded.column_config().employee, "员工姓名");
    }
}
