// ==========================================
// 考勤违规日报生成器 - 配置层
// ==========================================
// 职责: 班次时间与列名映射的加载、更新、持久化
// 存储: 用户主目录下的 JSON 文档
// ==========================================

pub mod config_manager;
pub mod error;
pub mod report_config;
pub mod user_config;

// 重导出核心配置类型
pub use config_manager::ConfigManager;
pub use error::{ConfigError, ConfigResult};
pub use report_config::ReportConfig;
pub use user_config::{default_shift_config, ColumnConfig, ShiftConfig, UserConfig};
