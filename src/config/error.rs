// ==========================================
// 考勤违规日报生成器 - 配置模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置模块错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("无法确定用户主目录")]
    HomeDirUnavailable,

    #[error("配置读取失败 ({path}): {message}")]
    ConfigReadError { path: String, message: String },

    #[error("配置保存失败 ({path}): {message}")]
    ConfigWriteError { path: String, message: String },

    #[error("配置格式错误 ({path}): {message}")]
    ConfigParseError { path: String, message: String },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
