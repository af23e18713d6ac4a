// ==========================================
// 考勤违规日报生成器 - API层错误类型
// ==========================================
// 职责: 汇总导入层与配置层错误，提供可读的失败原因
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 考勤表读取失败（本次运行无报表）
    #[error("考勤表读取失败: {0}")]
    ImportError(#[from] ImportError),

    #[error("配置错误: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
