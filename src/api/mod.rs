// ==========================================
// 考勤违规日报生成器 - API 层
// ==========================================
// 职责: 提供报表生成与配置管理接口，供会话层与命令行调用
// ==========================================

pub mod config_api;
pub mod error;
pub mod report_api;

// 重导出核心类型
pub use config_api::ConfigApi;
pub use error::{ApiError, ApiResult};
pub use report_api::ReportApi;
