// ==========================================
// 考勤违规日报生成器 - 核心库
// ==========================================
// 输入: 考勤表（Excel / CSV）+ 班次配置
// 输出: 单日违规报表 + 日期区间汇总
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录、班次、报表结构
pub mod domain;

// 导入层 - 考勤表读取与归一化
pub mod importer;

// 引擎层 - 分类与聚合
pub mod engine;

// 配置层 - 班次与列名配置
pub mod config;

// 展示层 - 报表树
pub mod render;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 报表与配置接口
pub mod api;

// 应用层 - 会话状态
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AttendanceStatus, RequiredField, ViolationKind};

// 领域实体
pub use domain::{
    AttendanceRecord, AttendanceReport, DailyReport, DailySummary, RangeReport, ShiftOccurrence,
    ShiftTable, ShiftWindow,
};

// 引擎
pub use engine::{RangeAggregator, RecordClassifier, ReportPipeline, ShiftResolver};

// 配置
pub use config::{ConfigManager, ReportConfig, UserConfig};

// API
pub use api::{ApiError, ApiResult, ConfigApi, ReportApi};

// 会话
pub use app::ReportSession;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "考勤违规日报生成器";
