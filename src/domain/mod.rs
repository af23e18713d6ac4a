// ==========================================
// 考勤违规日报生成器 - 领域模型层
// ==========================================
// 职责: 定义考勤记录、班次窗口、违规报表
// 红线: 不含文件读取逻辑，不含分类/聚合逻辑
// ==========================================

pub mod attendance;
pub mod report;
pub mod shift;
pub mod types;

// 重导出核心类型
pub use attendance::{AttendanceRecord, RawAttendanceRecord};
pub use report::{
    AttendanceReport, CountSummary, DailyReport, DailySummary, RangeReport, RankedEntry,
    RunStats, TopOffenders, ViolationBuckets,
};
pub use shift::{ShiftOccurrence, ShiftTable, ShiftWindow};
pub use types::{AttendanceStatus, RequiredField, ViolationKind};
