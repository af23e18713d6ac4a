// ==========================================
// 考勤违规日报生成器 - 应用层
// ==========================================
// 职责: 会话状态，连接命令行与 API 层
// ==========================================

pub mod state;

// 重导出
pub use state::ReportSession;
