// ==========================================
// 考勤违规日报生成器 - 引擎层
// ==========================================
// 职责: 班次解析、记录分类、单日/区间聚合
// 红线: 引擎不读文件，只消费导入层产出的记录
// ==========================================

pub mod classifier;
pub mod daily_aggregator;
pub mod orchestrator;
pub mod range_aggregator;
pub mod shift_resolver;
pub mod thresholds;

// 重导出核心引擎
pub use classifier::{Classification, Contribution, RecordClassifier};
pub use daily_aggregator::{summarize_all, summarize_day, DailyAggregator};
pub use orchestrator::ReportPipeline;
pub use range_aggregator::RangeAggregator;
pub use shift_resolver::ShiftResolver;
