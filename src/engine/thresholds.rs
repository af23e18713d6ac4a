// ==========================================
// 考勤违规日报生成器 - 业务阈值
// ==========================================
// 固定业务常量，不做配置化
// ==========================================

use chrono::Duration;

/// 单日用餐总时长上限（分钟），严格大于即超时
pub const MEAL_OVER_MINUTES: f64 = 46.0;

/// 单日小休总时长上限（分钟），严格大于即超时
pub const BREAK_SUM_OVER_MINUTES: f64 = 61.0;

/// 单次小休时长上限（分钟），严格大于即记一次
pub const BREAK_ONCE_OVER_MINUTES: f64 = 8.0;

/// 班次首尾窗口（分钟）
pub const SHIFT_BOUNDARY_WINDOW_MINUTES: i64 = 30;

pub fn shift_boundary_window() -> Duration {
    Duration::minutes(SHIFT_BOUNDARY_WINDOW_MINUTES)
}

pub fn is_meal_over(minutes: f64) -> bool {
    minutes > MEAL_OVER_MINUTES
}

pub fn is_break_sum_over(minutes: f64) -> bool {
    minutes > BREAK_SUM_OVER_MINUTES
}

pub fn is_break_once_over(minutes: f64) -> bool {
    minutes > BREAK_ONCE_OVER_MINUTES
}
