// ==========================================
// 考勤违规日报生成器 - 领域类型定义
// ==========================================
// 状态: 就餐 / 小休 / 其他
// 违规桶: 用餐 / 小休总时长 / 单次小休 / 首尾半小时小休
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 考勤状态 (Attendance Status)
// ==========================================
// 源表中的中文状态值，仅 就餐/小休 参与分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Meal,  // 就餐
    Break, // 小休
    Other, // 其他状态（在岗、培训等）
}

impl AttendanceStatus {
    pub const MEAL_LABEL: &'static str = "就餐";
    pub const BREAK_LABEL: &'static str = "小休";

    /// 从源表状态文本解析（精确匹配，去除首尾空白）
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            Self::MEAL_LABEL => AttendanceStatus::Meal,
            Self::BREAK_LABEL => AttendanceStatus::Break,
            _ => AttendanceStatus::Other,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, AttendanceStatus::Break)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Meal => write!(f, "MEAL"),
            AttendanceStatus::Break => write!(f, "BREAK"),
            AttendanceStatus::Other => write!(f, "OTHER"),
        }
    }
}

// ==========================================
// 违规桶 (Violation Bucket)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Meal,               // 用餐时长（分钟）
    BreakSum,           // 小休总时长（分钟）
    BreakOnce,          // 单次小休超时（次数）
    BreakShiftBoundary, // 首尾半小时小休（次数）
}

impl ViolationKind {
    /// i18n 键（report.bucket.*）
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ViolationKind::Meal => "report.bucket.meal",
            ViolationKind::BreakSum => "report.bucket.break_sum",
            ViolationKind::BreakOnce => "report.bucket.break_once",
            ViolationKind::BreakShiftBoundary => "report.bucket.break_shift_boundary",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Meal => write!(f, "meal"),
            ViolationKind::BreakSum => write!(f, "break_sum"),
            ViolationKind::BreakOnce => write!(f, "break_once"),
            ViolationKind::BreakShiftBoundary => write!(f, "break_shift_boundary"),
        }
    }
}

// ==========================================
// 必填字段 (Required Field)
// ==========================================
// 用于记录被排除的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Date,
    Employee,
    ShiftCode,
    StartTime,
    EndTime,
    Duration,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Date => write!(f, "日期"),
            RequiredField::Employee => write!(f, "姓名"),
            RequiredField::ShiftCode => write!(f, "班次"),
            RequiredField::StartTime => write!(f, "开始时间"),
            RequiredField::EndTime => write!(f, "结束时间"),
            RequiredField::Duration => write!(f, "持续时长min"),
        }
    }
}
