// ==========================================
// 考勤违规日报生成器 - 时间归一化器
// ==========================================
// 输入: 任意形态的时间值（空 / 完整时间戳 / 仅时刻 / 文本）
// 输出: NaiveDateTime 或 None（空值哨兵），从不报错
// ==========================================

use crate::importer::raw_table::CellValue;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// 完整时间戳文本格式
const DATETIME_FORMATS: [&str; 10] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y%m%d%H%M%S",
];

/// 仅日期文本格式（按零点处理）
pub(crate) const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%Y.%m.%d"];

/// 仅时刻文本格式（与处理日期组合）
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

// ==========================================
// TimeValue - 时间值（封闭变体）
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    Absent,
    Instant(NaiveDateTime),
    TimeOfDay(NaiveTime),
    Text(String),
}

impl From<&CellValue> for TimeValue {
    fn from(cell: &CellValue) -> Self {
        match cell {
            CellValue::Empty | CellValue::Error(_) => TimeValue::Absent,
            CellValue::DateTime(dt) => TimeValue::Instant(*dt),
            CellValue::Time(t) => TimeValue::TimeOfDay(*t),
            CellValue::Text(s) => TimeValue::Text(s.clone()),
            // 数值/布尔不是时间，交给文本解析后必然失败
            CellValue::Number(n) => TimeValue::Text(n.to_string()),
            CellValue::Bool(b) => TimeValue::Text(b.to_string()),
        }
    }
}

// ==========================================
// TimeNormalizer - 时间归一化器
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeNormalizer {
    /// 处理日期: 仅时刻的值与之组合
    processing_date: NaiveDate,
}

impl TimeNormalizer {
    pub fn new(processing_date: NaiveDate) -> Self {
        Self { processing_date }
    }

    pub fn processing_date(&self) -> NaiveDate {
        self.processing_date
    }

    /// 归一化为时间戳;无法识别返回 None
    pub fn normalize(&self, value: &TimeValue) -> Option<NaiveDateTime> {
        match value {
            TimeValue::Absent => None,
            TimeValue::Instant(dt) => Some(*dt),
            TimeValue::TimeOfDay(t) => Some(self.processing_date.and_time(*t)),
            TimeValue::Text(text) => self.parse_text(text),
        }
    }

    pub fn normalize_cell(&self, cell: &CellValue) -> Option<NaiveDateTime> {
        self.normalize(&TimeValue::from(cell))
    }

    fn parse_text(&self, text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .or_else(|| {
                TIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
                    .map(|t| self.processing_date.and_time(t))
            })
    }
}
