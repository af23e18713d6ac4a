// ==========================================
// 考勤违规日报生成器 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 数值强制转换 / 日期解析
// 约定: 任何单元格解析失败都返回 None，不报错
// ==========================================

use crate::importer::raw_table::CellValue;
use crate::importer::time_normalizer::{TimeNormalizer, TimeValue, DATE_FORMATS};
use chrono::NaiveDate;

pub struct DataCleaner;

impl DataCleaner {
    /// 文本字段: TRIM，空值为 None
    ///
    /// 整数值的数值单元格不带小数部分（班次代码可能被录成数字）
    pub fn clean_text(&self, cell: &CellValue) -> Option<String> {
        match cell {
            CellValue::Empty | CellValue::Error(_) => None,
            CellValue::Text(s) => self.normalize_null(s),
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                Some(format!("{}", *n as i64))
            }
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            CellValue::Time(t) => Some(t.format("%H:%M:%S").to_string()),
        }
    }

    pub fn normalize_null(&self, value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// 持续时长（分钟）: 数值强制转换，保留两位小数
    pub fn clean_duration(&self, cell: &CellValue) -> Option<f64> {
        let value = match cell {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        if !value.is_finite() {
            return None;
        }
        Some(round2(value))
    }

    /// 日期字段: 日期时间取日期部分，文本按常见日期格式解析
    pub fn clean_date(&self, cell: &CellValue, normalizer: &TimeNormalizer) -> Option<NaiveDate> {
        match cell {
            CellValue::DateTime(dt) => Some(dt.date()),
            CellValue::Text(s) => {
                let text = s.trim();
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                    .or_else(|| {
                        normalizer
                            .normalize(&TimeValue::Text(text.to_string()))
                            .map(|dt| dt.date())
                    })
            }
            _ => None,
        }
    }
}

/// 四舍五入到两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
