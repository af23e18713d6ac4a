// ==========================================
// 考勤违规日报生成器 - 班次解析器
// ==========================================
// 输入: 班次代码 + 记录开始时间
// 输出: 绑定到记录开始日期的班次实例（未配置则为 None）
// ==========================================
// 跨零点修正执行两次:
// 1) 班次时刻绑定到处理日期后，结束早于开始则结束 +1 天
// 2) 重新锚定到记录开始日期后，再次检查并修正
// 两次修正都保留，改动会影响夜班结果
// ==========================================

use crate::domain::shift::{ShiftOccurrence, ShiftTable};
use chrono::{Duration, NaiveDate, NaiveDateTime};

pub struct ShiftResolver<'a> {
    shifts: &'a ShiftTable,
    processing_date: NaiveDate,
}

impl<'a> ShiftResolver<'a> {
    pub fn new(shifts: &'a ShiftTable, processing_date: NaiveDate) -> Self {
        Self {
            shifts,
            processing_date,
        }
    }

    /// 解析班次实例
    pub fn resolve(&self, shift_code: &str, record_start: NaiveDateTime) -> Option<ShiftOccurrence> {
        let window = self.shifts.get(shift_code)?;

        // 阶段 1: 绑定到处理日期
        let start = self.processing_date.and_time(window.start);
        let mut end = self.processing_date.and_time(window.end);
        if end < start {
            end += Duration::days(1);
        }

        // 阶段 2: 重新锚定到记录开始日期
        let anchor = record_start.date();
        let start = anchor.and_time(start.time());
        let mut end = anchor.and_time(end.time());
        if end < start {
            end += Duration::days(1);
        }

        Some(ShiftOccurrence { start, end })
    }
}
