// ==========================================
// 考勤违规日报生成器 - 考勤记录
// ==========================================
// RawAttendanceRecord: 字段映射后的中间结构（字段可空）
// AttendanceRecord: 通过必填校验、可参与分类的记录
// ==========================================

use crate::domain::types::{AttendanceStatus, RequiredField};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// RawAttendanceRecord - 原始考勤记录
// ==========================================
// 单元格解析失败一律为 None，不中断导入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAttendanceRecord {
    /// 源表行号（从 1 开始，不含表头）
    pub row_number: usize,
    pub date: Option<NaiveDate>,
    pub employee: Option<String>,
    pub shift_code: Option<String>,
    pub status: AttendanceStatus,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    /// 持续时长（分钟，保留两位小数）
    pub duration_min: Option<f64>,
}

impl RawAttendanceRecord {
    /// 校验必填字段，返回可分类的记录
    ///
    /// 缺失时返回第一个为空的字段
    pub fn into_record(self) -> Result<AttendanceRecord, RequiredField> {
        let start_time = self.start_time.ok_or(RequiredField::StartTime)?;
        let end_time = self.end_time.ok_or(RequiredField::EndTime)?;
        let shift_code = self.shift_code.ok_or(RequiredField::ShiftCode)?;
        let date = self.date.ok_or(RequiredField::Date)?;
        let employee = self.employee.ok_or(RequiredField::Employee)?;
        let duration_min = self.duration_min.ok_or(RequiredField::Duration)?;

        Ok(AttendanceRecord {
            row_number: self.row_number,
            date,
            employee,
            shift_code,
            status: self.status,
            start_time,
            end_time,
            duration_min,
        })
    }
}

// ==========================================
// AttendanceRecord - 考勤记录
// ==========================================
// 读取后不可变，单次报表运行内由聚合器持有
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub row_number: usize,
    pub date: NaiveDate,
    pub employee: String,
    pub shift_code: String,
    pub status: AttendanceStatus,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_min: f64,
}
