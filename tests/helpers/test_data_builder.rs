// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// 默认列名表头
pub const CSV_HEADER: &str = "日期,姓名,班次,状态,开始时间,结束时间,持续时长min";

// ==========================================
// 考勤行构建器
// ==========================================

#[derive(Debug, Clone)]
pub struct AttendanceRowBuilder {
    date: String,
    employee: String,
    shift: String,
    status: String,
    start: String,
    end: String,
    duration: String,
}

impl AttendanceRowBuilder {
    pub fn new(employee: &str) -> Self {
        Self {
            date: "2025-01-01".to_string(),
            employee: employee.to_string(),
            shift: "A".to_string(),
            status: "小休".to_string(),
            start: "2025-01-01 10:00:00".to_string(),
            end: "2025-01-01 10:05:00".to_string(),
            duration: "5".to_string(),
        }
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn shift(mut self, shift: &str) -> Self {
        self.shift = shift.to_string();
        self
    }

    pub fn meal(mut self) -> Self {
        self.status = "就餐".to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn start(mut self, start: &str) -> Self {
        self.start = start.to_string();
        self
    }

    pub fn end(mut self, end: &str) -> Self {
        self.end = end.to_string();
        self
    }

    pub fn duration(mut self, minutes: f64) -> Self {
        self.duration = minutes.to_string();
        self
    }

    /// 置空某一列（模拟缺失单元格）
    pub fn blank_duration(mut self) -> Self {
        self.duration.clear();
        self
    }

    pub fn to_csv_line(&self) -> String {
        [
            self.date.as_str(),
            self.employee.as_str(),
            self.shift.as_str(),
            self.status.as_str(),
            self.start.as_str(),
            self.end.as_str(),
            self.duration.as_str(),
        ]
        .join(",")
    }
}

/// 写入考勤表 CSV
pub fn write_csv(dir: &Path, name: &str, rows: &[AttendanceRowBuilder]) -> PathBuf {
    write_csv_with_header(dir, name, CSV_HEADER, rows)
}

pub fn write_csv_with_header(
    dir: &Path,
    name: &str,
    header: &str,
    rows: &[AttendanceRowBuilder],
) -> PathBuf {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(&row.to_csv_line());
        content.push('\n');
    }

    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
