// ==========================================
// 考勤违规日报生成器 - 原始表格
// ==========================================
// 文件解析器的输出: 表头 + 按列名索引的单元格
// 单元格保留类型（日期时间/时刻/数值/文本），供归一化器判断
// ==========================================

use chrono::{NaiveDateTime, NaiveTime};
use std::collections::HashMap;

// ==========================================
// CellValue - 单元格值
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Bool(bool),
    Text(String),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    /// Excel 错误值（#N/A 等）
    Error(String),
}

impl CellValue {
    /// 文本单元格: 空白视为空
    pub fn text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// 缺失列按空值处理
pub static EMPTY_CELL: CellValue = CellValue::Empty;

pub type RawRow = HashMap<String, CellValue>;

// ==========================================
// RawTable - 原始表格
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    /// 已跳过完全空白的行
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// 追加一行（完全空白的行被跳过）
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = CellValue>) {
        let mut row = RawRow::new();
        for (header, cell) in self.headers.iter().zip(cells) {
            if header.is_empty() {
                continue;
            }
            row.insert(header.clone(), cell);
        }

        if row.values().all(CellValue::is_empty) {
            return;
        }
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
