// ==========================================
// 考勤违规日报生成器 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 逻辑字段映射 + 类型归一化
// 缺失列按全空列处理
// ==========================================

use crate::config::ColumnConfig;
use crate::domain::attendance::RawAttendanceRecord;
use crate::domain::types::AttendanceStatus;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::raw_table::{CellValue, RawRow, RawTable, EMPTY_CELL};
use crate::importer::time_normalizer::TimeNormalizer;

pub struct FieldMapper<'a> {
    columns: &'a ColumnConfig,
    normalizer: TimeNormalizer,
    cleaner: DataCleaner,
}

impl<'a> FieldMapper<'a> {
    pub fn new(columns: &'a ColumnConfig, normalizer: TimeNormalizer) -> Self {
        Self {
            columns,
            normalizer,
            cleaner: DataCleaner,
        }
    }

    /// 表头中不存在的配置列（这些字段将全部为空）
    pub fn missing_columns(&self, table: &RawTable) -> Vec<String> {
        self.columns
            .data_columns()
            .iter()
            .filter(|col| !table.has_column(col))
            .map(|col| col.to_string())
            .collect()
    }

    /// 映射整张表
    pub fn map_table(&self, table: &RawTable) -> Vec<RawAttendanceRecord> {
        table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.map_row(row, idx + 1))
            .collect()
    }

    /// 映射单行
    pub fn map_row(&self, row: &RawRow, row_number: usize) -> RawAttendanceRecord {
        let status = self
            .cleaner
            .clean_text(self.cell(row, &self.columns.status))
            .map(|s| AttendanceStatus::from_label(&s))
            .unwrap_or(AttendanceStatus::Other);

        RawAttendanceRecord {
            row_number,
            date: self
                .cleaner
                .clean_date(self.cell(row, &self.columns.date), &self.normalizer),
            employee: self.cleaner.clean_text(self.cell(row, &self.columns.employee)),
            shift_code: self
                .cleaner
                .clean_text(self.cell(row, &self.columns.shift_code)),
            status,
            start_time: self
                .normalizer
                .normalize_cell(self.cell(row, &self.columns.start_time)),
            end_time: self
                .normalizer
                .normalize_cell(self.cell(row, &self.columns.end_time)),
            duration_min: self
                .cleaner
                .clean_duration(self.cell(row, &self.columns.duration)),
        }
    }

    fn cell<'r>(&self, row: &'r RawRow, column: &str) -> &'r CellValue {
        row.get(column).unwrap_or(&EMPTY_CELL)
    }
}
