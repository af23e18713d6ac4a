// ==========================================
// 考勤违规日报生成器 - 考勤表导入器
// ==========================================
// 导入流程:
// 1. 文件读取与解析（Excel / CSV）
// 2. 列名映射（缺失列补空）
// 3. 单元格归一化（时间 / 日期 / 时长 / 文本）
// ==========================================
// 整表读取失败向上返回;单元格失败只产生空值
// ==========================================

use crate::config::ColumnConfig;
use crate::domain::attendance::RawAttendanceRecord;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{FileParser, UniversalFileParser};
use crate::importer::raw_table::RawTable;
use crate::importer::time_normalizer::TimeNormalizer;
use std::path::Path;

/// 导入结果
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTable {
    /// 源表数据行数（不含空白行）
    pub rows_read: usize,
    /// 表头中缺失的配置列
    pub missing_columns: Vec<String>,
    pub records: Vec<RawAttendanceRecord>,
}

pub struct AttendanceImporter {
    parser: Box<dyn FileParser>,
}

impl Default for AttendanceImporter {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser))
    }
}

impl AttendanceImporter {
    pub fn new(parser: Box<dyn FileParser>) -> Self {
        Self { parser }
    }

    /// 读取文件并映射为原始考勤记录
    pub fn import_file(
        &self,
        file_path: &Path,
        columns: &ColumnConfig,
        normalizer: TimeNormalizer,
    ) -> ImportResult<ImportedTable> {
        tracing::info!("读取考勤表: {}", file_path.display());

        let table = self
            .parser
            .parse_to_table(file_path, Some(columns.sheet_name.as_str()))?;

        Ok(Self::import_table(&table, columns, normalizer))
    }

    /// 映射已解析的表格
    pub fn import_table(
        table: &RawTable,
        columns: &ColumnConfig,
        normalizer: TimeNormalizer,
    ) -> ImportedTable {
        let mapper = FieldMapper::new(columns, normalizer);

        let missing_columns = mapper.missing_columns(table);
        if !missing_columns.is_empty() {
            tracing::warn!("源表缺少列，按空值处理: {:?}", missing_columns);
        }

        let records = mapper.map_table(table);
        tracing::debug!("映射完成: {} 行", records.len());

        ImportedTable {
            rows_read: table.len(),
            missing_columns,
            records,
        }
    }
}
