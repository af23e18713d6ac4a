// ==========================================
// 考勤违规日报生成器 - 导入层
// ==========================================
// 职责: 外部考勤表读取，生成原始考勤记录
// 支持: Excel (.xlsx/.xls), CSV
// ==========================================

// 模块声明
pub mod attendance_importer;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod raw_table;
pub mod time_normalizer;

// 重导出核心类型
pub use attendance_importer::{AttendanceImporter, ImportedTable};
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
pub use raw_table::{CellValue, RawRow, RawTable};
pub use time_normalizer::{TimeNormalizer, TimeValue};
