// ==========================================
// 考勤违规日报生成器 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::raw_table::{CellValue, RawTable};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveTime;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

const SECONDS_PER_DAY: f64 = 86_400.0;

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格
    ///
    /// # 参数
    /// - file_path: 文件路径
    /// - sheet_name: 期望的工作表（不存在时读取第一个工作表;CSV 忽略）
    fn parse_to_table(&self, file_path: &Path, sheet_name: Option<&str>)
        -> ImportResult<RawTable>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn clean_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_table(&self, file_path: &Path, _sheet_name: Option<&str>) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 按字节读取，非法 UTF-8 以替换字符保留，不中断整张表
        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|field| clean_header(&String::from_utf8_lossy(field)))
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::MissingHeader(file_path.display().to_string()));
        }

        let mut table = RawTable::new(headers);
        for result in reader.byte_records() {
            let record = result?;
            table.push_row(
                record
                    .iter()
                    .map(|field| CellValue::text(&String::from_utf8_lossy(field))),
            );
        }

        Ok(table)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_table(&self, file_path: &Path, sheet_name: Option<&str>) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let target = select_sheet(&workbook.sheet_names(), sheet_name)
            .ok_or_else(|| ImportError::NoWorksheet(file_path.display().to_string()))?;

        let range = workbook.worksheet_range(&target)?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::MissingHeader(target.clone()))?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| clean_header(&cell.to_string()))
            .collect();

        let mut table = RawTable::new(headers);
        for data_row in rows {
            table.push_row(data_row.iter().map(convert_excel_cell));
        }

        Ok(table)
    }
}

/// 选择工作表: 配置的表名存在则用之，否则取第一个
fn select_sheet(sheet_names: &[String], configured: Option<&str>) -> Option<String> {
    match configured {
        Some(name) if sheet_names.iter().any(|s| s == name) => Some(name.to_string()),
        _ => {
            let first = sheet_names.first().cloned()?;
            if let Some(name) = configured {
                tracing::debug!("工作表 {} 不存在，读取第一个工作表 {}", name, first);
            }
            Some(first)
        }
    }
}

/// Excel 单元格 → CellValue
///
/// 日期时间序列值 < 1 的单元格只有时刻部分
fn convert_excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::text(s),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            if (0.0..1.0).contains(&serial) {
                let seconds = (serial * SECONDS_PER_DAY).round() as u32 % 86_400;
                NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
                    .map(CellValue::Time)
                    .unwrap_or(CellValue::Empty)
            } else {
                dt.as_datetime()
                    .map(CellValue::DateTime)
                    .unwrap_or(CellValue::Number(serial))
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_table(&self, file_path: &Path, sheet_name: Option<&str>) -> ImportResult<RawTable> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_to_table(file_path, sheet_name),
            "xlsx" | "xls" => ExcelParser.parse_to_table(file_path, sheet_name),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}
