// ==========================================
// 考勤违规日报生成器 - 报表 API
// ==========================================
// 职责: 对选定的考勤表运行一次完整报表
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReportConfig;
use crate::domain::report::AttendanceReport;
use crate::engine::ReportPipeline;
use chrono::NaiveDate;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportApi {
    /// 固定处理日期（None 表示运行当天）
    processing_date: Option<NaiveDate>,
}

impl ReportApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processing_date(processing_date: NaiveDate) -> Self {
        Self {
            processing_date: Some(processing_date),
        }
    }

    /// 生成报表
    ///
    /// # 参数
    /// - file_path: 考勤表路径（.xlsx/.xls/.csv）
    /// - config: 本次运行的配置快照
    ///
    /// # 返回
    /// - Ok(AttendanceReport): 完整报表
    /// - Err(ApiError): 路径为空或考勤表读取失败
    pub fn generate_report(
        &self,
        file_path: &Path,
        config: ReportConfig,
    ) -> ApiResult<AttendanceReport> {
        if file_path.as_os_str().is_empty() {
            return Err(ApiError::InvalidInput("未选择考勤表文件".to_string()));
        }

        let pipeline = match self.processing_date {
            Some(date) => ReportPipeline::with_processing_date(config, date),
            None => ReportPipeline::new(config),
        };

        Ok(pipeline.run_file(file_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::ImportError;

    #[test]
    fn test_empty_path_is_invalid() {
        let result = ReportApi::new().generate_report(Path::new(""), ReportConfig::default());
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file_is_import_error() {
        let result = ReportApi::new()
            .generate_report(Path::new("/nonexistent/考勤.xlsx"), ReportConfig::default());
        assert!(matches!(
            result,
            Err(ApiError::ImportError(ImportError::FileNotFound(_)))
        ));
    }
}
