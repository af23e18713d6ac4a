// ==========================================
// 考勤违规日报生成器 - 会话状态
// ==========================================
// 职责: 持有配置、当前选择的文件与最近一次成功的报表
// 规则: 运行失败时保留上一次报表，只更新失败信息
// ==========================================

use crate::api::{ApiResult, ConfigApi, ReportApi};
use crate::config::ConfigManager;
use crate::domain::report::AttendanceReport;
use crate::i18n::t_with_args;
use crate::render::{build_daily_trees, build_range_tree, TreeNode};
use std::path::{Path, PathBuf};

/// 报表会话
pub struct ReportSession {
    /// 配置管理API
    pub config_api: ConfigApi,

    /// 报表API
    pub report_api: ReportApi,

    selected_file: Option<PathBuf>,
    last_report: Option<AttendanceReport>,
    last_error: Option<String>,
}

impl ReportSession {
    pub fn new(config_manager: ConfigManager, report_api: ReportApi) -> Self {
        Self {
            config_api: ConfigApi::new(config_manager),
            report_api,
            selected_file: None,
            last_report: None,
            last_error: None,
        }
    }

    /// 选择考勤表并生成报表
    ///
    /// 每次选择都基于当前配置快照从头计算
    pub fn select_file(&mut self, file_path: impl AsRef<Path>) -> ApiResult<&AttendanceReport> {
        let file_path = file_path.as_ref();
        self.selected_file = Some(file_path.to_path_buf());

        match self
            .report_api
            .generate_report(file_path, self.config_api.snapshot())
        {
            Ok(report) => {
                self.last_error = None;
                Ok(self.last_report.insert(report))
            }
            Err(e) => {
                tracing::error!("报表生成失败: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn last_report(&self) -> Option<&AttendanceReport> {
        self.last_report.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// 状态栏文本
    pub fn status_message(&self) -> Option<String> {
        if let Some(error) = &self.last_error {
            return Some(t_with_args("run.failed", &[("error", error.as_str())]));
        }
        let path = self.selected_file.as_ref()?.display().to_string();
        Some(t_with_args("run.selected", &[("path", path.as_str())]))
    }

    /// 最近一次报表的单日树
    pub fn daily_trees(&self) -> Vec<TreeNode> {
        self.last_report
            .as_ref()
            .map(|r| build_daily_trees(&r.daily_summaries))
            .unwrap_or_default()
    }

    /// 最近一次报表的汇总树
    pub fn range_tree(&self) -> Option<TreeNode> {
        self.last_report
            .as_ref()
            .and_then(|r| r.range.as_ref())
            .map(build_range_tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{set_locale, LOCALE_TEST_LOCK};
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> ReportSession {
        ReportSession::new(
            ConfigManager::load(dir.path().join("user_config.json")),
            ReportApi::with_processing_date(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()),
        )
    }

    fn write_csv(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("考勤.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "日期,姓名,班次,状态,开始时间,结束时间,持续时长min").unwrap();
        writeln!(
            file,
            "2025-01-01,Alice,A,小休,2025-01-01 06:10:00,2025-01-01 06:19:00,9"
        )
        .unwrap();
        path
    }

    #[test]
    fn test_failed_run_keeps_previous_report() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("zh-CN");

        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir);
        let mut session = session(&dir);

        let run_id = session.select_file(&csv).unwrap().run_id;
        assert_eq!(session.daily_trees().len(), 1);
        assert!(session.range_tree().is_some());

        let result = session.select_file(dir.path().join("missing.csv"));
        assert!(result.is_err());
        assert_eq!(session.last_report().unwrap().run_id, run_id);
        assert!(session.last_error().unwrap().contains("missing.csv"));
        assert!(session.status_message().unwrap().starts_with("生成失败："));
    }

    #[test]
    fn test_status_message_after_success() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("zh-CN");

        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir);
        let mut session = session(&dir);
        assert!(session.status_message().is_none());

        session.select_file(&csv).unwrap();
        assert!(session.last_error().is_none());
        assert!(session.status_message().unwrap().starts_with("已选择文件："));
    }
}
