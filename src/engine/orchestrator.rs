// ==========================================
// 考勤违规日报生成器 - 报表流水线
// ==========================================
// 用途: 串联导入、班次解析、分类、单日聚合、区间聚合
// 每次运行从配置快照出发，不持有跨运行状态
// ==========================================

use crate::config::ReportConfig;
use crate::domain::attendance::RawAttendanceRecord;
use crate::domain::report::{AttendanceReport, RunStats};
use crate::engine::classifier::{Classification, RecordClassifier};
use crate::engine::daily_aggregator::{summarize_all, DailyAggregator};
use crate::engine::range_aggregator::RangeAggregator;
use crate::engine::shift_resolver::ShiftResolver;
use crate::importer::{AttendanceImporter, ImportResult, RawTable, TimeNormalizer};
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::{debug, info, info_span};
use uuid::Uuid;

// ==========================================
// ReportPipeline - 报表流水线
// ==========================================

pub struct ReportPipeline {
    config: ReportConfig,
    processing_date: NaiveDate,
    importer: AttendanceImporter,
    classifier: RecordClassifier,
    range: RangeAggregator,
}

impl ReportPipeline {
    /// 以当天为处理日期创建流水线
    pub fn new(config: ReportConfig) -> Self {
        Self::with_processing_date(config, Local::now().date_naive())
    }

    /// 指定处理日期（纯时刻值绑定到该日期）
    pub fn with_processing_date(config: ReportConfig, processing_date: NaiveDate) -> Self {
        Self {
            config,
            processing_date,
            importer: AttendanceImporter::default(),
            classifier: RecordClassifier::new(),
            range: RangeAggregator,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn processing_date(&self) -> NaiveDate {
        self.processing_date
    }

    /// 读取考勤表并生成报表
    ///
    /// 文件无法读取时返回错误;单行问题只影响该行
    pub fn run_file(&self, file_path: &Path) -> ImportResult<AttendanceReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("report_run", run_id = %run_id);
        let _enter = span.enter();

        let imported = self.importer.import_file(
            file_path,
            &self.config.columns,
            TimeNormalizer::new(self.processing_date),
        )?;

        let mut report = self.build_report(run_id, imported.rows_read, imported.records);
        report.source_file = Some(file_path.display().to_string());
        Ok(report)
    }

    /// 基于已解析的表格生成报表
    pub fn run_table(&self, table: &RawTable) -> AttendanceReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("report_run", run_id = %run_id);
        let _enter = span.enter();

        let imported = AttendanceImporter::import_table(
            table,
            &self.config.columns,
            TimeNormalizer::new(self.processing_date),
        );
        self.build_report(run_id, imported.rows_read, imported.records)
    }

    /// 基于已映射的记录生成报表
    pub fn run_records(&self, records: Vec<RawAttendanceRecord>) -> AttendanceReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("report_run", run_id = %run_id);
        let _enter = span.enter();

        let rows_read = records.len();
        self.build_report(run_id, rows_read, records)
    }

    fn build_report(
        &self,
        run_id: Uuid,
        rows_read: usize,
        records: Vec<RawAttendanceRecord>,
    ) -> AttendanceReport {
        info!(
            rows_read,
            processing_date = %self.processing_date,
            shifts = self.config.shifts.len(),
            "开始生成考勤违规报表"
        );

        let resolver = ShiftResolver::new(&self.config.shifts, self.processing_date);
        let mut aggregator = DailyAggregator::new();
        let mut stats = RunStats {
            rows_read,
            ..RunStats::default()
        };

        // ==========================================
        // 步骤1: 必填校验 + 班次解析 + 分类
        // ==========================================
        for raw in records {
            let row_number = raw.row_number;
            let record = match raw.into_record() {
                Ok(record) => record,
                Err(field) => {
                    debug!(row_number, field = %field, "必填字段为空，排除");
                    stats.excluded_missing_field += 1;
                    continue;
                }
            };

            let shift = match resolver.resolve(&record.shift_code, record.start_time) {
                Some(shift) => shift,
                None => {
                    debug!(row_number, shift_code = %record.shift_code, "班次未配置，排除");
                    stats.excluded_unknown_shift += 1;
                    continue;
                }
            };

            match self.classifier.classify(&record, &shift) {
                Classification::SkippedAfterShiftEnd => {
                    debug!(row_number, employee = %record.employee, "班次结束后的小休，跳过");
                    stats.skipped_after_shift_end += 1;
                }
                Classification::Contributions(contributions) => {
                    aggregator.fold(&record, &contributions);
                    stats.records_classified += 1;
                }
            }
        }

        // ==========================================
        // 步骤2: 单日摘要 + 区间汇总
        // ==========================================
        let daily_reports = aggregator.into_reports();
        let daily_summaries = summarize_all(&daily_reports);
        let range = self.range.aggregate(&daily_reports);

        info!(
            days = daily_reports.len(),
            classified = stats.records_classified,
            excluded_missing_field = stats.excluded_missing_field,
            excluded_unknown_shift = stats.excluded_unknown_shift,
            skipped_after_shift_end = stats.skipped_after_shift_end,
            "考勤违规报表生成完成"
        );

        AttendanceReport {
            run_id,
            source_file: None,
            daily_reports,
            daily_summaries,
            range,
            stats,
        }
    }
}
