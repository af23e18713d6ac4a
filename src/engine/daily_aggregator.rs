// ==========================================
// 考勤违规日报生成器 - 单日聚合器
// ==========================================
// 职责: 按日期累计各员工的违规桶，再生成阈值过滤后的单日摘要
// 日期升序输出
// ==========================================

use crate::domain::attendance::AttendanceRecord;
use crate::domain::report::{
    rank_descending, CountSummary, DailyReport, DailySummary, TopOffenders,
};
use crate::engine::classifier::Contribution;
use crate::engine::thresholds::{is_break_sum_over, is_meal_over};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct DailyAggregator {
    reports: BTreeMap<NaiveDate, DailyReport>,
}

impl DailyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 计入一条已分类的记录
    ///
    /// 即使贡献为空，记录所在日期也会出现在报表中
    pub fn fold(&mut self, record: &AttendanceRecord, contributions: &[Contribution]) {
        let report = self
            .reports
            .entry(record.date)
            .or_insert_with(|| DailyReport::new(record.date));

        for contribution in contributions {
            contribution.apply(&mut report.buckets, &record.employee);
        }
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn into_reports(self) -> BTreeMap<NaiveDate, DailyReport> {
        self.reports
    }
}

/// 生成单日摘要
pub fn summarize_day(report: &DailyReport) -> DailySummary {
    let buckets = &report.buckets;

    let meal_over = rank_descending(
        buckets
            .meal
            .iter()
            .filter(|(_, v)| is_meal_over(**v))
            .map(|(k, v)| (k.clone(), *v)),
    );

    let break_sum_over = rank_descending(
        buckets
            .break_sum
            .iter()
            .filter(|(_, v)| is_break_sum_over(**v))
            .map(|(k, v)| (k.clone(), *v)),
    );

    let break_once = CountSummary::from_counts(&buckets.break_once);
    let break_once_top = top_offenders(&break_once);

    DailySummary {
        date: report.date,
        meal_over,
        break_sum_over,
        break_once,
        break_once_top,
        break_shift_boundary: CountSummary::from_counts(&buckets.break_shift_boundary),
    }
}

/// 生成全部单日摘要（日期升序）
pub fn summarize_all(reports: &BTreeMap<NaiveDate, DailyReport>) -> Vec<DailySummary> {
    reports.values().map(summarize_day).collect()
}

/// 并列第一的员工全部列出
fn top_offenders(summary: &CountSummary) -> Option<TopOffenders> {
    let top = summary.entries.first()?.value;
    Some(TopOffenders {
        employees: summary
            .entries
            .iter()
            .take_while(|e| e.value == top)
            .map(|e| e.employee.clone())
            .collect(),
        count: top,
    })
}
