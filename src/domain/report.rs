// ==========================================
// 考勤违规日报生成器 - 报表结构
// ==========================================
// DailyReport: 单日四个违规桶（员工 → 累计值）
// DailySummary: 阈值过滤 + 排序后的单日摘要
// RangeReport: 跨日期区间的再汇总
// AttendanceReport: 一次报表运行的完整输出
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use uuid::Uuid;

// ==========================================
// ViolationBuckets - 违规桶
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViolationBuckets {
    /// 用餐时长（分钟）
    pub meal: BTreeMap<String, f64>,
    /// 小休总时长（分钟）
    pub break_sum: BTreeMap<String, f64>,
    /// 单次小休超时次数
    pub break_once: BTreeMap<String, u32>,
    /// 首尾半小时小休次数
    pub break_shift_boundary: BTreeMap<String, u32>,
}

impl ViolationBuckets {
    pub fn add_meal(&mut self, employee: &str, minutes: f64) {
        *self.meal.entry(employee.to_string()).or_insert(0.0) += minutes;
    }

    pub fn add_break(&mut self, employee: &str, minutes: f64) {
        *self.break_sum.entry(employee.to_string()).or_insert(0.0) += minutes;
    }

    pub fn add_break_once(&mut self, employee: &str) {
        *self.break_once.entry(employee.to_string()).or_insert(0) += 1;
    }

    pub fn add_break_shift_boundary(&mut self, employee: &str) {
        *self
            .break_shift_boundary
            .entry(employee.to_string())
            .or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.meal.is_empty()
            && self.break_sum.is_empty()
            && self.break_once.is_empty()
            && self.break_shift_boundary.is_empty()
    }
}

// ==========================================
// DailyReport - 单日报表（未过滤）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub buckets: ViolationBuckets,
}

impl DailyReport {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            buckets: ViolationBuckets::default(),
        }
    }
}

// ==========================================
// RankedEntry - 排名条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry<T> {
    pub employee: String,
    pub value: T,
}

/// 按数值降序、姓名升序排名
///
/// 输入来自 BTreeMap（姓名有序），稳定排序保证同值按姓名排列
pub fn rank_descending<T>(entries: impl IntoIterator<Item = (String, T)>) -> Vec<RankedEntry<T>>
where
    T: PartialOrd + Copy,
{
    let mut ranked: Vec<RankedEntry<T>> = entries
        .into_iter()
        .map(|(employee, value)| RankedEntry { employee, value })
        .collect();
    ranked.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.employee.cmp(&b.employee))
    });
    ranked
}

// ==========================================
// CountSummary - 次数类摘要
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountSummary {
    /// 按次数降序
    pub entries: Vec<RankedEntry<u32>>,
    /// 总次数
    pub total: u32,
}

impl CountSummary {
    pub fn from_counts(counts: &BTreeMap<String, u32>) -> Self {
        let entries = rank_descending(counts.iter().map(|(k, v)| (k.clone(), *v)));
        let total = entries.iter().map(|e| e.value).sum();
        Self { entries, total }
    }

    pub fn people(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 单次小休超时 Top（并列第一全部列出）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopOffenders {
    pub employees: Vec<String>,
    pub count: u32,
}

// ==========================================
// DailySummary - 单日摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// 用餐超时（> 46 分钟）
    pub meal_over: Vec<RankedEntry<f64>>,
    /// 小休总时长超时（> 61 分钟）
    pub break_sum_over: Vec<RankedEntry<f64>>,
    pub break_once: CountSummary,
    pub break_once_top: Option<TopOffenders>,
    pub break_shift_boundary: CountSummary,
}

// ==========================================
// RangeReport - 区间汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 用餐超时天数
    pub meal: CountSummary,
    /// 小休总时长超时天数
    pub break_sum: CountSummary,
    /// 单次小休超时总次数
    pub break_once: CountSummary,
    /// 首尾半小时小休总次数
    pub break_shift_boundary: CountSummary,
}

// ==========================================
// RunStats - 运行统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// 读取的数据行
    pub rows_read: usize,
    /// 参与分类的记录
    pub records_classified: usize,
    /// 必填字段为空而排除
    pub excluded_missing_field: usize,
    /// 班次未配置而排除
    pub excluded_unknown_shift: usize,
    /// 班次结束后的小休（跳过）
    pub skipped_after_shift_end: usize,
}

// ==========================================
// AttendanceReport - 报表运行结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub run_id: Uuid,
    pub source_file: Option<String>,
    /// 日期升序
    pub daily_reports: BTreeMap<NaiveDate, DailyReport>,
    /// 与 daily_reports 同序
    pub daily_summaries: Vec<DailySummary>,
    /// 无任何日期时为 None
    pub range: Option<RangeReport>,
    pub stats: RunStats,
}

impl AttendanceReport {
    pub fn is_empty(&self) -> bool {
        self.daily_reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_descending_ties_by_name() {
        let ranked = rank_descending(vec![
            ("Carol".to_string(), 2u32),
            ("Alice".to_string(), 3),
            ("Bob".to_string(), 3),
        ]);
        let names: Vec<&str> = ranked.iter().map(|e| e.employee.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_count_summary_totals() {
        let mut counts = BTreeMap::new();
        counts.insert("Alice".to_string(), 2);
        counts.insert("Bob".to_string(), 5);

        let summary = CountSummary::from_counts(&counts);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.people(), 2);
        assert_eq!(summary.entries[0].employee, "Bob");
    }

    #[test]
    fn test_buckets_accumulate() {
        let mut buckets = ViolationBuckets::default();
        buckets.add_meal("Alice", 30.0);
        buckets.add_meal("Alice", 20.5);
        buckets.add_break_once("Alice");
        buckets.add_break_once("Alice");

        assert_eq!(buckets.meal["Alice"], 50.5);
        assert_eq!(buckets.break_once["Alice"], 2);
        assert!(buckets.break_sum.is_empty());
        assert!(!buckets.is_empty());
    }
}
