// ==========================================
// 考勤违规日报生成器 - 区间聚合器
// ==========================================
// meal / break_sum: 统计每位员工超过阈值的天数（逐日重新判定）
// break_once / break_shift_boundary: 逐日次数直接求和
// ==========================================

use crate::domain::report::{CountSummary, DailyReport, RangeReport};
use crate::engine::thresholds::{is_break_sum_over, is_meal_over};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeAggregator;

impl RangeAggregator {
    /// 无任何日期时返回 None
    pub fn aggregate(&self, reports: &BTreeMap<NaiveDate, DailyReport>) -> Option<RangeReport> {
        let start_date = *reports.keys().next()?;
        let end_date = *reports.keys().next_back()?;

        let mut meal_days: BTreeMap<String, u32> = BTreeMap::new();
        let mut break_sum_days: BTreeMap<String, u32> = BTreeMap::new();
        let mut break_once: BTreeMap<String, u32> = BTreeMap::new();
        let mut break_shift_boundary: BTreeMap<String, u32> = BTreeMap::new();

        for report in reports.values() {
            let buckets = &report.buckets;

            for (employee, minutes) in &buckets.meal {
                if is_meal_over(*minutes) {
                    *meal_days.entry(employee.clone()).or_insert(0) += 1;
                }
            }
            for (employee, minutes) in &buckets.break_sum {
                if is_break_sum_over(*minutes) {
                    *break_sum_days.entry(employee.clone()).or_insert(0) += 1;
                }
            }
            for (employee, count) in &buckets.break_once {
                *break_once.entry(employee.clone()).or_insert(0) += count;
            }
            for (employee, count) in &buckets.break_shift_boundary {
                *break_shift_boundary.entry(employee.clone()).or_insert(0) += count;
            }
        }

        Some(RangeReport {
            start_date,
            end_date,
            meal: CountSummary::from_counts(&meal_days),
            break_sum: CountSummary::from_counts(&break_sum_days),
            break_once: CountSummary::from_counts(&break_once),
            break_shift_boundary: CountSummary::from_counts(&break_shift_boundary),
        })
    }
}
