// ==========================================
// 考勤违规日报生成器 - 记录分类器
// ==========================================
// 输入: 单条考勤记录 + 已解析的班次实例
// 输出: 该记录对各违规桶的贡献
// ==========================================
// 规则:
// - 小休且开始时间 >= 班次结束: 整条跳过
// - 就餐: 时长计入 meal
// - 小休: 时长计入 break_sum;
//         时长 > 8 记 break_once +1;
//         开始时间在班次首 30 分钟内（含起点）或尾 30 分钟内（不含起点）记 break_shift_boundary +1
// 三个小休桶互不排斥
// ==========================================

use crate::domain::attendance::AttendanceRecord;
use crate::domain::report::ViolationBuckets;
use crate::domain::shift::ShiftOccurrence;
use crate::domain::types::AttendanceStatus;
use crate::engine::thresholds::{is_break_once_over, shift_boundary_window};

/// 单项贡献
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    Meal(f64),
    BreakSum(f64),
    BreakOnce,
    BreakShiftBoundary,
}

impl Contribution {
    /// 计入违规桶
    pub fn apply(&self, buckets: &mut ViolationBuckets, employee: &str) {
        match self {
            Contribution::Meal(minutes) => buckets.add_meal(employee, *minutes),
            Contribution::BreakSum(minutes) => buckets.add_break(employee, *minutes),
            Contribution::BreakOnce => buckets.add_break_once(employee),
            Contribution::BreakShiftBoundary => buckets.add_break_shift_boundary(employee),
        }
    }
}

/// 分类结果
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// 班次结束后的小休，整条跳过
    SkippedAfterShiftEnd,
    /// 贡献列表（可为空，如其他状态）
    Contributions(Vec<Contribution>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordClassifier;

impl RecordClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, record: &AttendanceRecord, shift: &ShiftOccurrence) -> Classification {
        if record.status.is_break() && record.start_time >= shift.end {
            return Classification::SkippedAfterShiftEnd;
        }

        let mut contributions = Vec::new();
        match record.status {
            AttendanceStatus::Meal => {
                contributions.push(Contribution::Meal(record.duration_min));
            }
            AttendanceStatus::Break => {
                contributions.push(Contribution::BreakSum(record.duration_min));

                if is_break_once_over(record.duration_min) {
                    contributions.push(Contribution::BreakOnce);
                }

                let window = shift_boundary_window();
                if shift.in_opening(record.start_time, window)
                    || shift.in_closing(record.start_time, window)
                {
                    contributions.push(Contribution::BreakShiftBoundary);
                }
            }
            AttendanceStatus::Other => {}
        }

        Classification::Contributions(contributions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn shift_a() -> ShiftOccurrence {
        ShiftOccurrence {
            start: at(6, 0),
            end: at(15, 0),
        }
    }

    fn record(status: AttendanceStatus, start: NaiveDateTime, duration: f64) -> AttendanceRecord {
        AttendanceRecord {
            row_number: 1,
            date: start.date(),
            employee: "Alice".to_string(),
            shift_code: "A".to_string(),
            status,
            start_time: start,
            end_time: start + chrono::Duration::minutes(duration as i64),
            duration_min: duration,
        }
    }

    fn contributions(c: Classification) -> Vec<Contribution> {
        match c {
            Classification::Contributions(list) => list,
            Classification::SkippedAfterShiftEnd => panic!("unexpected skip"),
        }
    }

    #[test]
    fn test_break_contributes_to_all_three_buckets() {
        let c = RecordClassifier.classify(&record(AttendanceStatus::Break, at(6, 10), 9.0), &shift_a());
        assert_eq!(
            contributions(c),
            vec![
                Contribution::BreakSum(9.0),
                Contribution::BreakOnce,
                Contribution::BreakShiftBoundary
            ]
        );
    }

    #[test]
    fn test_break_once_is_strict() {
        let c = RecordClassifier.classify(&record(AttendanceStatus::Break, at(10, 0), 8.0), &shift_a());
        assert_eq!(contributions(c), vec![Contribution::BreakSum(8.0)]);
    }

    #[test]
    fn test_boundary_windows() {
        let classifier = RecordClassifier::new();
        let has_boundary = |start: NaiveDateTime| {
            contributions(classifier.classify(&record(AttendanceStatus::Break, start, 5.0), &shift_a()))
                .contains(&Contribution::BreakShiftBoundary)
        };

        assert!(has_boundary(at(6, 0)));
        assert!(has_boundary(at(6, 29)));
        assert!(!has_boundary(at(6, 30)));
        // 9 小时班次的中点
        assert!(!has_boundary(at(10, 30)));
        assert!(!has_boundary(at(14, 29)));
        // 结尾窗口起点不含
        assert!(!has_boundary(at(14, 30)));
        assert!(has_boundary(at(14, 31)));
        assert!(has_boundary(at(14, 59)));
        // 班次开始前
        assert!(!has_boundary(at(5, 50)));
    }

    #[test]
    fn test_break_after_shift_end_is_skipped() {
        let classifier = RecordClassifier::new();
        assert_eq!(
            classifier.classify(&record(AttendanceStatus::Break, at(20, 0), 10.0), &shift_a()),
            Classification::SkippedAfterShiftEnd
        );
        assert_eq!(
            classifier.classify(&record(AttendanceStatus::Break, at(15, 0), 10.0), &shift_a()),
            Classification::SkippedAfterShiftEnd
        );
    }

    #[test]
    fn test_meal_after_shift_end_still_counts() {
        let c = RecordClassifier.classify(&record(AttendanceStatus::Meal, at(20, 0), 30.0), &shift_a());
        assert_eq!(contributions(c), vec![Contribution::Meal(30.0)]);
    }

    #[test]
    fn test_other_status_contributes_nothing() {
        let c = RecordClassifier.classify(&record(AttendanceStatus::Other, at(8, 0), 120.0), &shift_a());
        assert!(contributions(c).is_empty());
    }

    #[test]
    fn test_contribution_apply() {
        let mut buckets = ViolationBuckets::default();
        for c in [
            Contribution::Meal(50.0),
            Contribution::BreakSum(9.0),
            Contribution::BreakOnce,
            Contribution::BreakShiftBoundary,
        ] {
            c.apply(&mut buckets, "Alice");
        }
        assert_eq!(buckets.meal["Alice"], 50.0);
        assert_eq!(buckets.break_sum["Alice"], 9.0);
        assert_eq!(buckets.break_once["Alice"], 1);
        assert_eq!(buckets.break_shift_boundary["Alice"], 1);
    }
}
