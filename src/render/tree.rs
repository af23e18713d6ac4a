// ==========================================
// 考勤违规日报生成器 - 报表树
// ==========================================
// 单日树: 每个日期一个根节点，下挂四个违规桶
// 汇总树: 日期范围根节点，下挂四个违规桶
// 超时员工节点标记高亮
// ==========================================

use crate::domain::report::{CountSummary, DailySummary, RangeReport, RankedEntry};
use crate::domain::types::ViolationKind;
use crate::i18n::{t, t_with_args};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// 高亮颜色
pub const HIGHLIGHT_COLOR: &str = "#ED856E";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    pub highlighted: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            highlighted: false,
            children: Vec::new(),
        }
    }

    pub fn highlighted(label: impl Into<String>) -> Self {
        Self {
            highlighted: true,
            ..Self::new(label)
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn color(&self) -> Option<&'static str> {
        self.highlighted.then_some(HIGHLIGHT_COLOR)
    }

    /// 节点总数（含自身）
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

// ==========================================
// 单日树
// ==========================================

pub fn build_daily_tree(summary: &DailySummary) -> TreeNode {
    TreeNode::new(summary.date.format("%Y-%m-%d").to_string()).with_children(vec![
        minutes_node(ViolationKind::Meal, &summary.meal_over),
        minutes_node(ViolationKind::BreakSum, &summary.break_sum_over),
        break_once_node(summary),
        people_times_node(ViolationKind::BreakShiftBoundary, &summary.break_shift_boundary),
    ])
}

pub fn build_daily_trees(summaries: &[DailySummary]) -> Vec<TreeNode> {
    summaries.iter().map(build_daily_tree).collect()
}

fn minutes_node(kind: ViolationKind, entries: &[RankedEntry<f64>]) -> TreeNode {
    if entries.is_empty() {
        return all_compliant(kind);
    }

    let people = entries.len().to_string();
    TreeNode::new(t_with_args(
        "report.people_over",
        &[("bucket", t(kind.i18n_key()).as_str()), ("people", people.as_str())],
    ))
    .with_children(
        entries
            .iter()
            .map(|e| {
                let value = format!("{:.1}", e.value);
                TreeNode::highlighted(t_with_args(
                    "report.minutes_entry",
                    &[("name", e.employee.as_str()), ("value", value.as_str())],
                ))
            })
            .collect(),
    )
}

fn break_once_node(summary: &DailySummary) -> TreeNode {
    let kind = ViolationKind::BreakOnce;
    if summary.break_once.is_empty() {
        return all_compliant(kind);
    }

    let mut children = Vec::new();
    if let Some(top) = &summary.break_once_top {
        let count = top.count.to_string();
        children.push(TreeNode::highlighted(t_with_args(
            "report.top_offenders",
            &[("names", top.employees.join(", ").as_str()), ("count", count.as_str())],
        )));
    }
    children.extend(count_entries(&summary.break_once));

    TreeNode::new(over_times_label(kind, &summary.break_once)).with_children(children)
}

// ==========================================
// 汇总树
// ==========================================

pub fn build_range_tree(range: &RangeReport) -> TreeNode {
    let start = range.start_date.format("%Y-%m-%d").to_string();
    let end = range.end_date.format("%Y-%m-%d").to_string();

    TreeNode::new(t_with_args(
        "report.date_range",
        &[("start", start.as_str()), ("end", end.as_str())],
    ))
    .with_children(vec![
        over_times_node(ViolationKind::Meal, &range.meal),
        over_times_node(ViolationKind::BreakSum, &range.break_sum),
        over_times_node(ViolationKind::BreakOnce, &range.break_once),
        people_times_node(ViolationKind::BreakShiftBoundary, &range.break_shift_boundary),
    ])
}

fn over_times_node(kind: ViolationKind, summary: &CountSummary) -> TreeNode {
    if summary.is_empty() {
        return all_compliant(kind);
    }
    TreeNode::new(over_times_label(kind, summary)).with_children(count_entries(summary))
}

// ==========================================
// 公共节点
// ==========================================

fn people_times_node(kind: ViolationKind, summary: &CountSummary) -> TreeNode {
    if summary.is_empty() {
        return all_compliant(kind);
    }

    let people = summary.people().to_string();
    let total = summary.total.to_string();
    TreeNode::new(t_with_args(
        "report.people_times",
        &[
            ("bucket", t(kind.i18n_key()).as_str()),
            ("people", people.as_str()),
            ("total", total.as_str()),
        ],
    ))
    .with_children(count_entries(summary))
}

fn over_times_label(kind: ViolationKind, summary: &CountSummary) -> String {
    let people = summary.people().to_string();
    let total = summary.total.to_string();
    t_with_args(
        "report.people_over_times",
        &[
            ("bucket", t(kind.i18n_key()).as_str()),
            ("people", people.as_str()),
            ("total", total.as_str()),
        ],
    )
}

fn count_entries(summary: &CountSummary) -> Vec<TreeNode> {
    summary
        .entries
        .iter()
        .map(|e| {
            let value = e.value.to_string();
            TreeNode::highlighted(t_with_args(
                "report.count_entry",
                &[("name", e.employee.as_str()), ("value", value.as_str())],
            ))
        })
        .collect()
}

fn all_compliant(kind: ViolationKind) -> TreeNode {
    TreeNode::new(t_with_args(
        "report.all_compliant",
        &[("bucket", t(kind.i18n_key()).as_str())],
    ))
}

// ==========================================
// 文本输出
// ==========================================

/// 按层级缩进（每层两个空格）输出
pub fn render_text(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, 0);
    }
    out
}

fn write_node(out: &mut String, node: &TreeNode, depth: usize) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), node.label);
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{rank_descending, TopOffenders};
    use crate::i18n::{set_locale, LOCALE_TEST_LOCK};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn lock() -> std::sync::MutexGuard<'static, ()> {
        let guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("zh-CN");
        guard
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn counts(pairs: &[(&str, u32)]) -> CountSummary {
        let map: BTreeMap<String, u32> = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        CountSummary::from_counts(&map)
    }

    fn empty_day() -> DailySummary {
        DailySummary {
            date: date(1),
            meal_over: Vec::new(),
            break_sum_over: Vec::new(),
            break_once: CountSummary::default(),
            break_once_top: None,
            break_shift_boundary: CountSummary::default(),
        }
    }

    #[test]
    fn test_compliant_day() {
        let _guard = lock();
        let tree = build_daily_tree(&empty_day());

        assert_eq!(tree.label, "2025-01-01");
        let labels: Vec<&str> = tree.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "用餐时长：全员遵时",
                "小休总时长：全员遵时",
                "单次小休：全员遵时",
                "首尾半小时小休：全员遵时"
            ]
        );
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_day_with_violations() {
        let _guard = lock();
        let mut day = empty_day();
        day.meal_over = rank_descending(vec![("Alice".to_string(), 50.0)]);
        day.break_once = counts(&[("Alice", 2), ("Bob", 2), ("Carol", 1)]);
        day.break_once_top = Some(TopOffenders {
            employees: vec!["Alice".to_string(), "Bob".to_string()],
            count: 2,
        });
        day.break_shift_boundary = counts(&[("Bob", 1)]);

        let tree = build_daily_tree(&day);
        let meal = &tree.children[0];
        assert_eq!(meal.label, "用餐时长：1人超时");
        assert_eq!(meal.children[0].label, "Alice：50.0 分钟");
        assert_eq!(meal.children[0].color(), Some(HIGHLIGHT_COLOR));
        assert_eq!(meal.color(), None);

        let once = &tree.children[2];
        assert_eq!(once.label, "单次小休：3人超时，共5次");
        assert_eq!(once.children[0].label, "小休超时Top：Alice, Bob 2次");
        assert_eq!(once.children[1].label, "Alice：2 次");
        assert_eq!(once.children.len(), 4);

        let boundary = &tree.children[3];
        assert_eq!(boundary.label, "首尾半小时小休：1人，共1次");
    }

    #[test]
    fn test_range_tree() {
        let _guard = lock();
        let range = RangeReport {
            start_date: date(1),
            end_date: date(3),
            meal: counts(&[("Alice", 1)]),
            break_sum: CountSummary::default(),
            break_once: CountSummary::default(),
            break_shift_boundary: counts(&[("Bob", 2)]),
        };

        let tree = build_range_tree(&range);
        assert_eq!(tree.label, "日期范围：2025-01-01 - 2025-01-03");
        assert_eq!(tree.children[0].label, "用餐时长：1人超时，共1次");
        assert_eq!(tree.children[0].children[0].label, "Alice：1 次");
        assert_eq!(tree.children[1].label, "小休总时长：全员遵时");
        assert_eq!(tree.children[3].label, "首尾半小时小休：1人，共2次");
    }

    #[test]
    fn test_render_text_indents() {
        let tree = TreeNode::new("root").with_children(vec![
            TreeNode::new("child").with_children(vec![TreeNode::highlighted("leaf")]),
        ]);
        assert_eq!(render_text(&[tree]), "root\n  child\n    leaf\n");
    }
}
