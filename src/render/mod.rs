// ==========================================
// 考勤违规日报生成器 - 展示层
// ==========================================
// 职责: 将单日摘要与区间汇总转换为可展开的树节点
// ==========================================

pub mod tree;

pub use tree::{
    build_daily_tree, build_daily_trees, build_range_tree, render_text, TreeNode,
    HIGHLIGHT_COLOR,
};
