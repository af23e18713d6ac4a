// ==========================================
// 考勤违规日报生成器 - 班次窗口
// ==========================================
// ShiftWindow: 班次 → (开始时刻, 结束时刻)，可跨零点
// ShiftOccurrence: 班次窗口绑定到某一具体日期后的实例
// ==========================================

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 班次时间格式（配置中的字符串）
const SHIFT_TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

// ==========================================
// ShiftWindow - 班次窗口
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// 从配置字符串解析（HH:MM:SS 或 HH:MM）
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self::new(parse_shift_time(start)?, parse_shift_time(end)?))
    }

    /// 结束时刻早于开始时刻 ⇒ 结束在次日
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }
}

fn parse_shift_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    SHIFT_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

// ==========================================
// ShiftTable - 班次表
// ==========================================
// 单次运行内只读
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftTable {
    windows: BTreeMap<String, ShiftWindow>,
}

impl ShiftTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置构建班次表
    ///
    /// 无法解析的条目被丢弃（使用该班次的记录随后按"班次未找到"排除）
    pub fn from_config(config: &BTreeMap<String, (String, String)>) -> Self {
        let mut table = Self::new();
        for (code, (start, end)) in config {
            match ShiftWindow::parse(start, end) {
                Some(window) => table.insert(code, window),
                None => {
                    tracing::warn!(
                        shift = %code,
                        start = %start,
                        end = %end,
                        "班次时间无法解析，已忽略"
                    );
                }
            }
        }
        table
    }

    pub fn insert(&mut self, code: &str, window: ShiftWindow) {
        self.windows.insert(code.trim().to_string(), window);
    }

    pub fn get(&self, code: &str) -> Option<&ShiftWindow> {
        self.windows.get(code.trim())
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

// ==========================================
// ShiftOccurrence - 班次实例
// ==========================================
// 不变量: end >= start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOccurrence {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ShiftOccurrence {
    /// 是否落在班次开头的 window 内: start <= t < start + window
    pub fn in_opening(&self, instant: NaiveDateTime, window: Duration) -> bool {
        instant >= self.start && instant < self.start + window
    }

    /// 是否落在班次结尾的 window 内: end - window < t < end（两端都不含）
    pub fn in_closing(&self, instant: NaiveDateTime, window: Duration) -> bool {
        instant > self.end - window && instant < self.end
    }
}
