// ==========================================
// 考勤违规日报生成器 - 用户配置文档
// ==========================================
// 存储: ~/.daily_report_config/user_config.json
// 内容: shift_config（班次时间） + column_config（列名映射）
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 班次代码 → [开始时间, 结束时间]（HH:MM:SS）
pub type ShiftConfig = BTreeMap<String, (String, String)>;

// ==========================================
// UserConfig - 配置文档
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub shift_config: ShiftConfig,

    #[serde(default)]
    pub column_config: ColumnConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            shift_config: default_shift_config(),
            column_config: ColumnConfig::default(),
        }
    }
}

/// 默认班次: A-L，每班 9 小时，逐小时错开
pub fn default_shift_config() -> ShiftConfig {
    [
        ("A", "06:00:00", "15:00:00"),
        ("B", "07:00:00", "16:00:00"),
        ("C", "08:00:00", "17:00:00"),
        ("D", "09:00:00", "18:00:00"),
        ("E", "10:00:00", "19:00:00"),
        ("F", "11:00:00", "20:00:00"),
        ("G", "12:00:00", "21:00:00"),
        ("H", "13:00:00", "22:00:00"),
        ("I", "14:00:00", "23:00:00"),
        ("J", "15:00:00", "00:00:00"),
        ("K", "16:00:00", "01:00:00"),
        ("L", "17:00:00", "02:00:00"),
    ]
    .into_iter()
    .map(|(code, start, end)| (code.to_string(), (start.to_string(), end.to_string())))
    .collect()
}

// ==========================================
// ColumnConfig - 列名映射
// ==========================================
// 逻辑字段 → 源表列名;JSON 键沿用中文字段名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    #[serde(rename = "表名")]
    pub sheet_name: String,

    #[serde(rename = "日期")]
    pub date: String,

    #[serde(rename = "姓名")]
    pub employee: String,

    #[serde(rename = "班次")]
    pub shift_code: String,

    #[serde(rename = "状态")]
    pub status: String,

    #[serde(rename = "开始时间")]
    pub start_time: String,

    #[serde(rename = "结束时间")]
    pub end_time: String,

    #[serde(rename = "持续时长min")]
    pub duration: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            date: "日期".to_string(),
            employee: "姓名".to_string(),
            shift_code: "班次".to_string(),
            status: "状态".to_string(),
            start_time: "开始时间".to_string(),
            end_time: "结束时间".to_string(),
            duration: "持续时长min".to_string(),
        }
    }
}

impl ColumnConfig {
    /// 去除首尾空白;空列名回退为默认列名
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: String, fallback: String| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                fallback
            } else {
                trimmed.to_string()
            }
        };

        Self {
            sheet_name: pick(self.sheet_name, defaults.sheet_name),
            date: pick(self.date, defaults.date),
            employee: pick(self.employee, defaults.employee),
            shift_code: pick(self.shift_code, defaults.shift_code),
            status: pick(self.status, defaults.status),
            start_time: pick(self.start_time, defaults.start_time),
            end_time: pick(self.end_time, defaults.end_time),
            duration: pick(self.duration, defaults.duration),
        }
    }

    /// 需要从源表读取的数据列（不含表名）
    pub fn data_columns(&self) -> [&str; 7] {
        [
            self.date.as_str(),
            self.employee.as_str(),
            self.shift_code.as_str(),
            self.status.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
            self.duration.as_str(),
        ]
    }
}

/// 清洗班次配置: 班次代码/开始/结束任一为空的条目被丢弃
pub fn normalize_shift_config(shifts: ShiftConfig) -> ShiftConfig {
    shifts
        .into_iter()
        .filter_map(|(code, (start, end))| {
            let (code, start, end) = (code.trim(), start.trim(), end.trim());
            if code.is_empty() || start.is_empty() || end.is_empty() {
                None
            } else {
                Some((code.to_string(), (start.to_string(), end.to_string())))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_json_shape() {
        let json = serde_json::to_value(UserConfig::default()).unwrap();
        assert_eq!(json["shift_config"]["A"][0], "06:00:00");
        assert_eq!(json["shift_config"]["L"][1], "02:00:00");
        assert_eq!(json["column_config"]["表名"], "Sheet1");
        assert_eq!(json["column_config"]["持续时长min"], "持续时长min");
    }

    #[test]
    fn test_partial_column_config_uses_defaults() {
        let json = r#"{"column_config": {"姓名": "员工"}}"#;
        let config: UserConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.column_config.employee, "员工");
        assert_eq!(config.column_config.date, "日期");
        assert!(config.shift_config.is_empty());
    }

    #[test]
    fn test_column_config_normalized() {
        let config = ColumnConfig {
            employee: "  员工  ".to_string(),
            status: "".to_string(),
            ..ColumnConfig::default()
        }
        .normalized();
        assert_eq!(config.employee, "员工");
        assert_eq!(config.status, "状态");
    }

    #[test]
    fn test_normalize_shift_config_drops_blank_entries() {
        let mut shifts = ShiftConfig::new();
        shifts.insert(" A ".to_string(), ("06:00:00".to_string(), "15:00:00".to_string()));
        shifts.insert("B".to_string(), ("".to_string(), "16:00:00".to_string()));
        shifts.insert("".to_string(), ("07:00:00".to_string(), "16:00:00".to_string()));

        let cleaned = normalize_shift_config(shifts);
        assert_eq!(cleaned.len(), 1);
        assert!(cleaned.contains_key("A"));
    }
}
