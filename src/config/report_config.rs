// ==========================================
// 考勤违规日报生成器 - 报表运行配置快照
// ==========================================
// 每次运行开始时从用户配置生成，运行期间只读
// ==========================================

use crate::config::user_config::{ColumnConfig, UserConfig};
use crate::domain::shift::ShiftTable;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportConfig {
    pub shifts: ShiftTable,
    pub columns: ColumnConfig,
}

impl ReportConfig {
    pub fn new(shifts: ShiftTable, columns: ColumnConfig) -> Self {
        Self { shifts, columns }
    }

    pub fn from_user_config(config: &UserConfig) -> Self {
        Self {
            shifts: ShiftTable::from_config(&config.shift_config),
            columns: config.column_config.clone(),
        }
    }
}
