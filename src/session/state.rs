use crate::models::{ReportId, Section};

/// 最近一次保存的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveOutcome {
    /// 没有待展示的结果
    #[default]
    None,
    Success,
    Failure,
}

/// 会话状态
///
/// 三个字段互相独立，每个只由对应的转换方法修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active_tab: Section,
    /// `None` 表示尚未加载/创建报告
    pub current_report_id: Option<ReportId>,
    pub last_save_outcome: SaveOutcome,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_tab: Section::ALL[0],
            current_report_id: None,
            last_save_outcome: SaveOutcome::None,
        }
    }
}
