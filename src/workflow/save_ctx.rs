//! 保存上下文
//!
//! 封装"这是哪份报告的第几次保存"这一信息

use std::fmt::Display;

use chrono::{DateTime, Local};

use crate::models::ReportId;

/// 保存上下文
///
/// 在触发保存时创建，之后不再变化
#[derive(Debug, Clone)]
pub struct SaveCtx {
    /// 保存序号（从1开始，仅用于日志显示）
    pub attempt: u64,

    /// 触发保存时的报告标识
    pub report_id: Option<ReportId>,

    pub started_at: DateTime<Local>,
}

impl SaveCtx {
    /// 创建新的保存上下文
    pub fn new(attempt: u64, report_id: Option<ReportId>) -> Self {
        Self {
            attempt,
            report_id,
            started_at: Local::now(),
        }
    }
}

impl Display for SaveCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.report_id {
            Some(id) => write!(f, "[报告 {} 保存#{}]", id, self.attempt),
            None => write!(f, "[新报告 保存#{}]", self.attempt),
        }
    }
}
