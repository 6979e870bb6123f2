//! 保存提示服务 - 业务能力层
//!
//! 只负责"把保存结果告诉用户"能力，不关心流程

use std::sync::Mutex;

use tracing::{error, info};

use crate::config::Config;
use crate::session::{SaveOutcome, SessionController};

/// 提示类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// 一条用户提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// 提示的展示方（弹窗、终端等）
pub trait NoticeSink {
    fn show(&self, notice: &Notice);
}

/// 把提示写入日志
#[derive(Debug, Default)]
pub struct LogSink;

impl NoticeSink for LogSink {
    fn show(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => info!("🔔 {}", notice.message),
            NoticeKind::Error => error!("🔔 {}", notice.message),
        }
    }
}

/// 记住所有展示过的提示
#[derive(Debug, Default)]
pub struct MemorySink {
    shown: Mutex<Vec<Notice>>,
}

impl MemorySink {
    pub fn shown(&self) -> Vec<Notice> {
        self.shown
            .lock()
            .map(|shown| shown.clone())
            .unwrap_or_default()
    }
}

impl NoticeSink for MemorySink {
    fn show(&self, notice: &Notice) {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(notice.clone());
        }
    }
}

/// 保存提示服务
///
/// 职责：
/// - 成功时显示"保存成功"，失败时显示"保存失败"
/// - 每个结果只提示一次，提示后立即确认
pub struct SaveNotifier<K = LogSink> {
    sink: K,
    success_message: String,
    failure_message: String,
}

impl SaveNotifier<LogSink> {
    /// 创建写日志的提示服务
    pub fn new(config: &Config) -> Self {
        Self::with_sink(config, LogSink)
    }
}

impl<K: NoticeSink> SaveNotifier<K> {
    /// 使用自定义展示方创建
    pub fn with_sink(config: &Config, sink: K) -> Self {
        Self {
            sink,
            success_message: config.success_message.clone(),
            failure_message: config.failure_message.clone(),
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// 保存结果对应的提示
    pub fn notice_for(&self, outcome: SaveOutcome) -> Option<Notice> {
        match outcome {
            SaveOutcome::None => None,
            SaveOutcome::Success => Some(Notice {
                kind: NoticeKind::Success,
                message: self.success_message.clone(),
            }),
            SaveOutcome::Failure => Some(Notice {
                kind: NoticeKind::Error,
                message: self.failure_message.clone(),
            }),
        }
    }

    /// 展示待处理的保存结果并确认
    ///
    /// # 返回
    /// 返回展示的提示；没有待处理结果时返回 `None`
    pub fn present(&self, session: &mut SessionController) -> Option<Notice> {
        let outcome = session.take_save_outcome()?;
        let notice = self.notice_for(outcome)?;
        self.sink.show(&notice);
        Some(notice)
    }
}
