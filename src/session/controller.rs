//! 显示/会话控制器
//!
//! 会话状态的唯一所有者。所有转换都是具名方法，没有隐式事件。

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::models::{ReportId, Section};
use crate::session::{SaveOutcome, SessionState};

/// 显示/会话控制器
#[derive(Debug, Default)]
pub struct SessionController {
    state: SessionState,
    save_in_flight: Rc<Cell<bool>>,
}

/// 保存互斥凭证
///
/// 持有期间视为有保存进行中；释放时（包括保存被取消、future 被丢弃）清除标记
#[derive(Debug)]
pub struct SaveGuard {
    in_flight: Rc<Cell<bool>>,
    report_id: Option<ReportId>,
    finished: bool,
}

impl SaveGuard {
    /// 触发保存时的报告标识
    pub fn report_id(&self) -> Option<&ReportId> {
        self.report_id.as_ref()
    }
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        if !self.finished {
            warn!("⚠️ 保存未完成即被取消，释放保存互斥");
        }
        self.in_flight.set(false);
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前会话状态快照
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn active_tab(&self) -> Section {
        self.state.active_tab
    }

    pub fn current_report_id(&self) -> Option<&ReportId> {
        self.state.current_report_id.as_ref()
    }

    pub fn last_save_outcome(&self) -> SaveOutcome {
        self.state.last_save_outcome
    }

    /// 切换标签页
    ///
    /// 只修改当前标签页，不影响报告标识和保存结果
    pub fn switch_tab(&mut self, section: Section) {
        debug!(
            "切换标签页: {} → {}",
            self.state.active_tab.tab_label(),
            section.tab_label()
        );
        self.state.active_tab = section;
    }

    /// 按标签页标识切换
    ///
    /// 未知标识直接拒绝，状态保持不变
    pub fn switch_tab_id(&mut self, tab_id: &str) -> Result<(), SessionError> {
        let section = tab_id.parse::<Section>()?;
        self.switch_tab(section);
        Ok(())
    }

    /// 设置当前报告标识（每次加载/创建报告时调用一次）
    pub fn set_report_id(&mut self, id: impl Into<ReportId>) {
        let id = id.into();
        if let Some(previous) = &self.state.current_report_id {
            if *previous != id {
                info!("📄 切换报告: {} → {}", previous, id);
            }
        } else {
            info!("📄 加载报告: {}", id);
        }
        self.state.current_report_id = Some(id);
    }

    /// 记录保存结果
    pub fn record_save_outcome(&mut self, outcome: SaveOutcome) {
        if outcome == SaveOutcome::None {
            warn!("忽略空的保存结果，请使用 acknowledge_save_outcome 清除");
            return;
        }
        if self.state.last_save_outcome != SaveOutcome::None {
            warn!(
                "上一次保存结果 {:?} 尚未确认，将被覆盖",
                self.state.last_save_outcome
            );
        }
        self.state.last_save_outcome = outcome;
    }

    /// 确认保存结果，重置为 `None`；重复确认无效果
    pub fn acknowledge_save_outcome(&mut self) {
        self.state.last_save_outcome = SaveOutcome::None;
    }

    /// 取出待展示的保存结果并确认
    ///
    /// # 返回
    /// 有结果时返回 `Some`，之后状态为 `None`
    pub fn take_save_outcome(&mut self) -> Option<SaveOutcome> {
        match self.state.last_save_outcome {
            SaveOutcome::None => None,
            outcome => {
                self.acknowledge_save_outcome();
                Some(outcome)
            }
        }
    }

    // ========== 保存互斥 ==========

    pub fn is_save_in_flight(&self) -> bool {
        self.save_in_flight.get()
    }

    /// 开始一次保存
    ///
    /// # 返回
    /// 返回记录了触发时报告标识的凭证；已有保存进行中时返回 `SaveInFlight`
    pub fn begin_save(&mut self) -> Result<SaveGuard, SessionError> {
        if self.save_in_flight.get() {
            return Err(SessionError::SaveInFlight);
        }
        self.save_in_flight.set(true);
        Ok(SaveGuard {
            in_flight: Rc::clone(&self.save_in_flight),
            report_id: self.state.current_report_id.clone(),
            finished: false,
        })
    }

    /// 结束一次保存并记录结果
    pub fn finish_save(&mut self, mut guard: SaveGuard, outcome: SaveOutcome) {
        guard.finished = true;
        drop(guard);
        self.record_save_outcome(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = SessionController::new();
        assert_eq!(session.active_tab(), Section::Results);
        assert!(session.current_report_id().is_none());
        assert_eq!(session.last_save_outcome(), SaveOutcome::None);
        assert!(!session.is_save_in_flight());
    }

    #[test]
    fn test_switch_tab_touches_only_active_tab() {
        let mut session = SessionController::new();
        session.set_report_id("REP-1");
        session.record_save_outcome(SaveOutcome::Success);

        session.switch_tab(Section::Narrative);
        session.switch_tab_id("drugs").unwrap();

        assert_eq!(session.active_tab(), Section::Drugs);
        assert_eq!(session.current_report_id(), Some(&ReportId::new("REP-1")));
        assert_eq!(session.last_save_outcome(), SaveOutcome::Success);
    }

    #[test]
    fn test_invalid_tab_keeps_state() {
        let mut session = SessionController::new();
        session.switch_tab(Section::Dosages);

        let err = session.switch_tab_id("matrix").unwrap_err();

        assert_eq!(
            err,
            SessionError::InvalidTab {
                tab_id: "matrix".to_string()
            }
        );
        assert_eq!(session.active_tab(), Section::Dosages);
    }

    #[test]
    fn test_acknowledge_is_idempotent() {
        let mut session = SessionController::new();
        session.record_save_outcome(SaveOutcome::Failure);
        assert_eq!(session.last_save_outcome(), SaveOutcome::Failure);

        session.acknowledge_save_outcome();
        assert_eq!(session.last_save_outcome(), SaveOutcome::None);

        session.acknowledge_save_outcome();
        assert_eq!(session.last_save_outcome(), SaveOutcome::None);
    }

    #[test]
    fn test_take_save_outcome_observes_once() {
        let mut session = SessionController::new();
        session.record_save_outcome(SaveOutcome::Success);

        assert_eq!(session.take_save_outcome(), Some(SaveOutcome::Success));
        assert_eq!(session.take_save_outcome(), None);
    }

    #[test]
    fn test_recording_none_is_ignored() {
        let mut session = SessionController::new();
        session.record_save_outcome(SaveOutcome::Failure);
        session.record_save_outcome(SaveOutcome::None);
        assert_eq!(session.last_save_outcome(), SaveOutcome::Failure);
    }

    #[test]
    fn test_begin_save_is_exclusive() {
        let mut session = SessionController::new();
        session.set_report_id("REP-42");

        let guard = session.begin_save().unwrap();
        assert_eq!(guard.report_id(), Some(&ReportId::new("REP-42")));
        assert_eq!(session.begin_save().unwrap_err(), SessionError::SaveInFlight);

        session.finish_save(guard, SaveOutcome::Success);
        assert!(!session.is_save_in_flight());
        assert_eq!(session.last_save_outcome(), SaveOutcome::Success);
        assert!(session.begin_save().is_ok());
    }

    #[test]
    fn test_dropped_guard_releases_save() {
        let mut session = SessionController::new();

        let guard = session.begin_save().unwrap();
        assert!(session.is_save_in_flight());
        drop(guard);

        assert!(!session.is_save_in_flight());
        assert_eq!(session.last_save_outcome(), SaveOutcome::None);
        assert!(session.begin_save().is_ok());
    }

    #[test]
    fn test_report_id_can_be_replaced_by_new_report() {
        let mut session = SessionController::new();
        session.set_report_id("REP-1");
        session.set_report_id(ReportId::new("REP-2"));
        assert_eq!(session.current_report_id(), Some(&ReportId::new("REP-2")));
    }
}
