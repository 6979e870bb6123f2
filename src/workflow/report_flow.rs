//! 报告保存流程 - 流程层
//!
//! 核心职责：定义"一次保存"的完整流程
//!
//! 流程顺序：
//! 1. 占用保存互斥，记录触发时的报告标识
//! 2. 从全部分区提取当前值（全部完成后才组装）
//! 3. 组装报告文档并转换为线上键名
//! 4. 提交
//! 5. 在会话上记录结果
//!
//! 第 2、3 步任何错误都会中止本次保存，不会提交。

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info, warn};

use crate::clients::ReportSubmitter;
use crate::config::Config;
use crate::error::{AppError, AppResult, ExtractionError};
use crate::models::{ReportDocument, ReportId, Section, SectionPayload};
use crate::session::{SaveGuard, SaveOutcome, SessionController};
use crate::stores::SectionStore;
use crate::utils::logging::{log_save_complete, truncate_text};
use crate::workflow::save_ctx::SaveCtx;

/// 一次保存请求的结果
#[derive(Debug)]
pub enum SaveAttempt {
    /// 已有保存进行中，本次请求被忽略
    Ignored,
    /// 提交成功
    Saved,
    /// 提取、转换或提交失败
    Failed(AppError),
}

impl SaveAttempt {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveAttempt::Saved)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, SaveAttempt::Ignored)
    }

    /// 对应的保存结果；被忽略的请求没有结果
    pub fn outcome(&self) -> SaveOutcome {
        match self {
            SaveAttempt::Ignored => SaveOutcome::None,
            SaveAttempt::Saved => SaveOutcome::Success,
            SaveAttempt::Failed(_) => SaveOutcome::Failure,
        }
    }
}

/// 已触发、尚未提交的保存
///
/// 文档在这里已经固定，之后的编辑或切换标签页都不会影响它。
/// 未完成就丢弃时释放保存互斥，不记录结果。
#[derive(Debug)]
pub struct PendingSave {
    ctx: SaveCtx,
    document: AppResult<ReportDocument>,
    guard: SaveGuard,
}

impl PendingSave {
    pub fn ctx(&self) -> &SaveCtx {
        &self.ctx
    }

    /// 组装好的文档；组装失败时为 `None`
    pub fn document(&self) -> Option<&ReportDocument> {
        self.document.as_ref().ok()
    }
}

/// 报告组装器
///
/// - 编排一次完整的保存流程
/// - 不修改任何分区存储
/// - 只依赖提交能力（`ReportSubmitter`）
pub struct ReportAssembler<S> {
    submitter: S,
    attempts: AtomicU64,
    verbose_logging: bool,
}

impl<S: ReportSubmitter> ReportAssembler<S> {
    /// 创建新的报告组装器
    pub fn new(submitter: S, config: &Config) -> Self {
        Self {
            submitter,
            attempts: AtomicU64::new(0),
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// 组装报告文档（不提交）
    ///
    /// # 参数
    /// - `stores`: 分区存储，必须恰好覆盖每个分区一次
    /// - `id`: 报告标识
    ///
    /// # 返回
    /// 返回已转换为线上键名的文档
    pub fn assemble(
        &self,
        stores: &[&dyn SectionStore],
        id: Option<ReportId>,
    ) -> AppResult<ReportDocument> {
        let mut seen = BTreeMap::new();
        for store in stores {
            let section = store.section();
            if seen.insert(section, *store).is_some() {
                return Err(ExtractionError::DuplicateSection { section }.into());
            }
        }
        if let Some(section) = Section::ALL.into_iter().find(|s| !seen.contains_key(s)) {
            return Err(ExtractionError::MissingSection { section }.into());
        }

        // 先全部提取，再统一处理错误
        let extracted: Vec<(Section, Result<SectionPayload, ExtractionError>)> = seen
            .into_iter()
            .map(|(section, store)| (section, store.extract_current()))
            .collect();

        let mut payloads = BTreeMap::new();
        let mut first_error = None;
        for (section, result) in extracted {
            match result {
                Ok(payload) => {
                    payloads.insert(section, payload);
                }
                Err(e) => {
                    warn!("⚠️ 分区 {} 提取失败: {}", section, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        if let Some(e) = first_error {
            return Err(e.into());
        }

        let document = ReportDocument::assemble(id, payloads)?;

        if self.verbose_logging {
            debug!(
                "报告文档: {}",
                truncate_text(&document.to_json().to_string(), 200)
            );
        }

        Ok(document)
    }

    /// 触发一次保存（同步部分）
    ///
    /// 占用保存互斥并固定文档。已有保存进行中时返回 `None`，不做任何事。
    pub fn begin(
        &self,
        session: &RefCell<SessionController>,
        stores: &[&dyn SectionStore],
    ) -> Option<PendingSave> {
        let guard = match session.borrow_mut().begin_save() {
            Ok(guard) => guard,
            Err(e) => {
                warn!("⚠️ {}，忽略本次保存请求", e);
                return None;
            }
        };

        let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        let ctx = SaveCtx::new(attempt, guard.report_id().cloned());
        info!("{} 💾 开始保存，提取 {} 个分区...", ctx, stores.len());

        let document = self.assemble(stores, ctx.report_id.clone());
        Some(PendingSave {
            ctx,
            document,
            guard,
        })
    }

    /// 提交已触发的保存并记录结果
    ///
    /// 等待提交期间不持有会话借用。新建的报告（触发时没有标识）
    /// 在后端返回标识后写回会话，之后的保存改为更新该报告。
    pub async fn complete(
        &self,
        session: &RefCell<SessionController>,
        pending: PendingSave,
    ) -> SaveAttempt {
        let PendingSave {
            ctx,
            document,
            guard,
        } = pending;

        let result = match document {
            Ok(document) => {
                info!("{} 📤 正在提交报告...", ctx);
                self.submitter
                    .submit(&document)
                    .await
                    .map_err(AppError::from)
            }
            Err(e) => {
                error!("{} ⚠️ 组装失败，不提交: {}", ctx, e);
                Err(e)
            }
        };

        let mut session = session.borrow_mut();
        let attempt = match result {
            Ok(assigned_id) => {
                if let Some(id) = assigned_id {
                    if ctx.report_id.is_none() && session.current_report_id().is_none() {
                        info!("{} 🆕 后端分配报告标识: {}", ctx, id);
                        session.set_report_id(id);
                    }
                }
                SaveAttempt::Saved
            }
            Err(e) => {
                warn!("{} ⚠️ {}", ctx, e);
                SaveAttempt::Failed(e)
            }
        };

        session.finish_save(guard, attempt.outcome());
        drop(session);
        log_save_complete(&ctx, attempt.outcome());
        attempt
    }

    /// 完整的保存流程
    pub async fn assemble_and_submit(
        &self,
        session: &RefCell<SessionController>,
        stores: &[&dyn SectionStore],
    ) -> SaveAttempt {
        match self.begin(session, stores) {
            Some(pending) => self.complete(session, pending).await,
            None => SaveAttempt::Ignored,
        }
    }
}
