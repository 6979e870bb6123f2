//! 报告编辑器 - 编排层
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建后端客户端、会话和全部分区存储
//! 2. **标签页切换**：只改会话，不碰分区
//! 3. **草稿加载**：从 TOML 文件写入分区
//! 4. **保存**：委托 `ReportAssembler`，保存期间的编辑不影响已固定的文档
//! 5. **提示**：把保存结果交给 `SaveNotifier`
//!
//! 单线程协作式：会话和分区都放在 `RefCell` 里，
//! 借用只在同步步骤中持有，不跨越 `.await`。

use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::{HttpReportClient, ReportSubmitter};
use crate::config::Config;
use crate::error::{AppResult, ExtractionError, SessionError};
use crate::models::{load_draft, ReportDocument, ReportId, Section, SectionPayload};
use crate::services::{LogSink, Notice, NoticeSink, SaveNotifier};
use crate::session::SessionController;
use crate::stores::SectionStores;
use crate::utils::logging::log_startup;
use crate::workflow::{ReportAssembler, SaveAttempt};

/// 应用主结构
pub struct App<S = HttpReportClient, K = LogSink> {
    config: Config,
    session: RefCell<SessionController>,
    stores: RefCell<SectionStores>,
    assembler: ReportAssembler<S>,
    notifier: SaveNotifier<K>,
}

impl App {
    /// 初始化应用，提交到配置中的后端
    pub fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);
        let client = HttpReportClient::new(&config)?;
        Ok(Self::with_parts(config, client, LogSink))
    }
}

impl<S: ReportSubmitter, K: NoticeSink> App<S, K> {
    /// 使用指定的提交方和提示展示方创建
    pub fn with_parts(config: Config, submitter: S, sink: K) -> Self {
        Self {
            assembler: ReportAssembler::new(submitter, &config),
            notifier: SaveNotifier::with_sink(&config, sink),
            session: RefCell::new(SessionController::new()),
            stores: RefCell::new(SectionStores::new()),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> Ref<'_, SessionController> {
        self.session.borrow()
    }

    pub fn stores(&self) -> Ref<'_, SectionStores> {
        self.stores.borrow()
    }

    /// 编辑分区
    pub fn stores_mut(&self) -> RefMut<'_, SectionStores> {
        self.stores.borrow_mut()
    }

    pub fn assembler(&self) -> &ReportAssembler<S> {
        &self.assembler
    }

    pub fn notifier(&self) -> &SaveNotifier<K> {
        &self.notifier
    }

    /// 打开（加载/新建）一份报告
    pub fn open_report(&self, id: impl Into<ReportId>) {
        self.session.borrow_mut().set_report_id(id);
    }

    pub fn switch_tab(&self, section: Section) {
        self.session.borrow_mut().switch_tab(section);
    }

    /// 按标签页标识切换，未知标识时状态不变
    pub fn switch_tab_id(&self, tab_id: &str) -> Result<(), SessionError> {
        self.session.borrow_mut().switch_tab_id(tab_id)
    }

    /// 当前显示的分区
    pub fn active_section(&self) -> Section {
        self.session.borrow().active_tab()
    }

    /// 当前显示分区的内容
    pub fn extract_active(&self) -> Result<SectionPayload, ExtractionError> {
        let section = self.active_section();
        let stores = self.stores.borrow();
        stores.get(section).extract_current()
    }

    /// 从 TOML 文件加载草稿
    ///
    /// 文件中带报告标识时同时打开该报告
    pub async fn load_draft(&self, path: &Path) -> Result<()> {
        let draft = load_draft(path).await?;
        let report_id = self.stores.borrow_mut().apply_draft(draft);
        if let Some(id) = report_id {
            self.open_report(id);
        }
        Ok(())
    }

    /// 预览当前的线上文档（不提交）
    pub fn preview(&self) -> AppResult<ReportDocument> {
        let id = self.session.borrow().current_report_id().cloned();
        let stores = self.stores.borrow();
        let all = stores.all();
        self.assembler.assemble(&all, id)
    }

    /// 保存报告
    ///
    /// 已有保存进行中时忽略本次请求
    pub async fn save(&self) -> SaveAttempt {
        let pending = {
            let stores = self.stores.borrow();
            let all = stores.all();
            self.assembler.begin(&self.session, &all)
        };

        match pending {
            Some(pending) => self.assembler.complete(&self.session, pending).await,
            None => SaveAttempt::Ignored,
        }
    }

    /// 展示待处理的保存结果
    pub fn notify(&self) -> Option<Notice> {
        self.notifier.present(&mut self.session.borrow_mut())
    }

    /// 运行一次：加载草稿（如果存在）→ 保存 → 提示
    pub async fn run(&self) -> Result<SaveAttempt> {
        let draft_file = Path::new(&self.config.draft_file);
        if draft_file.exists() {
            info!("📁 加载草稿: {}", draft_file.display());
            self.load_draft(draft_file).await?;
        } else {
            warn!("⚠️ 草稿文件不存在，提交空白报告: {}", draft_file.display());
        }

        let attempt = self.save().await;
        self.notify();
        Ok(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmissionError;
    use crate::services::MemorySink;
    use futures::future::{BoxFuture, FutureExt};

    struct AlwaysOk;

    impl ReportSubmitter for AlwaysOk {
        fn submit<'a>(
            &'a self,
            _document: &'a ReportDocument,
        ) -> BoxFuture<'a, Result<Option<ReportId>, SubmissionError>> {
            async { Ok(None) }.boxed()
        }
    }

    fn app() -> App<AlwaysOk, MemorySink> {
        App::with_parts(Config::default(), AlwaysOk, MemorySink::default())
    }

    #[test]
    fn test_active_store_follows_tab() {
        let app = app();
        app.stores_mut()
            .narrative
            .edit(|n| n.case_narrative = Some("患者服药后出现皮疹".to_string()));

        assert_eq!(app.active_section(), Section::Results);
        assert_eq!(app.extract_active().unwrap().into_json(), serde_json::json!([]));

        app.switch_tab_id("narrative").unwrap();
        let narrative = app.extract_active().unwrap().into_json();
        assert_eq!(narrative["H_1_CaseNarrative"], "患者服药后出现皮疹");
    }

    #[test]
    fn test_preview_uses_current_report_id() {
        let app = app();
        app.open_report("REP-5");

        let document = app.preview().unwrap();
        assert_eq!(document.id(), Some(&ReportId::new("REP-5")));
        assert!(app.session().last_save_outcome() == crate::session::SaveOutcome::None);
    }

    #[tokio::test]
    async fn test_save_then_notify() {
        let app = app();

        assert!(app.save().await.is_saved());
        let notice = app.notify().unwrap();

        assert_eq!(notice.message, app.config().success_message);
        assert!(app.notify().is_none());
        assert_eq!(app.notifier().sink().shown().len(), 1);
    }
}
