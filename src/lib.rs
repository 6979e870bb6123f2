//! # ICSR Report Editor
//!
//! 药物警戒个例安全报告（ICSR，ICH E2B）编辑器的核心
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 分区存储层（Stores）
//! - `stores/` - 每个分区持有自己的编辑状态，只暴露提取能力
//! - `SectionState` - 带类型的分区草稿
//! - `SectionStores` - 全部 11 个分区
//!
//! ### ② 业务能力层（Clients / Services）
//! - `clients/` - 报告提交能力（`ReportSubmitter`、`HttpReportClient`）
//! - `services/` - 保存结果提示能力（`SaveNotifier`）
//! - `transform/` - 线上键名转换
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次保存"的完整流程
//! - `SaveCtx` - 上下文封装（报告标识 + 保存序号）
//! - `ReportAssembler` - 流程编排（提取 → 组装 → 转换 → 提交 → 记录结果）
//!
//! ### ④ 编排层（Orchestration）
//! - `session/` - 标签页与保存结果状态机
//! - `orchestrator/editor` - 持有会话和全部分区的编辑器
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod session;
pub mod stores;
pub mod transform;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{HttpReportClient, ReportSubmitter};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ReportDocument, ReportId, Section, SectionPayload};
pub use orchestrator::App;
pub use session::{SaveOutcome, SessionController, SessionState};
pub use stores::{SectionState, SectionStore, SectionStores};
pub use workflow::{ReportAssembler, SaveAttempt, SaveCtx};
