//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层持有一次编辑会话的全部状态，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! editor::App (会话 + 11 个分区存储)
//!     ↓
//! workflow::ReportAssembler (处理一次保存)
//!     ↓
//! clients / services (能力层：提交 / 提示)
//! ```
//!
//! 编排层只做调度，不做具体的提取和键名转换。

pub mod editor;

pub use editor::App;
