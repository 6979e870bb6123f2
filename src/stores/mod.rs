//! 分区存储 - 能力层
//!
//! 每个分区持有自己的编辑状态，只暴露“提取当前值”的能力：
//! - 提取是观察，不修改分区状态
//! - 不关心其他分区，也不关心保存流程

pub mod registry;
pub mod section_state;

pub use registry::SectionStores;
pub use section_state::SectionState;

use crate::error::ExtractionError;
use crate::models::{Section, SectionPayload};

/// 分区存储
pub trait SectionStore {
    /// 存储对应的分区
    fn section(&self) -> Section;

    /// 提取当前编辑内容
    ///
    /// 字段不完整也会返回值；只有内部状态不一致时才返回错误
    fn extract_current(&self) -> Result<SectionPayload, ExtractionError>;
}
