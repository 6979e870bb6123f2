use serde::Serialize;
use tracing::debug;

use crate::error::ExtractionError;
use crate::models::{Section, SectionPayload};
use crate::stores::SectionStore;

/// 单个分区的编辑状态
#[derive(Debug, Clone)]
pub struct SectionState<T> {
    section: Section,
    draft: T,
}

impl<T: Default> SectionState<T> {
    /// 创建空白分区
    pub fn new(section: Section) -> Self {
        Self {
            section,
            draft: T::default(),
        }
    }

    /// 清空分区
    pub fn reset(&mut self) {
        self.draft = T::default();
    }
}

impl<T> SectionState<T> {
    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// 编辑草稿
    ///
    /// # 参数
    /// - `edit`: 修改草稿的闭包，返回值原样传出
    pub fn edit<R>(&mut self, edit: impl FnOnce(&mut T) -> R) -> R {
        debug!("编辑分区: {}", self.section);
        edit(&mut self.draft)
    }

    /// 整体替换草稿，返回旧草稿
    pub fn replace(&mut self, draft: T) -> T {
        std::mem::replace(&mut self.draft, draft)
    }
}

impl<T: Serialize> SectionStore for SectionState<T> {
    fn section(&self) -> Section {
        self.section
    }

    fn extract_current(&self) -> Result<SectionPayload, ExtractionError> {
        SectionPayload::from_draft(self.section, &self.draft)
    }
}
