use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ExtractionError;
use crate::models::Section;

/// 分区提取结果
///
/// 对组装器来说是不透明的可序列化值，形状由各分区自己决定
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SectionPayload(JsonValue);

impl SectionPayload {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// 序列化分区草稿
    pub fn from_draft<T: Serialize>(section: Section, draft: &T) -> Result<Self, ExtractionError> {
        serde_json::to_value(draft)
            .map(Self)
            .map_err(|source| ExtractionError::Serialize { section, source })
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_json(self) -> JsonValue {
        self.0
    }
}

impl From<JsonValue> for SectionPayload {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

/// 报告标识
///
/// 由外部（路由/导航）提供，单次编辑会话内保持不变
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReportId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ReportId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
