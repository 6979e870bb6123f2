//! 报告文档
//!
//! 组装完成、已转换为线上键名的整份报告。构造时保证：
//! - 11 个分区规范键全部存在
//! - `id` 与触发保存时的会话报告标识一致

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::error::{AppResult, ExtractionError};
use crate::models::{ReportId, Section, SectionPayload};
use crate::transform::{canonical_wire_key, to_wire_map};

/// 报告文档中的标识字段
pub const ID_KEY: &str = "id";

/// 报告文档
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    #[serde(skip)]
    id: Option<ReportId>,
    #[serde(flatten)]
    body: Map<String, JsonValue>,
}

impl ReportDocument {
    /// 组装报告文档
    ///
    /// # 参数
    /// - `id`: 触发保存时的报告标识，未设置时为 `None`
    /// - `payloads`: 每个分区的提取结果，必须覆盖全部分区
    ///
    /// # 返回
    /// 返回已转换为线上键名的文档；缺少分区或键名冲突时返回错误
    pub fn assemble(
        id: Option<ReportId>,
        mut payloads: BTreeMap<Section, SectionPayload>,
    ) -> AppResult<Self> {
        let mut display = Map::new();
        display.insert(
            ID_KEY.to_string(),
            id.as_ref()
                .map(|id| JsonValue::String(id.to_string()))
                .unwrap_or(JsonValue::Null),
        );

        for section in Section::ALL {
            let payload = payloads
                .remove(&section)
                .ok_or(ExtractionError::MissingSection { section })?;
            display.insert(section.canonical_key().to_string(), payload.into_json());
        }

        let body = to_wire_map(&display)?;
        Ok(Self { id, body })
    }

    /// 报告标识
    pub fn id(&self) -> Option<&ReportId> {
        self.id.as_ref()
    }

    /// 某个分区在文档中的内容
    pub fn section(&self, section: Section) -> Option<&JsonValue> {
        self.body.get(&canonical_wire_key(section))
    }

    /// 文档顶层键（线上键名）
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.body.keys().map(String::as_str)
    }

    /// 转为 JSON 值
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_payloads() -> BTreeMap<Section, SectionPayload> {
        Section::ALL
            .into_iter()
            .map(|section| (section, SectionPayload::new(json!([]))))
            .collect()
    }

    #[test]
    fn test_assemble_contains_every_section_and_id() {
        let doc = ReportDocument::assemble(Some("REP-7".into()), empty_payloads()).unwrap();

        assert_eq!(doc.keys().count(), Section::ALL.len() + 1);
        assert_eq!(doc.to_json()["id"], json!("REP-7"));
        for section in Section::ALL {
            assert_eq!(doc.section(section), Some(&json!([])));
        }
    }

    #[test]
    fn test_unset_id_serializes_as_null() {
        let doc = ReportDocument::assemble(None, empty_payloads()).unwrap();
        assert!(doc.id().is_none());
        assert_eq!(serde_json::to_value(&doc).unwrap()["id"], JsonValue::Null);
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let mut payloads = empty_payloads();
        payloads.remove(&Section::Narrative);

        let err = ReportDocument::assemble(None, payloads).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Extraction(ExtractionError::MissingSection {
                section: Section::Narrative
            })
        ));
    }

    #[test]
    fn test_nested_keys_are_wire_cased() {
        let mut payloads = empty_payloads();
        payloads.insert(
            Section::Drugs,
            SectionPayload::new(json!({ "doseText": "10mg", "G_k_2_2_MedicinalProductNamePrimarySource": "Aspirin" })),
        );

        let doc = ReportDocument::assemble(Some("REP-1".into()), payloads).unwrap();
        assert_eq!(
            doc.section(Section::Drugs),
            Some(&json!({
                "dose_text": "10mg",
                "g_k_2_2_medicinal_product_name_primary_source": "Aspirin"
            }))
        );
    }
}
