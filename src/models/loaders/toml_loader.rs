use crate::models::sections::{
    Dosage, Drug, Identification, LiteratureReference, NarrativeCaseSummary,
    PatientCharacteristics, PrimarySource, Reaction, SenderInformation, StudyIdentification,
    TestResult,
};
use crate::models::ReportId;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 报告草稿文件
///
/// 表名与标签页标识一致；文件中没有出现的分区保持存储中的现有内容
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReportDraft {
    pub report_id: Option<ReportId>,
    pub results: Option<Vec<TestResult>>,
    pub reactions: Option<Vec<Reaction>>,
    pub patient: Option<PatientCharacteristics>,
    pub drugs: Option<Vec<Drug>>,
    pub dosages: Option<Vec<Dosage>>,
    pub primary_source: Option<Vec<PrimarySource>>,
    pub sender_information: Option<SenderInformation>,
    pub references: Option<Vec<LiteratureReference>>,
    pub identification: Option<Identification>,
    pub study_identification: Option<StudyIdentification>,
    pub narrative: Option<NarrativeCaseSummary>,
}

/// 从 TOML 文件加载报告草稿
pub async fn load_draft(toml_file_path: &Path) -> Result<ReportDraft> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取草稿文件: {}", toml_file_path.display()))?;

    let draft = parse_draft(&content)
        .with_context(|| format!("无法解析草稿文件: {}", toml_file_path.display()))?;

    tracing::info!(
        "已加载草稿: {} (报告 {})",
        toml_file_path.display(),
        draft
            .report_id
            .as_ref()
            .map(ReportId::to_string)
            .unwrap_or_else(|| "未设置".to_string())
    );

    Ok(draft)
}

/// 解析 TOML 格式的报告草稿
pub fn parse_draft(content: &str) -> Result<ReportDraft> {
    let draft: ReportDraft = toml::from_str(content)?;
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NullFlavor, Nullable};

    #[test]
    fn test_parse_partial_draft() {
        let draft = parse_draft(
            r#"
            report-id = "REP-42"

            [[drugs]]
            G_k_2_2_MedicinalProductNamePrimarySource = "Aspirin"

            [[dosages]]
            drugIndex = 0
            G_k_4_r_8_DosageText = "10mg"

            [patient]
            D_5_Sex = { nullFlavor = "UNK" }
            D_10_5_HeightParent = 170
            "#,
        )
        .unwrap();

        assert_eq!(draft.report_id, Some(ReportId::new("REP-42")));
        let drugs = draft.drugs.unwrap();
        assert_eq!(drugs[0].medicinal_product_name.as_deref(), Some("Aspirin"));
        assert_eq!(draft.dosages.unwrap()[0].dosage_text.as_deref(), Some("10mg"));

        let patient = draft.patient.unwrap();
        assert_eq!(patient.sex, Nullable::flavor(NullFlavor::Unk));
        assert_eq!(patient.parent.height_parent, Some(170));

        assert!(draft.reactions.is_none());
        assert!(draft.narrative.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        assert!(parse_draft("[[drugs]\nbroken").is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_draft(Path::new("no-such-draft.toml")).await;
        assert!(result.is_err());
    }
}
