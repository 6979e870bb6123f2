//! 全部分区存储
//!
//! 持有 11 个带类型的分区存储，对外按 [`Section`] 提供统一的 `dyn SectionStore` 视图

use tracing::info;

use crate::models::sections::{
    Dosage, Drug, Identification, LiteratureReference, NarrativeCaseSummary,
    PatientCharacteristics, PrimarySource, Reaction, SenderInformation, StudyIdentification,
    TestResult,
};
use crate::models::{ReportDraft, ReportId, Section};
use crate::stores::{SectionState, SectionStore};

/// 全部分区存储
#[derive(Debug, Clone)]
pub struct SectionStores {
    pub results: SectionState<Vec<TestResult>>,
    pub reactions: SectionState<Vec<Reaction>>,
    pub patient: SectionState<PatientCharacteristics>,
    pub drugs: SectionState<Vec<Drug>>,
    pub dosages: SectionState<Vec<Dosage>>,
    pub primary_source: SectionState<Vec<PrimarySource>>,
    pub sender_information: SectionState<SenderInformation>,
    pub references: SectionState<Vec<LiteratureReference>>,
    pub identification: SectionState<Identification>,
    pub study_identification: SectionState<StudyIdentification>,
    pub narrative: SectionState<NarrativeCaseSummary>,
}

impl SectionStores {
    /// 创建全部空白分区
    pub fn new() -> Self {
        Self {
            results: SectionState::new(Section::Results),
            reactions: SectionState::new(Section::Reactions),
            patient: SectionState::new(Section::Patient),
            drugs: SectionState::new(Section::Drugs),
            dosages: SectionState::new(Section::Dosages),
            primary_source: SectionState::new(Section::PrimarySource),
            sender_information: SectionState::new(Section::SenderInformation),
            references: SectionState::new(Section::References),
            identification: SectionState::new(Section::Identification),
            study_identification: SectionState::new(Section::StudyIdentification),
            narrative: SectionState::new(Section::Narrative),
        }
    }

    /// 按标签页顺序返回所有分区存储
    pub fn all(&self) -> [&dyn SectionStore; 11] {
        [
            &self.results,
            &self.reactions,
            &self.patient,
            &self.drugs,
            &self.dosages,
            &self.primary_source,
            &self.sender_information,
            &self.references,
            &self.identification,
            &self.study_identification,
            &self.narrative,
        ]
    }

    /// 获取某个分区的存储
    pub fn get(&self, section: Section) -> &dyn SectionStore {
        match section {
            Section::Results => &self.results,
            Section::Reactions => &self.reactions,
            Section::Patient => &self.patient,
            Section::Drugs => &self.drugs,
            Section::Dosages => &self.dosages,
            Section::PrimarySource => &self.primary_source,
            Section::SenderInformation => &self.sender_information,
            Section::References => &self.references,
            Section::Identification => &self.identification,
            Section::StudyIdentification => &self.study_identification,
            Section::Narrative => &self.narrative,
        }
    }

    /// 把草稿文件中出现的分区写入存储
    ///
    /// # 返回
    /// 返回草稿中的报告标识（如果有）
    pub fn apply_draft(&mut self, draft: ReportDraft) -> Option<ReportId> {
        let mut applied = 0;

        macro_rules! apply {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = draft.$field {
                        self.$field.replace(value);
                        applied += 1;
                    }
                )+
            };
        }

        apply!(
            results,
            reactions,
            patient,
            drugs,
            dosages,
            primary_source,
            sender_information,
            references,
            identification,
            study_identification,
            narrative,
        );

        info!("✓ 草稿已写入 {} 个分区", applied);
        draft.report_id
    }
}

impl Default for SectionStores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sections::{HeldDocument, MedicalHistoryEntry, SenderDiagnosis};
    use crate::models::parse_draft;
    use crate::transform::to_wire_key;
    use serde_json::{json, Value as JsonValue};
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn test_all_follows_tab_order() {
        let stores = SectionStores::new();
        let sections: Vec<_> = stores.all().iter().map(|store| store.section()).collect();
        assert_eq!(sections, Section::ALL.to_vec());

        for section in Section::ALL {
            assert_eq!(stores.get(section).section(), section);
        }
    }

    #[test]
    fn test_defaults_extract_for_every_section() {
        let stores = SectionStores::new();

        assert_eq!(stores.get(Section::Drugs).extract_current().unwrap().into_json(), json!([]));
        let narrative = stores.get(Section::Narrative).extract_current().unwrap().into_json();
        assert_eq!(narrative["H_1_CaseNarrative"], JsonValue::Null);
        assert_eq!(narrative["H_3_r_SenderDiagnosisMeddraCode"], json!([]));
    }

    #[test]
    fn test_apply_draft_only_touches_listed_sections() {
        let mut stores = SectionStores::new();
        stores.narrative.edit(|n| n.sender_comments = Some("keep me".to_string()));

        let draft = parse_draft(
            r#"
            report-id = "REP-9"
            [[references]]
            C_4_r_1_LiteratureReference = { value = "Lancet 2020;1:1" }
            "#,
        )
        .unwrap();

        let id = stores.apply_draft(draft);

        assert_eq!(id, Some(ReportId::new("REP-9")));
        assert_eq!(stores.references.draft().len(), 1);
        assert_eq!(
            stores.narrative.draft().sender_comments.as_deref(),
            Some("keep me")
        );
    }

    fn collect_keys(value: &JsonValue, keys: &mut BTreeSet<String>) {
        match value {
            JsonValue::Object(map) => {
                for (key, nested) in map {
                    keys.insert(key.clone());
                    collect_keys(nested, keys);
                }
            }
            JsonValue::Array(items) => items.iter().for_each(|item| collect_keys(item, keys)),
            _ => {}
        }
    }

    /// 每个可重复结构都放一条，覆盖全部字段
    fn populated_stores() -> SectionStores {
        let mut stores = SectionStores::new();
        stores.results.replace(vec![Default::default()]);
        stores.reactions.replace(vec![Default::default()]);
        stores.drugs.replace(vec![Drug {
            substances: vec![Default::default()],
            indications: vec![Default::default()],
            ..Default::default()
        }]);
        stores.dosages.replace(vec![Default::default()]);
        stores.primary_source.replace(vec![Default::default()]);
        stores.references.replace(vec![Default::default()]);
        stores.patient.edit(|p| p.medical_history.push(MedicalHistoryEntry::default()));
        stores.identification.edit(|i| i.documents_held_sender.push(HeldDocument::default()));
        stores.study_identification.edit(|s| s.registrations.push(Default::default()));
        stores.narrative.edit(|n| {
            n.sender_diagnoses.push(SenderDiagnosis::default());
            n.native_language_summaries.push(Default::default());
        });
        stores
    }

    #[test]
    fn test_schema_keys_map_injectively() {
        let stores = populated_stores();
        let mut keys = BTreeSet::new();
        keys.insert("id".to_string());
        for store in stores.all() {
            keys.insert(store.section().canonical_key().to_string());
            collect_keys(store.extract_current().unwrap().as_json(), &mut keys);
        }

        let wire: HashSet<String> = keys.iter().map(|key| to_wire_key(key)).collect();
        assert_eq!(wire.len(), keys.len());
        assert!(keys.len() > 100);
    }

    #[test]
    fn test_schema_keys_match_backend_names() {
        let stores = populated_stores();
        let patient = stores.patient.extract_current().unwrap();
        let mut keys = BTreeSet::new();
        collect_keys(patient.as_json(), &mut keys);
        let wire: BTreeSet<String> = keys.iter().map(|key| to_wire_key(key)).collect();

        for expected in [
            "d_2_2a_age_onset_reaction_num",
            "d_7_1_r_structured_information_medical_history",
            "d_7_1_r_1b_medical_history_meddra_code",
            "d_10_2_2a_age_parent_num",
            "d_10_7_2_text_medical_history_parent",
            "null_flavor",
        ] {
            assert!(wire.contains(expected), "missing {expected}");
        }
    }
}
