//! 线上键名转换
//!
//! 把显示用的键名（`doseText`、`D_PatientCharacteristics`）转换成后端使用的
//! 下划线小写形式（`dose_text`、`d_patient_characteristics`）。
//!
//! 分词规则：
//! 1. 小写字母/数字后跟大写字母处断开（`doseText` → `dose|Text`）
//! 2. 连续大写后跟“大写+小写”处断开（`MedDRAVersion` → `Med|DRA|Version`）
//! 3. 非字母数字字符都是分隔符，连续分隔符合并
//!
//! 分区规范键另有一张静态对照表，优先于分词规则。

use std::collections::HashMap;
use std::sync::LazyLock;

use phf::phf_map;
use regex::Regex;
use serde_json::{Map, Value as JsonValue};

use crate::error::KeyTransformError;
use crate::models::Section;

/// 分区规范键 → 线上键名
static CANONICAL_WIRE_KEYS: phf::Map<&'static str, &'static str> = phf_map! {
    "F_r_ResultsTestsProceduresInvestigationPatient" => "f_r_results_tests_procedures_investigation_patient",
    "E_i_ReactionEvent" => "e_i_reaction_event",
    "D_PatientCharacteristics" => "d_patient_characteristics",
    "G_k_DrugInformation" => "g_k_drug_information",
    "G_k_4_r_DosageInformation" => "g_k_4_r_dosage_information",
    "C_2_r_PrimarySourceInformation" => "c_2_r_primary_source_information",
    "C_3_InformationSenderCaseSafetyReport" => "c_3_information_sender_case_safety_report",
    "C_4_r_LiteratureReference" => "c_4_r_literature_reference",
    "C_1_IdentificationCaseSafetyReport" => "c_1_identification_case_safety_report",
    "C_5_StudyIdentification" => "c_5_study_identification",
    "H_NarrativeCaseSummary" => "h_narrative_case_summary",
};

static LOWER_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\p{Ll}\p{N}])(\p{Lu})").expect("valid word boundary pattern"));

static UPPER_RUN_THEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Lu})(\p{Lu}\p{Ll})").expect("valid acronym boundary pattern"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid separator pattern"));

/// 转换单个键名
pub fn to_wire_key(key: &str) -> String {
    if let Some(wire) = CANONICAL_WIRE_KEYS.get(key) {
        return (*wire).to_string();
    }
    split_words(key).join("_")
}

/// 分区规范键对应的线上键名
pub fn canonical_wire_key(section: Section) -> String {
    to_wire_key(section.canonical_key())
}

/// 递归转换 JSON 值中所有对象的键名
///
/// 数组逐项转换，标量原样保留
pub fn to_wire_keys(value: &JsonValue) -> Result<JsonValue, KeyTransformError> {
    Ok(match value {
        JsonValue::Object(map) => JsonValue::Object(to_wire_map(map)?),
        JsonValue::Array(items) => JsonValue::Array(
            items
                .iter()
                .map(to_wire_keys)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        other => other.clone(),
    })
}

/// 转换一个对象的键名
///
/// 同一对象内两个不同的键转换后相同时返回 `Collision`，不会静默覆盖
pub fn to_wire_map(
    map: &Map<String, JsonValue>,
) -> Result<Map<String, JsonValue>, KeyTransformError> {
    let mut out = Map::new();
    let mut origins: HashMap<String, &str> = HashMap::with_capacity(map.len());

    for (key, value) in map {
        let wire_key = to_wire_key(key);
        if let Some(first) = origins.insert(wire_key.clone(), key) {
            return Err(KeyTransformError::Collision {
                wire_key,
                first: first.to_string(),
                second: key.clone(),
            });
        }
        out.insert(wire_key, to_wire_keys(value)?);
    }

    Ok(out)
}

fn split_words(key: &str) -> Vec<String> {
    let marked = LOWER_THEN_UPPER.replace_all(key, "${1}\0${2}");
    let marked = UPPER_RUN_THEN_WORD.replace_all(&marked, "${1}\0${2}");

    SEPARATORS
        .split(&marked)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_keys() {
        assert_eq!(to_wire_key("doseText"), "dose_text");
        assert_eq!(to_wire_key("nullFlavor"), "null_flavor");
        assert_eq!(to_wire_key("drugIndex"), "drug_index");
        assert_eq!(to_wire_key("id"), "id");
    }

    #[test]
    fn test_e2b_display_keys() {
        assert_eq!(to_wire_key("F_r_1_TestDate"), "f_r_1_test_date");
        assert_eq!(
            to_wire_key("F_r_2_2a_MeddraVersionTestName"),
            "f_r_2_2a_meddra_version_test_name"
        );
        assert_eq!(to_wire_key("D_2_2a_AgeOnsetReactionNum"), "d_2_2a_age_onset_reaction_num");
        assert_eq!(
            to_wire_key("G_k_4_r_9_2b_PharmaceuticalDoseFormTermid"),
            "g_k_4_r_9_2b_pharmaceutical_dose_form_termid"
        );
    }

    #[test]
    fn test_acronyms_stay_together() {
        assert_eq!(to_wire_key("MedDRAVersion"), "med_dra_version");
        assert_eq!(to_wire_key("reactionMPIDVersion"), "reaction_mpid_version");
        assert_eq!(to_wire_key("ICSR"), "icsr");
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(to_wire_key("dose  text"), "dose_text");
        assert_eq!(to_wire_key("__doseText__"), "dose_text");
        assert_eq!(to_wire_key("primary-source"), "primary_source");
    }

    #[test]
    fn test_table_agrees_with_word_rules() {
        for section in Section::ALL {
            let key = section.canonical_key();
            let table = CANONICAL_WIRE_KEYS
                .get(key)
                .unwrap_or_else(|| panic!("{key} missing from table"));
            assert_eq!(split_words(key).join("_"), *table, "drift for {key}");
        }
        assert_eq!(CANONICAL_WIRE_KEYS.len(), Section::ALL.len());
    }

    #[test]
    fn test_wire_keys_are_fixed_points() {
        for key in ["dose_text", "g_k_drug_information", "f_r_2_2a_meddra_version_test_name"] {
            assert_eq!(to_wire_key(key), key);
            assert_eq!(to_wire_key(&to_wire_key(key)), to_wire_key(key));
        }
    }

    #[test]
    fn test_nested_structures_are_transformed() {
        let input = json!({
            "G_k_DrugInformation": [
                { "doseText": "10mg", "G_k_2_2_MedicinalProductNamePrimarySource": { "value": "Aspirin", "nullFlavor": null } }
            ],
            "id": "REP-1"
        });

        let output = to_wire_keys(&input).unwrap();
        assert_eq!(
            output,
            json!({
                "g_k_drug_information": [
                    { "dose_text": "10mg", "g_k_2_2_medicinal_product_name_primary_source": { "value": "Aspirin", "null_flavor": null } }
                ],
                "id": "REP-1"
            })
        );
        assert_eq!(to_wire_keys(&input).unwrap(), output);
    }

    #[test]
    fn test_collision_is_reported() {
        let input = json!({ "drugs": { "doseText": 1, "dose_text": 2 } });

        let err = to_wire_keys(&input).unwrap_err();
        assert_eq!(
            err,
            KeyTransformError::Collision {
                wire_key: "dose_text".to_string(),
                first: "doseText".to_string(),
                second: "dose_text".to_string(),
            }
        );
    }

    #[test]
    fn test_scalars_and_strings_untouched() {
        let input = json!(["doseText", 1, true, null]);
        assert_eq!(to_wire_keys(&input).unwrap(), input);
    }
}
