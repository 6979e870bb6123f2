//! D 患者信息
//!
//! 父母信息（D.10）在“Parent-child”界面中编辑，但属于患者分区，
//! 提交时与患者字段平铺在同一个对象里。

use serde::{Deserialize, Serialize};

use crate::models::Nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientCharacteristics {
    #[serde(rename = "D_1_Patient")]
    pub patient: Nullable<String>,
    #[serde(rename = "D_2_1_DateBirth")]
    pub date_birth: Nullable<String>,
    #[serde(rename = "D_2_2a_AgeOnsetReactionNum")]
    pub age_onset_reaction_num: Option<u32>,
    #[serde(rename = "D_2_2b_AgeOnsetReactionUnit")]
    pub age_onset_reaction_unit: Option<String>,
    #[serde(rename = "D_2_3_PatientAgeGroup")]
    pub patient_age_group: Option<String>,
    #[serde(rename = "D_3_BodyWeight")]
    pub body_weight: Option<f64>,
    #[serde(rename = "D_4_Height")]
    pub height: Option<u32>,
    #[serde(rename = "D_5_Sex")]
    pub sex: Nullable<String>,
    #[serde(rename = "D_7_1_r_StructuredInformationMedicalHistory")]
    pub medical_history: Vec<MedicalHistoryEntry>,
    #[serde(rename = "D_7_2_TextMedicalHistory")]
    pub text_medical_history: Nullable<String>,
    #[serde(rename = "D_9_1_DateDeath")]
    pub date_death: Nullable<String>,
    #[serde(rename = "D_9_3_Autopsy")]
    pub autopsy: Nullable<bool>,
    #[serde(flatten)]
    pub parent: ParentInformation,
}

/// D.7.1.r 结构化病史
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalHistoryEntry {
    #[serde(rename = "D_7_1_r_1a_MeddraVersionMedicalHistory")]
    pub meddra_version_medical_history: Option<String>,
    #[serde(rename = "D_7_1_r_1b_MedicalHistoryMeddraCode")]
    pub medical_history_meddra_code: Option<u32>,
    #[serde(rename = "D_7_1_r_2_StartDate")]
    pub start_date: Nullable<String>,
    #[serde(rename = "D_7_1_r_3_Continuing")]
    pub continuing: Nullable<bool>,
    #[serde(rename = "D_7_1_r_4_EndDate")]
    pub end_date: Nullable<String>,
    #[serde(rename = "D_7_1_r_5_Comments")]
    pub comments: Option<String>,
}

/// D.10 父母信息（母婴/父婴病例）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentInformation {
    #[serde(rename = "D_10_1_ParentIdentification")]
    pub parent_identification: Nullable<String>,
    #[serde(rename = "D_10_2_1_DateBirthParent")]
    pub date_birth_parent: Nullable<String>,
    #[serde(rename = "D_10_2_2a_AgeParentNum")]
    pub age_parent_num: Option<u32>,
    #[serde(rename = "D_10_2_2b_AgeParentUnit")]
    pub age_parent_unit: Option<String>,
    #[serde(rename = "D_10_3_LastMenstrualPeriodDateParent")]
    pub last_menstrual_period_date_parent: Nullable<String>,
    #[serde(rename = "D_10_4_BodyWeightParent")]
    pub body_weight_parent: Option<f64>,
    #[serde(rename = "D_10_5_HeightParent")]
    pub height_parent: Option<u32>,
    #[serde(rename = "D_10_6_SexParent")]
    pub sex_parent: Nullable<String>,
    #[serde(rename = "D_10_7_2_TextMedicalHistoryParent")]
    pub text_medical_history_parent: Option<String>,
}
