use serde::{Deserialize, Serialize};

use crate::models::Nullable;

/// E.i 不良反应/事件（可重复）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    #[serde(rename = "E_i_1_1a_ReactionPrimarySourceNativeLanguage")]
    pub primary_source_native_language: Option<String>,
    #[serde(rename = "E_i_1_1b_ReactionPrimarySourceLanguage")]
    pub primary_source_language: Option<String>,
    #[serde(rename = "E_i_1_2_ReactionPrimarySourceTranslation")]
    pub primary_source_translation: Option<String>,
    #[serde(rename = "E_i_2_1a_MeddraVersionReaction")]
    pub meddra_version_reaction: Option<String>,
    #[serde(rename = "E_i_2_1b_ReactionMeddraCode")]
    pub reaction_meddra_code: Option<u32>,
    #[serde(rename = "E_i_3_1_TermHighlightedReporter")]
    pub term_highlighted_reporter: Option<String>,
    // 严重性标准
    #[serde(rename = "E_i_3_2a_ResultsDeath")]
    pub results_death: Nullable<bool>,
    #[serde(rename = "E_i_3_2b_LifeThreatening")]
    pub life_threatening: Nullable<bool>,
    #[serde(rename = "E_i_3_2c_CausedProlongedHospitalisation")]
    pub caused_prolonged_hospitalisation: Nullable<bool>,
    #[serde(rename = "E_i_3_2d_DisablingIncapacitating")]
    pub disabling_incapacitating: Nullable<bool>,
    #[serde(rename = "E_i_4_DateStartReaction")]
    pub date_start_reaction: Nullable<String>,
    #[serde(rename = "E_i_5_DateEndReaction")]
    pub date_end_reaction: Nullable<String>,
    #[serde(rename = "E_i_7_OutcomeReactionLastObservation")]
    pub outcome_reaction_last_observation: Option<String>,
    #[serde(rename = "E_i_8_MedicalConfirmationHealthcareProfessional")]
    pub medical_confirmation_healthcare_professional: Option<bool>,
    #[serde(rename = "E_i_9_IdentificationCountryReaction")]
    pub identification_country_reaction: Option<String>,
}
