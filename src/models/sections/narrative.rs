use serde::{Deserialize, Serialize};

/// H 病例叙述
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeCaseSummary {
    #[serde(rename = "H_1_CaseNarrative")]
    pub case_narrative: Option<String>,
    #[serde(rename = "H_2_ReporterComments")]
    pub reporter_comments: Option<String>,
    #[serde(rename = "H_3_r_SenderDiagnosisMeddraCode")]
    pub sender_diagnoses: Vec<SenderDiagnosis>,
    #[serde(rename = "H_4_SenderComments")]
    pub sender_comments: Option<String>,
    #[serde(rename = "H_5_r_CaseSummaryReporterCommentsNativeLanguage")]
    pub native_language_summaries: Vec<NativeLanguageSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderDiagnosis {
    #[serde(rename = "H_3_r_1a_MeddraVersionSenderDiagnosis")]
    pub meddra_version_sender_diagnosis: Option<String>,
    #[serde(rename = "H_3_r_1b_SenderDiagnosisMeddraCode")]
    pub sender_diagnosis_meddra_code: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeLanguageSummary {
    #[serde(rename = "H_5_r_1a_CaseSummaryReporterCommentsText")]
    pub text: Option<String>,
    #[serde(rename = "H_5_r_1b_CaseSummaryReporterCommentsLanguage")]
    pub language: Option<String>,
}
