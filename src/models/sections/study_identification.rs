use serde::{Deserialize, Serialize};

use crate::models::Nullable;

/// C.5 研究标识
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyIdentification {
    #[serde(rename = "C_5_1_r_StudyRegistration")]
    pub registrations: Vec<StudyRegistration>,
    #[serde(rename = "C_5_2_StudyName")]
    pub study_name: Nullable<String>,
    #[serde(rename = "C_5_3_SponsorStudyNumber")]
    pub sponsor_study_number: Nullable<String>,
    #[serde(rename = "C_5_4_StudyTypeReaction")]
    pub study_type_reaction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyRegistration {
    #[serde(rename = "C_5_1_r_1_StudyRegistrationNumber")]
    pub study_registration_number: Nullable<String>,
    #[serde(rename = "C_5_1_r_2_StudyRegistrationCountry")]
    pub study_registration_country: Nullable<String>,
}
