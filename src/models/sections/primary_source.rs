use serde::{Deserialize, Serialize};

use crate::models::Nullable;

/// C.2.r 原始报告来源（可重复）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimarySource {
    #[serde(rename = "C_2_r_1_1_ReporterTitle")]
    pub reporter_title: Nullable<String>,
    #[serde(rename = "C_2_r_1_2_ReporterGivenName")]
    pub reporter_given_name: Nullable<String>,
    #[serde(rename = "C_2_r_1_4_ReporterFamilyName")]
    pub reporter_family_name: Nullable<String>,
    #[serde(rename = "C_2_r_2_1_ReporterOrganisation")]
    pub reporter_organisation: Nullable<String>,
    #[serde(rename = "C_2_r_2_4_ReporterCity")]
    pub reporter_city: Nullable<String>,
    #[serde(rename = "C_2_r_2_7_ReporterTelephone")]
    pub reporter_telephone: Nullable<String>,
    #[serde(rename = "C_2_r_3_ReporterCountryCode")]
    pub reporter_country_code: Option<String>,
    #[serde(rename = "C_2_r_4_Qualification")]
    pub qualification: Nullable<String>,
    #[serde(rename = "C_2_r_5_PrimarySourceRegulatoryPurposes")]
    pub primary_source_regulatory_purposes: Option<String>,
}
