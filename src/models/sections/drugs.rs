use serde::{Deserialize, Serialize};

use crate::models::Nullable;

/// G.k 药品信息（可重复）
///
/// 剂量信息在单独的“Dosages”分区中编辑，见 [`super::Dosage`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Drug {
    #[serde(rename = "G_k_1_CharacterisationDrugRole")]
    pub characterisation_drug_role: Option<String>,
    #[serde(rename = "G_k_2_1_1a_MpidVersion")]
    pub mpid_version: Option<String>,
    #[serde(rename = "G_k_2_1_1b_Mpid")]
    pub mpid: Option<String>,
    #[serde(rename = "G_k_2_2_MedicinalProductNamePrimarySource")]
    pub medicinal_product_name: Option<String>,
    #[serde(rename = "G_k_2_3_r_SubstanceIdStrength")]
    pub substances: Vec<SubstanceStrength>,
    #[serde(rename = "G_k_2_4_IdentificationCountryDrugObtained")]
    pub identification_country_drug_obtained: Option<String>,
    #[serde(rename = "G_k_3_3_NameHolderApplicant")]
    pub name_holder_applicant: Option<String>,
    #[serde(rename = "G_k_5a_CumulativeDoseFirstReactionNum")]
    pub cumulative_dose_first_reaction_num: Option<f64>,
    #[serde(rename = "G_k_5b_CumulativeDoseFirstReactionUnit")]
    pub cumulative_dose_first_reaction_unit: Option<String>,
    #[serde(rename = "G_k_7_r_IndicationUseCase")]
    pub indications: Vec<Indication>,
    #[serde(rename = "G_k_8_ActionTakenDrug")]
    pub action_taken_drug: Option<String>,
    #[serde(rename = "G_k_11_AdditionalInformationDrug")]
    pub additional_information_drug: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstanceStrength {
    #[serde(rename = "G_k_2_3_r_1_SubstanceName")]
    pub substance_name: Option<String>,
    #[serde(rename = "G_k_2_3_r_3a_StrengthNum")]
    pub strength_num: Option<f64>,
    #[serde(rename = "G_k_2_3_r_3b_StrengthUnit")]
    pub strength_unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indication {
    #[serde(rename = "G_k_7_r_1_IndicationPrimarySource")]
    pub indication_primary_source: Nullable<String>,
    #[serde(rename = "G_k_7_r_2a_MeddraVersionIndication")]
    pub meddra_version_indication: Option<String>,
    #[serde(rename = "G_k_7_r_2b_IndicationMeddraCode")]
    pub indication_meddra_code: Option<u32>,
}
