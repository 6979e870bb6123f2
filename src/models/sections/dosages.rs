use serde::{Deserialize, Serialize};

use crate::models::Nullable;

/// G.k.4.r 给药剂量
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dosage {
    /// 所属药品在药品分区中的位置（从 0 开始）
    #[serde(rename = "drugIndex")]
    pub drug_index: usize,
    #[serde(rename = "G_k_4_r_1a_DoseNum")]
    pub dose_num: Option<f64>,
    #[serde(rename = "G_k_4_r_1b_DoseUnit")]
    pub dose_unit: Option<String>,
    #[serde(rename = "G_k_4_r_2_NumberUnitsInterval")]
    pub number_units_interval: Option<f64>,
    #[serde(rename = "G_k_4_r_3_DefinitionIntervalUnit")]
    pub definition_interval_unit: Option<String>,
    #[serde(rename = "G_k_4_r_4_DateTimeDrug")]
    pub date_time_drug: Nullable<String>,
    #[serde(rename = "G_k_4_r_5_DateTimeLastAdministration")]
    pub date_time_last_administration: Nullable<String>,
    #[serde(rename = "G_k_4_r_7_BatchLotNumber")]
    pub batch_lot_number: Option<String>,
    #[serde(rename = "G_k_4_r_8_DosageText")]
    pub dosage_text: Option<String>,
    #[serde(rename = "G_k_4_r_9_1_PharmaceuticalDoseForm")]
    pub pharmaceutical_dose_form: Nullable<String>,
    #[serde(rename = "G_k_4_r_10_1_RouteAdministration")]
    pub route_administration: Nullable<String>,
}
