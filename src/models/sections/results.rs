use serde::{Deserialize, Serialize};

use crate::models::Nullable;

/// F.r 检查、实验室结果（可重复）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestResult {
    #[serde(rename = "F_r_1_TestDate")]
    pub test_date: Nullable<String>,
    #[serde(rename = "F_r_2_1_TestName")]
    pub test_name: Option<String>,
    #[serde(rename = "F_r_2_2a_MeddraVersionTestName")]
    pub meddra_version_test_name: Option<String>,
    #[serde(rename = "F_r_2_2b_TestNameMeddraCode")]
    pub test_name_meddra_code: Option<u32>,
    #[serde(rename = "F_r_3_1_TestResultCode")]
    pub test_result_code: Option<String>,
    /// 数值或 NINF / PINF
    #[serde(rename = "F_r_3_2_TestResultValQual")]
    pub test_result_value: Nullable<f64>,
    #[serde(rename = "F_r_3_3_TestResultUnit")]
    pub test_result_unit: Option<String>,
    #[serde(rename = "F_r_3_4_ResultUnstructuredData")]
    pub result_unstructured_data: Option<String>,
    #[serde(rename = "F_r_4_NormalLowValue")]
    pub normal_low_value: Option<String>,
    #[serde(rename = "F_r_5_NormalHighValue")]
    pub normal_high_value: Option<String>,
    #[serde(rename = "F_r_6_Comments")]
    pub comments: Option<String>,
    #[serde(rename = "F_r_7_MoreInformationAvailable")]
    pub more_information_available: Option<bool>,
}
