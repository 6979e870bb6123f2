use serde::{Deserialize, Serialize};

/// C.3 报告发送方
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderInformation {
    #[serde(rename = "C_3_1_SenderType")]
    pub sender_type: Option<String>,
    #[serde(rename = "C_3_2_SenderOrganisation")]
    pub sender_organisation: Option<String>,
    #[serde(rename = "C_3_3_1_SenderDepartment")]
    pub sender_department: Option<String>,
    #[serde(rename = "C_3_3_3_SenderGivenName")]
    pub sender_given_name: Option<String>,
    #[serde(rename = "C_3_3_5_SenderFamilyName")]
    pub sender_family_name: Option<String>,
    #[serde(rename = "C_3_4_1_SenderStreetAddress")]
    pub sender_street_address: Option<String>,
    #[serde(rename = "C_3_4_2_SenderCity")]
    pub sender_city: Option<String>,
    #[serde(rename = "C_3_4_5_SenderCountryCode")]
    pub sender_country_code: Option<String>,
    #[serde(rename = "C_3_4_6_SenderTelephone")]
    pub sender_telephone: Option<String>,
    #[serde(rename = "C_3_4_8_SenderEmail")]
    pub sender_email: Option<String>,
}
