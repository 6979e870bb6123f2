use serde::{Deserialize, Serialize};

use crate::models::Nullable;

/// C.1 报告标识
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identification {
    #[serde(rename = "C_1_1_SenderSafetyReportUniqueId")]
    pub sender_safety_report_unique_id: Option<String>,
    #[serde(rename = "C_1_2_DateCreation")]
    pub date_creation: Option<String>,
    #[serde(rename = "C_1_3_TypeReport")]
    pub type_report: Option<String>,
    #[serde(rename = "C_1_4_DateReportFirstReceivedSource")]
    pub date_report_first_received_source: Option<String>,
    #[serde(rename = "C_1_5_DateMostRecentInformation")]
    pub date_most_recent_information: Option<String>,
    #[serde(rename = "C_1_6_1_AdditionalDocumentsAvailable")]
    pub additional_documents_available: Option<bool>,
    #[serde(rename = "C_1_6_1_r_DocumentsHeldSender")]
    pub documents_held_sender: Vec<HeldDocument>,
    #[serde(rename = "C_1_7_FulfilLocalCriteriaExpeditedReport")]
    pub fulfil_local_criteria_expedited_report: Nullable<bool>,
    #[serde(rename = "C_1_8_1_WorldwideUniqueCaseIdentificationNumber")]
    pub worldwide_unique_case_identification_number: Option<String>,
    #[serde(rename = "C_1_8_2_FirstSender")]
    pub first_sender: Option<String>,
    #[serde(rename = "C_1_11_1_ReportNullificationAmendment")]
    pub report_nullification_amendment: Option<String>,
    #[serde(rename = "C_1_11_2_ReasonNullificationAmendment")]
    pub reason_nullification_amendment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldDocument {
    #[serde(rename = "C_1_6_1_r_1_DocumentsHeldSender")]
    pub documents_held_sender: Option<String>,
}
