use serde::{Deserialize, Serialize};

use crate::models::Nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteratureReference {
    #[serde(rename = "C_4_r_1_LiteratureReference")]
    pub literature_reference: Nullable<String>,
}
