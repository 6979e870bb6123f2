//! 各分区的编辑草稿
//!
//! 字段使用 E2B 显示键名（如 `F_r_1_TestDate`），提交前统一转换为线上键名。
//! 可重复分区的草稿是条目列表，默认为空列表；单条分区默认所有字段为空。

pub mod dosages;
pub mod drugs;
pub mod identification;
pub mod info_sender;
pub mod narrative;
pub mod patient;
pub mod primary_source;
pub mod references;
pub mod results;
pub mod reactions;
pub mod study_identification;

pub use dosages::Dosage;
pub use drugs::{Drug, Indication, SubstanceStrength};
pub use identification::{HeldDocument, Identification};
pub use info_sender::SenderInformation;
pub use narrative::{NarrativeCaseSummary, NativeLanguageSummary, SenderDiagnosis};
pub use patient::{MedicalHistoryEntry, ParentInformation, PatientCharacteristics};
pub use primary_source::PrimarySource;
pub use reactions::Reaction;
pub use references::LiteratureReference;
pub use results::TestResult;
pub use study_identification::{StudyIdentification, StudyRegistration};
