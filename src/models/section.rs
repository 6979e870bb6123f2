//! 报告分区与标签页
//!
//! 每个分区对应一个标签页、一个分区存储和一个线上规范键（CanonicalKey）。
//! 对照表是静态的，不从任何数据推导。

use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;

/// 报告分区
///
/// 声明顺序即标签页顺序，第一个为会话初始标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// F.r 检查与实验室结果
    Results,
    /// E.i 不良反应事件
    Reactions,
    /// D 患者信息（含 D.10 父母信息）
    Patient,
    /// G.k 药品信息
    Drugs,
    /// G.k.4.r 给药剂量
    Dosages,
    /// C.2.r 原始报告来源
    PrimarySource,
    /// C.3 报告发送方
    SenderInformation,
    /// C.4.r 文献引用
    References,
    /// C.1 报告标识
    Identification,
    /// C.5 研究标识
    StudyIdentification,
    /// H 病例叙述
    Narrative,
}

impl Section {
    /// 所有分区，按标签页顺序
    pub const ALL: [Section; 11] = [
        Section::Results,
        Section::Reactions,
        Section::Patient,
        Section::Drugs,
        Section::Dosages,
        Section::PrimarySource,
        Section::SenderInformation,
        Section::References,
        Section::Identification,
        Section::StudyIdentification,
        Section::Narrative,
    ];

    /// 线上规范键（显示大小写，提交前还会经过键名转换）
    pub fn canonical_key(self) -> &'static str {
        match self {
            Section::Results => "F_r_ResultsTestsProceduresInvestigationPatient",
            Section::Reactions => "E_i_ReactionEvent",
            Section::Patient => "D_PatientCharacteristics",
            Section::Drugs => "G_k_DrugInformation",
            Section::Dosages => "G_k_4_r_DosageInformation",
            Section::PrimarySource => "C_2_r_PrimarySourceInformation",
            Section::SenderInformation => "C_3_InformationSenderCaseSafetyReport",
            Section::References => "C_4_r_LiteratureReference",
            Section::Identification => "C_1_IdentificationCaseSafetyReport",
            Section::StudyIdentification => "C_5_StudyIdentification",
            Section::Narrative => "H_NarrativeCaseSummary",
        }
    }

    /// 标签页标识
    pub fn tab_id(self) -> &'static str {
        match self {
            Section::Results => "results",
            Section::Reactions => "reactions",
            Section::Patient => "patient",
            Section::Drugs => "drugs",
            Section::Dosages => "dosages",
            Section::PrimarySource => "primary-source",
            Section::SenderInformation => "sender-information",
            Section::References => "references",
            Section::Identification => "identification",
            Section::StudyIdentification => "study-identification",
            Section::Narrative => "narrative",
        }
    }

    /// 标签页标题
    pub fn tab_label(self) -> &'static str {
        match self {
            Section::Results => "Results",
            Section::Reactions => "Reactions",
            Section::Patient => "Patient",
            Section::Drugs => "Drugs",
            Section::Dosages => "Dosages",
            Section::PrimarySource => "Primary Source",
            Section::SenderInformation => "Sender Information",
            Section::References => "Literature References",
            Section::Identification => "Identification of report",
            Section::StudyIdentification => "Study Identification",
            Section::Narrative => "Narrative Case Summary",
        }
    }

    /// 标签页位置（从 0 开始）
    pub fn tab_index(self) -> usize {
        self as usize
    }

    /// 从标签页标识解析分区（精确匹配）
    pub fn from_tab_id(tab_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.tab_id() == tab_id)
    }
}

impl FromStr for Section {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tab_id(s).ok_or_else(|| SessionError::InvalidTab {
            tab_id: s.to_string(),
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tab_id())
    }
}
