use thiserror::Error;

use crate::models::Section;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单分区提取错误
    #[error("提取错误: {0}")]
    Extraction(#[from] ExtractionError),
    /// 报告提交错误
    #[error("提交错误: {0}")]
    Submission(#[from] SubmissionError),
    /// 键名转换错误
    #[error("键名转换错误: {0}")]
    KeyTransform(#[from] KeyTransformError),
    /// 会话状态错误
    #[error("会话错误: {0}")]
    Session(#[from] SessionError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 分区提取错误
///
/// 任何一个分区提取失败都会中止整次保存，不会提交半成品报告
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// 分区草稿无法序列化
    #[error("分区 {section} 序列化失败: {source}")]
    Serialize {
        section: Section,
        #[source]
        source: serde_json::Error,
    },
    /// 分区内部状态不一致
    #[error("分区 {section} 状态不一致: {reason}")]
    Inconsistent { section: Section, reason: String },
    /// 分区集合缺少某个分区
    #[error("缺少分区: {section}")]
    MissingSection { section: Section },
    /// 同一分区出现多次
    #[error("分区重复: {section}")]
    DuplicateSection { section: Section },
}

/// 提交错误
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 后端返回非成功状态
    #[error("后端返回错误响应 ({endpoint}): status={status}, body={body}")]
    BadResponse {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 提交方拒绝（原因不透明）
    #[error("提交被拒绝: {reason}")]
    Rejected { reason: String },
}

/// 键名转换错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyTransformError {
    /// 两个不同的键被转换成同一个线上键名
    #[error("键名冲突: '{first}' 与 '{second}' 都会变成 '{wire_key}'")]
    Collision {
        wire_key: String,
        first: String,
        second: String,
    },
}

/// 会话状态错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// 未定义的标签页
    #[error("未知的标签页: {tab_id}")]
    InvalidTab { tab_id: String },
    /// 已有保存正在进行
    #[error("已有保存正在进行")]
    SaveInFlight,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 TOML 解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source,
        })
    }
}

impl SubmissionError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        SubmissionError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
