use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 后端 ICSR 接口地址
    pub backend_base_url: String,
    /// 单次提交请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 报告草稿文件
    pub draft_file: String,
    // --- 保存提示文案 ---
    pub success_message: String,
    pub failure_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
            draft_file: "draft.toml".to_string(),
            success_message: "Успешно сохранено".to_string(),
            failure_message: "Ошибка сохранения".to_string(),
        }
    }
}

impl Config {
    /// 从默认值加载，再用环境变量覆盖
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 加载配置：默认值 → TOML 文件（可选）→ 环境变量
    ///
    /// # 参数
    /// - `path`: 配置文件路径，`None` 或文件不存在时跳过
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let base = match path {
            Some(path) if path.exists() => Self::from_toml_file(path)?,
            _ => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::toml_parse_failed(path.display().to_string(), e))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            backend_base_url: std::env::var("BACKEND_BASE_URL").unwrap_or(self.backend_base_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            draft_file: std::env::var("DRAFT_FILE").unwrap_or(self.draft_file),
            success_message: std::env::var("SAVE_SUCCESS_MESSAGE")
                .unwrap_or(self.success_message),
            failure_message: std::env::var("SAVE_FAILURE_MESSAGE")
                .unwrap_or(self.failure_message),
        }
    }
}
