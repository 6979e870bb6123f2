/// ICSR 后端客户端
///
/// 有报告标识时 `PUT {base}/icsr/{id}` 更新，没有时 `POST {base}/icsr` 新建。
/// 后端只把 200 视为成功并回传保存后的模型（含 `id`），校验失败时返回 400。
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use serde_json::Value as JsonValue;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::clients::ReportSubmitter;
use crate::config::Config;
use crate::error::SubmissionError;
use crate::models::{ReportDocument, ReportId};

/// ICSR 后端客户端
pub struct HttpReportClient {
    client: Client,
    base_url: String,
}

impl HttpReportClient {
    /// 创建新的后端客户端
    pub fn new(config: &Config) -> Result<Self, SubmissionError> {
        let base_url = config.backend_base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| SubmissionError::request_failed(&base_url, e))?;

        Ok(Self { client, base_url })
    }

    /// 报告对应的接口地址
    pub fn endpoint(&self, id: Option<&ReportId>) -> String {
        match id {
            Some(id) => format!("{}/icsr/{}", self.base_url, id),
            None => format!("{}/icsr", self.base_url),
        }
    }

    /// 发送报告
    ///
    /// # 返回
    /// 200 返回响应中的报告标识；其他状态码返回 `BadResponse`，网络错误返回 `RequestFailed`
    pub async fn send(
        &self,
        document: &ReportDocument,
    ) -> Result<Option<ReportId>, SubmissionError> {
        let endpoint = self.endpoint(document.id());
        let request = match document.id() {
            Some(_) => self.client.put(&endpoint),
            None => self.client.post(&endpoint),
        };

        debug!("发送报告到 {}", endpoint);

        let response = request
            .json(document)
            .send()
            .await
            .map_err(|e| SubmissionError::request_failed(&endpoint, e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::OK {
            info!("✓ 后端已接收报告 ({})", endpoint);
            let id = report_id_from_body(&body);
            if id.is_none() && document.id().is_none() {
                warn!("⚠️ 新建报告的响应中没有报告标识 ({})", endpoint);
            }
            return Ok(id);
        }

        Err(SubmissionError::BadResponse {
            endpoint,
            status: status.as_u16(),
            body,
        })
    }
}

impl ReportSubmitter for HttpReportClient {
    fn submit<'a>(
        &'a self,
        document: &'a ReportDocument,
    ) -> BoxFuture<'a, Result<Option<ReportId>, SubmissionError>> {
        self.send(document).boxed()
    }
}

/// 从后端回传的模型中读取 `id`（字符串或整数主键）
fn report_id_from_body(body: &str) -> Option<ReportId> {
    let model: JsonValue = serde_json::from_str(body).ok()?;
    match model.get("id")? {
        JsonValue::String(id) if !id.is_empty() => Some(ReportId::new(id.as_str())),
        JsonValue::Number(id) => Some(ReportId::new(id.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_depends_on_report_id() {
        let config = Config {
            backend_base_url: "http://localhost:8000/".to_string(),
            ..Config::default()
        };
        let client = HttpReportClient::new(&config).unwrap();

        assert_eq!(client.endpoint(None), "http://localhost:8000/icsr");
        assert_eq!(
            client.endpoint(Some(&ReportId::new("REP-42"))),
            "http://localhost:8000/icsr/REP-42"
        );
    }

    #[test]
    fn test_report_id_from_saved_model() {
        assert_eq!(
            report_id_from_body(r#"{"id": 17, "c_1_identification_case_safety_report": {}}"#),
            Some(ReportId::new("17"))
        );
        assert_eq!(
            report_id_from_body(r#"{"id": "REP-9"}"#),
            Some(ReportId::new("REP-9"))
        );
        assert_eq!(report_id_from_body(r#"{"id": null}"#), None);
        assert_eq!(report_id_from_body(""), None);
        assert_eq!(report_id_from_body("[1, 2]"), None);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_request_failure() {
        let config = Config {
            backend_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
            ..Config::default()
        };
        let client = HttpReportClient::new(&config).unwrap();
        let document = ReportDocument::assemble(
            Some("REP-1".into()),
            crate::models::Section::ALL
                .into_iter()
                .map(|section| (section, serde_json::json!([]).into()))
                .collect(),
        )
        .unwrap();

        let err = client.submit(&document).await.unwrap_err();
        assert!(matches!(err, SubmissionError::RequestFailed { .. }));
    }
}
