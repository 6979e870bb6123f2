//! 提交方
//!
//! 组装器只依赖 [`ReportSubmitter`]，具体的后端由调用方注入

pub mod report_client;

pub use report_client::HttpReportClient;

use futures::future::BoxFuture;

use crate::error::SubmissionError;
use crate::models::{ReportDocument, ReportId};

/// 报告提交方
///
/// 接收已转换为线上键名的完整报告，异步返回成功或失败。核心从不重试。
pub trait ReportSubmitter {
    /// 提交报告
    ///
    /// # 返回
    /// 成功时返回后端回传的报告标识（新建报告时由后端分配），响应中没有时为 `None`
    fn submit<'a>(
        &'a self,
        document: &'a ReportDocument,
    ) -> BoxFuture<'a, Result<Option<ReportId>, SubmissionError>>;
}
