/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::session::SaveOutcome;
use crate::workflow::SaveCtx;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则详细模式为 `debug`，默认为 `info`。
/// 重复初始化会被忽略。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - ICSR 报告编辑器");
    info!("🌐 后端地址: {}", config.backend_base_url);
    info!("⏱️ 请求超时: {} 秒", config.request_timeout_secs);
    info!("{}", "=".repeat(60));
}

/// 记录一次保存的最终结果
///
/// # 参数
/// - `ctx`: 保存上下文
/// - `outcome`: 保存结果
pub fn log_save_complete(ctx: &SaveCtx, outcome: SaveOutcome) {
    let finished = chrono::Local::now();
    let elapsed_ms = (finished - ctx.started_at).num_milliseconds();

    info!("{}", "─".repeat(60));
    match outcome {
        SaveOutcome::Success => info!("✅ {} 保存成功", ctx),
        SaveOutcome::Failure => error!("❌ {} 保存失败", ctx),
        SaveOutcome::None => info!("{} 没有结果", ctx),
    }
    info!(
        "完成时间: {} (耗时 {} ms)",
        finished.format("%Y-%m-%d %H:%M:%S"),
        elapsed_ms
    );
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("Ошибка сохранения", 6), "Ошибка...");
        assert_eq!(truncate_text("短文本", 10), "短文本");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
