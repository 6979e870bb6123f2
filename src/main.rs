use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use icsr_report_editor::utils::logging;
use icsr_report_editor::{App, Config, SaveAttempt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置（第一个参数为可选的配置文件）
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config).context("初始化应用失败")?;
    match app.run().await? {
        SaveAttempt::Failed(e) => bail!("保存失败: {}", e),
        _ => Ok(()),
    }
}
