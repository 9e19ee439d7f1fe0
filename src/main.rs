use anyhow::Result;
use note2quiz::logger;
use note2quiz::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load().await;

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
