use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttt_cli::{menu, Console, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，避免与棋盘混在一起）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_cli=info".parse()?))
        .init();

    info!("井字棋启动中...");

    let settings = Settings::load();
    let console = Console::stdin();
    menu::run(&console, &settings).await
}
