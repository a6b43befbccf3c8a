use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chinese_name_backend::{app, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 初始化日志系统
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. 加载 .env 与环境变量
    let config = AppConfig::from_env();
    let addr = config.server_addr;

    // 3. 构建共享状态（大模型客户端）
    let shared_state = Arc::new(AppState::new(config)?);

    // 4. 构建路由并启动服务
    let router = app(shared_state);
    tracing::info!("🚀 Server started at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
