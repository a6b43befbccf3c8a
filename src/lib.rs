use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use config::AppConfig;
use services::llm_service::ChatClient;

// 全局状态：配置与共享的 HTTP 连接池，请求之间没有可变数据
pub struct AppState {
    pub config: AppConfig,
    pub llm: ChatClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, error::LlmError> {
        let llm = ChatClient::from_config(&config)?;
        Ok(Self { config, llm })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    // 前端独立部署，跨域全部放开
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // 姓名生成
        .route("/api/generate-names", post(handlers::name_handler::generate_names))
        // 诊断
        .route("/api/test", get(handlers::health_handler::api_test))
        // 中间件：日志记录和跨域
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
