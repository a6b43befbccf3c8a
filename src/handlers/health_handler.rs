use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub model: String,
    pub has_api_key: bool,
    pub api_key_prefix: Option<String>,
    pub timestamp: String,
}

/// 诊断接口：确认服务可用以及密钥是否已配置
pub async fn api_test(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!(">>> 诊断接口被调用");

    Json(HealthResponse {
        status: "success",
        message: "API测试成功",
        model: state.llm.model().to_string(),
        has_api_key: state.config.api_key.is_some(),
        api_key_prefix: state.config.api_key_prefix(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
