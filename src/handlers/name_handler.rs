use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::name::NameSuggestion;
use crate::models::preferences::UserPreferences;
use crate::services::{extract_service, prompt_service};
use crate::AppState;

#[derive(Serialize)]
pub struct GenerateResponse {
    pub names: Vec<NameSuggestion>,
}

/// 根据用户偏好生成中文姓名
pub async fn generate_names(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UserPreferences>, JsonRejection>,
) -> impl IntoResponse {
    let prefs = match payload {
        Ok(Json(prefs)) => prefs,
        Err(rejection) => {
            tracing::warn!("--- 请求参数无效: {}", rejection.body_text());
            return AppError::BadRequest(rejection.body_text()).into_response();
        }
    };

    tracing::info!(
        ">>> 收到姓名生成请求: english_name={:?}, gender={:?}, meanings={}",
        prefs.english_name,
        prefs.gender,
        prefs.meanings.len()
    );

    let prompt = prompt_service::build_prompt(&prefs);

    match state.llm.complete(prompt_service::SYSTEM_PROMPT, &prompt).await {
        Ok(content) => {
            // 解析失败时内部已降级为默认数据，这里总能拿到非空列表
            let names = extract_service::extract(&content);
            tracing::info!("<<< 姓名生成完成, 数量: {}", names.len());
            (StatusCode::OK, Json(GenerateResponse { names })).into_response()
        }
        Err(e) => {
            tracing::error!("!!! 调用大模型失败: {}", e);
            AppError::Upstream(e).into_response()
        }
    }
}
