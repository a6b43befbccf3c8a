//! 错误类型

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 响应解析失败的原因，只在解析模块内部流转，对外统一降级为兜底数据
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no JSON object found in model output")]
    NoJsonFound,
    #[error("malformed JSON after repair: {0}")]
    MalformedJson(String),
    #[error("model output contains no usable names")]
    EmptyResult,
}

/// 调用大模型接口的错误
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API key is not configured")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
    #[error("upstream response contains no choices")]
    EmptyChoices,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Upstream(#[from] LlmError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 上游细节只写日志，前端只拿到通用提示
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Upstream(_) => "生成姓名时出现错误，请稍后重试".to_string(),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_display() {
        let err = ExtractError::MalformedJson("EOF while parsing".to_string());
        assert_eq!(err.to_string(), "malformed JSON after repair: EOF while parsing");
    }

    #[test]
    fn test_upstream_status_display() {
        let err = LlmError::Status { status: 401, body: "unauthorized".to_string() };
        assert_eq!(err.to_string(), "upstream returned HTTP 401: unauthorized");
    }

    #[test]
    fn test_app_error_status_codes() {
        let bad = AppError::BadRequest("missing body".to_string());
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let upstream = AppError::from(LlmError::EmptyChoices);
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
