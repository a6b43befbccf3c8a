use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::LlmError;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI 兼容的 chat/completions 客户端，不做重试
pub struct ChatClient {
    http_client: HttpClient,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
        let http_client = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// 发送 system + user 两条消息，返回第一条回复的原始文本
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url);
        tracing::info!(">>> 调用大模型接口: model={}, url={}", self.model, url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("!!! 大模型接口返回错误: HTTP {}", status);
            return Err(LlmError::Status { status, body });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Decode(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyChoices)?
            .message
            .content
            .unwrap_or_default();

        tracing::debug!("<<< 大模型返回内容长度: {} 字符", content.chars().count());
        Ok(content)
    }
}
