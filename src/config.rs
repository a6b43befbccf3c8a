//! 服务配置：先加载 .env，再读取环境变量

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";
pub const DEFAULT_MODEL: &str = "deepseek-v3-1-terminus";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub server_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.8,
            max_tokens: 2000,
            timeout: Duration::from_secs(60),
            server_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意取值函数构建，测试时不必改动进程环境变量
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("LLM_API_KEY").or_else(|| get("DEEPSEEK_API_KEY"));
        if api_key.is_none() {
            tracing::warn!("--- 未配置 LLM_API_KEY，生成接口将返回错误");
        }

        Self {
            api_key,
            base_url: get("LLM_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: get("LLM_MODEL").unwrap_or(defaults.model),
            temperature: parse_or("LLM_TEMPERATURE", get("LLM_TEMPERATURE"), defaults.temperature),
            max_tokens: parse_or("LLM_MAX_TOKENS", get("LLM_MAX_TOKENS"), defaults.max_tokens),
            timeout: Duration::from_secs(parse_or(
                "LLM_TIMEOUT_SECS",
                get("LLM_TIMEOUT_SECS"),
                defaults.timeout.as_secs(),
            )),
            server_addr: parse_or("SERVER_ADDR", get("SERVER_ADDR"), defaults.server_addr),
        }
    }

    /// 诊断接口展示用：只露出前 10 个字符
    pub fn api_key_prefix(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(|key| format!("{}...", key.chars().take(10).collect::<String>()))
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("--- 配置项 {}={} 无法解析，使用默认值", key, raw);
            default
        }),
        None => default,
    }
}
