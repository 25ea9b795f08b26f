// src/api/client.rs
//! Papertrail 搜索 API 客户端
//!
//! 认证方式：每个请求带 `X-Papertrail-Token` 头。
//! 错误不区分瞬时/永久，统一向上传播，由调用方决定终止。

use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::debug;

use crate::api::types::{SearchOptions, SearchResult};
use crate::poller::SearchBackend;

/// 搜索端点 URL
pub const PAPERTRAIL_API_URL: &str = "https://papertrailapp.com/api/v1/events/search.json";

/// 认证头名称
const TOKEN_HEADER: &str = "X-Papertrail-Token";

/// 默认请求超时（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 客户端配置
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API token
    pub token: String,
    /// 搜索端点 URL（支持代理/测试替换）
    pub base_url: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// 用给定 token 和默认端点创建配置
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: PAPERTRAIL_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// API 错误响应体
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// 搜索 API 客户端
pub struct SearchClient {
    client: reqwest::blocking::Client,
    config: ApiConfig,
}

impl SearchClient {
    /// 创建新客户端
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow!("Cannot create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// 执行一次搜索调用
    pub fn search(&self, options: &SearchOptions) -> Result<SearchResult> {
        let params = build_query(options);

        debug!(
            base_url = %self.config.base_url,
            query = %options.query,
            min_id = ?options.min_id,
            "Sending search request"
        );

        let start = std::time::Instant::now();
        let response = self
            .client
            .get(&self.config.base_url)
            .header(TOKEN_HEADER, &self.config.token)
            .query(&params)
            .send()
            .map_err(|e| {
                let elapsed = start.elapsed();
                anyhow!("search request failed after {}ms: {}", elapsed.as_millis(), e)
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| anyhow!("failed to read search response: {}", e))?;

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            status = %status,
            "Search request completed"
        );

        if !status.is_success() {
            // 尝试解析 API 错误响应
            if let Ok(err) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(anyhow!("search API error ({}): {}", status, err.message));
            }
            return Err(anyhow!("search API error ({}): {}", status, body));
        }

        let result: SearchResult = serde_json::from_str(&body)
            .map_err(|e| anyhow!("failed to parse search response: {} - body: {}", e, body))?;

        Ok(result)
    }
}

impl SearchBackend for SearchClient {
    fn search(&self, options: &SearchOptions) -> Result<SearchResult> {
        SearchClient::search(self, options)
    }
}

/// 把搜索参数编码为 query string 键值对
///
/// `min_time` 按 API 约定编码为 UNIX 秒。
fn build_query(options: &SearchOptions) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if !options.query.is_empty() {
        params.push(("q", options.query.clone()));
    }
    if let Some(system_id) = &options.system_id {
        params.push(("system_id", system_id.clone()));
    }
    if let Some(group_id) = &options.group_id {
        params.push(("group_id", group_id.clone()));
    }
    if let Some(min_id) = &options.min_id {
        params.push(("min_id", min_id.clone()));
    }
    if let Some(min_time) = options.min_time {
        params.push(("min_time", min_time.timestamp().to_string()));
    }
    if let Some(limit) = options.limit {
        params.push(("limit", limit.to_string()));
    }

    params
}
