//! Papertrail API token 发现
//!
//! Token 读取优先级：
//! 1. 环境变量 `PAPERTRAIL_TOKEN`
//! 2. 文件 `~/.papertrail.yml`（YAML 格式，单个字段 `token: MYTOKEN`）
//!
//! "完全找不到 token" 与 "配置文件损坏" 是两种不同的错误：
//! 前者要给出引导信息，后者只透传底层原因。

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Token 环境变量名
pub const TOKEN_ENV_VAR: &str = "PAPERTRAIL_TOKEN";

/// Home 目录下的 token 配置文件名
pub const TOKEN_FILE_NAME: &str = ".papertrail.yml";

/// Token 读取错误
#[derive(Debug, Error)]
pub enum TokenError {
    /// 所有来源都没有找到 token
    #[error("no Papertrail API token found")]
    NotFound,
    /// 配置文件存在但无法读取
    #[error("cannot read token file {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 按优先级读取 API token
pub fn read_token() -> Result<String, TokenError> {
    let env_token = std::env::var(TOKEN_ENV_VAR).ok();
    let config_path = dirs::home_dir().map(|home| home.join(TOKEN_FILE_NAME));
    read_token_from(env_token.as_deref(), config_path.as_deref())
}

/// 从给定来源读取 token（`read_token` 的可测试核心）
pub fn read_token_from(
    env_token: Option<&str>,
    config_path: Option<&Path>,
) -> Result<String, TokenError> {
    if let Some(token) = env_token {
        let token = token.trim();
        if !token.is_empty() {
            debug!("Using token from {} environment variable", TOKEN_ENV_VAR);
            return Ok(token.to_string());
        }
    }

    if let Some(path) = config_path {
        if let Some(token) = read_token_file(path)? {
            debug!("Using token from {}", path.display());
            return Ok(token);
        }
    }

    Err(TokenError::NotFound)
}

/// 读取 token 配置文件；文件不存在返回 `Ok(None)`
pub fn read_token_file(path: &Path) -> Result<Option<String>, TokenError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| TokenError::Config {
        path: path.display().to_string(),
        source,
    })?;

    Ok(parse_token_yaml(&content))
}

/// 解析 `token: MYTOKEN` 形式的单键 YAML
///
/// 容忍注释、空行和引号包裹的值；没有可用的 `token:` 键返回 None。
fn parse_token_yaml(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("token:") {
            let value = rest.trim().trim_matches('"').trim_matches('\'');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
