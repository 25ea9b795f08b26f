// src/cli/run.rs
//! 搜索/跟踪命令 - 解析参数并驱动 poller
//!
//! token 解析在任何网络调用之前完成，缺失 token 直接带引导信息退出。

use std::io;
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Parser;
use tracing::debug;

use crate::api::client::{ApiConfig, SearchClient};
use crate::api::types::SearchOptions;
use crate::config::PollConfig;
use crate::poller::Poller;
use crate::token::{read_token, TokenError};

/// Papertrail 日志查看器参数
#[derive(Parser)]
#[command(name = "ptail")]
#[command(about = "Papertrail log viewer - 搜索并跟踪 Papertrail 日志")]
#[command(version)]
pub struct Args {
    /// 查询关键词（多个词以空格连接成一个查询）
    pub query: Vec<String>,

    /// 按 system ID 过滤
    #[arg(long)]
    pub system: Option<String>,

    /// 按 group ID 过滤
    #[arg(long)]
    pub group: Option<String>,

    /// 持续跟踪日志（类似 `tail -f`）
    #[arg(long, short = 'f')]
    pub follow: bool,

    /// 只显示此时间段之内的日志（如 `30m`、`2h`），并隐含持续轮询
    #[arg(long, value_parser = humantime::parse_duration)]
    pub min_time_ago: Option<Duration>,

    /// 轮询间隔
    #[arg(long, default_value = "2s", value_parser = humantime::parse_duration)]
    pub delay: Duration,

    /// 每页最多返回的事件数
    #[arg(long)]
    pub limit: Option<u32>,
}

/// 处理搜索/跟踪命令
pub fn handle_run(args: Args) -> Result<()> {
    let token = match read_token() {
        Ok(token) => token,
        Err(TokenError::NotFound) => {
            return Err(anyhow!(
                "No Papertrail API token found; exiting.\n\n\
                 ptail requires a valid Papertrail API token (which you can obtain from \
                 https://papertrailapp.com/user/edit) to be set in the PAPERTRAIL_TOKEN \
                 environment variable or in ~/.papertrail.yml (in the format `token: MYTOKEN`)."
            ));
        }
        Err(e) => return Err(anyhow!("cannot read Papertrail API token: {}", e)),
    };

    let mut options = SearchOptions {
        system_id: args.system,
        group_id: args.group,
        query: args.query.join(" "),
        limit: args.limit,
        ..SearchOptions::default()
    };

    if let Some(ago) = args.min_time_ago {
        // 启动时换算成绝对 UTC 时间，只作用于第一次查询
        let ago = chrono::Duration::from_std(ago)
            .map_err(|e| anyhow!("--min-time-ago out of range: {}", e))?;
        options.min_time = Some(Utc::now() - ago);
    }

    let config = PollConfig::from_flags(args.follow, args.min_time_ago.is_some(), args.delay);
    debug!(
        stop_when_empty = config.stop_when_empty,
        delay_ms = config.delay.as_millis() as u64,
        query = %options.query,
        "Poll configuration"
    );

    let client = SearchClient::new(ApiConfig::new(token))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Poller::new(client, options, config).run(&mut out)
}
