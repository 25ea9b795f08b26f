//! Papertrail Viewer - 查询并跟踪 Papertrail 托管日志
//!
//! 把无状态的分页搜索 API 变成连续的日志流：
//! 游标前移 + 空页时切换为定时轮询。

pub mod api;
pub mod cli;
pub mod config;
pub mod poller;
pub mod token;

pub use api::client::{ApiConfig, SearchClient, PAPERTRAIL_API_URL};
pub use api::types::{Event, SearchOptions, SearchResult};
pub use config::{PollConfig, DEFAULT_POLL_DELAY};
pub use poller::{Poller, SearchBackend, Sleep, StepOutcome, ThreadSleep};
pub use token::{read_token, read_token_file, read_token_from, TokenError};
