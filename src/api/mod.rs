//! Papertrail 搜索 API 的 HTTP 映射

pub mod client;
pub mod types;

pub use client::{ApiConfig, SearchClient};
pub use types::{Event, SearchOptions, SearchResult};
