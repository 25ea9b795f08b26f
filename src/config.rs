//! 轮询循环配置
//!
//! CLI 参数在启动时构建一次，然后按值传入 poller，
//! 避免隐藏的全局可变状态。

use std::time::Duration;

/// 默认轮询间隔
pub const DEFAULT_POLL_DELAY: Duration = Duration::from_secs(2);

/// 轮询循环配置
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// 遇到第一个空页即成功退出（一次性模式）
    pub stop_when_empty: bool,
    /// 轮询模式下每次迭代之间的间隔
    pub delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            stop_when_empty: true,
            delay: DEFAULT_POLL_DELAY,
        }
    }
}

impl PollConfig {
    /// 从 CLI 标志推导配置
    ///
    /// `--follow` 或 `--min-time-ago` 任一存在时都不在空页停止，
    /// 而是进入持续轮询。
    pub fn from_flags(follow: bool, has_min_time: bool, delay: Duration) -> Self {
        Self {
            stop_when_empty: !follow && !has_min_time,
            delay,
        }
    }
}
