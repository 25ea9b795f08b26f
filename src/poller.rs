//! 日志流 poller - 本 crate 的核心循环
//!
//! 反复调用搜索后端、前移游标、按服务端顺序输出事件：
//! - 有积压时全速翻页（不 sleep）
//! - 第一次遇到空页后进入轮询模式，每次迭代之间 sleep `delay`
//! - 一次性模式下第一个空页即成功退出
//!
//! 任何后端错误都直接向上传播终止整次运行，没有重试。

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::api::types::{SearchOptions, SearchResult};
use crate::config::PollConfig;

/// 搜索后端接口，poller 消费的唯一外部协作方
pub trait SearchBackend {
    /// 用当前参数执行一次搜索
    fn search(&self, options: &SearchOptions) -> Result<SearchResult>;
}

impl<T: SearchBackend + ?Sized> SearchBackend for &T {
    fn search(&self, options: &SearchOptions) -> Result<SearchResult> {
        (**self).search(options)
    }
}

/// 轮询间隔的 sleep 接口（测试中替换为记录器）
pub trait Sleep {
    fn sleep(&mut self, duration: Duration);
}

/// 生产环境的阻塞 sleep
#[derive(Debug, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// 单次迭代的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// 继续下一次迭代
    Continue,
    /// 正常终止（一次性模式遇到空页）
    Finished,
}

/// 日志流 poller
///
/// 持有本次运行的全部可变状态：搜索参数（游标字段随迭代前移）、
/// 轮询模式标志、以及是否输出过事件。
pub struct Poller<C, S = ThreadSleep> {
    client: C,
    sleeper: S,
    options: SearchOptions,
    config: PollConfig,
    polling: bool,
    emitted_any: bool,
}

impl<C: SearchBackend> Poller<C, ThreadSleep> {
    /// 创建使用阻塞 sleep 的 poller
    pub fn new(client: C, options: SearchOptions, config: PollConfig) -> Self {
        Self::with_sleeper(client, options, config, ThreadSleep)
    }
}

impl<C: SearchBackend, S: Sleep> Poller<C, S> {
    /// 创建使用自定义 sleep 实现的 poller
    pub fn with_sleeper(client: C, options: SearchOptions, config: PollConfig, sleeper: S) -> Self {
        Self {
            client,
            sleeper,
            options,
            config,
            polling: false,
            emitted_any: false,
        }
    }

    /// 是否已经进入轮询模式
    pub fn polling(&self) -> bool {
        self.polling
    }

    /// 当前游标
    pub fn min_id(&self) -> Option<&str> {
        self.options.min_id.as_deref()
    }

    /// 整次运行中是否输出过事件
    pub fn emitted_any(&self) -> bool {
        self.emitted_any
    }

    /// 执行一次迭代：搜索、输出、前移游标、必要时 sleep
    pub fn step(&mut self, out: &mut dyn Write) -> Result<StepOutcome> {
        let result = self.client.search(&self.options)?;

        debug!(
            events = result.events.len(),
            max_id = %result.max_id,
            polling = self.polling,
            "Search page received"
        );

        if result.events.is_empty() {
            if self.config.stop_when_empty {
                if !self.emitted_any {
                    eprintln!("No events found.");
                }
                return Ok(StepOutcome::Finished);
            }
            // 积压已排空，切换为定时轮询
            self.polling = true;
        }

        for event in &result.events {
            writeln!(out, "{}", event.format_line())?;
            self.emitted_any = true;
        }

        // 游标始终取服务端返回的 max_id，空页也前移。
        // 服务端返回不前移的值时照样覆盖（游标语义以服务端为准）。
        if !result.max_id.is_empty() {
            self.options.min_id = Some(result.max_id.clone());
        }

        if self.polling {
            self.sleeper.sleep(self.config.delay);
        }

        Ok(StepOutcome::Continue)
    }

    /// 持续迭代直到终止
    ///
    /// 轮询模式下永不主动退出，只能被进程级中断打断。
    pub fn run(&mut self, out: &mut dyn Write) -> Result<()> {
        loop {
            if self.step(out)? == StepOutcome::Finished {
                return Ok(());
            }
        }
    }
}
