//! Papertrail Viewer CLI
//!
//! 搜索并跟踪 Papertrail 日志 (类似 `tail -f`)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use papertrail_viewer::cli::{handle_run, Args};

fn main() -> Result<()> {
    // 初始化 tracing 日志系统
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug ptail -f
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("papertrail_viewer=info,ptail=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let args = Args::parse();
    handle_run(args)
}
