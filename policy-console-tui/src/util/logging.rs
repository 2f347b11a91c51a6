//! 日志初始化
//!
//! TUI 占用整个终端，日志写入文件：<config_dir>/policy-console/console.log
//! 级别由 RUST_LOG 控制，默认 info。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

const LOG_FILE: &str = "console.log";

/// 初始化日志，返回日志文件路径
pub fn init_logging(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    // 已经安装过 logger 时保留原有的
    if let Err(e) = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
    {
        log::warn!("Logger already installed, {} not attached: {e}", path.display());
    }

    Ok(path)
}
