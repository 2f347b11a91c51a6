//! 配置服务
//!
//! 配置文件：<config_dir>/policy-console/config.json
//! 文件不存在时使用默认值；文件格式错误时启动失败。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 签名密钥路径的环境变量（配置文件未指定时使用）
pub const SIGNING_KEY_ENV: &str = "POLICY_CONSOLE_SIGNING_KEY";

const CONFIG_FILE: &str = "config.json";

/// 获取应用配置目录
pub fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("policy-console")
}

/// 控制台配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// 策略仓库目录
    pub repository: PathBuf,
    /// 要编辑的策略名称
    pub policy_name: String,
    /// 签名密钥文件路径
    pub signing_key: Option<String>,
    /// 即使有签名密钥也以只读方式打开
    pub read_only: bool,
    pub theme: Theme,
    pub language: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            repository: PathBuf::from("."),
            policy_name: "targets".to_string(),
            signing_key: None,
            read_only: false,
            theme: Theme::Dark,
            language: "en-US".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// 配置文件没有指定签名密钥时，使用环境变量中的值
    #[must_use]
    pub fn with_signing_key_fallback(mut self, env_value: Option<String>) -> Self {
        let missing = self
            .signing_key
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty();
        if missing {
            self.signing_key = env_value.filter(|s| !s.trim().is_empty());
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<ConsoleConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置目录
    pub fn new() -> Self {
        Self::with_dir(app_config_dir())
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 配置文件路径
    pub fn config_file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// 读取配置文件本身（不含环境变量）
    fn load_file(&self) -> Result<ConsoleConfig> {
        let path = self.config_file();

        if !path.exists() {
            log::info!("No config file at {}, using defaults", path.display());
            return Ok(ConsoleConfig::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", path.display()))
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<ConsoleConfig> {
        let config = self.load_file()?;
        Ok(config.with_signing_key_fallback(std::env::var(SIGNING_KEY_ENV).ok()))
    }
}
