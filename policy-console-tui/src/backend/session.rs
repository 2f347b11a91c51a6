//! 启动会话
//!
//! 加载仓库与签名密钥，决定是否以只读模式运行，并打开规则存储。

use anyhow::{Context, Result};
use policy_console_core::{load_repository, load_signer, JsonRuleStore, StoreError};

use super::config_service::ConsoleConfig;

/// 启动会话
pub struct Session {
    pub store: JsonRuleStore,
    pub policy_name: String,
    /// 变更写入的位置（策略文件路径）
    pub staging_location: String,
    pub read_only: bool,
    /// 没有找到签名密钥（需要在底部提示用户）
    pub signer_missing: bool,
}

/// 打开会话
///
/// 配置为只读时不加载签名密钥；未配置签名密钥时降级为只读；
/// 仓库或密钥文件本身无法加载时返回错误。
pub fn open_session(config: &ConsoleConfig) -> Result<Session> {
    let repository = load_repository(&config.repository).with_context(|| {
        format!(
            "Failed to load policy repository {}",
            config.repository.display()
        )
    })?;

    if config.read_only {
        log::info!("Read-only mode forced by configuration, signing key not loaded");
    }

    let signer = if config.read_only {
        None
    } else {
        match load_signer(&repository, config.signing_key.as_deref()) {
            Ok(signer) => Some(signer),
            Err(StoreError::SigningKeyNotSpecified) => {
                log::warn!("No signing key configured, running in read-only mode");
                None
            }
            Err(e) => return Err(e).context("Failed to load signing key"),
        }
    };

    let signer_missing = !config.read_only && signer.is_none();
    let read_only = signer.is_none();

    let store = repository.open_store(config.policy_name.as_str(), signer);
    let policy_name = store.policy_name().to_string();
    let staging_location = store.path().display().to_string();

    Ok(Session {
        store,
        policy_name,
        staging_location,
        read_only,
        signer_missing,
    })
}
