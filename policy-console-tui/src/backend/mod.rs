//!
//! src/backend/mod.rs
//! Backend 层：规则存储与启动配置
//!
//! Backend 层与 UI 完全解耦，不读取也不修改 Model。
//! 规则数据全部通过 policy-console-core 的 `RuleStore` 访问。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）与环境变量
//!         mod session;            // 启动会话：仓库、签名密钥、只读判定
//!         mod executor;           // Command → RuleStore 调用 → StoreMessage
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/policy-console/config.json
//!
//!         {
//!             "repository": ".",
//!             "policy_name": "targets",
//!             "signing_key": null,
//!             "read_only": false,
//!             "theme": "dark",
//!             "language": "en-US"
//!         }
//!
//!     signing_key 为空时读取环境变量 POLICY_CONSOLE_SIGNING_KEY。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、启动会话（open_session）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         1. load_repository(config.repository)       失败 → 启动失败
//!         2. load_signer(repository, signing_key)
//!                SigningKeyNotSpecified              → 只读模式
//!                其他错误                             → 启动失败
//!         3. repository.open_store(policy_name, signer)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在删除确认浮层按 y
//!         ↓
//!     Update 层返回 Command::RemoveRule { name }
//!         ↓
//!     execute 调用 store.remove_rule(name)（同步，阻塞主循环）
//!         ↓
//!     AppMessage::Store(StoreMessage::RuleRemoved(result))
//!         ↓
//!     Update 层设置底部消息，并返回 Command::FetchRules
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod executor;
mod session;

pub use config_service::{ConfigService, LocalConfigService};
pub use executor::execute;
pub use session::open_session;
