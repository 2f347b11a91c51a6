//! Policy Console
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，返回需要执行的 `Command`
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、启动会话、命令执行 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 读取配置，设置语言与主题
//!     init_logging()              // 日志写入配置目录下的 console.log
//!     open_session()              // 加载仓库与签名密钥，决定是否只读
//!     app::load_initial()         // 获取规则与全局规则
//!     init_terminal()             // 启动成功后才进入原始模式
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod command;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};

use backend::{ConfigService, LocalConfigService};
use i18n::Language;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 读取配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;

    let language = Language::from_code(&config.language);
    i18n::set_language(language.unwrap_or_default());
    view::theme::set_theme(config.theme);

    // 2. 日志
    let log_path = init_logging(config_service.dir())?;
    if language.is_none() {
        log::warn!(
            "Unknown language {:?}, falling back to {}",
            config.language,
            i18n::current_language().code()
        );
    }
    log::info!(
        "Policy console starting (repository {}, policy {}, log {})",
        config.repository.display(),
        config.policy_name,
        log_path.display()
    );

    // 3. 启动会话（此时终端尚未初始化，错误直接输出到 stderr）
    let mut session = backend::open_session(&config).context("Failed to start policy console")?;

    // 4. 创建应用实例并获取数据
    let mut app = model::App::new(
        session.policy_name.clone(),
        session.staging_location.clone(),
        session.read_only,
    );
    if session.signer_missing {
        app.set_status(i18n::t().status.read_only_mode);
    }
    app::load_initial(&mut app, &mut session.store);

    // 5. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut session.store);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
