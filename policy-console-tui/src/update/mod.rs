//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 菜单子消息处理
//!         mod list;               // 列表子消息处理（增删改、排序）
//!         mod form;               // 表单子消息处理（编辑、提交）
//!         mod confirm;            // 删除确认子消息处理
//!         mod store;              // 规则存储结果处理
//!
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
//!             match msg {
//!                 AppMessage::Quit => { app.should_quit = true; }
//!                 AppMessage::Menu(m) => navigation::update(app, m),
//!                 AppMessage::List(m) => list::update(app, m),
//!                 ...
//!             }
//!         }
//!
//!     与纯粹的状态修改不同，访问规则存储的操作不在这里执行，
//!     而是以 Command 的形式返回：
//!
//!         用户在表单最后一个字段按 Enter
//!             ↓
//!         form::update 返回 [Command::AddRule { .. }]
//!             ↓
//!         app::dispatch 调用 backend::execute
//!             ↓
//!         AppMessage::Store(StoreMessage::RuleSaved { .. })
//!             ↓
//!         store::update 设置底部消息、切回列表，并返回 [Command::FetchRules]
//!             ↓
//!         AppMessage::Store(StoreMessage::RulesFetched(..))
//!             ↓
//!         store::update 替换集合，重建列表
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod confirm;
mod form;
mod list;
mod navigation;
mod store;

use std::fmt::Display;

use crate::command::Command;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态，返回需要执行的存储命令
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::GoBack => {
            go_back(app);
            Vec::new()
        }

        AppMessage::Tick => {
            app.cursor_visible = !app.cursor_visible;
            Vec::new()
        }

        AppMessage::Menu(menu_msg) => navigation::update(app, menu_msg),

        AppMessage::List(list_msg) => list::update(app, list_msg),

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Confirm(confirm_msg) => confirm::update(app, confirm_msg),

        AppMessage::Store(store_msg) => store::update(app, store_msg),

        AppMessage::Noop => Vec::new(),
    }
}

/// Esc：返回上一级屏幕并清除底部消息
fn go_back(app: &mut App) {
    if let Some(parent) = app.screen.parent() {
        if app.screen.is_form() {
            app.form = None;
        }
        app.screen = parent;
    }
    app.clear_status();
}

/// 拼接 “前缀 + 错误描述” 形式的底部消息
fn failure(prefix: &str, detail: impl Display) -> String {
    format!("{prefix} {detail}")
}
