//! 菜单更新逻辑

use crate::command::Command;
use crate::message::MenuMessage;
use crate::model::{App, MenuItemId, Screen};

/// 处理菜单消息
pub fn update(app: &mut App, msg: MenuMessage) -> Vec<Command> {
    let Some(menu) = app.active_menu_mut() else {
        return Vec::new();
    };

    match msg {
        MenuMessage::SelectPrevious => menu.select_previous(),
        MenuMessage::SelectNext => menu.select_next(),
        MenuMessage::SelectFirst => menu.select_first(),
        MenuMessage::SelectLast => menu.select_last(),
        MenuMessage::Confirm => {
            if let Some(id) = menu.current_id() {
                return enter(app, id);
            }
        }
    }

    Vec::new()
}

/// 进入菜单项对应的屏幕，列表屏幕在进入时重新获取数据
fn enter(app: &mut App, id: MenuItemId) -> Vec<Command> {
    app.screen = screen_from_menu_id(id);
    match id {
        MenuItemId::ViewRules => vec![Command::FetchRules],
        MenuItemId::ViewGlobalRules => vec![Command::FetchGlobalRules],
        MenuItemId::Policy | MenuItemId::Trust => Vec::new(),
    }
}

/// 根据菜单项 ID 获取对应的屏幕
fn screen_from_menu_id(id: MenuItemId) -> Screen {
    match id {
        MenuItemId::Policy => Screen::Policy,
        MenuItemId::Trust => Screen::Trust,
        MenuItemId::ViewRules => Screen::PolicyRules,
        MenuItemId::ViewGlobalRules => Screen::TrustGlobalRules,
    }
}
