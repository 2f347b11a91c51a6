//! 删除确认浮层更新逻辑

use crate::command::Command;
use crate::message::ConfirmMessage;
use crate::model::{App, Screen};

/// 处理删除确认消息
pub fn update(app: &mut App, msg: ConfirmMessage) -> Vec<Command> {
    let Some(name) = app.delete_confirm.close() else {
        return Vec::new();
    };

    match msg {
        ConfirmMessage::Accept => match app.screen {
            Screen::PolicyRules => vec![Command::RemoveRule { name }],
            Screen::TrustGlobalRules => vec![Command::RemoveGlobalRule { name }],
            _ => Vec::new(),
        },
        ConfirmMessage::Dismiss => {
            log::debug!("Deletion of {name:?} dismissed");
            Vec::new()
        }
    }
}
