//! 列表更新逻辑
//!
//! 只读模式下，添加 / 编辑 / 删除 / 排序全部被忽略，只保留光标移动。

use crate::command::Command;
use crate::i18n::t;
use crate::message::ListMessage;
use crate::model::{App, FormKind, InputForm, ListEntry, ListView, Screen};

/// 处理列表消息
pub fn update(app: &mut App, msg: ListMessage) -> Vec<Command> {
    if !app.screen.is_list() {
        return Vec::new();
    }

    match msg {
        ListMessage::SelectPrevious => with_list(app, ListView::select_previous),
        ListMessage::SelectNext => with_list(app, ListView::select_next),
        ListMessage::SelectFirst => with_list(app, ListView::select_first),
        ListMessage::SelectLast => with_list(app, ListView::select_last),

        _ if app.read_only => {
            log::debug!("Ignoring {msg:?} in read-only mode");
        }

        ListMessage::Add => add(app),
        ListMessage::Edit => edit(app),
        ListMessage::Delete => delete(app),
        ListMessage::MoveUp => return move_rule(app, Direction::Up),
        ListMessage::MoveDown => return move_rule(app, Direction::Down),
    }

    Vec::new()
}

fn with_list(app: &mut App, f: impl FnOnce(&mut ListView)) {
    if let Some(list) = app.active_list_mut() {
        f(list);
    }
}

/// 当前选中条目的标题
fn selected_name(app: &App) -> Option<String> {
    app.active_list()
        .and_then(ListView::selected_item)
        .map(|item| item.filter_value().to_string())
}

/// `a`：打开空表单
fn add(app: &mut App) {
    let (kind, screen) = match app.screen {
        Screen::PolicyRules => (FormKind::Rule, Screen::PolicyAddRule),
        _ => (FormKind::GlobalRule, Screen::TrustAddGlobalRule),
    };
    app.form = Some(InputForm::new(kind));
    app.screen = screen;
}

/// `e`：用选中条目预填表单
fn edit(app: &mut App) {
    let Some(name) = selected_name(app) else {
        app.set_status(t().status.no_selection);
        return;
    };

    let form = match app.screen {
        Screen::PolicyRules => app
            .rules
            .iter()
            .find(|r| r.name == name)
            .map(|r| (InputForm::prefilled_rule(r), Screen::PolicyEditRule)),
        _ => app
            .global_rules
            .iter()
            .find(|r| r.rule_name == name)
            .map(|r| (InputForm::prefilled_global_rule(r), Screen::TrustEditGlobalRule)),
    };

    if let Some((form, screen)) = form {
        app.form = Some(form);
        app.screen = screen;
    }
}

/// `d`：显示删除确认浮层
fn delete(app: &mut App) {
    match selected_name(app) {
        Some(name) => app.delete_confirm.open(name),
        None => app.set_status(t().status.no_selection),
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// 与相邻规则交换位置
///
/// 集合本身不在这里修改；只有存储确认成功后，`RulesReordered` 才会替换集合。
fn move_rule(app: &mut App, direction: Direction) -> Vec<Command> {
    if app.screen != Screen::PolicyRules {
        return Vec::new();
    }

    let index = app.rule_list.selected;
    let target = match direction {
        Direction::Up if index > 0 => index - 1,
        Direction::Down if index + 1 < app.rules.len() => index + 1,
        _ => return Vec::new(),
    };

    let mut rules = app.rules.clone();
    rules.swap(index, target);
    vec![Command::ReorderRules {
        rules,
        selected: target,
    }]
}
