//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ConfirmMessage, FormMessage, ListMessage, MenuMessage};
use crate::model::{App, Screen};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变时下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 删除确认浮层拦截所有按键（包括 ctrl+c 和 Esc）
    if app.delete_confirm.is_active() {
        return handle_confirm_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // 表单上 q 是普通输入
    if app.screen.is_form() {
        return handle_form_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.screen.is_list() {
        handle_list_keys(key, app)
    } else {
        handle_menu_keys(key)
    }
}

/// 删除确认浮层：只有 `y` 确认，其余按键一律取消
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CONFIRM_DELETE.matches(&key) {
        AppMessage::Confirm(ConfirmMessage::Accept)
    } else {
        AppMessage::Confirm(ConfirmMessage::Dismiss)
    }
}

/// 处理菜单屏幕的按键
fn handle_menu_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Menu(MenuMessage::SelectPrevious),

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Menu(MenuMessage::SelectNext),

        KeyCode::Home => AppMessage::Menu(MenuMessage::SelectFirst),
        KeyCode::End => AppMessage::Menu(MenuMessage::SelectLast),

        // Enter: 进入
        KeyCode::Enter => AppMessage::Menu(MenuMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理列表屏幕的按键
///
/// 规则列表可写时 `k` / `j` 用于排序，其余情况下用于移动光标。
fn handle_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    let reorderable = app.screen == Screen::PolicyRules && !app.read_only;

    if !app.read_only {
        if DefaultKeymap::ACTION_ADD.matches(&key) {
            return AppMessage::List(ListMessage::Add);
        }
        if DefaultKeymap::ACTION_EDIT.matches(&key) {
            return AppMessage::List(ListMessage::Edit);
        }
        if DefaultKeymap::ACTION_DELETE.matches(&key) {
            return AppMessage::List(ListMessage::Delete);
        }
    }

    if reorderable {
        if DefaultKeymap::MOVE_UP.matches(&key) || DefaultKeymap::MOVE_UP_ALT.matches(&key) {
            return AppMessage::List(ListMessage::MoveUp);
        }
        if DefaultKeymap::MOVE_DOWN.matches(&key) {
            return AppMessage::List(ListMessage::MoveDown);
        }
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理表单屏幕的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // Enter: 下一个字段，最后一个字段时提交
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit),

        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Delete => AppMessage::Form(FormMessage::Delete),

        KeyCode::Left => AppMessage::Form(FormMessage::CursorLeft),
        KeyCode::Right => AppMessage::Form(FormMessage::CursorRight),
        KeyCode::Home => AppMessage::Form(FormMessage::CursorHome),
        KeyCode::End => AppMessage::Form(FormMessage::CursorEnd),

        // 字符输入（允许 Shift，不允许 Ctrl / Alt 组合）
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn app_on(screen: Screen, read_only: bool) -> App {
        let mut app = App::new("targets", "", read_only);
        app.screen = screen;
        app
    }

    #[test]
    fn q_quits_except_on_forms() {
        let app = app_on(Screen::PolicyRules, false);
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));

        let app = app_on(Screen::PolicyAddRule, false);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        ));
    }

    #[test]
    fn ctrl_c_quits_everywhere_without_overlay() {
        for screen in [Screen::Choice, Screen::PolicyRules, Screen::TrustEditGlobalRule] {
            let app = app_on(screen, false);
            assert!(matches!(
                handle_event(with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
                AppMessage::Quit
            ));
        }
    }

    #[test]
    fn overlay_intercepts_every_key() {
        let mut app = app_on(Screen::PolicyRules, false);
        app.delete_confirm.open("R2");

        assert!(matches!(
            handle_event(press(KeyCode::Char('y')), &app),
            AppMessage::Confirm(ConfirmMessage::Accept)
        ));
        for event in [
            with(KeyCode::Char('Y'), KeyModifiers::SHIFT),
            press(KeyCode::Char('n')),
            press(KeyCode::Char('x')),
            press(KeyCode::Esc),
            press(KeyCode::Char('q')),
            with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert!(matches!(
                handle_event(event, &app),
                AppMessage::Confirm(ConfirmMessage::Dismiss)
            ));
        }
    }

    #[test]
    fn writable_rules_reorder_with_k_and_j() {
        let app = app_on(Screen::PolicyRules, false);
        for (code, expected) in [
            (KeyCode::Char('u'), ListMessage::MoveUp),
            (KeyCode::Char('k'), ListMessage::MoveUp),
            (KeyCode::Char('j'), ListMessage::MoveDown),
            (KeyCode::Up, ListMessage::SelectPrevious),
            (KeyCode::Down, ListMessage::SelectNext),
            (KeyCode::Char('a'), ListMessage::Add),
            (KeyCode::Char('e'), ListMessage::Edit),
            (KeyCode::Char('d'), ListMessage::Delete),
        ] {
            let AppMessage::List(msg) = handle_event(press(code), &app) else {
                panic!("{code:?} did not map to a list message");
            };
            assert_eq!(msg, expected);
        }
    }

    #[test]
    fn read_only_k_and_j_navigate() {
        let app = app_on(Screen::PolicyRules, true);
        assert!(matches!(
            handle_event(press(KeyCode::Char('k')), &app),
            AppMessage::List(ListMessage::SelectPrevious)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::List(ListMessage::SelectNext)
        ));
        for c in ['a', 'e', 'd', 'u'] {
            assert!(matches!(
                handle_event(press(KeyCode::Char(c)), &app),
                AppMessage::Noop
            ));
        }
    }

    #[test]
    fn global_rules_never_reorder() {
        let app = app_on(Screen::TrustGlobalRules, false);
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::List(ListMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('u')), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn form_keys() {
        let app = app_on(Screen::TrustAddGlobalRule, false);
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::Form(FormMessage::NextField)
        ));
        assert!(matches!(
            handle_event(with(KeyCode::BackTab, KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::PrevField)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
        assert!(matches!(
            handle_event(with(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::Input('A'))
        ));
        assert!(matches!(
            handle_event(with(KeyCode::Char('a'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        ));
        assert!(matches!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app_on(Screen::Choice, false);
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
