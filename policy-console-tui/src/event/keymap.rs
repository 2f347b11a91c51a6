//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 列表操作
    pub const ACTION_ADD: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));

    // 规则排序（`k` 同样上移）
    pub const MOVE_UP: KeyBinding = KeyBinding::key(KeyCode::Char('u'));
    pub const MOVE_UP_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const MOVE_DOWN: KeyBinding = KeyBinding::key(KeyCode::Char('j'));

    // 删除确认：只有小写 y 会删除
    pub const CONFIRM_DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
}
