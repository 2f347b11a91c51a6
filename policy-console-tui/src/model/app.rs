//! 应用主状态结构

use policy_console_core::{GlobalRule, Rule};

use super::{DeleteConfirmState, InputForm, ListItem, ListView, MenuState, Screen};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前屏幕
    pub screen: Screen,

    /// 只读模式（没有签名密钥或配置要求只读）
    pub read_only: bool,

    /// 正在编辑的策略名称
    pub policy_name: String,

    /// 变更写入的位置（列表页提示用）
    pub staging_location: String,

    /// 底部消息：最近一次操作的结果或提示，只有 Esc 会清除
    pub status_message: Option<String>,

    // === 菜单 ===
    pub choice_menu: MenuState,
    pub policy_menu: MenuState,
    pub trust_menu: MenuState,

    // === 规则 ===
    /// 规则（顺序即优先级）
    pub rules: Vec<Rule>,
    pub rule_list: ListView,

    // === 全局规则 ===
    pub global_rules: Vec<GlobalRule>,
    pub global_rule_list: ListView,

    /// 当前表单（仅在表单屏幕上存在）
    pub form: Option<InputForm>,

    /// 删除确认浮层
    pub delete_confirm: DeleteConfirmState,

    /// 光标闪烁相位
    pub cursor_visible: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        policy_name: impl Into<String>,
        staging_location: impl Into<String>,
        read_only: bool,
    ) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Choice,
            read_only,
            policy_name: policy_name.into(),
            staging_location: staging_location.into(),
            status_message: None,
            choice_menu: MenuState::choice(),
            policy_menu: MenuState::policy(),
            trust_menu: MenuState::trust(),
            rules: Vec::new(),
            rule_list: ListView::new(),
            global_rules: Vec::new(),
            global_rule_list: ListView::new(),
            form: None,
            delete_confirm: DeleteConfirmState::default(),
            cursor_visible: true,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 替换规则集合并重建列表
    pub fn set_rules(&mut self, rules: Vec<Rule>) {
        self.rule_list
            .set_items(rules.iter().map(ListItem::from_rule).collect());
        self.rules = rules;
    }

    /// 替换全局规则集合并重建列表
    pub fn set_global_rules(&mut self, rules: Vec<GlobalRule>) {
        self.global_rule_list
            .set_items(rules.iter().map(ListItem::from_global_rule).collect());
        self.global_rules = rules;
    }

    /// 当前屏幕对应的菜单
    pub fn active_menu(&self) -> Option<&MenuState> {
        match self.screen {
            Screen::Choice => Some(&self.choice_menu),
            Screen::Policy => Some(&self.policy_menu),
            Screen::Trust => Some(&self.trust_menu),
            _ => None,
        }
    }

    pub fn active_menu_mut(&mut self) -> Option<&mut MenuState> {
        match self.screen {
            Screen::Choice => Some(&mut self.choice_menu),
            Screen::Policy => Some(&mut self.policy_menu),
            Screen::Trust => Some(&mut self.trust_menu),
            _ => None,
        }
    }

    /// 当前屏幕对应的列表
    pub fn active_list(&self) -> Option<&ListView> {
        match self.screen {
            Screen::PolicyRules => Some(&self.rule_list),
            Screen::TrustGlobalRules => Some(&self.global_rule_list),
            _ => None,
        }
    }

    pub fn active_list_mut(&mut self) -> Option<&mut ListView> {
        match self.screen {
            Screen::PolicyRules => Some(&mut self.rule_list),
            Screen::TrustGlobalRules => Some(&mut self.global_rule_list),
            _ => None,
        }
    }
}
