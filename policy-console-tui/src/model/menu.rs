//! 菜单状态定义

use crate::i18n::t;

use super::list::ListEntry;

/// 菜单项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemId {
    Policy,
    Trust,
    ViewRules,
    ViewGlobalRules,
}

/// 菜单项
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub icon: &'static str,
}

impl ListEntry for MenuItem {
    fn title(&self) -> &str {
        let texts = t();
        match self.id {
            MenuItemId::Policy => texts.menu.policy,
            MenuItemId::Trust => texts.menu.trust,
            MenuItemId::ViewRules => texts.menu.view_rules,
            MenuItemId::ViewGlobalRules => texts.menu.view_global_rules,
        }
    }

    fn description(&self) -> &str {
        let texts = t();
        match self.id {
            MenuItemId::Policy => texts.menu.policy_desc,
            MenuItemId::Trust => texts.menu.trust_desc,
            MenuItemId::ViewRules => texts.menu.view_rules_desc,
            MenuItemId::ViewGlobalRules => texts.menu.view_global_rules_desc,
        }
    }

    fn filter_value(&self) -> &str {
        self.title()
    }
}

/// 菜单状态
#[derive(Debug, Clone)]
pub struct MenuState {
    /// 菜单项列表
    pub items: Vec<MenuItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl MenuState {
    fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items, selected: 0 }
    }

    /// 入口菜单
    pub fn choice() -> Self {
        Self::with_items(vec![
            MenuItem {
                id: MenuItemId::Policy,
                icon: "≡",
            },
            MenuItem {
                id: MenuItemId::Trust,
                icon: "◆",
            },
        ])
    }

    /// 策略操作菜单
    pub fn policy() -> Self {
        Self::with_items(vec![MenuItem {
            id: MenuItemId::ViewRules,
            icon: "●",
        }])
    }

    /// 信任根操作菜单
    pub fn trust() -> Self {
        Self::with_items(vec![MenuItem {
            id: MenuItemId::ViewGlobalRules,
            icon: "●",
        }])
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的菜单项
    pub fn current_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的菜单项 ID
    pub fn current_id(&self) -> Option<MenuItemId> {
        self.current_item().map(|item| item.id)
    }
}
