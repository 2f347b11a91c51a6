//! 屏幕状态定义

use crate::i18n::t;

/// 屏幕枚举
///
/// 表单屏幕只能从对应的列表屏幕进入，也只会返回该列表屏幕。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 入口菜单（Policy / Trust）
    #[default]
    Choice,
    /// 策略操作菜单
    Policy,
    /// 规则列表
    PolicyRules,
    /// 添加规则表单
    PolicyAddRule,
    /// 编辑规则表单
    PolicyEditRule,
    /// 信任根操作菜单
    Trust,
    /// 全局规则列表
    TrustGlobalRules,
    /// 添加全局规则表单
    TrustAddGlobalRule,
    /// 编辑全局规则表单
    TrustEditGlobalRule,
}

impl Screen {
    /// 获取屏幕标题
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Screen::Choice => texts.screens.choice,
            Screen::Policy => texts.screens.policy,
            Screen::PolicyRules => texts.screens.policy_rules,
            Screen::PolicyAddRule => texts.screens.add_rule,
            Screen::PolicyEditRule => texts.screens.edit_rule,
            Screen::Trust => texts.screens.trust,
            Screen::TrustGlobalRules => texts.screens.global_rules,
            Screen::TrustAddGlobalRule => texts.screens.add_global_rule,
            Screen::TrustEditGlobalRule => texts.screens.edit_global_rule,
        }
    }

    /// Esc 返回的目标屏幕（Choice 没有上一级）
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Choice => None,
            Screen::Policy | Screen::Trust => Some(Screen::Choice),
            Screen::PolicyRules => Some(Screen::Policy),
            Screen::PolicyAddRule | Screen::PolicyEditRule => Some(Screen::PolicyRules),
            Screen::TrustGlobalRules => Some(Screen::Trust),
            Screen::TrustAddGlobalRule | Screen::TrustEditGlobalRule => {
                Some(Screen::TrustGlobalRules)
            }
        }
    }

    /// 是否是表单屏幕（此时 `q` 作为普通字符输入）
    pub fn is_form(self) -> bool {
        matches!(
            self,
            Screen::PolicyAddRule
                | Screen::PolicyEditRule
                | Screen::TrustAddGlobalRule
                | Screen::TrustEditGlobalRule
        )
    }

    /// 是否是列表屏幕
    pub fn is_list(self) -> bool {
        matches!(self, Screen::PolicyRules | Screen::TrustGlobalRules)
    }

    /// 是否是菜单屏幕
    pub fn is_menu(self) -> bool {
        matches!(self, Screen::Choice | Screen::Policy | Screen::Trust)
    }

    /// 是否是编辑表单（区别于添加表单）
    pub fn is_edit_form(self) -> bool {
        matches!(self, Screen::PolicyEditRule | Screen::TrustEditGlobalRule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Screen; 9] = [
        Screen::Choice,
        Screen::Policy,
        Screen::PolicyRules,
        Screen::PolicyAddRule,
        Screen::PolicyEditRule,
        Screen::Trust,
        Screen::TrustGlobalRules,
        Screen::TrustAddGlobalRule,
        Screen::TrustEditGlobalRule,
    ];

    #[test]
    fn forms_return_to_their_list() {
        for screen in ALL.into_iter().filter(|s| s.is_form()) {
            let parent = screen.parent();
            assert!(parent.is_some_and(Screen::is_list), "{screen:?}");
        }
    }

    #[test]
    fn every_screen_is_exactly_one_kind() {
        for screen in ALL {
            let kinds = [screen.is_menu(), screen.is_list(), screen.is_form()];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{screen:?}");
        }
    }

    #[test]
    fn choice_has_no_parent() {
        assert_eq!(Screen::Choice.parent(), None);
        assert_eq!(Screen::Trust.parent(), Some(Screen::Choice));
        assert_eq!(Screen::PolicyRules.parent(), Some(Screen::Policy));
    }
}
