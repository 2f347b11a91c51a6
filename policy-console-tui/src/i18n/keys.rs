//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 位置分类**：文本归属于它出现的屏幕或组件
//! 2. **底部消息归 `status.*`**：操作结果与提示
//! 3. **帮助栏归 `hints.*`**：按键说明
//! 4. **带参数的消息只存放前缀**：由调用方拼接参数

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 屏幕标题
    pub screens: ScreenTexts,
    /// 菜单项
    pub menu: MenuTexts,
    /// 表单标签与占位符
    pub form: FormTexts,
    /// 帮助栏
    pub hints: HintTexts,
    /// 底部消息
    pub status: StatusTexts,
    /// 删除确认浮层
    pub confirm: ConfirmTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub read_only: &'static str,
    pub policy: &'static str,
    /// 列表为空时的提示
    pub empty_list: &'static str,
}

// ============================================================================
// 屏幕标题
// ============================================================================

pub struct ScreenTexts {
    pub choice: &'static str,
    pub policy: &'static str,
    pub policy_rules: &'static str,
    pub add_rule: &'static str,
    pub edit_rule: &'static str,
    pub trust: &'static str,
    pub global_rules: &'static str,
    pub add_global_rule: &'static str,
    pub edit_global_rule: &'static str,
}

// ============================================================================
// 菜单
// ============================================================================

pub struct MenuTexts {
    pub policy: &'static str,
    pub policy_desc: &'static str,
    pub trust: &'static str,
    pub trust_desc: &'static str,
    pub view_rules: &'static str,
    pub view_rules_desc: &'static str,
    pub view_global_rules: &'static str,
    pub view_global_rules_desc: &'static str,
}

// ============================================================================
// 表单
// ============================================================================

pub struct FormTexts {
    // 规则
    pub rule_name: &'static str,
    pub rule_name_placeholder: &'static str,
    pub pattern: &'static str,
    pub pattern_placeholder: &'static str,
    pub principals: &'static str,
    pub principals_placeholder: &'static str,
    // 全局规则
    pub global_rule_name_placeholder: &'static str,
    pub rule_type: &'static str,
    pub rule_type_placeholder: &'static str,
    pub namespaces: &'static str,
    pub namespaces_placeholder: &'static str,
    pub threshold: &'static str,
    pub threshold_placeholder: &'static str,
    // 帮助
    pub submit_help: &'static str,
    pub save_help: &'static str,
}

// ============================================================================
// 帮助栏
// ============================================================================

pub struct HintTexts {
    pub menu: &'static str,
    pub rules: &'static str,
    pub global_rules: &'static str,
    pub read_only: &'static str,
    /// 后接暂存文件路径
    pub staged_in: &'static str,
}

// ============================================================================
// 底部消息
// ============================================================================

pub struct StatusTexts {
    pub read_only_mode: &'static str,
    pub no_selection: &'static str,
    pub rule_added: &'static str,
    pub rule_updated: &'static str,
    pub rule_removed: &'static str,
    pub rules_reordered: &'static str,
    pub global_rule_added: &'static str,
    pub global_rule_updated: &'static str,
    pub global_rule_removed: &'static str,
    // 以下为错误前缀，后接错误描述
    pub error: &'static str,
    pub reorder_failed: &'static str,
    pub remove_rule_failed: &'static str,
    pub remove_global_rule_failed: &'static str,
    pub load_rules_failed: &'static str,
    pub load_global_rules_failed: &'static str,
}

// ============================================================================
// 删除确认
// ============================================================================

pub struct ConfirmTexts {
    pub title: &'static str,
    /// 后接带引号的名称
    pub delete_rule: &'static str,
    pub choices: &'static str,
}
