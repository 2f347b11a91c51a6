//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, ConfirmTexts, FormTexts, HintTexts, MenuTexts, ScreenTexts, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "策略控制台",
        read_only: "只读",
        policy: "策略",
        empty_list: "暂无条目",
    },

    // ========================================================================
    // 屏幕标题
    // ========================================================================
    screens: ScreenTexts {
        choice: "策略控制台",
        policy: "策略操作",
        policy_rules: "策略规则",
        add_rule: "添加规则",
        edit_rule: "编辑规则",
        trust: "信任根操作",
        global_rules: "全局规则",
        add_global_rule: "添加全局规则",
        edit_global_rule: "编辑全局规则",
    },

    // ========================================================================
    // 菜单
    // ========================================================================
    menu: MenuTexts {
        policy: "策略",
        policy_desc: "查看和管理策略",
        trust: "信任根",
        trust_desc: "查看和管理信任根",
        view_rules: "查看规则",
        view_rules_desc: "查看和管理策略规则",
        view_global_rules: "查看全局规则",
        view_global_rules_desc: "查看和管理全局规则",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        rule_name: "规则名称：",
        rule_name_placeholder: "在此输入规则名称",
        pattern: "模式：",
        pattern_placeholder: "在此输入匹配模式",
        principals: "授权主体：",
        principals_placeholder: "在此输入主体 ID（逗号分隔）",
        global_rule_name_placeholder: "在此输入全局规则名称",
        rule_type: "类型：",
        rule_type_placeholder: "输入规则类型（threshold|block-force-pushes）",
        namespaces: "命名空间：",
        namespaces_placeholder: "输入命名空间（逗号分隔）",
        threshold: "阈值：",
        threshold_placeholder: "输入阈值（仅 threshold 类型）",
        submit_help: "按 Enter 提交，Esc 返回",
        save_help: "按 Enter 保存，Esc 返回",
    },

    // ========================================================================
    // 帮助栏
    // ========================================================================
    hints: HintTexts {
        menu: "↑/↓:移动  enter:选择  esc:返回  q:退出",
        rules: "a:添加  e:编辑  d:删除  u/k:上移  j:下移  esc:返回  q:退出",
        global_rules: "a:添加  e:编辑  d:删除  esc:返回  q:退出",
        read_only: "esc:返回  q:退出",
        staged_in: "变更暂存于",
    },

    // ========================================================================
    // 底部消息
    // ========================================================================
    status: StatusTexts {
        read_only_mode: "未找到签名密钥，以只读模式运行。",
        no_selection: "未选中任何规则",
        rule_added: "规则添加成功！",
        rule_updated: "规则更新成功！",
        rule_removed: "规则删除成功！",
        rules_reordered: "规则排序成功！",
        global_rule_added: "全局规则已添加！",
        global_rule_updated: "全局规则已更新！",
        global_rule_removed: "全局规则已删除！",
        error: "错误：",
        reorder_failed: "规则排序失败：",
        remove_rule_failed: "删除规则失败：",
        remove_global_rule_failed: "删除全局规则失败：",
        load_rules_failed: "加载规则失败：",
        load_global_rules_failed: "加载全局规则失败：",
    },

    // ========================================================================
    // 删除确认
    // ========================================================================
    confirm: ConfirmTexts {
        title: "确认删除",
        delete_rule: "删除规则",
        choices: "[y/n]",
    },
};
