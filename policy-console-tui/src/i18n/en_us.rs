//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ConfirmTexts, FormTexts, HintTexts, MenuTexts, ScreenTexts, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Policy Console",
        read_only: "read-only",
        policy: "Policy",
        empty_list: "No items.",
    },

    // ========================================================================
    // 屏幕标题
    // ========================================================================
    screens: ScreenTexts {
        choice: "Policy Console",
        policy: "Policy Operations",
        policy_rules: "Policy Rules",
        add_rule: "Add Rule",
        edit_rule: "Edit Rule",
        trust: "Trust Operations",
        global_rules: "Global Rules",
        add_global_rule: "Add Global Rule",
        edit_global_rule: "Edit Global Rule",
    },

    // ========================================================================
    // 菜单
    // ========================================================================
    menu: MenuTexts {
        policy: "Policy",
        policy_desc: "View and manage Policy",
        trust: "Trust",
        trust_desc: "View and manage Root of Trust",
        view_rules: "View Rules",
        view_rules_desc: "View and manage policy rules",
        view_global_rules: "View Global Rules",
        view_global_rules_desc: "View and manage global rules",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        rule_name: "Rule Name:",
        rule_name_placeholder: "Enter Rule Name Here",
        pattern: "Pattern:",
        pattern_placeholder: "Enter Pattern Here",
        principals: "Authorize Principal:",
        principals_placeholder: "Enter Principal IDs Here (comma-separated)",
        global_rule_name_placeholder: "Enter Global Rule Name Here",
        rule_type: "Type:",
        rule_type_placeholder: "Enter Rule Type (threshold|block-force-pushes)",
        namespaces: "Namespaces:",
        namespaces_placeholder: "Enter Namespaces (comma-separated)",
        threshold: "Threshold:",
        threshold_placeholder: "Enter Threshold (if threshold type)",
        submit_help: "Press Enter to submit, Esc to go back",
        save_help: "Press Enter to save, Esc to go back",
    },

    // ========================================================================
    // 帮助栏
    // ========================================================================
    hints: HintTexts {
        menu: "↑/↓:navigate  enter:select  esc:back  q:quit",
        rules: "a:add  e:edit  d:delete  u/k:up  j:down  esc:back  q:quit",
        global_rules: "a:add  e:edit  d:delete  esc:back  q:quit",
        read_only: "esc:back  q:quit",
        staged_in: "Changes are staged in",
    },

    // ========================================================================
    // 底部消息
    // ========================================================================
    status: StatusTexts {
        read_only_mode: "No signing key found, running in read-only mode.",
        no_selection: "No rule selected",
        rule_added: "Rule added successfully!",
        rule_updated: "Rule updated successfully!",
        rule_removed: "Rule removed successfully!",
        rules_reordered: "Rules reordered successfully!",
        global_rule_added: "Global rule added!",
        global_rule_updated: "Global rule updated!",
        global_rule_removed: "Global rule removed!",
        error: "Error:",
        reorder_failed: "Error reordering rules:",
        remove_rule_failed: "Error removing rule:",
        remove_global_rule_failed: "Error removing global rule:",
        load_rules_failed: "Error loading rules:",
        load_global_rules_failed: "Error loading global rules:",
    },

    // ========================================================================
    // 删除确认
    // ========================================================================
    confirm: ConfirmTexts {
        title: "Confirm Delete",
        delete_rule: "Delete rule",
        choices: "[y/n]",
    },
};
