//! 表单更新逻辑
//!
//! 字段编辑与焦点移动在本地完成；在最后一个字段按 Enter 时，
//! 把表单内容解析为领域对象并返回对应的存储命令。

use std::collections::BTreeSet;

use policy_console_core::utils::{split_and_trim, split_principals};
use policy_console_core::{GlobalRule, GlobalRuleType, Rule};

use super::failure;
use crate::command::Command;
use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::{
    App, FocusDirection, FormKind, InputField, InputForm, Screen, GLOBAL_RULE_NAME, GLOBAL_RULE_NAMESPACES,
    GLOBAL_RULE_THRESHOLD, GLOBAL_RULE_TYPE, RULE_NAME, RULE_PATTERN, RULE_PRINCIPALS,
};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Vec<Command> {
    if !app.screen.is_form() {
        return Vec::new();
    }
    let Some(form) = app.form.as_mut() else {
        return Vec::new();
    };

    match msg {
        FormMessage::NextField => form.cycle_focus(FocusDirection::Forward),
        FormMessage::PrevField => form.cycle_focus(FocusDirection::Backward),

        FormMessage::Submit => {
            if !form.is_last_field() {
                form.cycle_focus(FocusDirection::Forward);
                return Vec::new();
            }
            return submit(app);
        }

        FormMessage::Input(ch) => {
            if let Some(field) = form.focused_field_mut() {
                field.insert(ch);
            }
            app.cursor_visible = true;
        }
        FormMessage::Backspace => {
            if let Some(field) = form.focused_field_mut() {
                field.backspace();
            }
            app.cursor_visible = true;
        }
        FormMessage::Delete => {
            if let Some(field) = form.focused_field_mut() {
                field.delete();
            }
            app.cursor_visible = true;
        }

        FormMessage::CursorLeft => edit_cursor(form, InputField::move_left),
        FormMessage::CursorRight => edit_cursor(form, InputField::move_right),
        FormMessage::CursorHome => edit_cursor(form, InputField::move_home),
        FormMessage::CursorEnd => edit_cursor(form, InputField::move_end),
    }

    Vec::new()
}

fn edit_cursor(form: &mut InputForm, f: impl FnOnce(&mut InputField)) {
    if let Some(field) = form.focused_field_mut() {
        f(field);
    }
}

/// 提交表单
///
/// 解析失败时在底部显示错误并留在表单上，不会调用存储。
fn submit(app: &mut App) -> Vec<Command> {
    let Some(form) = app.form.as_ref() else {
        return Vec::new();
    };

    let command = match (form.kind, app.screen) {
        (FormKind::Rule, screen) => {
            let (rule, principals) = rule_from_form(form);
            if screen == Screen::PolicyEditRule {
                Command::UpdateRule { rule, principals }
            } else {
                Command::AddRule { rule, principals }
            }
        }
        (FormKind::GlobalRule, screen) => match global_rule_from_form(form) {
            Ok(rule) if screen == Screen::TrustEditGlobalRule => Command::UpdateGlobalRule(rule),
            Ok(rule) => Command::AddGlobalRule(rule),
            Err(message) => {
                log::warn!("Rejected global rule form: {message}");
                app.set_status(failure(t().status.error, message));
                return Vec::new();
            }
        },
    };

    vec![command]
}

/// 规则表单 → 规则与授权主体集合
///
/// `key` 保留输入框原文，主体集合按逗号拆分、去除空白并丢弃空项。
pub fn rule_from_form(form: &InputForm) -> (Rule, BTreeSet<String>) {
    let key = form.value(RULE_PRINCIPALS);
    let rule = Rule::new(form.value(RULE_NAME), form.value(RULE_PATTERN), key);
    (rule, split_principals(key))
}

/// 全局规则表单 → 全局规则
///
/// 阈值只在 threshold 类型时解析：留空视为 0（交由存储校验），
/// 非数字则拒绝提交。
pub fn global_rule_from_form(form: &InputForm) -> Result<GlobalRule, String> {
    let rule_type = form
        .value(GLOBAL_RULE_TYPE)
        .parse::<GlobalRuleType>()
        .map_err(|e| e.to_string())?;

    let threshold = match rule_type {
        GlobalRuleType::Threshold => parse_threshold(form.value(GLOBAL_RULE_THRESHOLD))?,
        GlobalRuleType::BlockForcePushes => 0,
    };

    Ok(GlobalRule {
        rule_name: form.value(GLOBAL_RULE_NAME).to_string(),
        rule_type,
        rule_patterns: split_and_trim(form.value(GLOBAL_RULE_NAMESPACES)),
        threshold,
    })
}

fn parse_threshold(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("invalid threshold \"{trimmed}\""))
}
