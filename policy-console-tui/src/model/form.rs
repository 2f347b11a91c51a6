//! 表单状态定义
//!
//! 一个表单由若干有序的单行输入框组成，同一时刻只有一个输入框获得焦点。

use policy_console_core::{GlobalRule, Rule};

use crate::i18n::t;

/// 每个输入框最多容纳的字符数
pub const CHAR_LIMIT: usize = 64;

// 规则表单字段
pub const RULE_NAME: usize = 0;
pub const RULE_PATTERN: usize = 1;
pub const RULE_PRINCIPALS: usize = 2;

// 全局规则表单字段
pub const GLOBAL_RULE_NAME: usize = 0;
pub const GLOBAL_RULE_TYPE: usize = 1;
pub const GLOBAL_RULE_NAMESPACES: usize = 2;
pub const GLOBAL_RULE_THRESHOLD: usize = 3;

/// 单行输入框
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    /// 输入框前的标签
    pub prompt: &'static str,
    /// 值为空时显示的占位符
    pub placeholder: &'static str,
    pub value: String,
    /// 光标位置（字符索引，不是字节索引）
    pub cursor: usize,
    pub focused: bool,
}

impl InputField {
    pub fn new(prompt: &'static str, placeholder: &'static str) -> Self {
        Self {
            prompt,
            placeholder,
            value: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    /// 设置值并把光标移到末尾（长度限制只作用于键入）
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.char_count();
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// 在光标处插入字符，达到长度限制时忽略
    pub fn insert(&mut self, ch: char) -> bool {
        if self.char_count() >= CHAR_LIMIT {
            return false;
        }
        let index = self.byte_index(self.cursor);
        self.value.insert(index, ch);
        self.cursor += 1;
        true
    }

    /// 删除光标前的字符
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let index = self.byte_index(self.cursor - 1);
        self.value.remove(index);
        self.cursor -= 1;
    }

    /// 删除光标后的字符
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let index = self.byte_index(self.cursor);
        self.value.remove(index);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// 光标前的文本（用于计算渲染位置）
    pub fn text_before_cursor(&self) -> &str {
        &self.value[..self.byte_index(self.cursor)]
    }
}

/// 表单种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// 规则：名称、模式、授权主体
    Rule,
    /// 全局规则：名称、类型、命名空间、阈值
    GlobalRule,
}

impl FormKind {
    fn fields(self) -> Vec<InputField> {
        let form = &t().form;
        match self {
            FormKind::Rule => vec![
                InputField::new(form.rule_name, form.rule_name_placeholder),
                InputField::new(form.pattern, form.pattern_placeholder),
                InputField::new(form.principals, form.principals_placeholder),
            ],
            FormKind::GlobalRule => vec![
                InputField::new(form.rule_name, form.global_rule_name_placeholder),
                InputField::new(form.rule_type, form.rule_type_placeholder),
                InputField::new(form.namespaces, form.namespaces_placeholder),
                InputField::new(form.threshold, form.threshold_placeholder),
            ],
        }
    }
}

/// 焦点移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Forward,
    Backward,
}

/// 输入表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    pub kind: FormKind,
    pub fields: Vec<InputField>,
    /// 获得焦点的字段索引，始终小于 `fields.len()`
    pub focus: usize,
}

impl InputForm {
    /// 创建空表单，焦点在第一个字段
    pub fn new(kind: FormKind) -> Self {
        let mut form = Self {
            kind,
            fields: kind.fields(),
            focus: 0,
        };
        form.apply_focus();
        form
    }

    /// 用已有规则预填表单
    pub fn prefilled_rule(rule: &Rule) -> Self {
        let mut form = Self::new(FormKind::Rule);
        form.fields[RULE_NAME].set_value(&rule.name);
        form.fields[RULE_PATTERN].set_value(&rule.pattern);
        form.fields[RULE_PRINCIPALS].set_value(&rule.key);
        form
    }

    /// 用已有全局规则预填表单，阈值仅在 threshold 类型时填写
    pub fn prefilled_global_rule(rule: &GlobalRule) -> Self {
        let mut form = Self::new(FormKind::GlobalRule);
        form.fields[GLOBAL_RULE_NAME].set_value(&rule.rule_name);
        form.fields[GLOBAL_RULE_TYPE].set_value(rule.rule_type.as_str());
        form.fields[GLOBAL_RULE_NAMESPACES].set_value(&rule.rule_patterns.join(", "));
        if rule.is_threshold() {
            form.fields[GLOBAL_RULE_THRESHOLD].set_value(&rule.threshold.to_string());
        }
        form
    }

    /// 循环移动焦点
    pub fn cycle_focus(&mut self, direction: FocusDirection) {
        let count = self.fields.len();
        if count == 0 {
            return;
        }
        self.focus = match direction {
            FocusDirection::Forward => (self.focus + 1) % count,
            FocusDirection::Backward => (self.focus + count - 1) % count,
        };
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            if i == self.focus {
                field.focus();
            } else {
                field.blur();
            }
        }
    }

    /// 焦点是否在最后一个字段
    pub fn is_last_field(&self) -> bool {
        self.focus + 1 >= self.fields.len()
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut InputField> {
        self.fields.get_mut(self.focus)
    }

    /// 字段的当前值（索引越界时为空串）
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", |f| f.value.as_str())
    }
}
