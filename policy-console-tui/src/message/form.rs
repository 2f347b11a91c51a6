//! 表单消息类型

/// 表单相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// Enter：不在最后一个字段时前进，否则提交
    Submit,

    /// 输入字符
    Input(char),

    /// 删除光标前的字符（Backspace）
    Backspace,

    /// 删除光标后的字符（Delete）
    Delete,

    /// 光标左移
    CursorLeft,

    /// 光标右移
    CursorRight,

    /// 光标移到行首
    CursorHome,

    /// 光标移到行尾
    CursorEnd,
}
