//! 应用主消息枚举

use super::{ConfirmMessage, FormMessage, ListMessage, MenuMessage, StoreMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 返回上一级屏幕（Esc），同时清除底部消息
    GoBack,

    /// 定时器（光标闪烁）
    Tick,

    /// 菜单屏幕相关消息
    Menu(MenuMessage),

    /// 列表屏幕相关消息
    List(ListMessage),

    /// 表单屏幕相关消息
    Form(FormMessage),

    /// 删除确认浮层相关消息
    Confirm(ConfirmMessage),

    /// 规则存储操作的结果
    Store(StoreMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
