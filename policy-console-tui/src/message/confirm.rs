//! 删除确认浮层消息

/// 删除确认消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmMessage {
    /// 确认删除（只有 `y`）
    Accept,
    /// 取消（其他任意按键）
    Dismiss,
}
