//! 列表屏幕消息
//!
//! 处理规则 / 全局规则列表中的选择、增删改与排序

/// 列表消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== CRUD 操作 ==========
    /// 添加新条目
    Add,
    /// 编辑当前选中条目
    Edit,
    /// 删除当前选中条目（先弹出确认）
    Delete,

    // ========== 排序（仅规则） ==========
    /// 与上一条规则交换位置
    MoveUp,
    /// 与下一条规则交换位置
    MoveDown,
}
