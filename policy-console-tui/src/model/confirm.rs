//! 删除确认浮层状态

/// 删除确认状态，`target` 存在即表示浮层处于激活状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmState {
    /// 待删除条目的名称
    pub target: Option<String>,
}

impl DeleteConfirmState {
    /// 显示浮层
    pub fn open(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
    }

    /// 关闭浮层，返回之前的目标
    pub fn close(&mut self) -> Option<String> {
        self.target.take()
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }
}
