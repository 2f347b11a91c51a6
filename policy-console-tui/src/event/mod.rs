//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发，只读取 App，不修改
//!
//!             判断顺序：
//!                 1. 删除确认浮层激活时，所有按键交给浮层（y 确认，其余取消）
//!                 2. ctrl+c 退出，Esc 返回上一级
//!                 3. 表单屏幕：所有字符都作为输入（包括 q）
//!                 4. q 退出
//!                 5. 列表屏幕 / 菜单屏幕的按键
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     菜单        ↑/k 上移    ↓/j 下移    Home/End    Enter 进入
//!
//!     规则列表    a 添加      e 编辑      d 删除
//!                 u/k 上移规则            j 下移规则
//!                 ↑/↓ Home/End 移动光标
//!
//!     全局规则    a 添加      e 编辑      d 删除
//!                 ↑/k ↓/j Home/End 移动光标
//!
//!     只读模式    a e d u 无效，k/j 移动光标
//!
//!     表单        Tab/↓ 下一个字段        Shift+Tab/↑ 上一个字段
//!                 Enter 下一个字段（最后一个字段时提交）
//!                 ←/→ Home/End 移动光标   Backspace/Delete 删除
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
