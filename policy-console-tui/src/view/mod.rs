//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一轮主循环都会根据最新的 App 完整重绘一次。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局
//!         mod components;         // 菜单、列表、表单、底部区域、删除确认浮层
//!         pub mod theme;          // 主题和样式
//!
//!
//!     屏幕布局：
//!
//!         ┌──────────────────────────────────────────────┐
//!         │ Policy Console · Policy: targets [read-only] │  标题栏
//!         ├──────────────────────────────────────────────┤
//!         │ ┌ Policy Rules ────────────────────────────┐ │
//!         │ │ ▶ R1                                     │ │
//!         │ │     Pattern: git:refs/heads/main, ...    │ │  主内容区
//!         │ │   R2                                     │ │  （菜单 / 列表 / 表单）
//!         │ │     Pattern: git:refs/tags/*, ...        │ │
//!         │ └──────────────────────────────────────────┘ │
//!         │ Rule added successfully!                     │  底部消息
//!         │ a:add  e:edit  d:delete  ...                 │  帮助栏
//!         │ Changes are staged in ...                    │  暂存位置（可写列表）
//!         └──────────────────────────────────────────────┘
//!
//!     删除确认浮层激活时，在所有内容之上居中绘制：
//!
//!                  ┌──── Confirm Delete ────┐
//!                  │ Delete rule "R2"? [y/n] │
//!                  └─────────────────────────┘
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
