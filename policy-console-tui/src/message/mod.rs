//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和规则存储的返回结果都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod menu;           // 菜单屏幕子消息
//!         mod list;           // 列表屏幕子消息
//!         mod form;           // 表单屏幕子消息
//!         mod confirm;        // 删除确认浮层子消息
//!         mod store;          // 规则存储操作结果
//!
//!
//!     消息的两个来源：
//!
//!         用户按键 ──▶ event::handle_event ──▶ AppMessage::{Menu, List, Form, Confirm, ...}
//!
//!         Command ──▶ backend::execute ──▶ AppMessage::Store(StoreMessage)
//!
//!     后者保证规则存储的调用只发生在 Update 层之外，
//!     Update 层只描述 “要做什么”（Command），并处理 “结果如何”（StoreMessage）。
//!

mod app;
mod confirm;
mod form;
mod list;
mod menu;
mod store;

pub use app::AppMessage;
pub use confirm::ConfirmMessage;
pub use form::FormMessage;
pub use list::ListMessage;
pub use menu::MenuMessage;
pub use store::{SaveMode, StoreMessage};
