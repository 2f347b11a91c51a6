//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构和对自身的简单操作，不访问规则存储。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod screen;         // 屏幕路由状态
//!         mod menu;           // 菜单状态（Choice / Policy / Trust）
//!         mod list;           // 规则列表状态
//!         mod form;           // 输入表单状态
//!         mod confirm;        // 删除确认浮层状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,                  // 退出标志
//!         pub screen: Screen,                     // 当前屏幕
//!         pub read_only: bool,                    // 只读模式
//!         pub status_message: Option<String>,     // 底部消息
//!
//!         pub rules: Vec<Rule>,                   // 规则（真实数据）
//!         pub rule_list: ListView,                // 规则列表（渲染投影）
//!         pub global_rules: Vec<GlobalRule>,
//!         pub global_rule_list: ListView,
//!
//!         pub form: Option<InputForm>,            // 表单（仅在表单屏幕）
//!         pub delete_confirm: DeleteConfirmState, // 删除确认浮层
//!         ...
//!     }
//!
//!     `rules` 与 `rule_list` 必须同步：任何替换集合的操作都走
//!     `App::set_rules` / `App::set_global_rules`。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、屏幕（Screen）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Choice ──▶ Policy ──▶ PolicyRules ──▶ PolicyAddRule / PolicyEditRule
//!            │
//!            └────▶ Trust  ──▶ TrustGlobalRules ──▶ TrustAddGlobalRule / TrustEditGlobalRule
//!
//!     Esc 沿箭头反方向返回一级（`Screen::parent()`）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、表单（InputForm）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     InputForm {
//!         kind: FormKind,             // Rule（3 个字段）/ GlobalRule（4 个字段）
//!         fields: Vec<InputField>,    // 有序输入框
//!         focus: usize,               // 唯一获得焦点的字段
//!     }
//!
//!     Tab / ↓ 向后循环焦点，Shift+Tab / ↑ 向前循环焦点。
//!     在最后一个字段按 Enter 才会提交。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、删除确认（DeleteConfirmState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     target: Option<String>      // Some = 浮层显示中，None = 无浮层
//!
//!     浮层显示时拦截所有按键，只有 `y` 会真正删除。
//!

mod app;
mod confirm;
mod form;
mod list;
mod menu;
mod screen;

pub use app::App;
pub use confirm::DeleteConfirmState;
pub use form::{
    FocusDirection, FormKind, InputField, InputForm, GLOBAL_RULE_NAME,
    GLOBAL_RULE_NAMESPACES, GLOBAL_RULE_THRESHOLD, GLOBAL_RULE_TYPE, RULE_NAME, RULE_PATTERN,
    RULE_PRINCIPALS,
};
pub use list::{ListEntry, ListItem, ListView};
pub use menu::{MenuItemId, MenuState};
pub use screen::Screen;
