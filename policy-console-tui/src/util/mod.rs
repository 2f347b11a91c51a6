//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关的基础设施代码：终端的初始化与恢复、日志文件。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // env_logger → 日志文件
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     启动顺序（src/main.rs）：
//!
//!         1. 加载配置
//!         2. init_logging(配置目录)        日志写入文件，不污染终端
//!         3. open_session(配置)            失败时直接返回错误，此时终端尚未进入原始模式
//!         4. init_terminal()
//!         5. app::run(...)
//!         6. restore_terminal(...)        无论 run 成功与否都执行
//!
//!     · Raw Mode（原始模式）
//!         无需按 Enter，每个按键立即生效；按键不回显；Ctrl+C 也作为按键送达
//!
//!     · Alternate Screen（备用屏幕）
//!         退出后恢复主屏幕原有内容
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
