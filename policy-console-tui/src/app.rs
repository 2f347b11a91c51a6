//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 的初始状态为：
//!
//! App {
//!
//!     should_quit: false,                         // 决定应用是否应该退出
//!     screen: Screen::Choice,                     // 入口菜单
//!     read_only: 没有签名密钥或配置要求只读,
//!     status_message: 只读时为只读提示，否则为 None,
//!     rules / global_rules: 启动时各获取一次,
//!     form: None,                                 // 只在表单屏幕上存在
//!     delete_confirm: 未激活,
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }                // 退出时不再处理剩余命令
//!     if let Some(event) = poll_event() {         // 轮询获取输入，在此最多等待 100ms
//!         let msg = handle_event(event, &app);
//!         dispatch(&mut app, store, msg);         // 更新状态并执行存储命令
//!     }
//!     每 500 ms 发送一次 Tick                       // 光标闪烁
//! }
//!
//!
//! dispatch 一次处理完一条消息引起的全部命令：
//!
//!     queue = [msg]
//!     while let Some(msg) = queue.pop_front() {
//!         for command in update(app, msg) {
//!             queue.push_back(execute(store, command));   // 同步调用，阻塞主循环
//!         }
//!     }
//!

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use policy_console_core::RuleStore;

use crate::backend;
use crate::command::Command;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);
/// 光标闪烁间隔
const TICK_RATE: Duration = Duration::from_millis(500);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, store: &mut dyn RuleStore) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态，执行命令
            dispatch(app, store, msg);
        }

        // 6. 光标闪烁
        if last_tick.elapsed() >= TICK_RATE {
            dispatch(app, store, AppMessage::Tick);
            last_tick = Instant::now();
        }
    }

    log::info!("Policy console exiting");
    Ok(())
}

/// 处理一条消息，并执行它引起的所有存储命令
pub fn dispatch(app: &mut App, store: &mut dyn RuleStore, msg: AppMessage) {
    let mut queue = VecDeque::from([msg]);
    while let Some(msg) = queue.pop_front() {
        for command in update::update(app, msg) {
            queue.push_back(backend::execute(store, command));
        }
    }
}

/// 启动时获取规则与全局规则
pub fn load_initial(app: &mut App, store: &mut dyn RuleStore) {
    for command in [Command::FetchRules, Command::FetchGlobalRules] {
        let msg = backend::execute(store, command);
        dispatch(app, store, msg);
    }
}
