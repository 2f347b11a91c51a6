//! 底部区域：底部消息、帮助栏、暂存位置提示

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Screen};
use crate::view::theme::Styles;

/// 底部区域占用的行数
pub const HEIGHT: u16 = 3;

/// 渲染底部区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 底部消息
            Constraint::Length(1), // 帮助栏
            Constraint::Length(1), // 暂存位置
        ])
        .split(area);

    if let Some(ref msg) = app.status_message {
        frame.render_widget(
            Paragraph::new(format!(" {msg}")).style(Styles::footer()),
            rows[0],
        );
    }

    frame.render_widget(
        Paragraph::new(format!(" {}", help_text(app))).style(Styles::help()),
        rows[1],
    );

    if let Some(hint) = staging_hint(app) {
        frame.render_widget(
            Paragraph::new(format!(" {hint}")).style(Styles::subtext()),
            rows[2],
        );
    }
}

/// 根据当前屏幕生成帮助文本
pub fn help_text(app: &App) -> &'static str {
    let texts = t();
    match app.screen {
        screen if screen.is_menu() => texts.hints.menu,
        screen if screen.is_list() && app.read_only => texts.hints.read_only,
        Screen::PolicyRules => texts.hints.rules,
        Screen::TrustGlobalRules => texts.hints.global_rules,
        screen if screen.is_edit_form() => texts.form.save_help,
        _ => texts.form.submit_help,
    }
}

/// 可写的列表屏幕上提示变更写入的位置
fn staging_hint(app: &App) -> Option<String> {
    if app.read_only || !app.screen.is_list() || app.staging_location.is_empty() {
        return None;
    }
    Some(format!("{} {}", t().hints.staged_in, app.staging_location))
}
