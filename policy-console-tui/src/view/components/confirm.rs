//! 删除确认浮层

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 浮层最小宽度
const MIN_WIDTH: u16 = 30;

/// 居中矩形
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 浮层文本：Delete rule "<name>"? [y/n]
pub fn prompt(name: &str) -> String {
    let texts = &t().confirm;
    format!("{} \"{name}\"? {}", texts.delete_rule, texts.choices)
}

/// 渲染删除确认浮层（未激活时不渲染）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref name) = app.delete_confirm.target else {
        return;
    };

    let text = prompt(name);
    // 文本 + 左右边框与留白
    let width = u16::try_from(text.width() + 4)
        .unwrap_or(u16::MAX)
        .max(MIN_WIDTH);
    let area = centered_rect(width, 3, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", t().confirm.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::danger());

    let paragraph = Paragraph::new(text)
        .style(Styles::danger())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
