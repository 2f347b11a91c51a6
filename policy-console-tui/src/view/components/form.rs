//! 表单组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{InputField, InputForm};
use crate::view::theme::{colors, Styles};

/// 光标字符
const CURSOR: &str = "▎";

/// 渲染表单：每个字段一行，标签按显示宽度对齐
pub fn render(form: &InputForm, cursor_visible: bool, frame: &mut Frame, area: Rect) {
    let label_width = form
        .fields
        .iter()
        .map(|f| f.prompt.width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(form.fields.len() * 2);
    for field in &form.fields {
        lines.push(field_line(field, label_width, cursor_visible));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn field_line(field: &InputField, label_width: usize, cursor_visible: bool) -> Line<'_> {
    let c = colors();

    let marker = if field.focused { "▶ " } else { "  " };
    // 中文标签的显示宽度与字符数不同，按显示宽度补齐
    let padding = " ".repeat(label_width.saturating_sub(field.prompt.width()) + 1);
    let label_style = if field.focused {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(field.prompt, label_style),
        Span::raw(padding),
    ];

    if field.value.is_empty() && !field.focused {
        spans.push(Span::styled(field.placeholder, Styles::subtext()));
        return Line::from(spans);
    }

    let value_style = Style::default().fg(c.fg);
    let before = field.text_before_cursor();
    let after = &field.value[before.len()..];

    spans.push(Span::styled(before, value_style));
    if field.focused {
        // 闪烁：不可见相位用空格占位，避免文字左右跳动
        let cursor = if cursor_visible { CURSOR } else { " " };
        spans.push(Span::styled(cursor, Style::default().fg(c.highlight)));
    }
    spans.push(Span::styled(after, value_style));

    Line::from(spans)
}
