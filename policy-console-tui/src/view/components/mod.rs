//! 界面组件

pub mod confirm;
pub mod form;
pub mod list;
pub mod menu;
pub mod statusbar;

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
};

use crate::model::ListEntry;
use crate::view::theme::{colors, Styles};

/// 选中项前缀
const SELECTED_PREFIX: &str = "▶ ";
const UNSELECTED_PREFIX: &str = "  ";

/// 构建一个列表条目：标题行 + 描述行（描述中的换行拆成多行）
pub(crate) fn entry_item<'a>(
    entry: &'a dyn ListEntry,
    icon: Option<&'a str>,
    selected: bool,
) -> ListItem<'a> {
    let prefix = if selected {
        SELECTED_PREFIX
    } else {
        UNSELECTED_PREFIX
    };
    let title_style = if selected {
        Styles::selected()
    } else {
        Style::default().fg(colors().fg)
    };

    let title = match icon {
        Some(icon) => format!("{prefix}{icon} {}", entry.title()),
        None => format!("{prefix}{}", entry.title()),
    };

    let mut lines = vec![Line::from(Span::styled(title, title_style))];
    lines.extend(
        entry
            .description()
            .lines()
            .map(|line| Line::from(Span::styled(format!("    {line}"), Styles::subtext()))),
    );

    ListItem::new(lines)
}
