//! 规则列表组件

use ratatui::{
    layout::Rect,
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::entry_item;
use crate::i18n::t;
use crate::model::ListView;
use crate::view::theme::Styles;

/// 渲染列表，空列表时显示提示
pub fn render(list: &ListView, frame: &mut Frame, area: Rect) {
    if list.is_empty() {
        let empty = Paragraph::new(format!("  {}", t().common.empty_list)).style(Styles::help());
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = list
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| entry_item(item, None, i == list.selected))
        .collect();

    // ListState 负责在列表超出区域时滚动到选中项
    let mut state = ListState::default();
    state.select(Some(list.selected));

    frame.render_stateful_widget(List::new(items), area, &mut state);
}
